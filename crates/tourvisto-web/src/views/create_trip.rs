//! Create-trip page view model

use crate::form::TripForm;
use serde::Serialize;
use tourvisto_core::config::TripOptions;
use tourvisto_core::utils::{format_key, matches_query};
use tourvisto_core::{Country, TripDraft};

/// Select fields in display order
pub const SELECT_KEYS: [&str; 4] = ["groupType", "travelStyle", "interest", "budget"];

/// Map marker color
pub const MAP_COLOR: &str = "#EA382E";

/// Option of a combo box
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Shown text
    pub text: String,
    /// Submitted value
    pub value: String,
}

/// Combo box for one draft field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectField {
    /// Draft field key
    pub key: &'static str,
    /// Label
    pub label: String,
    /// Placeholder
    pub placeholder: String,
    /// Options
    pub options: Vec<SelectOption>,
}

/// World map highlight for the selected country
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapData {
    /// Selected country
    pub country: String,
    /// Fill color
    pub color: &'static str,
    /// Latitude and longitude, empty when unknown
    pub coordinates: Vec<f64>,
}

/// Create-trip page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTripView {
    /// Country combo box options
    pub countries: Vec<SelectOption>,
    /// The other combo boxes
    pub selects: Vec<SelectField>,
    /// Current draft
    pub draft: TripDraft,
    /// Map data for the drafted country
    pub map: MapData,
    /// Last submission error
    pub error: Option<String>,
    /// Whether a submission is running
    pub loading: bool,
}

fn option(text: &str, value: &str) -> SelectOption {
    SelectOption {
        text: text.to_string(),
        value: value.to_string(),
    }
}

/// Countries matching `query`, in source order
pub fn country_options(countries: &[Country], query: &str) -> Vec<SelectOption> {
    countries
        .iter()
        .filter(|c| matches_query(&c.name, query))
        .map(|c| option(&c.name, &c.value))
        .collect()
}

/// Options of the field `key` matching `query`, `None` for unknown keys
pub fn field_options(options: &TripOptions, key: &str, query: &str) -> Option<Vec<SelectOption>> {
    let values = options.for_key(key)?;
    Some(
        values
            .iter()
            .filter(|v| matches_query(v, query))
            .map(|v| option(v, v))
            .collect(),
    )
}

/// Combo boxes for every select field
pub fn select_fields(options: &TripOptions) -> Vec<SelectField> {
    SELECT_KEYS
        .iter()
        .map(|&key| {
            let label = format_key(key);
            SelectField {
                key,
                placeholder: format!("Select {label}"),
                label,
                options: field_options(options, key, "").unwrap_or_default(),
            }
        })
        .collect()
}

/// Map data for `selected`, matched by value and then by name
pub fn map_data(countries: &[Country], selected: &str) -> MapData {
    let coordinates = countries
        .iter()
        .find(|c| c.value == selected)
        .or_else(|| countries.iter().find(|c| c.name == selected))
        .and_then(|c| c.coordinates)
        .map(|(lat, lng)| vec![lat, lng])
        .unwrap_or_default();

    MapData {
        country: selected.to_string(),
        color: MAP_COLOR,
        coordinates,
    }
}

/// Build the page for `form`
pub fn create_trip_view(countries: &[Country], options: &TripOptions, form: &TripForm) -> CreateTripView {
    let draft = form.snapshot();

    CreateTripView {
        countries: country_options(countries, ""),
        selects: select_fields(options),
        map: map_data(countries, &draft.country),
        error: form.error().map(str::to_string),
        loading: form.is_loading(),
        draft,
    }
}
