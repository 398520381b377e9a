//! Core data types for the Tourvisto admin

use serde::{Deserialize, Deserializer, Serialize};

/// In-progress, unsaved trip-creation form data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDraft {
    /// Selected country value
    #[serde(default)]
    pub country: String,

    /// Trip length in days, `None` until the user enters a whole number
    #[serde(default, deserialize_with = "lenient_duration")]
    pub duration: Option<i64>,

    /// Budget tier
    #[serde(default)]
    pub budget: String,

    /// Travel style
    #[serde(default)]
    pub travel_style: String,

    /// Group type
    #[serde(default)]
    pub group_type: String,

    /// Main interest
    #[serde(default)]
    pub interest: String,
}

/// Whole numbers and numeric text become a duration, anything else clears it
fn lenient_duration<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(number) => number.as_i64(),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}

impl TripDraft {
    /// Create a draft preselecting the given country
    pub fn with_country(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..Self::default()
        }
    }
}

/// Country record offered by the country picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Display name (flag followed by the common name)
    pub name: String,

    /// Latitude and longitude, when the source provides them
    pub coordinates: Option<(f64, f64)>,

    /// Value submitted with the draft (common name)
    pub value: String,

    /// `OpenStreetMap` link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
}

/// Identity of the signed-in account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Account identifier
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Email address
    #[serde(default)]
    pub email: Option<String>,
}

impl UserIdentity {
    /// Identity carrying only an id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            email: None,
        }
    }

    /// Whether the identity has a usable id
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

/// Role stored on a user document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Administrator allowed into the admin pages
    Admin,
    /// Regular traveller
    #[default]
    User,
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::User => write!(f, "user"),
        }
    }
}

/// Stored user document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Document id
    pub id: String,

    /// Linked account id
    pub account_id: String,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Avatar URL
    #[serde(default)]
    pub image_url: Option<String>,

    /// Join timestamp as stored (RFC 3339)
    pub joined_at: String,

    /// Role
    #[serde(default)]
    pub status: UserStatus,
}

/// Page of user records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    /// Users on this page
    pub users: Vec<UserRecord>,

    /// Total number of users
    pub total: u64,
}

/// Count for the current and the previous month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    /// Count for the current month
    pub current_month: u64,

    /// Count for the previous month
    pub last_month: u64,
}

/// Monthly count with its own total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCount {
    /// Overall total
    pub total: u64,

    /// Count for the current month
    pub current_month: u64,

    /// Count for the previous month
    pub last_month: u64,
}

/// Summary statistics shown on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    /// Number of users
    pub total_users: u64,

    /// Users joined per month
    pub users_joined: MonthlyCount,

    /// Number of trips
    pub total_trips: u64,

    /// Trips created per month
    pub trips_created: MonthlyCount,

    /// Active users
    pub user_role: RoleCount,
}

/// Single itinerary stop
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryStop {
    /// Location name
    #[serde(default)]
    pub location: String,
}

/// Generated trip as listed on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    /// Trip id
    pub id: String,

    /// Trip name
    pub name: String,

    /// Image URLs, first one is the cover
    #[serde(default)]
    pub image_urls: Vec<String>,

    /// Day-by-day itinerary
    #[serde(default)]
    pub itinerary: Vec<ItineraryStop>,

    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Travel style
    #[serde(default)]
    pub travel_style: String,

    /// Estimated price as displayed
    #[serde(default)]
    pub estimated_price: String,
}

/// Everything the dashboard page shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardData {
    /// Summary statistics
    pub stats: DashboardStats,

    /// Trips, most recent first
    pub trips: Vec<TripSummary>,
}
