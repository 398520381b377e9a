//! Wire types exchanged with the external services

use serde::{Deserialize, Serialize};
use tourvisto_core::types::{Country, TripDraft, UserRecord, UserStatus};

/// Body of `POST /api/create-trip`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    /// Country value
    pub country: String,
    /// Trip length in days
    pub number_of_days: i64,
    /// Travel style
    pub travel_styles: String,
    /// Interest
    pub interests: String,
    /// Budget tier
    pub budget: String,
    /// Group type
    pub group_types: String,
    /// Requesting account
    pub user_id: String,
}

impl CreateTripRequest {
    /// Map a validated draft onto the API field names
    pub fn from_draft(draft: &TripDraft, number_of_days: i64, user_id: impl Into<String>) -> Self {
        Self {
            country: draft.country.clone(),
            number_of_days,
            travel_styles: draft.travel_style.clone(),
            interests: draft.interest.clone(),
            budget: draft.budget.clone(),
            group_types: draft.group_type.clone(),
            user_id: user_id.into(),
        }
    }
}

/// Extract a non-empty trip id from a create-trip response body.
///
/// String ids are used as is, numeric ids are rendered as text. A zero id
/// counts as missing.
pub fn created_trip_id(body: &serde_json::Value) -> Option<String> {
    match body.get("id")? {
        serde_json::Value::String(id) if !id.trim().is_empty() => Some(id.clone()),
        serde_json::Value::Number(id) if id.as_f64().is_some_and(|value| value.abs() > 0.0) => {
            Some(id.to_string())
        }
        _ => None,
    }
}

/// Country record as returned by the REST Countries API
#[derive(Debug, Clone, Deserialize)]
pub struct RestCountry {
    /// Names
    pub name: RestCountryName,
    /// Flag emoji
    #[serde(default)]
    pub flag: Option<String>,
    /// Latitude and longitude
    #[serde(default)]
    pub latlng: Vec<f64>,
    /// Map links
    #[serde(default)]
    pub maps: Option<RestCountryMaps>,
}

/// Country names
#[derive(Debug, Clone, Deserialize)]
pub struct RestCountryName {
    /// Common name
    pub common: String,
}

/// Country map links
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestCountryMaps {
    /// `OpenStreetMap` link
    #[serde(default)]
    pub open_street_map: Option<String>,
}

impl From<RestCountry> for Country {
    fn from(record: RestCountry) -> Self {
        let coordinates = match record.latlng.as_slice() {
            [lat, lng, ..] => Some((*lat, *lng)),
            _ => None,
        };

        Self {
            name: format!("{}{}", record.flag.unwrap_or_default(), record.name.common),
            coordinates,
            value: record.name.common,
            map_url: record.maps.and_then(|maps| maps.open_street_map),
        }
    }
}

/// Account as returned by `GET /account`
#[derive(Debug, Clone, Deserialize)]
pub struct AccountDto {
    /// Account id
    #[serde(rename = "$id", default)]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
}

/// User document as stored in the users collection
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocumentDto {
    /// Document id
    #[serde(rename = "$id")]
    pub id: String,
    /// Linked account id
    pub account_id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Avatar URL
    #[serde(default)]
    pub image_url: Option<String>,
    /// Join timestamp
    #[serde(default)]
    pub joined_at: String,
    /// Role
    #[serde(default)]
    pub status: Option<UserStatus>,
}

impl From<UserDocumentDto> for UserRecord {
    fn from(doc: UserDocumentDto) -> Self {
        Self {
            id: doc.id,
            account_id: doc.account_id,
            name: doc.name,
            email: doc.email,
            image_url: doc.image_url,
            joined_at: doc.joined_at,
            status: doc.status.unwrap_or_default(),
        }
    }
}

/// Document listing
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentList<T> {
    /// Total matching documents
    #[serde(default)]
    pub total: u64,
    /// Documents on this page
    pub documents: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_request_uses_api_field_names() {
        let draft = TripDraft {
            country: "France".to_string(),
            duration: Some(5),
            budget: "Luxury".to_string(),
            travel_style: "Relaxed".to_string(),
            group_type: "Solo".to_string(),
            interest: "Culture".to_string(),
        };

        let body = serde_json::to_value(CreateTripRequest::from_draft(&draft, 5, "u1")).unwrap();

        assert_eq!(
            body,
            json!({
                "country": "France",
                "numberOfDays": 5,
                "travelStyles": "Relaxed",
                "interests": "Culture",
                "budget": "Luxury",
                "groupTypes": "Solo",
                "userId": "u1"
            })
        );
    }

    #[test]
    fn test_created_trip_id() {
        assert_eq!(created_trip_id(&json!({"id": "42"})), Some("42".to_string()));
        assert_eq!(created_trip_id(&json!({"id": 42})), Some("42".to_string()));
        assert_eq!(created_trip_id(&json!({})), None);
        assert_eq!(created_trip_id(&json!({"id": ""})), None);
        assert_eq!(created_trip_id(&json!({"id": null})), None);
        assert_eq!(created_trip_id(&json!({"id": 0})), None);
        assert_eq!(created_trip_id(&json!({"id": "   "})), None);
        assert_eq!(created_trip_id(&json!(["id"])), None);
    }

    #[test]
    fn test_country_mapping() {
        let record: RestCountry = serde_json::from_value(json!({
            "name": {"common": "France", "official": "French Republic"},
            "flag": "🇫🇷",
            "latlng": [46.0, 2.0],
            "maps": {"openStreetMap": "https://www.openstreetmap.org/relation/1403916"}
        }))
        .unwrap();

        let country = Country::from(record);
        assert_eq!(country.name, "🇫🇷France");
        assert_eq!(country.value, "France");
        assert_eq!(country.coordinates, Some((46.0, 2.0)));
        assert_eq!(
            country.map_url.as_deref(),
            Some("https://www.openstreetmap.org/relation/1403916")
        );
    }

    #[test]
    fn test_country_mapping_without_optional_fields() {
        let record: RestCountry =
            serde_json::from_value(json!({"name": {"common": "Atlantis"}, "latlng": [1.0]})).unwrap();

        let country = Country::from(record);
        assert_eq!(country.name, "Atlantis");
        assert_eq!(country.coordinates, None);
        assert_eq!(country.map_url, None);
    }

    #[test]
    fn test_user_document_defaults_to_user_status() {
        let doc: UserDocumentDto = serde_json::from_value(json!({
            "$id": "doc1",
            "accountId": "acc1",
            "name": "Ada",
            "email": "ada@example.com",
            "joinedAt": "2025-03-01T09:00:00.000+00:00"
        }))
        .unwrap();

        let record = UserRecord::from(doc);
        assert_eq!(record.status, UserStatus::User);
        assert_eq!(record.account_id, "acc1");
    }
}
