//! Configuration management for the Tourvisto admin

use crate::types::DashboardData;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Backend-as-a-service (accounts and user documents)
    #[serde(default)]
    pub baas: BaasConfig,

    /// Trip generation API
    #[serde(default)]
    pub trip_api: TripApiConfig,

    /// Country list source
    #[serde(default)]
    pub countries: CountriesConfig,

    /// Option lists offered by the trip form
    #[serde(default)]
    pub trip_options: TripOptions,

    /// Dashboard data source
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Backend-as-a-service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaasConfig {
    /// REST endpoint, e.g. `https://cloud.appwrite.io/v1`
    #[serde(default = "default_baas_endpoint")]
    pub endpoint: String,

    /// Project identifier
    #[serde(default)]
    pub project_id: String,

    /// Database holding the user documents
    #[serde(default)]
    pub database_id: String,

    /// Collection holding the user documents
    #[serde(default = "default_users_collection")]
    pub users_collection_id: String,

    /// Server API key used for listing users
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Redirect after a successful OAuth sign-in
    #[serde(default = "default_oauth_success_url")]
    pub oauth_success_url: String,

    /// Redirect after a failed OAuth sign-in
    #[serde(default = "default_oauth_failure_url")]
    pub oauth_failure_url: String,
}

/// Trip generation API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripApiConfig {
    /// Base URL the `/api/create-trip` route is resolved against
    #[serde(default = "default_trip_api_base_url")]
    pub base_url: String,

    /// HTTP client timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Country list configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountriesConfig {
    /// URL returning the full country list
    #[serde(default = "default_countries_url")]
    pub url: String,
}

/// Option lists for the trip form combo boxes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripOptions {
    /// Group types
    #[serde(default = "default_group_types")]
    pub group_types: Vec<String>,

    /// Travel styles
    #[serde(default = "default_travel_styles")]
    pub travel_styles: Vec<String>,

    /// Interests
    #[serde(default = "default_interests")]
    pub interests: Vec<String>,

    /// Budget tiers
    #[serde(default = "default_budgets")]
    pub budgets: Vec<String>,
}

/// Dashboard data configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// JSON file with stats and trips; empty dashboard when unset
    #[serde(default)]
    pub data_path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    5173
}

fn default_baas_endpoint() -> String {
    "https://cloud.appwrite.io/v1".to_string()
}

fn default_users_collection() -> String {
    "users".to_string()
}

fn default_oauth_success_url() -> String {
    "http://localhost:5173/".to_string()
}

fn default_oauth_failure_url() -> String {
    "http://localhost:5173/404".to_string()
}

fn default_trip_api_base_url() -> String {
    "http://localhost:5173".to_string()
}

const fn default_request_timeout() -> u64 {
    120
}

fn default_countries_url() -> String {
    "https://restcountries.com/v3.1/all".to_string()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_group_types() -> Vec<String> {
    strings(&["Solo", "Couple", "Family", "Friends", "Business"])
}

fn default_travel_styles() -> Vec<String> {
    strings(&[
        "Relaxed",
        "Luxury",
        "Adventure",
        "Cultural",
        "Nature & Outdoors",
        "City Exploration",
    ])
}

fn default_interests() -> Vec<String> {
    strings(&[
        "Food & Culinary",
        "Historical Sites",
        "Hiking & Nature Walks",
        "Beaches & Water Activities",
        "Museums & Art",
        "Nightlife & Bars",
        "Photography Spots",
        "Shopping",
        "Local Experiences",
    ])
}

fn default_budgets() -> Vec<String> {
    strings(&["Budget", "Mid-range", "Luxury", "Premium"])
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for BaasConfig {
    fn default() -> Self {
        Self {
            endpoint: default_baas_endpoint(),
            project_id: String::new(),
            database_id: String::new(),
            users_collection_id: default_users_collection(),
            api_key: None,
            oauth_success_url: default_oauth_success_url(),
            oauth_failure_url: default_oauth_failure_url(),
        }
    }
}

impl Default for TripApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_trip_api_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl Default for CountriesConfig {
    fn default() -> Self {
        Self {
            url: default_countries_url(),
        }
    }
}

impl Default for TripOptions {
    fn default() -> Self {
        Self {
            group_types: default_group_types(),
            travel_styles: default_travel_styles(),
            interests: default_interests(),
            budgets: default_budgets(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TripOptions {
    /// Option list for a form key (`groupType`, `travelStyle`, `interest`, `budget`)
    #[must_use]
    pub fn for_key(&self, key: &str) -> Option<&[String]> {
        match key {
            "groupType" => Some(&self.group_types),
            "travelStyle" => Some(&self.travel_styles),
            "interest" => Some(&self.interests),
            "budget" => Some(&self.budgets),
            _ => None,
        }
    }
}

impl DashboardConfig {
    /// Read the dashboard data file, or an empty dashboard when none is configured
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load_data(&self) -> crate::Result<DashboardData> {
        let Some(path) = &self.data_path else {
            return Ok(DashboardData::default());
        };

        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl Config {
    /// Load configuration from an optional `config` file and `TOURVISTO__*` variables
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("TOURVISTO")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check settings that have no usable default
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first invalid setting.
    pub fn validate(&self) -> crate::Result<()> {
        if self.trip_api.base_url.trim().is_empty() {
            return Err(crate::Error::configuration("trip_api.base_url must not be empty"));
        }
        if self.trip_api.request_timeout_secs == 0 {
            return Err(crate::Error::configuration("trip_api.request_timeout_secs must be positive"));
        }
        if self.countries.url.trim().is_empty() {
            return Err(crate::Error::configuration("countries.url must not be empty"));
        }
        Ok(())
    }
}
