//! HTTP client for the trip generation endpoint

use crate::error::{ClientError, ClientResult};
use crate::service::TripApi;
use crate::types::CreateTripRequest;
use async_trait::async_trait;
use std::time::Duration;
use tourvisto_core::config::TripApiConfig;
use tracing::{debug, warn};

const SERVICE: &str = "trip-api";

/// `POST {base_url}/api/create-trip` over reqwest
#[derive(Debug, Clone)]
pub struct HttpTripApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTripApi {
    /// Build a client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &TripApiConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ClientError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/create-trip", config.base_url.trim_end_matches('/')),
        })
    }

    /// Full URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TripApi for HttpTripApi {
    async fn create_trip(&self, request: &CreateTripRequest) -> ClientResult<serde_json::Value> {
        debug!(
            country = %request.country,
            number_of_days = request.number_of_days,
            "Sending create-trip request"
        );

        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!(
                service = SERVICE,
                status = status.as_u16(),
                "Create-trip request returned an error status"
            );
        }

        Ok(serde_json::from_str(&text)?)
    }
}
