//! REST Countries client

use crate::error::{ClientError, ClientResult};
use crate::service::CountrySource;
use crate::types::RestCountry;
use async_trait::async_trait;
use tourvisto_core::config::CountriesConfig;
use tourvisto_core::types::Country;
use tracing::info;

const SERVICE: &str = "countries";

/// Loads countries from a REST Countries compatible endpoint
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    client: reqwest::Client,
    url: String,
}

impl RestCountriesClient {
    /// Create a client for the configured URL
    pub fn new(config: &CountriesConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.url.clone(),
        }
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    async fn fetch_countries(&self) -> ClientResult<Vec<Country>> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::unexpected_status(SERVICE, status.as_u16(), body));
        }

        let text = response.text().await?;
        let records: Vec<RestCountry> = serde_json::from_str(&text)?;

        info!(count = records.len(), "Loaded countries");
        Ok(records.into_iter().map(Country::from).collect())
    }
}
