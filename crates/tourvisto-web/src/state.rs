//! Application state management

use std::sync::Arc;
use tourvisto_client::{
    AccountService, BaasClient, ClientResult, CountrySource, HttpTripApi, RestCountriesClient,
    TripApi,
};
use tourvisto_core::Config;
use tourvisto_core::types::DashboardData;

/// Application state holding configuration and collaborators
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Accounts and the users collection
    pub accounts: Arc<dyn AccountService>,
    /// Country list
    pub countries: Arc<dyn CountrySource>,
    /// Trip generation endpoint
    pub trip_api: Arc<dyn TripApi>,
    /// Dashboard statistics and trips
    pub dashboard: Arc<DashboardData>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("dashboard_trips", &self.dashboard.trips.len())
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create state backed by the HTTP clients
    pub fn new(config: Config, dashboard: DashboardData) -> ClientResult<Self> {
        let accounts = Arc::new(BaasClient::new(config.baas.clone())?);
        let countries = Arc::new(RestCountriesClient::new(&config.countries));
        let trip_api = Arc::new(HttpTripApi::new(&config.trip_api)?);

        Ok(Self::with_collaborators(
            config, accounts, countries, trip_api, dashboard,
        ))
    }

    /// Create state from explicit collaborators
    pub fn with_collaborators(
        config: Config,
        accounts: Arc<dyn AccountService>,
        countries: Arc<dyn CountrySource>,
        trip_api: Arc<dyn TripApi>,
        dashboard: DashboardData,
    ) -> Self {
        Self {
            config,
            accounts,
            countries,
            trip_api,
            dashboard: Arc::new(dashboard),
        }
    }
}
