//! Web server setup and configuration

use crate::{routes::build_routes, state::AppState};
use axum::Router;
use std::sync::Arc;
use tourvisto_client::ClientResult;
use tourvisto_core::{Config, types::DashboardData};
use tower_http::trace::TraceLayer;

/// Build the complete web application wired to the HTTP clients
pub fn build_app(config: Config, dashboard: DashboardData) -> ClientResult<Router> {
    Ok(build_app_with_state(AppState::new(config, dashboard)?))
}

/// Build the application around prepared state
pub fn build_app_with_state(state: AppState) -> Router {
    build_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
