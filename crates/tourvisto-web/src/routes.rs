//! Route definitions for the web interface

use crate::{
    handlers::{api, pages},
    state::AppState,
};
use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;

/// Build the complete web application router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Page routes
        .route("/sign-in", get(pages::sign_in))
        .route("/dashboard", get(pages::dashboard))
        .route("/all-users", get(pages::all_users))
        .route(
            "/create-trip",
            get(pages::create_trip).post(api::submit_trip),
        )
        // Combo-box filtering
        .route("/create-trip/countries", get(api::filter_countries))
        .route("/create-trip/options/:key", get(api::filter_options))
        // Health check
        .route("/health", get(api::health_check))
}
