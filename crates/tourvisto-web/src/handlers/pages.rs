//! Page handlers
//!
//! Every admin page runs the gate through the [`AdminUser`] extractor before
//! the handler body.

use crate::{
    auth::{self, SignInDecision},
    extractors::{AdminUser, Session, UserListQuery},
    form::TripForm,
    state::AppState,
    views::{create_trip::create_trip_view, dashboard::dashboard_view, UsersView},
};
use axum::{
    extract::State,
    response::{IntoResponse, Json, Redirect, Response},
};
use serde_json::json;
use std::sync::Arc;
use tourvisto_core::Country;
use tracing::error;

/// Sign-in page
pub async fn sign_in(State(state): State<Arc<AppState>>, session: Session) -> Response {
    let identity = session.identity(&state);

    match auth::sign_in(&identity, state.accounts.as_ref()).await {
        SignInDecision::Redirect(to) => Redirect::to(to).into_response(),
        SignInDecision::Show { oauth_url } => Json(json!({
            "provider": auth::OAUTH_PROVIDER,
            "oauthUrl": oauth_url,
        }))
        .into_response(),
    }
}

/// Dashboard page
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    AdminUser(user): AdminUser,
) -> Json<crate::views::DashboardView> {
    Json(dashboard_view(Some(&user), &state.dashboard))
}

/// User grid page
pub async fn all_users(
    State(state): State<Arc<AppState>>,
    AdminUser(_user): AdminUser,
    query: UserListQuery,
) -> Json<serde_json::Value> {
    match state.accounts.list_users(query.limit(), query.offset()).await {
        Ok(page) => Json(json!(UsersView::from(page))),
        Err(e) => {
            error!("Failed to fetch users: {}", e);
            Json(json!({
                "error": "Failed to fetch users",
                "users": [],
                "total": 0
            }))
        }
    }
}

/// Create-trip page
pub async fn create_trip(
    State(state): State<Arc<AppState>>,
    AdminUser(_user): AdminUser,
) -> Json<crate::views::CreateTripView> {
    let countries = load_countries(&state).await;
    let form = TripForm::new(&countries);

    Json(create_trip_view(&countries, &state.config.trip_options, &form))
}

/// Fetch the country list, empty when the source fails
pub(crate) async fn load_countries(state: &AppState) -> Vec<Country> {
    match state.countries.fetch_countries().await {
        Ok(countries) => countries,
        Err(e) => {
            error!("Failed to fetch countries: {}", e);
            Vec::new()
        }
    }
}
