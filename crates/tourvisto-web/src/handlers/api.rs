//! Form submission, combo-box filtering and health handlers

use crate::{
    auth::{GateDecision, SIGN_IN_PATH, admin_gate},
    extractors::{ExtractorError, Session},
    form::TripForm,
    handlers::pages::load_countries,
    state::AppState,
    submission::SubmissionOutcome,
    views::create_trip::{country_options, field_options},
};
use axum::{
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tourvisto_core::TripDraft;
use tracing::{info, warn};

/// Shown when a signed-in account is not an admin
pub const NOT_ADMIN_MESSAGE: &str = "Only admins can create trips";

/// `?query=` for the combo-box filters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterQuery {
    /// Text typed into the combo box
    #[serde(default)]
    pub query: String,
}

/// Submit the create-trip form.
///
/// The admin gate runs first: no session answers `401`, a non-admin `403`.
/// A created trip answers `303 See Other` to the trip page. Other failures
/// answer `422` with the message and the unchanged draft. A body that is not
/// a draft is treated as an empty one.
pub async fn submit_trip(
    State(state): State<Arc<AppState>>,
    session: Session,
    body: Result<Json<TripDraft>, JsonRejection>,
) -> Response {
    let draft = match body {
        Ok(Json(draft)) => draft,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "Unreadable draft body");
            TripDraft::default()
        }
    };
    let identity = session.identity(&state);

    match admin_gate(&identity, state.accounts.as_ref()).await {
        GateDecision::Allow(_) => {}
        GateDecision::Redirect(SIGN_IN_PATH) => {
            let message = SubmissionOutcome::NotAuthenticated.user_message();
            return failure(StatusCode::UNAUTHORIZED, message, &draft);
        }
        GateDecision::Redirect(_) => {
            return failure(StatusCode::FORBIDDEN, Some(NOT_ADMIN_MESSAGE), &draft);
        }
    }

    let mut form = TripForm::from_draft(draft);
    let outcome = form.submit(&identity, state.trip_api.as_ref()).await;

    if let Some(target) = outcome.redirect_target() {
        info!(%target, "Redirecting to the new trip");
        return Redirect::to(&target).into_response();
    }

    let status = match outcome {
        SubmissionOutcome::NotAuthenticated => StatusCode::UNAUTHORIZED,
        SubmissionOutcome::SubmissionInProgress => StatusCode::CONFLICT,
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    };

    failure(status, form.error(), &form.snapshot())
}

fn failure(status: StatusCode, error: Option<&str>, draft: &TripDraft) -> Response {
    (status, Json(json!({ "error": error, "draft": draft }))).into_response()
}

/// Countries whose name contains `query`
pub async fn filter_countries(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<FilterQuery>,
) -> Json<serde_json::Value> {
    let countries = load_countries(&state).await;
    Json(json!({ "options": country_options(&countries, &filter.query) }))
}

/// Options of one select field containing `query`
pub async fn filter_options(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    Query(filter): Query<FilterQuery>,
) -> Result<Json<serde_json::Value>, ExtractorError> {
    let options = field_options(&state.config.trip_options, &key, &filter.query).ok_or_else(|| {
        ExtractorError::new(
            format!("Unknown field: {key}"),
            StatusCode::NOT_FOUND,
            "UNKNOWN_FIELD",
        )
    })?;

    Ok(Json(json!({ "options": options })))
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now(),
    }))
}
