//! Common test utilities for the web integration tests

#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use std::sync::{Arc, Once};
use tourvisto_client::{MockAccountService, MockTripApi, StaticCountries};
use tourvisto_core::types::{DashboardData, DashboardStats, MonthlyCount, RoleCount, TripSummary};
use tourvisto_core::{Config, Country, UserIdentity, UserRecord, UserStatus};
use tourvisto_web::{AppState, build_app_with_state};
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// Session secret of the seeded admin
pub const ADMIN_SESSION: &str = "admin-session";

/// Session secret of the seeded regular user
pub const USER_SESSION: &str = "user-session";

/// Initialize test logging (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Seeded user document
pub fn user_record(account_id: &str, name: &str, status: UserStatus, joined_at: &str) -> UserRecord {
    UserRecord {
        id: format!("doc-{account_id}"),
        account_id: account_id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        image_url: None,
        joined_at: joined_at.to_string(),
        status,
    }
}

/// Countries served by the test country source
pub fn test_countries() -> Vec<Country> {
    vec![
        Country {
            name: "🇫🇷France".to_string(),
            coordinates: Some((46.0, 2.0)),
            value: "France".to_string(),
            map_url: Some("https://www.openstreetmap.org/relation/1403916".to_string()),
        },
        Country {
            name: "🇯🇵Japan".to_string(),
            coordinates: Some((36.0, 138.0)),
            value: "Japan".to_string(),
            map_url: None,
        },
    ]
}

/// Dashboard data with a few trips
pub fn test_dashboard() -> DashboardData {
    DashboardData {
        stats: DashboardStats {
            total_users: 120,
            users_joined: MonthlyCount {
                current_month: 30,
                last_month: 20,
            },
            total_trips: 45,
            trips_created: MonthlyCount {
                current_month: 5,
                last_month: 0,
            },
            user_role: RoleCount {
                total: 60,
                current_month: 10,
                last_month: 20,
            },
        },
        trips: (1..=5)
            .map(|n| TripSummary {
                id: n.to_string(),
                name: format!("Trip {n}"),
                ..TripSummary::default()
            })
            .collect(),
    }
}

/// Builder for a test application
pub struct TestAppBuilder {
    accounts: MockAccountService,
    countries: StaticCountries,
    trip_api: MockTripApi,
}

impl TestAppBuilder {
    /// Admin and regular user seeded, trip API answering `{"id": "trip-1"}`
    pub fn new() -> Self {
        let accounts = MockAccountService::new()
            .with_session(
                ADMIN_SESSION,
                UserIdentity {
                    id: "admin-1".to_string(),
                    name: Some("Ada".to_string()),
                    email: Some("ada@example.com".to_string()),
                },
            )
            .with_session(USER_SESSION, UserIdentity::new("user-1"))
            .with_user(user_record(
                "admin-1",
                "Ada",
                UserStatus::Admin,
                "2025-01-05T10:30:00.000+00:00",
            ))
            .with_user(user_record(
                "user-1",
                "Grace",
                UserStatus::User,
                "2025-02-10T08:00:00.000+00:00",
            ));

        Self {
            accounts,
            countries: StaticCountries::new(test_countries()),
            trip_api: MockTripApi::new(),
        }
    }

    /// Replace the account service
    pub fn with_accounts(mut self, accounts: MockAccountService) -> Self {
        self.accounts = accounts;
        self
    }

    /// Replace the country source
    pub fn with_countries(mut self, countries: StaticCountries) -> Self {
        self.countries = countries;
        self
    }

    /// Replace the trip API
    pub fn with_trip_api(mut self, trip_api: MockTripApi) -> Self {
        self.trip_api = trip_api;
        self
    }

    /// Build the router, returning handles to the mocks for inspection
    pub fn build(self) -> (Router, MockTripApi, MockAccountService) {
        init_test_logging();

        let state = AppState::with_collaborators(
            Config::default(),
            Arc::new(self.accounts.clone()),
            Arc::new(self.countries),
            Arc::new(self.trip_api.clone()),
            test_dashboard(),
        );

        (build_app_with_state(state), self.trip_api, self.accounts)
    }
}

/// Send one request through the router
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

/// GET `uri` with an optional session header
pub fn get(uri: &str, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(session) = session {
        builder = builder.header("X-Session", session);
    }
    builder.body(Body::empty()).unwrap()
}

/// POST a JSON body to `uri` with an optional session header
pub fn post_json(uri: &str, session: Option<&str>, body: &serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(session) = session {
        builder = builder.header("X-Session", session);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Read a response body as JSON
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// `Location` header of a redirect
pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get("Location")
        .and_then(|value| value.to_str().ok())
}
