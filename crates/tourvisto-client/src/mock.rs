//! In-memory collaborators for testing

use crate::error::{ClientError, ClientResult};
use crate::service::{AccountService, CountrySource, IdentityProvider, TripApi};
use crate::types::CreateTripRequest;
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::time::{Duration, sleep};
use tourvisto_core::types::{Country, UserIdentity, UserPage, UserRecord, UserStatus};

/// Identity provider with a fixed answer
#[derive(Debug, Clone)]
pub struct MockIdentity {
    identity: Option<UserIdentity>,
    failure: Option<String>,
}

impl MockIdentity {
    /// Signed in as `identity`
    pub fn signed_in(identity: UserIdentity) -> Self {
        Self {
            identity: Some(identity),
            failure: None,
        }
    }

    /// Nobody signed in
    pub fn signed_out() -> Self {
        Self {
            identity: None,
            failure: None,
        }
    }

    /// Identity lookup fails with a service error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            identity: None,
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl IdentityProvider for MockIdentity {
    async fn current_user(&self) -> ClientResult<UserIdentity> {
        if let Some(message) = &self.failure {
            return Err(ClientError::service_communication("identity", message.clone()));
        }
        self.identity
            .clone()
            .ok_or_else(|| ClientError::unauthenticated("signed out"))
    }
}

#[derive(Debug, Clone)]
enum TripReply {
    Body(serde_json::Value),
    Failure(String),
}

/// Trip API that records every request
#[derive(Debug, Clone)]
pub struct MockTripApi {
    reply: TripReply,
    delay_ms: u64,
    calls: Arc<Mutex<Vec<CreateTripRequest>>>,
}

impl Default for MockTripApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTripApi {
    /// Answers `{"id": "trip-1"}`
    pub fn new() -> Self {
        Self {
            reply: TripReply::Body(json!({ "id": "trip-1" })),
            delay_ms: 0,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer with `body`
    pub fn with_response(mut self, body: serde_json::Value) -> Self {
        self.reply = TripReply::Body(body);
        self
    }

    /// Fail every request at the transport level
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.reply = TripReply::Failure(message.into());
        self
    }

    /// Hold each request for `delay_ms` before answering
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Requests received so far
    pub fn calls(&self) -> Vec<CreateTripRequest> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests received so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[async_trait]
impl TripApi for MockTripApi {
    async fn create_trip(&self, request: &CreateTripRequest) -> ClientResult<serde_json::Value> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }

        match &self.reply {
            TripReply::Body(body) => Ok(body.clone()),
            TripReply::Failure(message) => {
                Err(ClientError::service_communication("trip-api", message.clone()))
            }
        }
    }
}

/// Fixed country list
#[derive(Debug, Clone, Default)]
pub struct StaticCountries {
    countries: Vec<Country>,
    failure: Option<String>,
}

impl StaticCountries {
    /// Serve `countries`
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries,
            failure: None,
        }
    }

    /// Fail every fetch
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            countries: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

#[async_trait]
impl CountrySource for StaticCountries {
    async fn fetch_countries(&self) -> ClientResult<Vec<Country>> {
        match &self.failure {
            Some(message) => Err(ClientError::service_communication("countries", message.clone())),
            None => Ok(self.countries.clone()),
        }
    }
}

/// Account store backed by maps
#[derive(Debug, Clone, Default)]
pub struct MockAccountService {
    sessions: HashMap<String, UserIdentity>,
    users: Arc<Mutex<Vec<UserRecord>>>,
    failure: Option<String>,
}

impl MockAccountService {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `session` as belonging to `identity`
    pub fn with_session(mut self, session: impl Into<String>, identity: UserIdentity) -> Self {
        self.sessions.insert(session.into(), identity);
        self
    }

    /// Seed a user document
    pub fn with_user(self, record: UserRecord) -> Self {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
        self
    }

    /// Fail every document operation
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Documents currently stored
    pub fn users(&self) -> Vec<UserRecord> {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn check(&self) -> ClientResult<()> {
        match &self.failure {
            Some(message) => Err(ClientError::service_communication("baas", message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AccountService for MockAccountService {
    async fn get_account(&self, session: &str) -> ClientResult<UserIdentity> {
        self.sessions
            .get(session)
            .cloned()
            .ok_or_else(|| ClientError::unauthenticated("unknown session"))
    }

    async fn get_existing_user(&self, account_id: &str) -> ClientResult<Option<UserRecord>> {
        self.check()?;
        Ok(self
            .users()
            .into_iter()
            .find(|user| user.account_id == account_id))
    }

    async fn store_user_data(&self, account: &UserIdentity) -> ClientResult<UserRecord> {
        self.check()?;
        let mut users = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        let record = UserRecord {
            id: format!("doc-{}", users.len() + 1),
            account_id: account.id.clone(),
            name: account.name.clone().unwrap_or_default(),
            email: account.email.clone().unwrap_or_default(),
            image_url: None,
            joined_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            status: UserStatus::User,
        };
        users.push(record.clone());
        Ok(record)
    }

    async fn list_users(&self, limit: u32, offset: u32) -> ClientResult<UserPage> {
        self.check()?;
        let mut users = self.users();
        users.sort_by(|a, b| b.joined_at.cmp(&a.joined_at));
        let total = users.len() as u64;

        Ok(UserPage {
            users: users
                .into_iter()
                .skip(offset as usize)
                .take(limit as usize)
                .collect(),
            total,
        })
    }

    fn oauth_url(&self, provider: &str) -> String {
        format!("https://baas.invalid/account/sessions/oauth2/{provider}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio_test::{assert_err, assert_ok};

    fn request() -> CreateTripRequest {
        CreateTripRequest {
            country: "Peru".to_string(),
            number_of_days: 3,
            travel_styles: "Adventure".to_string(),
            interests: "Hiking & Nature Walks".to_string(),
            budget: "Budget".to_string(),
            group_types: "Friends".to_string(),
            user_id: "u9".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_trip_api_records_calls() {
        let api = MockTripApi::new().with_response(json!({ "id": 7 }));

        let body = assert_ok!(api.create_trip(&request()).await);

        assert_eq!(body, json!({ "id": 7 }));
        assert_eq!(api.call_count(), 1);
        assert_eq!(api.calls()[0].user_id, "u9");
    }

    #[tokio::test]
    async fn test_mock_trip_api_failure() {
        let api = MockTripApi::new().with_failure("connection reset");

        let err = assert_err!(api.create_trip(&request()).await);

        assert!(matches!(err, ClientError::ServiceCommunication { .. }));
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_identity() {
        let signed_in = MockIdentity::signed_in(UserIdentity::new("u1"));
        assert_eq!(signed_in.current_user().await.unwrap().id, "u1");

        let signed_out = MockIdentity::signed_out();
        assert!(signed_out.current_user().await.unwrap_err().is_unauthenticated());

        let failing = MockIdentity::failing("timeout");
        assert!(!failing.current_user().await.unwrap_err().is_unauthenticated());
    }

    #[test]
    fn test_static_countries() {
        let countries = StaticCountries::new(vec![Country {
            name: "Chile".to_string(),
            coordinates: None,
            value: "Chile".to_string(),
            map_url: None,
        }]);
        let loaded = assert_ok!(tokio_test::block_on(countries.fetch_countries()));
        assert_eq!(loaded.len(), 1);

        let failing = StaticCountries::failing("offline");
        assert_err!(tokio_test::block_on(failing.fetch_countries()));
    }

    #[tokio::test]
    async fn test_mock_accounts_store_and_list() {
        let accounts = MockAccountService::new();
        let stored = accounts
            .store_user_data(&UserIdentity {
                id: "acc1".to_string(),
                name: Some("Ada".to_string()),
                email: Some("ada@example.com".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(stored.status, UserStatus::User);
        assert_eq!(
            accounts.get_existing_user("acc1").await.unwrap(),
            Some(stored)
        );

        let page = accounts.list_users(10, 0).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.users.len(), 1);

        let page = accounts.list_users(10, 5).await.unwrap();
        assert_eq!(page.total, 1);
        assert!(page.users.is_empty());
    }
}
