//! Collaborator traits the admin depends on
//!
//! Each external system sits behind a trait so the web layer can be wired to
//! the real HTTP clients in production and to the in-memory mocks in tests.

use crate::error::ClientResult;
use crate::types::CreateTripRequest;
use async_trait::async_trait;
use tourvisto_core::types::{Country, UserIdentity, UserPage, UserRecord};

/// Resolves the currently signed-in account
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Return the signed-in identity.
    ///
    /// Fails with [`crate::ClientError::Unauthenticated`] when nobody is signed in.
    async fn current_user(&self) -> ClientResult<UserIdentity>;
}

/// Backend that turns trip preferences into a generated trip
#[async_trait]
pub trait TripApi: Send + Sync {
    /// Send one create-trip request and return the parsed JSON body.
    ///
    /// The body is returned for any HTTP status; interpreting it is the
    /// caller's job. Transport failures and non-JSON bodies are errors.
    async fn create_trip(&self, request: &CreateTripRequest) -> ClientResult<serde_json::Value>;
}

/// Source of the country list
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Fetch every known country
    async fn fetch_countries(&self) -> ClientResult<Vec<Country>>;
}

/// Account and user-document store
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Resolve the account owning `session`
    async fn get_account(&self, session: &str) -> ClientResult<UserIdentity>;

    /// Look up the user document linked to `account_id`
    async fn get_existing_user(&self, account_id: &str) -> ClientResult<Option<UserRecord>>;

    /// Create the user document for a freshly signed-in account
    async fn store_user_data(&self, account: &UserIdentity) -> ClientResult<UserRecord>;

    /// List user documents, newest first
    async fn list_users(&self, limit: u32, offset: u32) -> ClientResult<UserPage>;

    /// URL that starts the OAuth sign-in with `provider`
    fn oauth_url(&self, provider: &str) -> String;
}
