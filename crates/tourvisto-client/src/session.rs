//! Identity provider bound to one request's session token

use crate::error::{ClientError, ClientResult};
use crate::service::{AccountService, IdentityProvider};
use async_trait::async_trait;
use std::sync::Arc;
use tourvisto_core::types::UserIdentity;

/// Resolves the current user through [`AccountService::get_account`]
#[derive(Clone)]
pub struct SessionIdentity {
    accounts: Arc<dyn AccountService>,
    session: Option<String>,
}

impl std::fmt::Debug for SessionIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionIdentity")
            .field("has_session", &self.session.is_some())
            .finish_non_exhaustive()
    }
}

impl SessionIdentity {
    /// Bind `session` (if any) to the account service
    pub fn new(accounts: Arc<dyn AccountService>, session: Option<String>) -> Self {
        Self {
            accounts,
            session: session.filter(|s| !s.trim().is_empty()),
        }
    }
}

#[async_trait]
impl IdentityProvider for SessionIdentity {
    async fn current_user(&self) -> ClientResult<UserIdentity> {
        let session = self
            .session
            .as_deref()
            .ok_or_else(|| ClientError::unauthenticated("no session"))?;

        self.accounts.get_account(session).await
    }
}
