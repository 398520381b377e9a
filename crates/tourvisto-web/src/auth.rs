//! Admin gate and sign-in decisions

use tourvisto_client::{AccountService, IdentityProvider};
use tourvisto_core::{UserRecord, UserStatus};
use tracing::{error, info, warn};

/// Sign-in page path
pub const SIGN_IN_PATH: &str = "/sign-in";

/// Landing page for non-admins and signed-in visitors of the sign-in page
pub const HOME_PATH: &str = "/";

/// OAuth provider offered on the sign-in page
pub const OAUTH_PROVIDER: &str = "google";

/// What the admin gate decided for a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Admin page may render for this user
    Allow(UserRecord),
    /// Send the visitor elsewhere
    Redirect(&'static str),
}

/// Run the admin gate.
///
/// Unknown accounts get a user document on first visit and are let through.
/// Accounts whose document says `user` are sent to the home page.
pub async fn admin_gate(
    identity: &dyn IdentityProvider,
    accounts: &dyn AccountService,
) -> GateDecision {
    let account = match identity.current_user().await {
        Ok(account) if account.is_authenticated() => account,
        Ok(_) => return GateDecision::Redirect(SIGN_IN_PATH),
        Err(e) => {
            info!(reason = %e, "No signed-in account");
            return GateDecision::Redirect(SIGN_IN_PATH);
        }
    };

    let existing = match accounts.get_existing_user(&account.id).await {
        Ok(existing) => existing,
        Err(e) => {
            error!(error = %e, account_id = %account.id, "User lookup failed");
            return GateDecision::Redirect(SIGN_IN_PATH);
        }
    };

    match existing {
        Some(user) if user.status == UserStatus::User => {
            warn!(account_id = %account.id, "Non-admin tried to open an admin page");
            GateDecision::Redirect(HOME_PATH)
        }
        Some(user) => GateDecision::Allow(user),
        None => match accounts.store_user_data(&account).await {
            Ok(user) => GateDecision::Allow(user),
            Err(e) => {
                error!(error = %e, account_id = %account.id, "Storing user data failed");
                GateDecision::Redirect(SIGN_IN_PATH)
            }
        },
    }
}

/// What the sign-in page should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInDecision {
    /// Already signed in
    Redirect(&'static str),
    /// Show the sign-in view
    Show {
        /// Link that starts the OAuth flow
        oauth_url: String,
    },
}

/// Decide the sign-in page for the current visitor
pub async fn sign_in(
    identity: &dyn IdentityProvider,
    accounts: &dyn AccountService,
) -> SignInDecision {
    match identity.current_user().await {
        Ok(account) if account.is_authenticated() => SignInDecision::Redirect(HOME_PATH),
        _ => SignInDecision::Show {
            oauth_url: accounts.oauth_url(OAUTH_PROVIDER),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tourvisto_client::{MockAccountService, MockIdentity};
    use tourvisto_core::UserIdentity;

    fn record(account_id: &str, status: UserStatus) -> UserRecord {
        UserRecord {
            id: format!("doc-{account_id}"),
            account_id: account_id.to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            image_url: None,
            joined_at: "2025-01-05T10:30:00.000+00:00".to_string(),
            status,
        }
    }

    fn account(id: &str) -> MockIdentity {
        MockIdentity::signed_in(UserIdentity {
            id: id.to_string(),
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
        })
    }

    #[tokio::test]
    async fn test_no_account_goes_to_sign_in() {
        let accounts = MockAccountService::new();
        assert_eq!(
            admin_gate(&MockIdentity::signed_out(), &accounts).await,
            GateDecision::Redirect(SIGN_IN_PATH)
        );
        assert_eq!(
            admin_gate(&account(""), &accounts).await,
            GateDecision::Redirect(SIGN_IN_PATH)
        );
    }

    #[tokio::test]
    async fn test_regular_user_goes_home() {
        let accounts = MockAccountService::new().with_user(record("a1", UserStatus::User));
        assert_eq!(
            admin_gate(&account("a1"), &accounts).await,
            GateDecision::Redirect(HOME_PATH)
        );
    }

    #[tokio::test]
    async fn test_existing_admin_allowed() {
        let admin = record("a1", UserStatus::Admin);
        let accounts = MockAccountService::new().with_user(admin.clone());
        assert_eq!(
            admin_gate(&account("a1"), &accounts).await,
            GateDecision::Allow(admin)
        );
        assert_eq!(accounts.users().len(), 1);
    }

    #[tokio::test]
    async fn test_new_account_is_stored_and_allowed() {
        let accounts = MockAccountService::new();

        let decision = admin_gate(&account("a2"), &accounts).await;

        let GateDecision::Allow(user) = decision else {
            panic!("expected Allow, got {decision:?}");
        };
        assert_eq!(user.account_id, "a2");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(accounts.users(), vec![user]);
    }

    #[tokio::test]
    async fn test_directory_error_goes_to_sign_in() {
        let accounts = MockAccountService::new().with_failure("database down");
        assert_eq!(
            admin_gate(&account("a1"), &accounts).await,
            GateDecision::Redirect(SIGN_IN_PATH)
        );
    }

    #[tokio::test]
    async fn test_sign_in_page() {
        let accounts = MockAccountService::new();

        assert_eq!(
            sign_in(&account("a1"), &accounts).await,
            SignInDecision::Redirect(HOME_PATH)
        );
        assert_eq!(
            sign_in(&MockIdentity::signed_out(), &accounts).await,
            SignInDecision::Show {
                oauth_url: "https://baas.invalid/account/sessions/oauth2/google".to_string()
            }
        );
    }
}
