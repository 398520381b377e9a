//! Session token and admin extractors

use crate::auth::{GateDecision, admin_gate};
use crate::state::AppState;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    response::Redirect,
};
use axum_extra::extract::CookieJar;
use std::sync::Arc;
use tourvisto_client::SessionIdentity;
use tourvisto_core::UserRecord;

/// Header carrying the session secret
pub const SESSION_HEADER: &str = "X-Session";

/// Cookie carrying the session secret
pub const SESSION_COOKIE: &str = "tourvisto_session";

/// Session secret from the `X-Session` header or the session cookie
#[derive(Debug, Clone, Default)]
pub struct Session(pub Option<String>);

impl Session {
    /// Identity provider resolving this session through the account service
    pub fn identity(&self, state: &AppState) -> SessionIdentity {
        SessionIdentity::new(Arc::clone(&state.accounts), self.0.clone())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let from_header = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(String::from);

        if from_header.is_some() {
            return Ok(Self(from_header));
        }

        let Ok(jar) = CookieJar::from_request_parts(parts, state).await;
        let from_cookie = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value_trimmed())
            .filter(|value| !value.is_empty())
            .map(String::from);

        Ok(Self(from_cookie))
    }
}

/// Admin that passed the gate
#[derive(Debug, Clone)]
pub struct AdminUser(pub UserRecord);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AdminUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Ok(session) = Session::from_request_parts(parts, state).await;
        let identity = session.identity(state);

        match admin_gate(&identity, state.accounts.as_ref()).await {
            GateDecision::Allow(user) => Ok(Self(user)),
            GateDecision::Redirect(to) => Err(Redirect::to(to)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, header};
    use pretty_assertions::assert_eq;

    async fn extract(request: Request<()>) -> Option<String> {
        let (mut parts, ()) = request.into_parts();
        let Ok(session) = Session::from_request_parts(&mut parts, &()).await;
        session.0
    }

    #[tokio::test]
    async fn test_header_wins() {
        let request = Request::builder()
            .header(SESSION_HEADER, "from-header")
            .header(header::COOKIE, "tourvisto_session=from-cookie")
            .body(())
            .unwrap();
        assert_eq!(extract(request).await.as_deref(), Some("from-header"));
    }

    #[tokio::test]
    async fn test_cookie() {
        let request = Request::builder()
            .header(header::COOKIE, "theme=dark; tourvisto_session=abc123; lang=en")
            .body(())
            .unwrap();
        assert_eq!(extract(request).await.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_quoted_cookie() {
        let request = Request::builder()
            .header(header::COOKIE, "tourvisto_session=\"abc123\"")
            .body(())
            .unwrap();
        assert_eq!(extract(request).await.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_missing() {
        let request = Request::builder()
            .header(header::COOKIE, "theme=dark")
            .header(SESSION_HEADER, "  ")
            .body(())
            .unwrap();
        assert_eq!(extract(request).await, None);
    }
}
