//! Paging parameters for the user grid

use crate::extractors::ExtractorError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default page size of the user grid
pub const DEFAULT_LIMIT: u32 = 10;

/// `?limit=&offset=` for `/all-users`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserListQuery {
    /// Rows per page
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<u32>,

    /// Rows to skip
    pub offset: Option<u32>,
}

impl UserListQuery {
    /// Effective page size
    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Effective offset
    pub fn offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for UserListQuery
where
    S: Send + Sync,
{
    type Rejection = ExtractorError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<Self>::from_request_parts(parts, state)
            .await
            .map_err(|e| ExtractorError::bad_request(format!("Invalid paging parameters: {e}")))?;

        query.validate().map_err(|e| {
            ExtractorError::bad_request(format!("Invalid paging parameters: {e}"))
        })?;

        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    async fn extract(uri: &str) -> Result<UserListQuery, ExtractorError> {
        let (mut parts, ()) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        UserListQuery::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_defaults() {
        let query = extract("/all-users").await.unwrap();
        assert_eq!((query.limit(), query.offset()), (10, 0));
    }

    #[tokio::test]
    async fn test_explicit_values() {
        let query = extract("/all-users?limit=25&offset=50").await.unwrap();
        assert_eq!((query.limit(), query.offset()), (25, 50));
    }

    #[rstest]
    #[case("/all-users?limit=0")]
    #[case("/all-users?limit=101")]
    #[case("/all-users?limit=ten")]
    #[case("/all-users?offset=-1")]
    #[tokio::test]
    async fn test_rejected(#[case] uri: &str) {
        let err = extract(uri).await.unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }
}
