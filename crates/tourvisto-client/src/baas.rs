//! Account and user-document client for an Appwrite-style REST backend

use crate::error::{ClientError, ClientResult};
use crate::service::AccountService;
use crate::types::{AccountDto, DocumentList, UserDocumentDto};
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use reqwest::RequestBuilder;
use serde_json::json;
use tourvisto_core::config::BaasConfig;
use tourvisto_core::types::{UserIdentity, UserPage, UserRecord};
use tracing::{debug, info};

const SERVICE: &str = "baas";

/// REST client for accounts and the users collection
#[derive(Debug, Clone)]
pub struct BaasClient {
    client: reqwest::Client,
    config: BaasConfig,
}

impl BaasClient {
    /// Create a client
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint or project id is empty.
    pub fn new(config: BaasConfig) -> ClientResult<Self> {
        if config.endpoint.trim().is_empty() {
            return Err(ClientError::configuration("BaaS endpoint must not be empty"));
        }
        if config.project_id.trim().is_empty() {
            return Err(ClientError::configuration("BaaS project id must not be empty"));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.endpoint.trim_end_matches('/'))
    }

    fn documents_url(&self) -> String {
        self.url(&format!(
            "/databases/{}/collections/{}/documents",
            self.config.database_id, self.config.users_collection_id
        ))
    }

    fn project(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("X-Appwrite-Project", &self.config.project_id)
    }

    /// Attach the server key when one is configured
    fn server(&self, request: RequestBuilder) -> RequestBuilder {
        let request = self.project(request);
        match &self.config.api_key {
            Some(key) => request.header("X-Appwrite-Key", key),
            None => request,
        }
    }

    async fn send<T: serde::de::DeserializeOwned>(request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::unexpected_status(SERVICE, status.as_u16(), body));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

fn query(method: &str, attribute: Option<&str>, values: serde_json::Value) -> String {
    let mut query = json!({ "method": method });
    if let Some(attribute) = attribute {
        query["attribute"] = json!(attribute);
    }
    if !values.is_null() {
        query["values"] = values;
    }
    query.to_string()
}

#[async_trait]
impl AccountService for BaasClient {
    async fn get_account(&self, session: &str) -> ClientResult<UserIdentity> {
        let request = self
            .project(self.client.get(self.url("/account")))
            .header("X-Appwrite-Session", session);

        let account: AccountDto = Self::send(request).await.map_err(|e| {
            if e.is_unauthenticated() {
                ClientError::unauthenticated("session rejected")
            } else {
                e
            }
        })?;

        if account.id.trim().is_empty() {
            return Err(ClientError::unauthenticated("account has no id"));
        }

        Ok(UserIdentity {
            id: account.id,
            name: account.name,
            email: account.email,
        })
    }

    async fn get_existing_user(&self, account_id: &str) -> ClientResult<Option<UserRecord>> {
        let queries = [
            ("queries[]", query("equal", Some("accountId"), json!([account_id]))),
            ("queries[]", query("limit", None, json!([1]))),
        ];
        let request = self.server(self.client.get(self.documents_url()).query(&queries));

        let list: DocumentList<UserDocumentDto> = Self::send(request).await?;
        debug!(account_id, found = list.total, "Looked up user document");

        Ok(list.documents.into_iter().next().map(UserRecord::from))
    }

    async fn store_user_data(&self, account: &UserIdentity) -> ClientResult<UserRecord> {
        let body = json!({
            "documentId": "unique()",
            "data": {
                "accountId": account.id,
                "email": account.email.clone().unwrap_or_default(),
                "name": account.name.clone().unwrap_or_default(),
                "joinedAt": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            }
        });
        let request = self.server(self.client.post(self.documents_url()).json(&body));

        let doc: UserDocumentDto = Self::send(request).await?;
        info!(account_id = %account.id, document_id = %doc.id, "Stored new user document");

        Ok(UserRecord::from(doc))
    }

    async fn list_users(&self, limit: u32, offset: u32) -> ClientResult<UserPage> {
        let queries = [
            ("queries[]", query("orderDesc", Some("joinedAt"), serde_json::Value::Null)),
            ("queries[]", query("limit", None, json!([limit]))),
            ("queries[]", query("offset", None, json!([offset]))),
        ];
        let request = self.server(self.client.get(self.documents_url()).query(&queries));

        let list: DocumentList<UserDocumentDto> = Self::send(request).await?;

        Ok(UserPage {
            users: list.documents.into_iter().map(UserRecord::from).collect(),
            total: list.total,
        })
    }

    fn oauth_url(&self, provider: &str) -> String {
        format!(
            "{}?project={}&success={}&failure={}",
            self.url(&format!("/account/sessions/oauth2/{provider}")),
            urlencoding::encode(&self.config.project_id),
            urlencoding::encode(&self.config.oauth_success_url),
            urlencoding::encode(&self.config.oauth_failure_url),
        )
    }
}
