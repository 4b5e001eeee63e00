//! Appwrite Databases REST client.
//!
//! Implements [`DocumentStore`] over the `/databases/{db}/collections/{col}/documents`
//! endpoints, authenticating with the project id and server API key headers.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde_json::Value;

use super::{Document, DocumentStore, UNIQUE_ID};
use crate::config::SeedConfig;
use crate::error::DbError;

/// Request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the Appwrite Databases REST API.
pub struct AppwriteClient {
    /// HTTP client for making API requests.
    client: Client,
    /// Base URL of the Appwrite API.
    endpoint: String,
    /// Project the target database belongs to.
    project_id: String,
    /// Database holding the seeded collections.
    database_id: String,
    /// Server API key for authentication.
    api_key: String,
}

impl AppwriteClient {
    /// Create a client from the startup configuration.
    pub fn new(config: &SeedConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client - system TLS configuration error"),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            database_id: config.database_id.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn documents_url(&self, collection_id: &str) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, self.database_id, collection_id
        )
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Key", &self.api_key)
            .header("Content-Type", "application/json")
    }
}

/// Document as returned by the API: the `$id` metadata field plus the
/// user-level fields, which stay flattened in the same JSON object.
#[derive(Debug, Deserialize)]
struct ApiDocument {
    #[serde(rename = "$id")]
    id: String,
    #[serde(flatten)]
    data: Value,
}

impl From<ApiDocument> for Document {
    fn from(doc: ApiDocument) -> Self {
        Document {
            id: doc.id,
            data: doc.data,
        }
    }
}

/// One page of a collection listing.
#[derive(Debug, Deserialize)]
struct ApiDocumentList {
    documents: Vec<ApiDocument>,
}

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
#[allow(dead_code)] // Fields kept for complete API error deserialization
struct ApiErrorResponse {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<u16>,
}

/// Map a non-success response to a structured [`DbError`].
async fn api_error(response: reqwest::Response) -> DbError {
    let status = response.status().as_u16();

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error response".to_string());

    // Try to parse as structured error, fall back to the raw body
    let message = match serde_json::from_str::<ApiErrorResponse>(&error_text) {
        Ok(parsed) => parsed.message,
        Err(_) => error_text,
    };

    DbError::Api {
        code: status,
        message,
    }
}

#[async_trait]
impl DocumentStore for AppwriteClient {
    async fn list_documents(&self, collection_id: &str) -> Result<Vec<Document>, DbError> {
        let response = self
            .request(Method::GET, self.documents_url(collection_id))
            .send()
            .await
            .map_err(|e| DbError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let list: ApiDocumentList = response
            .json()
            .await
            .map_err(|e| DbError::Parse(e.to_string()))?;

        Ok(list.documents.into_iter().map(Into::into).collect())
    }

    async fn delete_document(
        &self,
        collection_id: &str,
        document_id: &str,
    ) -> Result<(), DbError> {
        let url = format!("{}/{}", self.documents_url(collection_id), document_id);

        let response = self
            .request(Method::DELETE, url)
            .send()
            .await
            .map_err(|e| DbError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        tracing::debug!(collection = collection_id, id = document_id, "Deleted document");
        Ok(())
    }

    async fn create_document(
        &self,
        collection_id: &str,
        data: Value,
    ) -> Result<Document, DbError> {
        let body = serde_json::json!({
            "documentId": UNIQUE_ID,
            "data": data,
        });

        let response = self
            .request(Method::POST, self.documents_url(collection_id))
            .json(&body)
            .send()
            .await
            .map_err(|e| DbError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let document: ApiDocument = response
            .json()
            .await
            .map_err(|e| DbError::Parse(e.to_string()))?;

        Ok(document.into())
    }
}
