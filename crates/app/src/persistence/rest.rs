//! HTTP client for a JSON document service.
//!
//! Collections are exposed as `{base}/{collection}` and documents as
//! `{base}/{collection}/{id}`:
//!
//! | call   | request                                    |
//! |--------|--------------------------------------------|
//! | list   | `GET` → `{"documents": [{"id", "data"}]}`   |
//! | create | `PUT` with the document body               |
//! | update | `PATCH` with the document body             |
//! | delete | `DELETE`                                   |

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use tracing::debug;

use super::{Document, DocumentStore, PersistenceError};

/// Configuration for connecting to the document service.
#[derive(Debug, Clone)]
pub struct RestDocumentStoreConfig {
    /// Service base URL, e.g. `"https://documents.example.com/v1"`.
    pub base_url: String,

    /// Optional bearer token sent with every request.
    pub token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RestDocumentStore {
    config: RestDocumentStoreConfig,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    documents: Vec<Document>,
}

impl RestDocumentStore {
    #[must_use]
    pub fn new(config: RestDocumentStoreConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{collection}", self.config.base_url.trim_end_matches('/'))
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{id}", self.collection_url(collection))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, action: &str) -> Result<Response, PersistenceError> {
        let response = self.authorize(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(PersistenceError::UnexpectedResponse(format!(
                "{action} request failed with status {status}: {text}"
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl DocumentStore for RestDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<Document>, PersistenceError> {
        let response = self
            .send(self.http.get(self.collection_url(collection)), "list")
            .await?;

        let parsed: ListResponse = response.json().await?;

        debug!(collection, document_count = parsed.documents.len(), "listed documents");

        Ok(parsed.documents)
    }

    async fn create(&self, collection: &str, document: Document) -> Result<(), PersistenceError> {
        let url = self.document_url(collection, &document.id);

        self.send(self.http.put(url).json(&document.data), "create")
            .await?;

        Ok(())
    }

    async fn update(&self, collection: &str, document: Document) -> Result<(), PersistenceError> {
        let url = self.document_url(collection, &document.id);

        self.send(self.http.patch(url).json(&document.data), "update")
            .await?;

        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), PersistenceError> {
        self.send(self.http.delete(self.document_url(collection, id)), "delete")
            .await?;

        Ok(())
    }
}
