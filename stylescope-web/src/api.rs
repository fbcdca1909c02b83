//! HTTP gateway to the document store.
//!
//! The store is a plain JSON REST service: `GET {base}/formData/{id}`
//! returns a stored document, `POST {base}/formData` inserts one and
//! answers with the minted id. The base path defaults to `/api` and can be
//! baked in at build time through `STYLESCOPE_API_BASE`.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use stylescope_core::{ConfigDocument, DocumentStore, StoreError, COLLECTION};
use tracing::info;

/// Response envelope of a successful insert.
#[derive(Deserialize)]
struct CreatedDocument {
    id: String,
}

pub struct HttpStore {
    base: String,
    client: reqwest::Client,
}

impl HttpStore {
    pub fn new() -> Self {
        Self::with_base(option_env!("STYLESCOPE_API_BASE").unwrap_or("/api"))
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            client: reqwest::Client::new(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base, COLLECTION)
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/{}/{}", self.base, COLLECTION, id)
    }
}

impl Default for HttpStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl DocumentStore for HttpStore {
    async fn load(&self, id: &str) -> Result<Option<ConfigDocument>, StoreError> {
        let resp = self
            .client
            .get(self.document_url(id))
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = resp
            .error_for_status()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let doc = resp
            .json::<ConfigDocument>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(Some(doc))
    }

    async fn save(&self, doc: &ConfigDocument) -> Result<String, StoreError> {
        let resp = self
            .client
            .post(self.collection_url())
            .json(doc)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let created = resp
            .json::<CreatedDocument>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        info!("saved configuration as document {}", created.id);
        Ok(created.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_address_the_form_data_collection() {
        let store = HttpStore::with_base("/api");
        assert_eq!(store.collection_url(), "/api/formData");
        assert_eq!(store.document_url("abc123"), "/api/formData/abc123");
    }

    #[test]
    fn insert_envelope_parses() {
        let created: CreatedDocument = serde_json::from_str(r#"{"id":"doc-1"}"#).unwrap();
        assert_eq!(created.id, "doc-1");
    }
}
