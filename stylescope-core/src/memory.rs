//! In-memory document store, the test stand-in for the HTTP gateway.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::store::{ConfigDocument, DocumentStore, StoreError};

/// A `DocumentStore` backed by a map. Ids are minted per save, so every
/// save is an insert, exactly like the real gateway.
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: Mutex<HashMap<String, ConfigDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.docs.lock().expect("store mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait(?Send)]
impl DocumentStore for MemoryStore {
    async fn load(&self, id: &str) -> Result<Option<ConfigDocument>, StoreError> {
        Ok(self.docs.lock().expect("store mutex poisoned").get(id).cloned())
    }

    async fn save(&self, doc: &ConfigDocument) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        self.docs
            .lock()
            .expect("store mutex poisoned")
            .insert(id.clone(), doc.clone());
        debug!("stored document {id}");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::StyleConfig;
    use crate::scale::{Breakpoint, TextScale};

    #[tokio::test]
    async fn round_trip_preserves_every_field() {
        let store = MemoryStore::new();
        let mut config = StyleConfig::default();
        config.set_primary("Emerald");
        config.add_color("Brand");
        config.set_color_value("Brand", "#123456");
        config.set_heading_font("Oswald");
        config.set_container_width("1200");

        let saved = ConfigDocument::from(&config);
        let id = store.save(&saved).await.unwrap();
        let loaded = store.load(&id).await.unwrap().expect("document exists");

        assert_eq!(loaded, saved);
        // containerWidth is part of the payload, not just the model
        assert_eq!(loaded.container_width.as_deref(), Some("1200"));
    }

    #[tokio::test]
    async fn edited_heading_size_survives_round_trip() {
        let store = MemoryStore::new();
        let mut config = StyleConfig::default();
        config.set_font_size(TextScale::H1, Breakpoint::Desktop, 60.0);

        let id = store.save(&ConfigDocument::from(&config)).await.unwrap();

        let mut reloaded = StyleConfig::default();
        reloaded.apply_document(store.load(&id).await.unwrap().unwrap());
        assert_eq!(reloaded.font_size.h1.desktop, 60.0);
    }

    #[tokio::test]
    async fn load_of_unknown_id_is_none_and_leaves_caller_state_alone() {
        let store = MemoryStore::new();
        let config = StyleConfig::default();

        let result = store.load("no-such-document").await.unwrap();
        assert!(result.is_none());
        // nothing to apply, so the active configuration stays at defaults
        assert_eq!(config, StyleConfig::default());
    }

    #[tokio::test]
    async fn save_is_always_an_insert() {
        let store = MemoryStore::new();
        let doc = ConfigDocument::from(&StyleConfig::default());

        let first = store.save(&doc).await.unwrap();
        let second = store.save(&doc).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
        assert!(store.load(&first).await.unwrap().is_some());
        assert!(store.load(&second).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn works_through_the_trait_object_seam() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        let doc = ConfigDocument::from(&StyleConfig::default());

        let id = store.save(&doc).await.unwrap();
        let loaded = store.load(&id).await.unwrap().unwrap();
        assert_eq!(loaded, doc);
    }
}
