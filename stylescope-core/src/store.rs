//! Document-store contract and the persisted document shape.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ColorEntry, StyleConfig};
use crate::scale::ScaleValues;

/// Collection all style documents live in.
pub const COLLECTION: &str = "formData";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store unreachable: {0}")]
    Transport(String),
    #[error("stored document did not parse: {0}")]
    Decode(String),
}

/// The wire shape of a saved configuration.
///
/// Saves write every field. On read, `containerWidth` and the two fonts are
/// optional: documents written before those fields existed load with the
/// caller's in-memory values left in place (see
/// [`StyleConfig::apply_document`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    pub colors: Vec<ColorEntry>,
    #[serde(rename = "fontSize")]
    pub font_size: ScaleValues,
    #[serde(rename = "lineHeight")]
    pub line_height: ScaleValues,
    #[serde(rename = "containerWidth", default, skip_serializing_if = "Option::is_none")]
    pub container_width: Option<String>,
    #[serde(rename = "headingFont", default, skip_serializing_if = "Option::is_none")]
    pub heading_font: Option<String>,
    #[serde(rename = "bodyFont", default, skip_serializing_if = "Option::is_none")]
    pub body_font: Option<String>,
}

impl From<&StyleConfig> for ConfigDocument {
    fn from(config: &StyleConfig) -> Self {
        Self {
            colors: config.colors.clone(),
            font_size: config.font_size.clone(),
            line_height: config.line_height.clone(),
            container_width: Some(config.container_width.clone()),
            heading_font: Some(config.heading_font.clone()),
            body_font: Some(config.body_font.clone()),
        }
    }
}

/// A remote store of configuration documents, addressed by opaque ids.
///
/// Injected into the page (and tests) rather than reached as a global, so
/// an in-memory fake can stand in for the HTTP gateway. `(?Send)` because
/// the web implementation's futures run on the browser event loop.
#[async_trait(?Send)]
pub trait DocumentStore {
    /// Fetch a document. `Ok(None)` means no document has this id; callers
    /// treat that as "keep the defaults", not as an error.
    async fn load(&self, id: &str) -> Result<Option<ConfigDocument>, StoreError>;

    /// Insert the document and return its freshly minted id. Never an
    /// update: saving an edited configuration creates a new document.
    async fn save(&self, doc: &ConfigDocument) -> Result<String, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_from_config_fills_every_field() {
        let config = StyleConfig::default();
        let doc = ConfigDocument::from(&config);

        assert_eq!(doc.colors, config.colors);
        assert_eq!(doc.container_width.as_deref(), Some("1536"));
        assert_eq!(doc.heading_font.as_deref(), Some("Roboto"));
        assert_eq!(doc.body_font.as_deref(), Some("Roboto"));
    }

    #[test]
    fn wire_keys_are_camel_case() {
        let doc = ConfigDocument::from(&StyleConfig::default());
        let json = serde_json::to_value(&doc).unwrap();

        for key in ["colors", "fontSize", "lineHeight", "containerWidth", "headingFont", "bodyFont"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["fontSize"]["h1"]["desktop"], 48.0);
        assert_eq!(json["colors"][15]["primary"], true);
    }

    #[test]
    fn documents_without_optional_fields_still_parse() {
        let doc = ConfigDocument::from(&StyleConfig::default());
        let mut json = serde_json::to_value(&doc).unwrap();
        let obj = json.as_object_mut().unwrap();
        obj.remove("containerWidth");
        obj.remove("headingFont");
        obj.remove("bodyFont");

        let parsed: ConfigDocument = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.container_width, None);
        assert_eq!(parsed.heading_font, None);
        assert_eq!(parsed.body_font, None);
        assert_eq!(parsed.colors, doc.colors);
    }

    #[test]
    fn wire_round_trip_preserves_the_document() {
        let doc = ConfigDocument::from(&StyleConfig::default());
        let json = serde_json::to_string(&doc).unwrap();
        let parsed: ConfigDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }
}
