//! stylescope-core - data model and persistence contract for StyleScope
//!
//! Platform-neutral: the style configuration, its mutation operations, the
//! document-store trait the web gateway and the in-memory fake both
//! implement, and the pure style derivation the preview renders from.
//! No DOM access lives here.

pub mod config;
pub mod fonts;
pub mod scale;
pub mod store;
pub mod style;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

pub use config::{ColorEntry, StyleConfig};
pub use fonts::{FontOption, GOOGLE_FONTS};
pub use scale::{Breakpoint, Responsive, ScaleValues, TextScale};
pub use store::{ConfigDocument, DocumentStore, StoreError, COLLECTION};
pub use style::{text_style, TextStyle};

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryStore;
