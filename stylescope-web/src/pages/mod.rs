mod editor;

pub use editor::{Doc, Home, StyleScope};
