//! stylescope-ui - view components for StyleScope
//!
//! Pure Dioxus components plus the browser interop utilities they lean on.
//! Components take state by value and report interaction through
//! `EventHandler` props; application state lives with the page that hosts
//! them.

pub mod components;
pub mod viewport;
pub mod wasm_utils;

pub use components::*;
pub use viewport::current_breakpoint;
pub use wasm_utils::EventListenerHandle;
