//! stylescope-web - the StyleScope web app
//!
//! Router, page wiring, and the browser-facing adapters: the HTTP document
//! gateway, the Google Fonts loader, clipboard access, and the toast
//! overlay.

pub mod api;
pub mod clipboard;
pub mod fonts;
pub mod pages;
pub mod toasts;

use std::sync::Arc;

use dioxus::prelude::*;
use stylescope_core::DocumentStore;

use api::HttpStore;
use pages::{Doc, Home};
use toasts::{ToastHost, Toasts};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:doc_id")]
    Doc { doc_id: String },
}

/// The injected document-store gateway. Pages resolve it from context, so
/// tests and demos can provide an in-memory store instead.
#[derive(Clone)]
pub struct StoreHandle(pub Arc<dyn DocumentStore>);

#[component]
pub fn App() -> Element {
    use_context_provider(|| StoreHandle(Arc::new(HttpStore::new())));
    use_context_provider(Toasts::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        ToastHost {}
        Router::<Route> {}
    }
}
