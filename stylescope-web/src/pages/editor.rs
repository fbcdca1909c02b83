//! The style-guide page: preview plus the editing panel.

use dioxus::prelude::*;
use stylescope_core::{ConfigDocument, StyleConfig, GOOGLE_FONTS};
use stylescope_ui::{
    current_breakpoint, BrushIcon, ChromelessButton, EditorPanelView, EventListenerHandle,
    PreviewView, EDITOR_PANEL_ID,
};
use tracing::{error, info};
use wasm_bindgen::JsCast;

use crate::toasts::use_toasts;
use crate::{clipboard, fonts, Route, StoreHandle};

const SAVE_TOAST_MS: u32 = 20_000;
const COPY_TOAST_MS: u32 = 2_000;

#[component]
pub fn Home() -> Element {
    rsx! {
        StyleScope {}
    }
}

#[component]
pub fn Doc(doc_id: String) -> Element {
    rsx! {
        StyleScope { doc_id }
    }
}

#[component]
pub fn StyleScope(doc_id: Option<String>) -> Element {
    let store = use_context::<StoreHandle>();
    let toasts = use_toasts();

    let mut config = use_signal(StyleConfig::default);
    let mut panel_open = use_signal(|| false);
    let mut breakpoint = use_signal(current_breakpoint);

    // Load the document named in the URL. A miss or a transport failure is
    // logged and leaves the defaults in place.
    use_hook(|| {
        if let Some(id) = doc_id.clone() {
            let store = store.clone();
            spawn(async move {
                match store.0.load(&id).await {
                    Ok(Some(doc)) => config.write().apply_document(doc),
                    Ok(None) => info!("no document found with id {id}"),
                    Err(e) => error!("failed to load document {id}: {e}"),
                }
            });
        }
    });

    // Request the heading and body fonts whenever the selection changes;
    // the first run covers the two defaults.
    let font_pair = use_memo(move || {
        let cfg = config.read();
        (cfg.heading_font.clone(), cfg.body_font.clone())
    });
    use_effect(move || {
        let (heading, body) = font_pair();
        fonts::ensure_font_loaded(&heading);
        fonts::ensure_font_loaded(&body);
    });

    // Re-read the breakpoint on every window resize so the preview tracks
    // the 767px boundary.
    let mut resize_listener: Signal<Option<EventListenerHandle>> = use_signal(|| None);
    use_effect(move || {
        let handle = EventListenerHandle::on_window("resize", move |_| {
            breakpoint.set(current_breakpoint());
        });
        resize_listener.set(handle);
    });

    // Any mousedown outside the panel collapses it.
    let mut outside_click: Signal<Option<EventListenerHandle>> = use_signal(|| None);
    use_effect(move || {
        let handle = EventListenerHandle::on_document("mousedown", move |event| {
            if !panel_open() {
                return;
            }
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Some(panel) = document.get_element_by_id(EDITOR_PANEL_ID) else {
                return;
            };
            let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            if !panel.contains(target.as_ref()) {
                panel_open.set(false);
            }
        });
        outside_click.set(handle);
    });

    let store_for_save = store.clone();
    let on_submit = move |_| {
        let doc = ConfigDocument::from(&*config.read());
        let store = store_for_save.clone();
        spawn(async move {
            match store.0.save(&doc).await {
                Ok(id) => {
                    info!("saved style configuration as {id}");
                    navigator().push(Route::Doc { doc_id: id.clone() });
                    toasts.show(format!("Style saved {id}"), SAVE_TOAST_MS);
                }
                Err(e) => error!("failed to save style configuration: {e}"),
            }
        });
    };

    let on_swatch_click = move |value: String| {
        spawn(async move {
            if clipboard::copy_text(&value).await {
                toasts.show(format!("Copied {value} to clipboard!"), COPY_TOAST_MS);
            }
        });
    };

    rsx! {
        ChromelessButton {
            class: Some("!fixed right-10 top-10 h-16 w-16 rounded-full text-white bg-black flex items-center justify-center z-30".to_string()),
            aria_label: Some("Edit styles".to_string()),
            onclick: move |_| {
                let open = panel_open();
                panel_open.set(!open);
            },
            BrushIcon {}
        }

        if panel_open() {
            EditorPanelView {
                config: config(),
                fonts: GOOGLE_FONTS.to_vec(),
                on_heading_font_change: move |family: String| config.write().set_heading_font(family),
                on_body_font_change: move |family: String| config.write().set_body_font(family),
                on_container_width_change: move |raw: String| config.write().set_container_width(raw),
                on_color_value_change: move |(name, value): (String, String)| {
                    config.write().set_color_value(&name, &value);
                },
                on_set_primary: move |name: String| config.write().set_primary(&name),
                on_add_color: move |name: String| config.write().add_color(&name),
                on_remove_color: move |name: String| config.write().remove_color(&name),
                on_font_size_change: move |(token, bp, value)| {
                    config.write().set_font_size(token, bp, value);
                },
                on_line_height_change: move |(token, bp, value)| {
                    config.write().set_line_height(token, bp, value);
                },
                on_close: move |_| panel_open.set(false),
                on_submit,
            }
        }

        PreviewView {
            config: config(),
            breakpoint: breakpoint(),
            on_swatch_click,
        }
    }
}
