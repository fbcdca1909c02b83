//! Clipboard writes with a legacy fallback.

use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Write `text` to the clipboard. Tries the async clipboard API first and
/// falls back to a selection-based `execCommand("copy")`. Returns whether
/// the text made it; failures are logged, never surfaced.
pub async fn copy_text(text: &str) -> bool {
    if let Some(window) = web_sys::window() {
        let clipboard = window.navigator().clipboard();
        match JsFuture::from(clipboard.write_text(text)).await {
            Ok(_) => return true,
            Err(e) => warn!("clipboard API write failed, trying fallback: {e:?}"),
        }
    }
    fallback_copy(text)
}

/// Copy through an off-screen textarea selection.
fn fallback_copy(text: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Ok(element) = document.create_element("textarea") else {
        return false;
    };
    let Ok(textarea) = element.dyn_into::<web_sys::HtmlTextAreaElement>() else {
        return false;
    };

    textarea.set_value(text);
    let _ = textarea.set_attribute("style", "position: fixed; left: -9999px;");
    if body.append_child(&textarea).is_err() {
        return false;
    }
    let _ = textarea.focus();
    textarea.select();

    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|d| d.exec_command("copy").ok())
        .unwrap_or(false);
    if !copied {
        warn!("fallback clipboard copy failed");
    }

    let _ = body.remove_child(&textarea);
    copied
}
