//! Google Fonts loader adapter.
//!
//! Loading a family means appending a stylesheet link to `<head>` and
//! letting the browser fetch and register it. Fire-and-forget: nothing
//! awaits the fetch, and requests for different families are independent.

use tracing::info;

const FONTS_CSS_BASE: &str = "https://fonts.googleapis.com/css2";

/// Ask the rendering environment for `family`. Idempotent: the link element
/// carries an id derived from the family, so repeat requests are no-ops.
pub fn ensure_font_loaded(family: &str) {
    if family.is_empty() {
        return;
    }
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let id = link_id(family);
    if document.get_element_by_id(&id).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    let Ok(link) = document.create_element("link") else {
        return;
    };

    let _ = link.set_attribute("id", &id);
    let _ = link.set_attribute("rel", "stylesheet");
    let _ = link.set_attribute("href", &stylesheet_url(family));

    if head.append_child(&link).is_ok() {
        info!("requested font family {family}");
    }
}

fn link_id(family: &str) -> String {
    format!("font-css-{}", family.to_lowercase().replace(' ', "-"))
}

fn stylesheet_url(family: &str) -> String {
    format!("{FONTS_CSS_BASE}?family={}&display=swap", family.replace(' ', "+"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_ids_are_stable_dom_ids() {
        assert_eq!(link_id("Roboto"), "font-css-roboto");
        assert_eq!(link_id("Playfair Display"), "font-css-playfair-display");
    }

    #[test]
    fn stylesheet_urls_escape_spaces() {
        assert_eq!(
            stylesheet_url("Open Sans"),
            "https://fonts.googleapis.com/css2?family=Open+Sans&display=swap"
        );
    }
}
