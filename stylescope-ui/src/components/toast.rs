//! Generic toast notification

use crate::components::icons::XIcon;
use crate::components::ChromelessButton;
use dioxus::prelude::*;

/// A single dismissible toast. Positioning and lifetime belong to the host
/// overlay; this is just the card.
#[component]
pub fn Toast(
    /// The message to display
    message: String,
    /// Called when the user dismisses the toast
    on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "bg-neutral-900 text-white px-6 py-4 rounded-lg shadow-lg max-w-md border border-neutral-700",
            div { class: "flex items-center justify-between gap-4",
                div { class: "flex-1",
                    span { "{message}" }
                }
                ChromelessButton {
                    class: Some("text-white hover:text-neutral-400".to_string()),
                    aria_label: Some("Dismiss".to_string()),
                    onclick: move |_| on_dismiss.call(()),
                    XIcon { class: "w-4 h-4" }
                }
            }
        }
    }
}
