//! Native select over the font list.

use dioxus::prelude::*;
use stylescope_core::FontOption;

/// Labeled `<select>` of font families. The list is injected by the caller;
/// a `value` outside it simply renders with no option selected.
#[component]
pub fn FontSelect(
    id: &'static str,
    label: &'static str,
    value: String,
    fonts: Vec<FontOption>,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "flex flex-col gap-2",
            label { r#for: id, "{label}" }
            select {
                id,
                class: "w-full bg-neutral-900 border border-neutral-700 rounded-lg px-3 py-2 text-white focus:outline-none focus:ring-1 focus:ring-white/50",
                value: "{value}",
                onchange: move |e| onchange.call(e.value()),
                for font in fonts {
                    option {
                        value: font.family,
                        selected: font.family == value,
                        "{font.name}"
                    }
                }
            }
        }
    }
}
