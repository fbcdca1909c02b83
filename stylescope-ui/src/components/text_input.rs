//! Text and number input components

use dioxus::prelude::*;

const INPUT_CLASS: &str = "w-full bg-neutral-900 border border-neutral-700 rounded-lg px-3 py-2 text-white placeholder-neutral-500 focus:outline-none focus:ring-1 focus:ring-white/50";

/// Single-line text input with consistent styling.
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
) -> Element {
    let class = match &class {
        Some(extra) => format!("{INPUT_CLASS} {extra}"),
        None => INPUT_CLASS.to_string(),
    };

    rsx! {
        input {
            r#type: "text",
            class: "{class}",
            id: id.as_deref(),
            value: "{value}",
            placeholder,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}

/// Number input. Reports the raw string; callers coerce it, so partially
/// typed values ("1.", "-") pass through without being eaten.
#[component]
pub fn NumberInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] id: Option<String>,
    #[props(default)] step: Option<&'static str>,
    #[props(default)] min: Option<&'static str>,
) -> Element {
    rsx! {
        input {
            r#type: "number",
            class: INPUT_CLASS,
            id: id.as_deref(),
            value: "{value}",
            step,
            min,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
