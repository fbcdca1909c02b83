//! The slide-in editing panel.
//!
//! Pure view: the configuration comes in by value, every edit goes back out
//! through an `EventHandler`. The only state owned here is the pending
//! new-color name.

use dioxus::prelude::*;
use stylescope_core::{Breakpoint, ColorEntry, FontOption, Responsive, StyleConfig, TextScale};

use crate::components::button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
use crate::components::icons::XIcon;
use crate::components::select::FontSelect;
use crate::components::text_input::{NumberInput, TextInput};

/// Element id the outside-click listener tests containment against.
pub const EDITOR_PANEL_ID: &str = "editor-panel";

/// Coerce a numeric input's raw string the way the form stores it: empty
/// input is zero, anything unparsable is `NaN` (kept, not rejected).
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Render a slot value back into a number input; `NaN` shows as empty.
fn fmt_number(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

#[component]
pub fn EditorPanelView(
    config: StyleConfig,
    fonts: Vec<FontOption>,
    on_heading_font_change: EventHandler<String>,
    on_body_font_change: EventHandler<String>,
    on_container_width_change: EventHandler<String>,
    on_color_value_change: EventHandler<(String, String)>,
    on_set_primary: EventHandler<String>,
    on_add_color: EventHandler<String>,
    on_remove_color: EventHandler<String>,
    on_font_size_change: EventHandler<(TextScale, Breakpoint, f64)>,
    on_line_height_change: EventHandler<(TextScale, Breakpoint, f64)>,
    on_close: EventHandler<()>,
    on_submit: EventHandler<()>,
) -> Element {
    let mut new_color_name = use_signal(String::new);

    let colors = config.colors.clone();

    rsx! {
        div {
            id: EDITOR_PANEL_ID,
            class: "fixed right-0 top-0 bottom-0 w-full max-w-[400px] h-full overflow-y-scroll p-6 bg-black text-white z-40",

            ChromelessButton {
                class: Some("!fixed right-10 top-10 h-16 w-16 rounded-full text-black bg-white border-black border-4 flex items-center justify-center z-50".to_string()),
                aria_label: Some("Close panel".to_string()),
                onclick: move |_| on_close.call(()),
                XIcon {}
            }

            form {
                class: "py-24 mx-auto flex flex-col gap-6",
                onsubmit: move |e| {
                    e.prevent_default();
                    on_submit.call(());
                },

                label { class: "text-xl border-b border-neutral-600 w-full py-3", "Base" }

                FontSelect {
                    id: "headingFont",
                    label: "Heading font",
                    value: config.heading_font.clone(),
                    fonts: fonts.clone(),
                    onchange: move |family| on_heading_font_change.call(family),
                }
                FontSelect {
                    id: "bodyFont",
                    label: "Body font",
                    value: config.body_font.clone(),
                    fonts,
                    onchange: move |family| on_body_font_change.call(family),
                }

                div { class: "flex flex-col gap-2",
                    label { r#for: "containerWidth", "Container max-width (px)" }
                    NumberInput {
                        id: Some("containerWidth".to_string()),
                        value: config.container_width.clone(),
                        step: "1",
                        min: "0",
                        on_input: move |raw| on_container_width_change.call(raw),
                    }
                }

                label { class: "text-xl border-b border-neutral-500 w-full py-3", "Colours" }

                div { class: "flex flex-col gap-2",
                    for entry in colors {
                        ColorRow {
                            key: "{entry.name}",
                            entry,
                            on_value_change: move |change| on_color_value_change.call(change),
                            on_set_primary: move |name| on_set_primary.call(name),
                            on_remove: move |name| on_remove_color.call(name),
                        }
                    }
                }

                div { class: "flex flex-row gap-2 items-center",
                    label { r#for: "newColorName", class: "whitespace-nowrap", "Add new" }
                    TextInput {
                        id: Some("newColorName".to_string()),
                        class: Some("w-48".to_string()),
                        value: new_color_name(),
                        placeholder: "Colour name",
                        on_input: move |name| new_color_name.set(name),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        class: Some("whitespace-nowrap".to_string()),
                        onclick: move |_| {
                            let name = new_color_name();
                            on_add_color.call(name.clone());
                            if !name.trim().is_empty() {
                                new_color_name.set(String::new());
                            }
                        },
                        "Add"
                    }
                }

                label { class: "text-xl border-b border-neutral-500 w-full py-3", "Font sizes" }

                div { class: "flex flex-col gap-8",
                    for token in TextScale::HEADINGS {
                        ScaleRow {
                            token,
                            font_size: config.font_size.get(token),
                            line_height: config.line_height.get(token),
                            on_font_size_change: move |change| on_font_size_change.call(change),
                            on_line_height_change: move |change| on_line_height_change.call(change),
                        }
                    }
                }

                div { class: "flex flex-col gap-8",
                    for token in TextScale::BODY {
                        ScaleRow {
                            token,
                            font_size: config.font_size.get(token),
                            line_height: config.line_height.get(token),
                            on_font_size_change: move |change| on_font_size_change.call(change),
                            on_line_height_change: move |change| on_line_height_change.call(change),
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    submit: true,
                    class: Some("w-full mt-12 h-12 text-xl".to_string()),
                    onclick: move |_| {},
                    "Save"
                }
            }
        }
    }
}

/// One palette entry: picker, name, remove, primary toggle.
#[component]
fn ColorRow(
    entry: ColorEntry,
    on_value_change: EventHandler<(String, String)>,
    on_set_primary: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    let picker_name = entry.name.clone();
    let remove_name = entry.name.clone();
    let primary_name = entry.name.clone();

    let primary_label = if entry.primary { "Primary" } else { "Set as Primary" };
    let primary_variant = if entry.primary {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };

    rsx! {
        div { class: "flex flex-row justify-between w-full",
            div { class: "flex items-center gap-2",
                input {
                    r#type: "color",
                    id: "color-{entry.name}",
                    value: "{entry.value}",
                    oninput: move |e| on_value_change.call((picker_name.clone(), e.value())),
                }
                label { r#for: "color-{entry.name}", "{entry.name}" }
            }

            div { class: "flex flex-row gap-2 items-center",
                ChromelessButton {
                    class: Some("text-sm text-white ml-auto".to_string()),
                    aria_label: Some(format!("Remove {}", entry.name)),
                    onclick: move |_| on_remove.call(remove_name.clone()),
                    XIcon { class: "w-4 h-4" }
                }
                Button {
                    variant: primary_variant,
                    size: ButtonSize::Small,
                    onclick: move |_| on_set_primary.call(primary_name.clone()),
                    "{primary_label}"
                }
            }
        }
    }
}

/// Mobile and desktop size/line-height inputs for one token.
#[component]
fn ScaleRow(
    token: TextScale,
    font_size: Responsive,
    line_height: Responsive,
    on_font_size_change: EventHandler<(TextScale, Breakpoint, f64)>,
    on_line_height_change: EventHandler<(TextScale, Breakpoint, f64)>,
) -> Element {
    rsx! {
        div {
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-3",
                ScaleColumn {
                    token,
                    breakpoint: Breakpoint::Mobile,
                    font_size: font_size.mobile,
                    line_height: line_height.mobile,
                    on_font_size_change: move |change| on_font_size_change.call(change),
                    on_line_height_change: move |change| on_line_height_change.call(change),
                }
                ScaleColumn {
                    token,
                    breakpoint: Breakpoint::Desktop,
                    font_size: font_size.desktop,
                    line_height: line_height.desktop,
                    on_font_size_change: move |change| on_font_size_change.call(change),
                    on_line_height_change: move |change| on_line_height_change.call(change),
                }
            }
        }
    }
}

#[component]
fn ScaleColumn(
    token: TextScale,
    breakpoint: Breakpoint,
    font_size: f64,
    line_height: f64,
    on_font_size_change: EventHandler<(TextScale, Breakpoint, f64)>,
    on_line_height_change: EventHandler<(TextScale, Breakpoint, f64)>,
) -> Element {
    let breakpoint_label = match breakpoint {
        Breakpoint::Mobile => "Mobile",
        Breakpoint::Desktop => "Desktop",
    };

    rsx! {
        div { class: "flex flex-col gap-3",
            label { "({token}) {breakpoint_label}" }

            div { class: "flex flex-col gap-2",
                label { r#for: "fontSize-{token}-{breakpoint}", "Font size" }
                NumberInput {
                    id: Some(format!("fontSize-{token}-{breakpoint}")),
                    value: fmt_number(font_size),
                    on_input: move |raw: String| {
                        on_font_size_change.call((token, breakpoint, coerce_number(&raw)));
                    },
                }
            }

            div { class: "flex flex-col gap-2",
                label { r#for: "lineHeight-{token}-{breakpoint}", "Line height" }
                NumberInput {
                    id: Some(format!("lineHeight-{token}-{breakpoint}")),
                    value: fmt_number(line_height),
                    step: "0.1",
                    min: "0",
                    on_input: move |raw: String| {
                        on_line_height_change.call((token, breakpoint, coerce_number(&raw)));
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_number_parses_plain_values() {
        assert_eq!(coerce_number("60"), 60.0);
        assert_eq!(coerce_number("1.2"), 1.2);
        assert_eq!(coerce_number(" 18 "), 18.0);
    }

    #[test]
    fn coerce_number_treats_empty_as_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
    }

    #[test]
    fn coerce_number_keeps_garbage_as_nan() {
        assert!(coerce_number("abc").is_nan());
        assert!(coerce_number("12px").is_nan());
    }

    #[test]
    fn fmt_number_hides_nan() {
        assert_eq!(fmt_number(32.0), "32");
        assert_eq!(fmt_number(1.2), "1.2");
        assert_eq!(fmt_number(f64::NAN), "");
    }
}
