//! Reusable button components

use dioxus::prelude::*;

/// Chromeless button - base functionality without visual styling. Used for
/// the icon buttons (panel toggle, color remove) and inside `Button`.
/// `type` defaults to "button" so instances inside a form don't submit it.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default = "button")] r#type: &'static str,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type,
            disabled,
            aria_label: aria_label.as_deref(),
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Solid white-on-black - for the main actions
    Primary,
    /// Bordered, transparent background
    Outline,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Smaller padding, text-xs
    Small,
    /// Standard padding
    Medium,
}

/// Reusable button with consistent styling.
///
/// Defaults to `type="button"` so buttons inside the editor form don't
/// submit it; pass `submit: true` for the one that should.
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] submit: bool,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = match size {
        ButtonSize::Small => "inline-flex items-center gap-2 text-xs rounded-full transition-colors",
        ButtonSize::Medium => "inline-flex items-center justify-center gap-2 rounded-full transition-colors",
    };

    let padding = match size {
        ButtonSize::Small => "px-3 py-1",
        ButtonSize::Medium => "px-5 py-2",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-white text-black hover:bg-neutral-200 disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Outline => {
            "border border-neutral-500 text-white hover:border-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
    };

    let computed_class = match &class {
        Some(extra) => format!("{base} {padding} {variant_class} {extra}"),
        None => format!("{base} {padding} {variant_class}"),
    };

    let button_type = if submit { "submit" } else { "button" };

    rsx! {
        ChromelessButton {
            disabled,
            class: Some(computed_class),
            r#type: button_type,
            onclick,
            {children}
        }
    }
}
