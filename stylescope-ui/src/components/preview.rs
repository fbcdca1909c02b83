//! The live style-guide preview.
//!
//! Everything here derives from the configuration and the current
//! breakpoint; the hosting page re-renders it on every edit and on every
//! viewport resize.

use dioxus::prelude::*;
use stylescope_core::{text_style, Breakpoint, ColorEntry, StyleConfig, TextScale};

const SAMPLE_LINE: &str =
    "Elementum eu facilisis sed odio. Vitae suscipit tellus mauris a diam maecenas sed enim.";

const PROSE_FIRST: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Arcu cursus euismod quis viverra nibh cras. Accumsan lacus vel facilisis volutpat est velit egestas dui. Dignissim cras tincidunt lobortis feugiat vivamus at augue eget. Euismod quis viverra nibh cras pulvinar mattis nunc sed. Auctor urna nunc id cursus. Pulvinar etiam non quam lacus suspendisse faucibus. Augue mauris augue neque gravida in fermentum et sollicitudin ac. Neque aliquam vestibulum morbi blandit. Orci sagittis eu volutpat odio. Iaculis eu non diam phasellus vestibulum lorem sed risus ultricies.";

const PROSE_SECOND: &str = "Phasellus faucibus scelerisque eleifend donec pretium vulputate sapien nec sagittis. Curabitur gravida arcu ac tortor dignissim convallis aenean et. Sed enim ut sem viverra. Ullamcorper dignissim cras tincidunt lobortis feugiat vivamus at augue. Condimentum id venenatis a condimentum.";

#[component]
pub fn PreviewView(
    config: StyleConfig,
    breakpoint: Breakpoint,
    /// Clicking a swatch reports its color value (for copy-to-clipboard).
    on_swatch_click: EventHandler<String>,
) -> Element {
    let width = config.container_width.clone();
    let title_style = text_style(
        &config.font_size,
        &config.line_height,
        TextScale::H1,
        TextScale::H1,
        &config.heading_font,
        breakpoint,
    );

    rsx! {
        div { class: "w-full flex flex-col gap-32 py-32",
            Container { max_width: width.clone(),
                h1 { style: "{title_style}", "Type and Colour" }
            }

            Container { max_width: width.clone(),
                SwatchGrid {
                    colors: config.colors.clone(),
                    on_swatch_click: move |value| on_swatch_click.call(value),
                }
            }

            Container { max_width: width.clone(),
                div { class: "flex flex-col gap-10 w-full max-w-3xl",
                    for token in TextScale::HEADINGS {
                        SampleLine {
                            token,
                            config: config.clone(),
                            breakpoint,
                        }
                    }
                }
            }

            Container { max_width: width.clone(),
                div { class: "grid grid-cols-1 lg:grid-cols-4 gap-10",
                    for token in TextScale::BODY {
                        SampleLine {
                            token,
                            config: config.clone(),
                            breakpoint,
                        }
                    }
                }
            }

            Container { max_width: width,
                ProseSample { config: config.clone(), breakpoint }
            }
        }
    }
}

/// Centered section capped at the configured container width.
#[component]
fn Container(max_width: String, children: Element) -> Element {
    rsx! {
        div { class: "container mx-auto px-4", style: "max-width: {max_width}px;", {children} }
    }
}

#[component]
fn SwatchGrid(colors: Vec<ColorEntry>, on_swatch_click: EventHandler<String>) -> Element {
    rsx! {
        div { class: "grid grid-cols-2 lg:grid-cols-4 gap-8",
            for entry in colors {
                Swatch {
                    key: "{entry.name}",
                    entry,
                    onclick: move |value| on_swatch_click.call(value),
                }
            }
        }
    }
}

#[component]
fn Swatch(entry: ColorEntry, onclick: EventHandler<String>) -> Element {
    let value = entry.value.clone();

    rsx! {
        div { class: "flex flex-col gap-5 text-lg",
            div {
                class: "p-12 cursor-pointer",
                style: "background-color: {entry.value};",
                onclick: move |_| onclick.call(value.clone()),
            }
            div { class: "flex flex-col lg:flex-row justify-between",
                div { "{entry.name}" }
                div { class: "opacity-40", "{entry.value}" }
            }
        }
    }
}

/// One specimen line plus its token / sizes / family caption. Heading
/// tokens render with the heading font, body tokens with the body font.
#[component]
fn SampleLine(token: TextScale, config: StyleConfig, breakpoint: Breakpoint) -> Element {
    let family = if token.is_heading() {
        &config.heading_font
    } else {
        &config.body_font
    };
    let style = text_style(
        &config.font_size,
        &config.line_height,
        token,
        token,
        family,
        breakpoint,
    );
    let sizes = config.font_size.get(token);

    rsx! {
        div { class: "flex flex-col gap-5",
            p { style: "{style}", "{SAMPLE_LINE}" }
            div { class: "flex flex-row gap-8 text-lg opacity-40",
                div { "{token}" }
                div { "{sizes.mobile}px / {sizes.desktop}px" }
                div { "{family}" }
            }
        }
    }
}

#[component]
fn ProseSample(config: StyleConfig, breakpoint: Breakpoint) -> Element {
    let heading_style = text_style(
        &config.font_size,
        &config.line_height,
        TextScale::H2,
        TextScale::H2,
        &config.heading_font,
        breakpoint,
    );
    let body_style = text_style(
        &config.font_size,
        &config.line_height,
        TextScale::TextBase,
        TextScale::TextBase,
        &config.body_font,
        breakpoint,
    );

    rsx! {
        div { class: "flex flex-col w-2/3 gap-6",
            h2 { style: "{heading_style}", "(h2) Metus aliquam eleifend mi in." }
            p { style: "{body_style}", "{PROSE_FIRST}" }
            p { style: "{body_style}", "{PROSE_SECOND}" }
        }
    }
}
