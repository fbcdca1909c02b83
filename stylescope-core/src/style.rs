//! Pure derivation of inline text styles from the scale tables.

use std::fmt;

use crate::scale::{Breakpoint, ScaleValues, TextScale};

/// An inline style for one sample line: pixel font size, unitless line
/// height, font family. Renders as CSS via `Display`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size_px: f64,
    pub line_height: f64,
    pub font_family: String,
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "font-size: {}px; line-height: {}; font-family: {};",
            self.font_size_px, self.line_height, self.font_family
        )
    }
}

/// Select the breakpoint-appropriate font size and line height for a pair
/// of tokens. Pure given a breakpoint reading; the caller re-invokes it on
/// every viewport change.
pub fn text_style(
    font_size: &ScaleValues,
    line_height: &ScaleValues,
    size_token: TextScale,
    line_token: TextScale,
    font_family: &str,
    breakpoint: Breakpoint,
) -> TextStyle {
    TextStyle {
        font_size_px: font_size.get(size_token).get(breakpoint),
        line_height: line_height.get(line_token).get(breakpoint),
        font_family: font_family.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StyleConfig;

    #[test]
    fn mobile_breakpoint_selects_mobile_values() {
        let config = StyleConfig::default();
        let style = text_style(
            &config.font_size,
            &config.line_height,
            TextScale::H1,
            TextScale::H1,
            "Roboto",
            Breakpoint::from_width(767.0),
        );
        assert_eq!(style.font_size_px, 32.0);
        assert_eq!(style.line_height, 1.0);
    }

    #[test]
    fn desktop_breakpoint_selects_desktop_values() {
        let config = StyleConfig::default();
        let style = text_style(
            &config.font_size,
            &config.line_height,
            TextScale::H1,
            TextScale::H1,
            "Roboto",
            Breakpoint::from_width(768.0),
        );
        assert_eq!(style.font_size_px, 48.0);
        assert_eq!(style.line_height, 1.2);
    }

    #[test]
    fn tokens_are_addressed_independently() {
        let config = StyleConfig::default();
        let style = text_style(
            &config.font_size,
            &config.line_height,
            TextScale::Text2Xl,
            TextScale::TextXs,
            "Lora",
            Breakpoint::Desktop,
        );
        assert_eq!(style.font_size_px, 28.0);
        assert_eq!(style.line_height, 1.2);
        assert_eq!(style.font_family, "Lora");
    }

    #[test]
    fn renders_as_inline_css() {
        let style = TextStyle {
            font_size_px: 18.0,
            line_height: 1.2,
            font_family: "Roboto".to_string(),
        };
        assert_eq!(
            style.to_string(),
            "font-size: 18px; line-height: 1.2; font-family: Roboto;"
        );
    }
}
