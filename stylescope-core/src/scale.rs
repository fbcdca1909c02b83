//! Text-scale tokens, breakpoints, and the per-token value tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Viewport widths at or below this many CSS pixels use mobile values.
pub const MOBILE_MAX_WIDTH: f64 = 767.0;

/// One of the eleven typographic roles a configuration assigns sizes to.
///
/// The set is closed: five heading levels plus six body sizes. Each token
/// carries an independent mobile/desktop font size and line height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextScale {
    H1,
    H2,
    H3,
    H4,
    H5,
    Text2Xl,
    TextXl,
    TextLg,
    TextBase,
    TextSm,
    TextXs,
}

impl TextScale {
    /// Heading tokens, largest first. Rendered with the heading font.
    pub const HEADINGS: [TextScale; 5] = [
        TextScale::H1,
        TextScale::H2,
        TextScale::H3,
        TextScale::H4,
        TextScale::H5,
    ];

    /// Body tokens, largest first. Rendered with the body font.
    pub const BODY: [TextScale; 6] = [
        TextScale::Text2Xl,
        TextScale::TextXl,
        TextScale::TextLg,
        TextScale::TextBase,
        TextScale::TextSm,
        TextScale::TextXs,
    ];

    /// All eleven tokens in display order (headings, then body sizes).
    pub const ALL: [TextScale; 11] = [
        TextScale::H1,
        TextScale::H2,
        TextScale::H3,
        TextScale::H4,
        TextScale::H5,
        TextScale::Text2Xl,
        TextScale::TextXl,
        TextScale::TextLg,
        TextScale::TextBase,
        TextScale::TextSm,
        TextScale::TextXs,
    ];

    /// The token's wire and display spelling (`"h1"`, `"text-2xl"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            TextScale::H1 => "h1",
            TextScale::H2 => "h2",
            TextScale::H3 => "h3",
            TextScale::H4 => "h4",
            TextScale::H5 => "h5",
            TextScale::Text2Xl => "text-2xl",
            TextScale::TextXl => "text-xl",
            TextScale::TextLg => "text-lg",
            TextScale::TextBase => "text-base",
            TextScale::TextSm => "text-sm",
            TextScale::TextXs => "text-xs",
        }
    }

    /// Parse a token spelling. Returns `None` for anything outside the set.
    pub fn from_token(token: &str) -> Option<Self> {
        TextScale::ALL.into_iter().find(|t| t.as_str() == token)
    }

    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            TextScale::H1 | TextScale::H2 | TextScale::H3 | TextScale::H4 | TextScale::H5
        )
    }
}

impl fmt::Display for TextScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the 767px boundary the viewport is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Mobile,
    Desktop,
}

impl Breakpoint {
    /// Classify a viewport width. 767 and below is mobile, 768 and up desktop.
    pub fn from_width(width: f64) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            Breakpoint::Mobile
        } else {
            Breakpoint::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value with independent mobile and desktop settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Responsive {
    pub mobile: f64,
    pub desktop: f64,
}

impl Responsive {
    pub const fn new(mobile: f64, desktop: f64) -> Self {
        Self { mobile, desktop }
    }

    pub fn get(&self, breakpoint: Breakpoint) -> f64 {
        match breakpoint {
            Breakpoint::Mobile => self.mobile,
            Breakpoint::Desktop => self.desktop,
        }
    }

    pub fn set(&mut self, breakpoint: Breakpoint, value: f64) {
        match breakpoint {
            Breakpoint::Mobile => self.mobile = value,
            Breakpoint::Desktop => self.desktop = value,
        }
    }
}

/// One `Responsive` value per text-scale token.
///
/// A struct rather than a map: every token always has a slot, so a
/// configuration can never lose or grow tokens. Field names double as the
/// wire keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaleValues {
    pub h1: Responsive,
    pub h2: Responsive,
    pub h3: Responsive,
    pub h4: Responsive,
    pub h5: Responsive,
    #[serde(rename = "text-2xl")]
    pub text_2xl: Responsive,
    #[serde(rename = "text-xl")]
    pub text_xl: Responsive,
    #[serde(rename = "text-lg")]
    pub text_lg: Responsive,
    #[serde(rename = "text-base")]
    pub text_base: Responsive,
    #[serde(rename = "text-sm")]
    pub text_sm: Responsive,
    #[serde(rename = "text-xs")]
    pub text_xs: Responsive,
}

impl ScaleValues {
    /// Build a table from one closure call per token.
    pub fn from_fn(mut f: impl FnMut(TextScale) -> Responsive) -> Self {
        Self {
            h1: f(TextScale::H1),
            h2: f(TextScale::H2),
            h3: f(TextScale::H3),
            h4: f(TextScale::H4),
            h5: f(TextScale::H5),
            text_2xl: f(TextScale::Text2Xl),
            text_xl: f(TextScale::TextXl),
            text_lg: f(TextScale::TextLg),
            text_base: f(TextScale::TextBase),
            text_sm: f(TextScale::TextSm),
            text_xs: f(TextScale::TextXs),
        }
    }

    pub fn get(&self, token: TextScale) -> Responsive {
        match token {
            TextScale::H1 => self.h1,
            TextScale::H2 => self.h2,
            TextScale::H3 => self.h3,
            TextScale::H4 => self.h4,
            TextScale::H5 => self.h5,
            TextScale::Text2Xl => self.text_2xl,
            TextScale::TextXl => self.text_xl,
            TextScale::TextLg => self.text_lg,
            TextScale::TextBase => self.text_base,
            TextScale::TextSm => self.text_sm,
            TextScale::TextXs => self.text_xs,
        }
    }

    pub fn set(&mut self, token: TextScale, breakpoint: Breakpoint, value: f64) {
        self.slot_mut(token).set(breakpoint, value);
    }

    fn slot_mut(&mut self, token: TextScale) -> &mut Responsive {
        match token {
            TextScale::H1 => &mut self.h1,
            TextScale::H2 => &mut self.h2,
            TextScale::H3 => &mut self.h3,
            TextScale::H4 => &mut self.h4,
            TextScale::H5 => &mut self.h5,
            TextScale::Text2Xl => &mut self.text_2xl,
            TextScale::TextXl => &mut self.text_xl,
            TextScale::TextLg => &mut self.text_lg,
            TextScale::TextBase => &mut self.text_base,
            TextScale::TextSm => &mut self.text_sm,
            TextScale::TextXs => &mut self.text_xs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_spelling_round_trips() {
        for token in TextScale::ALL {
            assert_eq!(TextScale::from_token(token.as_str()), Some(token));
        }
        assert_eq!(TextScale::from_token("h6"), None);
        assert_eq!(TextScale::from_token("text-3xl"), None);
    }

    #[test]
    fn heading_and_body_partition_the_set() {
        assert!(TextScale::HEADINGS.iter().all(|t| t.is_heading()));
        assert!(TextScale::BODY.iter().all(|t| !t.is_heading()));
        assert_eq!(TextScale::HEADINGS.len() + TextScale::BODY.len(), TextScale::ALL.len());
    }

    #[test]
    fn breakpoint_boundary_sits_at_767() {
        assert_eq!(Breakpoint::from_width(320.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(767.0), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Desktop);
        assert_eq!(Breakpoint::from_width(1920.0), Breakpoint::Desktop);
    }

    #[test]
    fn set_updates_only_the_addressed_slot() {
        let mut values = ScaleValues::from_fn(|_| Responsive::new(1.0, 2.0));
        values.set(TextScale::H1, Breakpoint::Desktop, 60.0);

        assert_eq!(values.get(TextScale::H1).desktop, 60.0);
        assert_eq!(values.get(TextScale::H1).mobile, 1.0);
        for token in TextScale::ALL.into_iter().skip(1) {
            assert_eq!(values.get(token), Responsive::new(1.0, 2.0));
        }
    }

    #[test]
    fn serializes_under_token_spellings() {
        let values = ScaleValues::from_fn(|_| Responsive::new(1.0, 1.2));
        let json = serde_json::to_value(&values).unwrap();
        for token in TextScale::ALL {
            assert!(json.get(token.as_str()).is_some(), "missing key {token}");
        }
        assert_eq!(json["text-2xl"]["desktop"], 1.2);
    }
}
