//! The style configuration and its mutation operations.

use serde::{Deserialize, Serialize};

use crate::fonts::DEFAULT_FONT;
use crate::scale::{Breakpoint, Responsive, ScaleValues, TextScale};
use crate::store::ConfigDocument;

/// One named color in the palette.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub name: String,
    /// CSS color string. Empty until the user picks a value.
    pub value: String,
    pub primary: bool,
}

/// The full in-memory design-system configuration.
///
/// Single-owner, single-writer state: the editing panel mutates it through
/// the methods below and the preview re-derives styles from it on every
/// change. It only becomes durable through a document-store save, which
/// always mints a new document.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleConfig {
    pub colors: Vec<ColorEntry>,
    pub font_size: ScaleValues,
    pub line_height: ScaleValues,
    /// Raw numeric string from the width input, in pixels. Not validated.
    pub container_width: String,
    pub heading_font: String,
    pub body_font: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            colors: default_palette(),
            font_size: default_font_sizes(),
            line_height: default_line_heights(),
            container_width: "1536".to_string(),
            heading_font: DEFAULT_FONT.to_string(),
            body_font: DEFAULT_FONT.to_string(),
        }
    }
}

impl StyleConfig {
    /// Replace the value of the color named `name`. No-op if absent.
    pub fn set_color_value(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.colors.iter_mut().find(|c| c.name == name) {
            entry.value = value.to_string();
        }
    }

    /// Make `name` the primary color. Every other entry's flag is cleared,
    /// so a name that matches nothing leaves no primary at all.
    pub fn set_primary(&mut self, name: &str) {
        for entry in &mut self.colors {
            entry.primary = entry.name == name;
        }
    }

    /// Append a new color with an empty value.
    ///
    /// Refuses names that are blank after trimming (the stored name keeps
    /// its whitespace) and names already present in the palette, so the
    /// name-addressed operations above stay unambiguous.
    pub fn add_color(&mut self, name: &str) {
        if name.trim().is_empty() {
            return;
        }
        if self.colors.iter().any(|c| c.name == name) {
            return;
        }
        self.colors.push(ColorEntry {
            name: name.to_string(),
            value: String::new(),
            primary: false,
        });
    }

    /// Remove any entry named `name`.
    pub fn remove_color(&mut self, name: &str) {
        self.colors.retain(|c| c.name != name);
    }

    pub fn primary_color(&self) -> Option<&ColorEntry> {
        self.colors.iter().find(|c| c.primary)
    }

    /// Set one font-size slot. The value arrives already coerced to `f64`;
    /// unparsable input shows up here as `NaN` and is stored as-is.
    pub fn set_font_size(&mut self, token: TextScale, breakpoint: Breakpoint, value: f64) {
        self.font_size.set(token, breakpoint, value);
    }

    /// Set one line-height slot. Same coercion contract as `set_font_size`.
    pub fn set_line_height(&mut self, token: TextScale, breakpoint: Breakpoint, value: f64) {
        self.line_height.set(token, breakpoint, value);
    }

    /// Store the raw width string from the input, unvalidated.
    pub fn set_container_width(&mut self, raw: impl Into<String>) {
        self.container_width = raw.into();
    }

    pub fn set_heading_font(&mut self, family: impl Into<String>) {
        self.heading_font = family.into();
    }

    pub fn set_body_font(&mut self, family: impl Into<String>) {
        self.body_font = family.into();
    }

    /// Overwrite this configuration from a loaded document.
    ///
    /// Colors and both scale tables are always taken from the document.
    /// Container width and the two fonts are optional on stored documents;
    /// when absent the current in-memory selection stays untouched.
    pub fn apply_document(&mut self, doc: ConfigDocument) {
        self.colors = doc.colors;
        self.font_size = doc.font_size;
        self.line_height = doc.line_height;
        if let Some(width) = doc.container_width {
            self.container_width = width;
        }
        if let Some(family) = doc.heading_font {
            self.heading_font = family;
        }
        if let Some(family) = doc.body_font {
            self.body_font = family;
        }
    }
}

fn color(name: &str, value: &str, primary: bool) -> ColorEntry {
    ColorEntry {
        name: name.to_string(),
        value: value.to_string(),
        primary,
    }
}

/// The neutral ramp plus a handful of accents; Charcoal starts as primary.
fn default_palette() -> Vec<ColorEntry> {
    vec![
        color("50", "#fafafa", false),
        color("100", "#f5f5f5", false),
        color("200", "#e5e5e5", false),
        color("300", "#d4d4d4", false),
        color("400", "#a1a1aa", false),
        color("500", "#737373", false),
        color("600", "#525252", false),
        color("700", "#404040", false),
        color("800", "#262626", false),
        color("900", "#171717", false),
        color("950", "#0a0a0a", false),
        color("Honeydew", "#F1FFE7", false),
        color("Light green", "#A9FDAC", false),
        color("Emerald", "#44CF6C", false),
        color("Zomp", "#32A287", false),
        color("Charcoal", "#383F51", true),
    ]
}

fn default_font_sizes() -> ScaleValues {
    ScaleValues {
        h1: Responsive::new(32.0, 48.0),
        h2: Responsive::new(24.0, 36.0),
        h3: Responsive::new(18.0, 24.0),
        h4: Responsive::new(16.0, 20.0),
        h5: Responsive::new(14.0, 18.0),
        text_2xl: Responsive::new(24.0, 28.0),
        text_xl: Responsive::new(20.0, 24.0),
        text_lg: Responsive::new(18.0, 20.0),
        text_base: Responsive::new(16.0, 18.0),
        text_sm: Responsive::new(14.0, 16.0),
        text_xs: Responsive::new(12.0, 14.0),
    }
}

fn default_line_heights() -> ScaleValues {
    ScaleValues::from_fn(|_| Responsive::new(1.0, 1.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_one_primary() {
        let config = StyleConfig::default();
        assert_eq!(config.colors.len(), 16);
        assert_eq!(config.colors.iter().filter(|c| c.primary).count(), 1);
        assert_eq!(config.primary_color().unwrap().name, "Charcoal");
        assert_eq!(config.container_width, "1536");
        assert_eq!(config.heading_font, "Roboto");
        assert_eq!(config.body_font, "Roboto");
    }

    #[test]
    fn set_primary_leaves_exactly_one() {
        let mut config = StyleConfig::default();
        config.set_primary("Emerald");

        let primaries: Vec<_> = config.colors.iter().filter(|c| c.primary).collect();
        assert_eq!(primaries.len(), 1);
        assert_eq!(primaries[0].name, "Emerald");
    }

    #[test]
    fn set_primary_with_unknown_name_clears_all() {
        let mut config = StyleConfig::default();
        config.set_primary("No such color");
        assert!(config.primary_color().is_none());
    }

    #[test]
    fn set_color_value_replaces_matching_entry_only() {
        let mut config = StyleConfig::default();
        config.set_color_value("Zomp", "#000000");

        let zomp = config.colors.iter().find(|c| c.name == "Zomp").unwrap();
        assert_eq!(zomp.value, "#000000");
        let emerald = config.colors.iter().find(|c| c.name == "Emerald").unwrap();
        assert_eq!(emerald.value, "#44CF6C");
    }

    #[test]
    fn set_color_value_on_missing_name_is_a_no_op() {
        let mut config = StyleConfig::default();
        let before = config.colors.clone();
        config.set_color_value("No such color", "#ffffff");
        assert_eq!(config.colors, before);
    }

    #[test]
    fn add_color_appends_empty_non_primary_entry() {
        let mut config = StyleConfig::default();
        let before = config.colors.len();
        config.add_color("Foo");

        assert_eq!(config.colors.len(), before + 1);
        let added = config.colors.last().unwrap();
        assert_eq!(added.name, "Foo");
        assert_eq!(added.value, "");
        assert!(!added.primary);
    }

    #[test]
    fn add_color_ignores_blank_names() {
        let mut config = StyleConfig::default();
        let before = config.colors.len();
        config.add_color("");
        config.add_color("   ");
        assert_eq!(config.colors.len(), before);
    }

    #[test]
    fn add_color_keeps_surrounding_whitespace() {
        let mut config = StyleConfig::default();
        config.add_color(" Foo ");
        assert_eq!(config.colors.last().unwrap().name, " Foo ");
    }

    #[test]
    fn add_color_rejects_duplicate_name() {
        let mut config = StyleConfig::default();
        let before = config.colors.len();
        config.add_color("Charcoal");
        assert_eq!(config.colors.len(), before);
    }

    #[test]
    fn remove_color_shrinks_by_one_when_present() {
        let mut config = StyleConfig::default();
        let before = config.colors.len();

        config.remove_color("Honeydew");
        assert_eq!(config.colors.len(), before - 1);
        assert!(config.colors.iter().all(|c| c.name != "Honeydew"));

        config.remove_color("Honeydew");
        assert_eq!(config.colors.len(), before - 1);
    }

    #[test]
    fn font_size_slots_update_independently() {
        let mut config = StyleConfig::default();
        config.set_font_size(TextScale::H1, Breakpoint::Desktop, 60.0);

        assert_eq!(config.font_size.h1.desktop, 60.0);
        assert_eq!(config.font_size.h1.mobile, 32.0);
        assert_eq!(config.line_height.h1.desktop, 1.2);
    }

    #[test]
    fn nan_input_is_stored_as_is() {
        let mut config = StyleConfig::default();
        config.set_line_height(TextScale::TextBase, Breakpoint::Mobile, f64::NAN);
        assert!(config.line_height.text_base.mobile.is_nan());
    }

    #[test]
    fn apply_document_keeps_fonts_and_width_when_absent() {
        let mut config = StyleConfig::default();
        config.set_heading_font("Oswald");
        config.set_container_width("900");

        let mut doc = ConfigDocument::from(&StyleConfig::default());
        doc.container_width = None;
        doc.heading_font = None;
        doc.body_font = None;
        config.apply_document(doc);

        assert_eq!(config.heading_font, "Oswald");
        assert_eq!(config.container_width, "900");
    }

    #[test]
    fn apply_document_overwrites_present_fields() {
        let mut config = StyleConfig::default();
        let mut other = StyleConfig::default();
        other.set_heading_font("Lora");
        other.set_font_size(TextScale::H2, Breakpoint::Mobile, 30.0);
        other.remove_color("50");

        config.apply_document(ConfigDocument::from(&other));

        assert_eq!(config.heading_font, "Lora");
        assert_eq!(config.font_size.h2.mobile, 30.0);
        assert_eq!(config.colors.len(), 15);
    }
}
