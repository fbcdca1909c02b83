//! The selectable font list.
//!
//! All families are Google-hosted. The list is passed into the editor panel
//! as a prop; nothing validates a configuration's fonts against it, so
//! documents saved with families outside this list still load.

/// A selectable font: display name plus the CSS family the loader requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontOption {
    pub name: &'static str,
    pub family: &'static str,
}

const fn font(name: &'static str, family: &'static str) -> FontOption {
    FontOption { name, family }
}

/// Default selection for both heading and body text.
pub const DEFAULT_FONT: &str = "Roboto";

pub const GOOGLE_FONTS: &[FontOption] = &[
    font("Roboto", "Roboto"),
    font("Open Sans", "Open Sans"),
    font("Lato", "Lato"),
    font("Montserrat", "Montserrat"),
    font("Oswald", "Oswald"),
    font("Raleway", "Raleway"),
    font("Poppins", "Poppins"),
    font("Inter", "Inter"),
    font("Nunito", "Nunito"),
    font("Work Sans", "Work Sans"),
    font("Rubik", "Rubik"),
    font("Karla", "Karla"),
    font("DM Sans", "DM Sans"),
    font("Space Grotesk", "Space Grotesk"),
    font("Merriweather", "Merriweather"),
    font("Playfair Display", "Playfair Display"),
    font("Lora", "Lora"),
    font("PT Serif", "PT Serif"),
    font("Source Serif 4", "Source Serif 4"),
    font("Ubuntu", "Ubuntu"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_font_is_listed_first() {
        assert_eq!(GOOGLE_FONTS[0].family, DEFAULT_FONT);
    }

    #[test]
    fn families_are_unique() {
        for (i, a) in GOOGLE_FONTS.iter().enumerate() {
            for b in &GOOGLE_FONTS[i + 1..] {
                assert_ne!(a.family, b.family);
            }
        }
    }
}
