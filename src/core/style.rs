//! Dance styles and the color palette shared by every renderer

use serde::{Deserialize, Serialize};
use std::fmt;

/// An sRGB color, parsed from `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Per-channel integer average of two colors
    pub fn blend(self, other: Color) -> Color {
        let mid = |a: u8, b: u8| ((a as u16 + b as u16) / 2) as u8;
        Color::rgb(mid(self.r, other.r), mid(self.g, other.g), mid(self.b, other.b))
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Dance styles a move can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    Latin,
    Ballroom,
    Classical,
    Jazz,
    Street,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::Latin,
        Style::Ballroom,
        Style::Classical,
        Style::Jazz,
        Style::Street,
    ];

    /// Case-sensitive lookup, matching how the CSV spells styles
    pub fn from_name(name: &str) -> Option<Self> {
        Style::ALL.into_iter().find(|s| s.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Style::Latin => "Latin",
            Style::Ballroom => "Ballroom",
            Style::Classical => "Classical",
            Style::Jazz => "Jazz",
            Style::Street => "Street",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Style::Latin => Color::rgb(0xFF, 0x6B, 0x6B),
            Style::Ballroom => Color::rgb(0x6B, 0x5B, 0x95),
            Style::Classical => Color::rgb(0x8F, 0xB9, 0x96),
            Style::Jazz => Color::rgb(0xE9, 0xC4, 0x6A),
            Style::Street => Color::rgb(0x45, 0x7B, 0x9D),
        }
    }
}

/// Header color for styleless moves on printed sheets (contrasts with white text)
pub const STYLELESS_PRINT: Color = Color::rgb(0xB8, 0xB8, 0xB8);
/// Header color for styleless moves on sprite sheets
pub const STYLELESS_SPRITE: Color = Color::rgb(0xFA, 0xF8, 0xF3);

/// The `style` column of a move: empty, one style, or a slash-separated pair
///
/// Names are kept verbatim so that a misspelled style still prints as
/// written; it only loses its color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleSpec {
    None,
    Single(String),
    Dual(String, String),
}

impl StyleSpec {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return StyleSpec::None;
        }
        let mut parts = raw.split('/').map(str::trim);
        match (parts.next(), parts.next()) {
            (Some(first), Some(second)) => StyleSpec::Dual(first.to_string(), second.to_string()),
            _ => StyleSpec::Single(raw.to_string()),
        }
    }

    /// Text shown in the card's Style row
    pub fn display_name(&self) -> String {
        match self {
            StyleSpec::None => "Basic".to_string(),
            StyleSpec::Single(name) => name.clone(),
            StyleSpec::Dual(a, b) => format!("{a}/{b}"),
        }
    }

    /// CSS `background` value for the printed header
    pub fn css_background(&self) -> String {
        match self {
            StyleSpec::None => format!("background-color: {STYLELESS_PRINT};"),
            StyleSpec::Single(name) => {
                format!("background-color: {};", lookup(name, STYLELESS_PRINT))
            }
            StyleSpec::Dual(a, b) => format!(
                "background: linear-gradient(135deg, {} 0%, {} 100%);",
                lookup(a, STYLELESS_PRINT),
                lookup(b, STYLELESS_PRINT)
            ),
        }
    }

    /// Solid header color for sprite sheets; dual styles are averaged
    pub fn sprite_color(&self) -> Color {
        match self {
            StyleSpec::None => STYLELESS_SPRITE,
            StyleSpec::Single(name) => lookup(name, STYLELESS_SPRITE),
            StyleSpec::Dual(a, b) => {
                lookup(a, STYLELESS_SPRITE).blend(lookup(b, STYLELESS_SPRITE))
            }
        }
    }
}

fn lookup(name: &str, fallback: Color) -> Color {
    Style::from_name(name).map(Style::color).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_displays_as_hex() {
        assert_eq!(Style::Street.color().to_string(), "#457B9D");
        assert_eq!(Color::rgb(0x0A, 0xB0, 0x0C).to_string(), "#0AB00C");
    }

    #[test]
    fn test_parse_style_spec() {
        assert_eq!(StyleSpec::parse(""), StyleSpec::None);
        assert_eq!(StyleSpec::parse("  "), StyleSpec::None);
        assert_eq!(StyleSpec::parse("Jazz"), StyleSpec::Single("Jazz".into()));
        assert_eq!(
            StyleSpec::parse("Latin / Street"),
            StyleSpec::Dual("Latin".into(), "Street".into())
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(StyleSpec::None.display_name(), "Basic");
        assert_eq!(StyleSpec::parse("Latin/Jazz").display_name(), "Latin/Jazz");
    }

    #[test]
    fn test_css_background() {
        assert_eq!(
            StyleSpec::parse("Latin").css_background(),
            "background-color: #FF6B6B;"
        );
        assert_eq!(
            StyleSpec::parse("Latin/Ballroom").css_background(),
            "background: linear-gradient(135deg, #FF6B6B 0%, #6B5B95 100%);"
        );
        assert_eq!(
            StyleSpec::parse("Disco").css_background(),
            "background-color: #B8B8B8;"
        );
    }

    #[test]
    fn test_sprite_color_blends_dual_styles() {
        // (0xFF + 0x45) / 2 = 0xA2, (0x6B + 0x7B) / 2 = 0x73, (0x6B + 0x9D) / 2 = 0x84
        assert_eq!(
            StyleSpec::parse("Latin/Street").sprite_color(),
            Color::rgb(0xA2, 0x73, 0x84)
        );
        assert_eq!(StyleSpec::None.sprite_color(), STYLELESS_SPRITE);
    }
}
