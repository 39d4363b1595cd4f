//! Hex colors, chart color schemes, and the named palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a `#RRGGBB` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}' (expected #RRGGBB)")]
pub struct ParseColorError(pub String);

/// An opaque 24-bit color, serialized as `#RRGGBB`.
///
/// ```rust
/// use wavesculpt_config::Rgb;
///
/// let c: Rgb = "#00ff7F".parse().unwrap();
/// assert_eq!(c, Rgb::new(0, 255, 127));
/// assert_eq!(c.to_string(), "#00FF7F");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]`.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Background and polarity colors for a project's charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Chart background.
    #[serde(default = "default_background")]
    pub background: Rgb,
    /// Non-negative polarity.
    #[serde(default = "default_positive")]
    pub positive: Rgb,
    /// Negative polarity.
    #[serde(default = "default_negative")]
    pub negative: Rgb,
}

fn default_background() -> Rgb {
    Rgb::new(0x00, 0x00, 0x00)
}

fn default_positive() -> Rgb {
    Rgb::new(0x00, 0xFF, 0x00)
}

fn default_negative() -> Rgb {
    Rgb::new(0x00, 0xFF, 0xFF)
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            background: default_background(),
            positive: default_positive(),
            negative: default_negative(),
        }
    }
}

/// A palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    /// Display name.
    pub name: &'static str,
    /// Color value.
    pub color: Rgb,
}

const fn named(name: &'static str, r: u8, g: u8, b: u8) -> NamedColor {
    NamedColor {
        name,
        color: Rgb::new(r, g, b),
    }
}

const PALETTE: [NamedColor; 22] = [
    named("Black", 0x00, 0x00, 0x00),
    named("Vibrant Green", 0x00, 0xFF, 0x00),
    named("Electric Cyan", 0x00, 0xFF, 0xFF),
    named("Neon Magenta", 0xFF, 0x00, 0xFF),
    named("Laser Lemon", 0xFF, 0xFF, 0x66),
    named("Screamin' Green", 0x66, 0xFF, 0x66),
    named("Hot Pink", 0xFF, 0x69, 0xB4),
    named("Electric Blue", 0x00, 0x00, 0xFF),
    named("Vivid Red", 0xFF, 0x00, 0x00),
    named("Fluorescent Pink", 0xFF, 0x14, 0x93),
    named("Deep Sky Blue", 0x00, 0xBF, 0xFF),
    named("Vivid Violet", 0x9F, 0x00, 0xFF),
    named("Electric Lime", 0xCC, 0xFF, 0x00),
    named("Neon Orange", 0xFF, 0x45, 0x00),
    named("Bright Yellow", 0xFF, 0xFF, 0x00),
    named("Neon Green", 0x39, 0xFF, 0x14),
    named("Electric Indigo", 0x6F, 0x00, 0xFF),
    named("Vivid Turquoise", 0x00, 0xCE, 0xD1),
    named("Electric Teal", 0x00, 0xFF, 0xEF),
    named("Ultra Violet", 0x7F, 0x00, 0xFF),
    named("Radical Red", 0xFF, 0x35, 0x5E),
    named("Fluorescent Magenta", 0xFF, 0x00, 0xFF),
];

/// The named colors offered to users when picking a scheme.
pub fn palette() -> &'static [NamedColor] {
    &PALETTE
}

/// Case-insensitive lookup by palette name.
pub fn lookup_color(name: &str) -> Option<Rgb> {
    PALETTE
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
        .map(|c| c.color)
}
