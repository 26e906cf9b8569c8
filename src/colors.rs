//! RGBA color codec.
//!
//! Converts between [`Color`] and:
//! - hex color codes (`rgb`, `rgba`, `rrggbb`, `rrggbbaa`, optional `#`/`0x`)
//! - the canonical `#RRGGBBAA` form
//! - legacy space-separated color descriptors
//! - ratatui and owo-colors terminal colors (`terminal` feature)

use once_cell::sync::Lazy;
#[cfg(feature = "terminal")]
use ratatui::style::Color as RatatuiColor;
use regex::Regex;
use std::{
    borrow::Cow,
    fmt::{self, Display},
    str::FromStr,
};

use crate::{
    error::{HexhueError, HexhueResult},
    text::TextExt,
};

/// Hex color code somewhere in the input, bounded by word boundaries
static HEX_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(0X|#)?([0-9A-F]{3,4}|[0-9A-F]{6}|[0-9A-F]{8})\b")
        .expect("Failed to compile hex token regex")
});

/// Hex color code spanning the whole input
static HEX_WHOLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0X|#)?([0-9A-F]{3,4}|[0-9A-F]{6}|[0-9A-F]{8})$")
        .expect("Failed to compile hex regex")
});

/// Descriptor tag for RGB colors: `UIDeviceRGBColorSpace r g b a`
pub const RGB_COLOR_SPACE: &str = "UIDeviceRGBColorSpace";
/// Descriptor tag for grayscale colors: `UIDeviceWhiteColorSpace w a`
pub const WHITE_COLOR_SPACE: &str = "UIDeviceWhiteColorSpace";

/// Represents an RGBA color with normalized channels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::CLEAR
    }
}

impl Color {
    /// Fully transparent black
    pub const CLEAR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create a new RGB color with full opacity
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new RGBA color with specified alpha
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a gray color with every RGB channel set to `white`
    #[inline]
    pub const fn white(white: f32, a: f32) -> Self {
        Self::rgba(white, white, white, a)
    }

    /// Create a color from a packed `0xRRGGBBAA` code. Higher bits are ignored.
    pub fn from_rgba_code(code: u64) -> Self {
        Self::rgba(
            channel(code >> 24),
            channel(code >> 16),
            channel(code >> 8),
            channel(code),
        )
    }

    /// Create an opaque color from a packed `0xRRGGBB` code. Higher bits are ignored.
    pub fn from_rgb_code(code: u64) -> Self {
        Self::rgb(channel(code >> 16), channel(code >> 8), channel(code))
    }

    /// Create a color from a hexadecimal string using the default [`HexParser`]
    pub fn from_hex(hex: &str) -> HexhueResult<Self> {
        HexParser::default().parse(hex)
    }

    /// Convert to the canonical `#RRGGBBAA` representation
    pub fn to_hex(&self) -> String {
        let (r, g, b, a) = self.rgba8();
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }

    /// Create a color back from a legacy descriptor string.
    ///
    /// Never fails: unrecognized descriptors are logged and yield
    /// [`Color::CLEAR`], and malformed numbers read as `0.0`.
    pub fn from_descriptor(descriptor: &str) -> Self {
        let fields: Vec<&str> = descriptor.split(' ').collect();

        match fields.as_slice() {
            [RGB_COLOR_SPACE, r, g, b, a] => {
                return Self::rgba(
                    r.to_fail_safe_float(),
                    g.to_fail_safe_float(),
                    b.to_fail_safe_float(),
                    a.to_fail_safe_float(),
                );
            }
            [WHITE_COLOR_SPACE, w, a] => {
                return Self::white(w.to_fail_safe_float(), a.to_fail_safe_float());
            }
            [RGB_COLOR_SPACE, ..] | [WHITE_COLOR_SPACE, ..] => {
                tracing::warn!(descriptor, fields = fields.len(), "bad color format");
            }
            _ => {
                tracing::warn!(descriptor, "not an RGB or grayscale color");
            }
        }

        Self::CLEAR
    }

    /// Convert to an RGB legacy descriptor readable by [`Color::from_descriptor`]
    pub fn to_descriptor(&self) -> String {
        format!(
            "{} {} {} {} {}",
            RGB_COLOR_SPACE, self.r, self.g, self.b, self.a
        )
    }

    #[inline]
    pub fn red(&self) -> f32 {
        self.r
    }

    #[inline]
    pub fn green(&self) -> f32 {
        self.g
    }

    #[inline]
    pub fn blue(&self) -> f32 {
        self.b
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.a
    }

    /// Get the RGBA components
    pub fn rgba_components(&self) -> (f32, f32, f32, f32) {
        (self.r, self.g, self.b, self.a)
    }

    /// Get the RGBA components as bytes, clamped and rounded
    pub fn rgba8(&self) -> (u8, u8, u8, u8) {
        (
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        )
    }

    /// Get color with modified alpha
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }

    /// Component-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Color, epsilon: f32) -> bool {
        (self.r - other.r).abs() <= epsilon
            && (self.g - other.g).abs() <= epsilon
            && (self.b - other.b).abs() <= epsilon
            && (self.a - other.a).abs() <= epsilon
    }

    /// Convert to owo-colors RGB type, dropping alpha
    #[cfg(feature = "terminal")]
    pub fn to_owo_rgb(&self) -> owo_colors::Rgb {
        let (r, g, b, _) = self.rgba8();
        owo_colors::Rgb(r, g, b)
    }

    /// Convert to ratatui Color, dropping alpha
    #[cfg(feature = "terminal")]
    pub fn to_ratatui(&self) -> RatatuiColor {
        let (r, g, b, _) = self.rgba8();
        RatatuiColor::Rgb(r, g, b)
    }
}

#[inline]
fn channel(code: u64) -> f32 {
    (code & 0xFF) as f32 / 255.0
}

#[inline]
fn quantize(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// How the hex code is located in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extraction {
    /// Take the first standalone hex code, ignoring surrounding text
    #[default]
    Token,
    /// Require the trimmed input to be exactly one hex code
    Whole,
}

/// Hex color parser configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HexParser {
    extraction: Extraction,
}

impl HexParser {
    pub const fn new() -> Self {
        Self {
            extraction: Extraction::Token,
        }
    }

    /// Parser that rejects any text around the hex code
    pub const fn strict() -> Self {
        Self {
            extraction: Extraction::Whole,
        }
    }

    pub const fn with_extraction(self, extraction: Extraction) -> Self {
        Self { extraction }
    }

    pub fn extraction(&self) -> Extraction {
        self.extraction
    }

    /// Parse `hex` into a [`Color`].
    ///
    /// Shorthand codes are expanded digit by digit (`F08` is `FF0088`).
    /// Six digits give an opaque color, eight digits carry alpha last.
    pub fn parse(&self, hex: &str) -> HexhueResult<Color> {
        let invalid = || HexhueError::invalid_format(hex);

        let normalized = hex.trimmed().to_uppercase();
        let pattern = match self.extraction {
            Extraction::Token => &HEX_TOKEN_REGEX,
            Extraction::Whole => &HEX_WHOLE_REGEX,
        };
        let code = pattern.find(&normalized).ok_or_else(invalid)?.as_str();

        let digits = if code.starts_with("0X") {
            code.removing_prefix("0X")
        } else {
            code.removing_prefix("#")
        };

        let digits: Cow<'_, str> = match digits.char_len() {
            3 | 4 => digits.chars().flat_map(|c| [c, c]).collect::<String>().into(),
            _ => digits.into(),
        };

        match digits.char_len() {
            8 => {
                let value = u64::from_str_radix(&digits, 16).map_err(|_| invalid())?;
                Ok(Color::from_rgba_code(value))
            }
            6 => {
                let value = u64::from_str_radix(&digits, 16).map_err(|_| invalid())?;
                Ok(Color::from_rgb_code(value))
            }
            _ => Err(invalid()),
        }
    }
}

impl FromStr for Color {
    type Err = HexhueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = HexhueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_hex(value)
    }
}

// Implement conversion to owo-colors RGB
#[cfg(feature = "terminal")]
impl From<Color> for owo_colors::Rgb {
    fn from(color: Color) -> Self {
        color.to_owo_rgb()
    }
}

// Implement conversion to ratatui Color
#[cfg(feature = "terminal")]
impl From<Color> for RatatuiColor {
    fn from(color: Color) -> Self {
        color.to_ratatui()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
