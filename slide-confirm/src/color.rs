//! Colors used by the slide control's palette.

use std::fmt;

use thiserror::Error;

/// A color in the sRGB color space with an alpha component.
///
/// Values are stored as `f32`s, typically in the range `[0.0, 1.0]`. With the
/// `serde` feature a color is written as a `#RRGGBB` or `#RRGGBBAA` string.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

/// Error returned by [`Color::from_hex`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The string does not start with `#`.
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    /// The string has a length other than `#RRGGBB` or `#RRGGBBAA`.
    #[error("color `{input}` has {len} hex digits, expected 6 or 8")]
    InvalidLength {
        /// The rejected input.
        input: String,
        /// Number of digits after the `#`.
        len: usize,
    },
    /// A digit pair is not valid hexadecimal.
    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// The platform accent blue (`#007AFF`).
    pub const SYSTEM_BLUE: Color = Color::new(0.0, 122.0 / 255.0, 1.0, 1.0);
    /// Secondary label gray (`#8A8A8E`).
    pub const SECONDARY_GRAY: Color = Color::new(138.0 / 255.0, 138.0 / 255.0, 142.0 / 255.0, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new `Color` from four `u8` values (red, green, blue, alpha).
    #[inline]
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a new opaque `Color` from three `u8` values.
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// ```
    /// use slide_confirm::Color;
    ///
    /// assert_eq!(Color::from_hex("#FFFFFF"), Ok(Color::WHITE));
    /// assert!(Color::from_hex("FFFFFF").is_err());
    /// ```
    pub fn from_hex(input: &str) -> Result<Self, ParseColorError> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::MissingHash(input.to_string()))?;
        if !digits.is_ascii() || !matches!(digits.len(), 6 | 8) {
            return Err(ParseColorError::InvalidLength {
                input: input.to_string(),
                len: digits.chars().count(),
            });
        }

        let channel = |index: usize| {
            u8::from_str_radix(&digits[index..index + 2], 16)
                .map_err(|_| ParseColorError::InvalidDigit(input.to_string()))
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::from_rgba_u8(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Returns this color with its alpha replaced.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Returns this color with its alpha multiplied by `factor`.
    #[inline]
    pub fn scale_alpha(self, factor: f32) -> Self {
        Self {
            a: self.a * factor,
            ..self
        }
    }

    /// Adds `amount` to every color channel, clamped to `[0, 1]`.
    ///
    /// Positive values brighten, negative values darken, `0.0` is a no-op.
    pub fn with_brightness(self, amount: f32) -> Self {
        Self {
            r: (self.r + amount).clamp(0.0, 1.0),
            g: (self.g + amount).clamp(0.0, 1.0),
            b: (self.b + amount).clamp(0.0, 1.0),
            a: self.a,
        }
    }

    /// Returns the grayscale version of this color (Rec. 709 luma).
    pub fn desaturate(self) -> Self {
        let luma = 0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b;
        Self {
            r: luma,
            g: luma,
            b: luma,
            a: self.a,
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        Self::from_hex(&input)
    }
}

/// Formats as `#RRGGBB`, or `#RRGGBBAA` when not opaque.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = |channel: f32| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(f, "#{:02X}{:02X}{:02X}", byte(self.r), byte(self.g), byte(self.b))?;
        if byte(self.a) != u8::MAX {
            write!(f, "{:02X}", byte(self.a))?;
        }
        Ok(())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
