//! # Density-Independent Pixels (Dp)
//!
//! This module provides the [`Dp`] type used for every length in the slide
//! control's style and layout.
//!
//! ## Overview
//!
//! Density-independent pixels keep the control the same physical size on
//! displays with different densities. The control does all of its math in
//! dp; converting to physical pixels is the host's job, since only the host
//! knows the window's scale factor.
//!
//! ## Usage
//!
//! ```
//! use slide_confirm::Dp;
//!
//! let size = Dp(60.0);
//! let spacing = Dp(5.0);
//!
//! assert_eq!(size + spacing * 2.0, Dp(70.0));
//! assert_eq!(Dp(120.0).to_pixels_f32(2.0), 240.0);
//! ```

use std::ops::{Add, Div, Mul, Neg, Sub};

/// Density-independent pixels (dp) for UI scaling.
///
/// `Dp` wraps a single `f32`. Negative and zero values are allowed; the
/// control never validates lengths and simply produces whatever geometry the
/// numbers describe.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Dp(pub f32);

impl Dp {
    /// Zero dp.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Dp` value.
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Returns the raw dp value.
    pub const fn to_f32(self) -> f32 {
        self.0
    }

    /// Converts to physical pixels using the host's `scale_factor`.
    pub fn to_pixels_f32(self, scale_factor: f32) -> f32 {
        self.0 * scale_factor
    }

    /// Returns half of this length.
    pub fn half(self) -> Self {
        Self(self.0 / 2.0)
    }
}

impl From<f32> for Dp {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl From<Dp> for f32 {
    fn from(value: Dp) -> Self {
        value.0
    }
}

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Dp) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Dp) -> Dp {
        Dp(self.0 - rhs.0)
    }
}

impl Mul<f32> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f32) -> Dp {
        Dp(self.0 * rhs)
    }
}

impl Div<f32> for Dp {
    type Output = Dp;

    fn div(self, rhs: f32) -> Dp {
        Dp(self.0 / rhs)
    }
}

impl Neg for Dp {
    type Output = Dp;

    fn neg(self) -> Dp {
        Dp(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_arithmetic() {
        let a = Dp(10.0);
        let b = Dp(4.0);

        assert_eq!(a + b, Dp(14.0));
        assert_eq!(a - b, Dp(6.0));
        assert_eq!(a * 2.0, Dp(20.0));
        assert_eq!(a / 2.0, Dp(5.0));
        assert_eq!(-a, Dp(-10.0));
        assert_eq!(a.half(), Dp(5.0));
    }

    #[test]
    fn test_pixel_conversion() {
        assert_eq!(Dp(10.0).to_pixels_f32(3.0), 30.0);
    }
}
