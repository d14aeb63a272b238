//! Visual configuration for [`crate::slide_confirm::SlideConfirm`].
//!
//! ## Usage
//!
//! Build a [`SlideConfirmStyle`] once per control with the builder setters and
//! hand it to the control. The component never mutates it.
//!
//! ```
//! use slide_confirm::{Color, Dp, IndicatorShape, SlideConfirmStyle, TextAlignment};
//!
//! let style = SlideConfirmStyle::default()
//!     .indicator_size(Dp(52.0))
//!     .indicator_shape(IndicatorShape::Rectangular {
//!         corner_radius: Dp(12.0),
//!     })
//!     .indicator_color(Color::from_rgb_u8(52, 199, 89))
//!     .text_alignment(TextAlignment::GlobalCenter);
//!
//! // The background follows the indicator color unless it is set explicitly.
//! assert_eq!(
//!     style.background_color(),
//!     Color::from_rgb_u8(52, 199, 89).with_alpha(0.3)
//! );
//! ```
use derive_setters::Setters;

use crate::{Color, Dp};

/// Default values for [`SlideConfirmStyle`].
pub struct SlideConfirmDefaults;

impl SlideConfirmDefaults {
    /// Default indicator side length, which is also the track height.
    pub const INDICATOR_SIZE: Dp = Dp(60.0);
    /// Default inset between the indicator and the track edge.
    pub const INDICATOR_SPACING: Dp = Dp(5.0);
    /// Alpha applied to the indicator color to derive the track background.
    pub const BACKGROUND_ALPHA: f32 = 0.3;
    /// Alpha multiplier applied to the whole palette while disabled.
    pub const DISABLED_ALPHA: f32 = 0.6;
    /// Default enabled icon.
    pub const INDICATOR_ICON: &'static str = "chevron.right";
    /// Default disabled icon.
    pub const INDICATOR_DISABLED_ICON: &'static str = "xmark";
}

/// Shape of the draggable indicator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorShape {
    /// A circle, and a capsule-shaped track.
    #[default]
    Circular,
    /// A rounded rectangle, and a track with the same corner radius.
    Rectangular {
        /// Corner radius of the indicator.
        corner_radius: Dp,
    },
}

impl IndicatorShape {
    /// Resolves the corner radius for an indicator of `size`.
    pub fn corner_radius(self, size: Dp) -> Dp {
        match self {
            IndicatorShape::Circular => size.half(),
            IndicatorShape::Rectangular { corner_radius } => corner_radius,
        }
    }

    /// Resolves the corner radius of the track that hosts the indicator.
    ///
    /// The track keeps the indicator's curvature concentric by growing the
    /// radius by `spacing`.
    pub fn track_corner_radius(self, size: Dp, spacing: Dp) -> Dp {
        match self {
            IndicatorShape::Circular => (size + spacing * 2.0).half(),
            IndicatorShape::Rectangular { corner_radius } => corner_radius + spacing,
        }
    }
}

/// Where the label sits on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlignment {
    /// Leading edge of the region after the resting indicator.
    Leading,
    /// Center of the region after the resting indicator.
    #[default]
    Center,
    /// Trailing edge of the track.
    Trailing,
    /// Center of the whole track, ignoring the indicator.
    GlobalCenter,
}

/// Identifier of an icon, resolved by the host (for example a symbol name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Icon(pub String);

impl Icon {
    /// Creates an icon identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the identifier.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Icon {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Immutable visual parameters of a slide control.
#[derive(Debug, Clone, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SlideConfirmStyle {
    /// Side length of the indicator and height of the track.
    pub indicator_size: Dp,
    /// Inset between the indicator and the track edge.
    pub indicator_spacing: Dp,
    /// Shape of the indicator.
    pub indicator_shape: IndicatorShape,
    /// Fill color of the indicator.
    pub indicator_color: Color,
    /// Explicit track color. When `None`, [`Self::background_color`] derives
    /// it from `indicator_color`.
    #[setters(skip)]
    pub background_color: Option<Color>,
    /// Label color.
    pub text_color: Color,
    /// Icon shown on the indicator while enabled.
    #[setters(into)]
    pub indicator_icon: Icon,
    /// Icon shown on the indicator while disabled.
    #[setters(into)]
    pub indicator_disabled_icon: Icon,
    /// Label placement.
    pub text_alignment: TextAlignment,
    /// Fade the label out as the indicator travels.
    pub text_fades_opacity: bool,
    /// Hide the part of the label the indicator has passed.
    pub text_hidden_behind_indicator: bool,
    /// Shimmer the label while the control is at rest.
    pub text_shimmers: bool,
    /// Brightness delta applied to the indicator while enabled.
    pub indicator_brightness: f32,
}

impl Default for SlideConfirmStyle {
    fn default() -> Self {
        Self {
            indicator_size: SlideConfirmDefaults::INDICATOR_SIZE,
            indicator_spacing: SlideConfirmDefaults::INDICATOR_SPACING,
            indicator_shape: IndicatorShape::default(),
            indicator_color: Color::SYSTEM_BLUE,
            background_color: None,
            text_color: Color::SECONDARY_GRAY,
            indicator_icon: Icon::new(SlideConfirmDefaults::INDICATOR_ICON),
            indicator_disabled_icon: Icon::new(SlideConfirmDefaults::INDICATOR_DISABLED_ICON),
            text_alignment: TextAlignment::default(),
            text_fades_opacity: true,
            text_hidden_behind_indicator: true,
            text_shimmers: false,
            indicator_brightness: 0.0,
        }
    }
}

/// Colors resolved for one enabled/disabled state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedColors {
    /// Indicator fill.
    pub indicator: Color,
    /// Track fill.
    pub background: Color,
    /// Label color.
    pub text: Color,
    /// Color of the icon drawn on the indicator.
    pub icon: Color,
}

impl SlideConfirmStyle {
    /// Sets an explicit track color instead of deriving it.
    pub fn background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Returns the track color: the explicit one, or the indicator color at
    /// [`SlideConfirmDefaults::BACKGROUND_ALPHA`].
    pub fn background_color(&self) -> Color {
        let derived = self.indicator_color.scale_alpha(SlideConfirmDefaults::BACKGROUND_ALPHA);
        self.background_color.unwrap_or(derived)
    }

    /// Returns the icon for the given enabled state.
    pub fn icon(&self, enabled: bool) -> &Icon {
        if enabled {
            &self.indicator_icon
        } else {
            &self.indicator_disabled_icon
        }
    }

    /// Resolves the palette for the given enabled state.
    pub fn resolve_colors(&self, enabled: bool) -> ResolvedColors {
        if enabled {
            return ResolvedColors {
                indicator: self.indicator_color.with_brightness(self.indicator_brightness),
                background: self.background_color(),
                text: self.text_color,
                icon: Color::WHITE,
            };
        }

        let dim = |color: Color| {
            color
                .desaturate()
                .scale_alpha(SlideConfirmDefaults::DISABLED_ALPHA)
        };
        ResolvedColors {
            indicator: dim(self.indicator_color),
            background: dim(self.background_color()),
            text: dim(self.text_color),
            icon: Color::WHITE.scale_alpha(SlideConfirmDefaults::DISABLED_ALPHA),
        }
    }
}
