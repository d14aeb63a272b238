//! Host-provided environment of a slide control.
//!
//! ## Usage
//!
//! Hosts keep one [`Environment`] per rendered control up to date with the
//! measured track width, the inherited enabled flag, and the layout
//! direction, and pass it to every gesture and render call.

/// Horizontal layout direction inherited from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    /// Left-to-right layout; the indicator slides rightwards.
    #[default]
    LeftToRight,
    /// Right-to-left layout; the indicator slides leftwards.
    RightToLeft,
}

impl LayoutDirection {
    /// Returns `true` for right-to-left layouts.
    pub fn is_mirrored(self) -> bool {
        matches!(self, LayoutDirection::RightToLeft)
    }

    /// Converts a physical horizontal delta into a leading-relative one.
    pub fn leading_delta(self, delta: f32) -> f32 {
        if self.is_mirrored() { -delta } else { delta }
    }
}

/// Measured size and inherited flags for one rendered control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// Measured width of the track in dp. Zero until the host has measured.
    pub track_width: f32,
    /// Whether the control accepts interaction.
    pub enabled: bool,
    /// Inherited layout direction.
    pub layout_direction: LayoutDirection,
}

impl Environment {
    /// An enabled, left-to-right environment with the given track width.
    pub fn new(track_width: f32) -> Self {
        Self {
            track_width,
            enabled: true,
            layout_direction: LayoutDirection::LeftToRight,
        }
    }

    /// Returns a copy with the enabled flag replaced.
    pub fn enabled(self, enabled: bool) -> Self {
        Self { enabled, ..self }
    }

    /// Returns a copy with the layout direction replaced.
    pub fn layout_direction(self, layout_direction: LayoutDirection) -> Self {
        Self {
            layout_direction,
            ..self
        }
    }

    /// Converts a physical x coordinate inside the track into a
    /// leading-relative one.
    pub fn leading_x(&self, x: f32) -> f32 {
        if self.layout_direction.is_mirrored() {
            self.track_width - x
        } else {
            x
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(0.0)
    }
}
