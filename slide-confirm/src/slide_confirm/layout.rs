use crate::style::{SlideConfirmStyle, TextAlignment};

/// Geometry of one measured slide control, in leading-relative dp.
///
/// The indicator occupies an `indicator_size` square cell; the visible knob
/// is that cell inset by `spacing` on every side. Offsets are the knob's
/// leading edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideLayout {
    /// Measured track width.
    pub track_width: f32,
    /// Indicator cell size, also the track height.
    pub indicator_size: f32,
    /// Inset between the knob and the track edge.
    pub spacing: f32,
}

/// Horizontal anchor of the label inside its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAnchor {
    /// Hug the leading edge.
    Start,
    /// Center.
    Center,
    /// Hug the trailing edge.
    End,
}

/// Region the label is laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelFrame {
    /// Leading edge of the region.
    pub x: f32,
    /// Width of the region, never negative.
    pub width: f32,
    /// How the label is anchored inside the region.
    pub anchor: LabelAnchor,
}

impl SlideLayout {
    /// Resolves the layout of `style` on a track `track_width` wide.
    pub fn new(style: &SlideConfirmStyle, track_width: f32) -> Self {
        Self {
            track_width,
            indicator_size: style.indicator_size.to_f32(),
            spacing: style.indicator_spacing.to_f32(),
        }
    }

    /// Resting offset of the knob.
    pub fn min_offset(&self) -> f32 {
        self.spacing
    }

    /// Fully slid offset of the knob. Never below [`Self::min_offset`].
    pub fn max_offset(&self) -> f32 {
        (self.track_width - self.indicator_size + self.spacing).max(self.min_offset())
    }

    /// Clamps a raw leading-relative translation into the knob's travel.
    pub fn clamp_offset(&self, raw: f32) -> f32 {
        if raw.is_nan() {
            return self.min_offset();
        }
        raw.clamp(self.min_offset(), self.max_offset())
    }

    /// Distance the knob can travel.
    pub fn travel(&self) -> f32 {
        self.track_width - self.indicator_size
    }

    /// Translation past which a released drag confirms.
    pub fn confirm_threshold(&self) -> f32 {
        self.track_width - self.indicator_size - 2.0 * self.spacing
    }

    /// Decides whether a released drag confirms.
    ///
    /// `translation` and `predicted` are leading-relative. A drag confirms
    /// when either overshoots the track or the literal translation carries
    /// the knob to the far edge.
    pub fn confirms(&self, translation: f32, predicted: Option<f32>) -> bool {
        translation > self.track_width
            || predicted.is_some_and(|predicted| predicted > self.track_width)
            || translation > self.confirm_threshold()
    }

    /// Fraction of the travel covered by a knob at `offset`, in `[0, 1]`.
    ///
    /// Unmeasured or too narrow tracks report `0`.
    pub fn progress(&self, offset: f32) -> f32 {
        let travel = self.travel();
        if travel <= 0.0 || !travel.is_finite() {
            return 0.0;
        }
        let progress = (offset - self.spacing) / travel;
        if progress.is_nan() {
            return 0.0;
        }
        progress.clamp(0.0, 1.0)
    }

    /// Side of the visible knob.
    pub fn knob_size(&self) -> f32 {
        (self.indicator_size - 2.0 * self.spacing).max(0.0)
    }

    /// Whether a leading-relative x lands on the knob at `offset`.
    pub fn knob_contains(&self, offset: f32, x: f32) -> bool {
        x >= offset && x <= offset + self.knob_size()
    }

    /// Width of the label strip hidden behind a knob at `offset`.
    pub fn hidden_label_width(&self, offset: f32) -> f32 {
        (offset + self.indicator_size / 2.0).max(0.0)
    }

    /// Region the label is laid out in for `alignment`.
    pub fn label_frame(&self, alignment: TextAlignment) -> LabelFrame {
        let after_indicator = |anchor| LabelFrame {
            x: self.indicator_size,
            width: (self.track_width - self.indicator_size).max(0.0),
            anchor,
        };
        match alignment {
            TextAlignment::Leading => after_indicator(LabelAnchor::Start),
            TextAlignment::Center => after_indicator(LabelAnchor::Center),
            TextAlignment::Trailing => after_indicator(LabelAnchor::End),
            TextAlignment::GlobalCenter => LabelFrame {
                x: 0.0,
                width: self.track_width.max(0.0),
                anchor: LabelAnchor::Center,
            },
        }
    }
}
