//! Plain-data view tree of a slide control.
//!
//! ## Usage
//!
//! Call [`crate::SlideConfirm::view`] whenever the controller or the measured
//! track width changes and translate the returned [`SlideConfirmView`] into
//! the host toolkit's primitives, directly or through a [`ViewRenderer`].
//!
//! All x coordinates are leading-relative. When [`SlideConfirmView::mirrored`]
//! is set, use [`SlideConfirmView::physical_x`] to flip them.

use crate::{
    color::Color,
    environment::Environment,
    slide_confirm::{LabelFrame, LabelScope, Phase, SlideConfirmController, SlideLayout},
    style::{Icon, SlideConfirmStyle},
};

/// Turns a view tree into toolkit output.
pub trait ViewRenderer<L> {
    /// What the renderer produces.
    type Output;

    /// Renders one frame of the control.
    fn render(&mut self, view: &SlideConfirmView<'_, L>) -> Self::Output;
}

/// The full-width background the indicator slides across.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackNode {
    /// Width of the track.
    pub width: f32,
    /// Height of the track.
    pub height: f32,
    /// Fill color.
    pub color: Color,
    /// Corner radius.
    pub corner_radius: f32,
}

/// What the indicator shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorContent<'a> {
    /// A directional or disabled icon.
    Icon(&'a Icon),
    /// A progress spinner, while the action is in flight.
    Spinner,
}

/// The draggable handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorNode<'a> {
    /// Leading edge of the knob.
    pub x: f32,
    /// Top edge of the knob.
    pub y: f32,
    /// Side of the knob.
    pub size: f32,
    /// Fill color.
    pub color: Color,
    /// Corner radius.
    pub corner_radius: f32,
    /// Icon or spinner.
    pub content: IndicatorContent<'a>,
    /// Color of the icon or spinner.
    pub content_color: Color,
}

/// Part of the label hidden behind the indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelMask {
    /// Width, from the leading edge of the track, over which the label is
    /// hidden.
    pub hidden_width: f32,
}

/// The label and how to draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelNode<'a, L> {
    /// The caller's label.
    pub content: &'a L,
    /// Region the label is laid out in.
    pub frame: LabelFrame,
    /// Label color.
    pub color: Color,
    /// Opacity to apply to the label.
    pub opacity: f32,
    /// Fraction of the travel covered by the indicator.
    pub progress: f32,
    /// Reveal mask, when the label hides behind the indicator.
    pub mask: Option<LabelMask>,
    /// Whether the label should shimmer.
    pub shimmer: bool,
}

impl<L> LabelNode<'_, L> {
    /// Scope handed to custom labels.
    pub fn scope(&self, enabled: bool) -> LabelScope {
        LabelScope {
            progress: self.progress,
            opacity: self.opacity,
            enabled,
        }
    }
}

/// One frame of a slide control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideConfirmView<'a, L> {
    /// Phase the frame was built for.
    pub phase: Phase,
    /// Whether the control accepts interaction.
    pub enabled: bool,
    /// Whether leading-relative coordinates must be flipped.
    pub mirrored: bool,
    /// Track node.
    pub track: TrackNode,
    /// Label node, drawn above the track.
    pub label: LabelNode<'a, L>,
    /// Indicator node, drawn above the label.
    pub indicator: IndicatorNode<'a>,
}

impl<L> SlideConfirmView<'_, L> {
    /// Converts the leading edge `x` of an element `width` wide into a
    /// physical x coordinate.
    pub fn physical_x(&self, x: f32, width: f32) -> f32 {
        if self.mirrored {
            self.track.width - x - width
        } else {
            x
        }
    }
}

pub(crate) fn build_view<'a, L>(
    label: &'a L,
    style: &'a SlideConfirmStyle,
    controller: &SlideConfirmController,
    layout: &SlideLayout,
    env: &Environment,
) -> SlideConfirmView<'a, L> {
    let colors = style.resolve_colors(env.enabled);
    let phase = controller.phase();
    let offset = controller.indicator_offset(layout);
    let progress = layout.progress(offset);
    let knob = layout.knob_size();

    let content = match (env.enabled, phase) {
        (true, Phase::Completed) => IndicatorContent::Spinner,
        (enabled, _) => IndicatorContent::Icon(style.icon(enabled)),
    };

    let opacity = if style.text_fades_opacity {
        1.0 - progress
    } else {
        1.0
    };
    let mask = style.text_hidden_behind_indicator.then(|| LabelMask {
        hidden_width: layout.hidden_label_width(offset),
    });

    SlideConfirmView {
        phase,
        enabled: env.enabled,
        mirrored: env.layout_direction.is_mirrored(),
        track: TrackNode {
            width: env.track_width.max(0.0),
            height: layout.indicator_size,
            color: colors.background,
            corner_radius: style
                .indicator_shape
                .track_corner_radius(knob.into(), style.indicator_spacing)
                .to_f32(),
        },
        label: LabelNode {
            content: label,
            frame: layout.label_frame(style.text_alignment),
            color: colors.text,
            opacity,
            progress,
            mask,
            shimmer: style.text_shimmers && env.enabled && phase == Phase::Idle,
        },
        indicator: IndicatorNode {
            x: offset,
            y: layout.spacing,
            size: knob,
            color: colors.indicator,
            corner_radius: style.indicator_shape.corner_radius(knob.into()).to_f32(),
            content,
            content_color: colors.icon,
        },
    }
}
