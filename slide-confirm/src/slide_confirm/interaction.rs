use tracing::{debug, trace};

use crate::{
    action::{ConfirmAction, ConfirmTask},
    environment::Environment,
    haptics::{ImpactStyle, SharedHaptics},
    state::State,
};

use super::{DragEnd, Phase, SlideConfirmController, layout::SlideLayout};

/// Pointer-down at physical `x`. Starts a drag when it lands on the knob.
pub(super) fn handle_drag_start(
    state: &State<SlideConfirmController>,
    layout: &SlideLayout,
    env: &Environment,
    haptics: &SharedHaptics,
    x: f32,
) -> bool {
    if !env.enabled {
        return false;
    }

    let leading_x = env.leading_x(x);
    let on_knob = state.with(|c| layout.knob_contains(c.drag_offset, leading_x));
    if !on_knob {
        trace!(x, leading_x, "pointer down outside the indicator");
        return false;
    }

    begin_drag(state, env, haptics)
}

/// Starts a drag without hit testing.
pub(super) fn begin_drag(
    state: &State<SlideConfirmController>,
    env: &Environment,
    haptics: &SharedHaptics,
) -> bool {
    if !env.enabled {
        return false;
    }

    let started = state.with_mut(|c| {
        if c.phase != Phase::Idle {
            return false;
        }
        c.phase = Phase::Dragging;
        true
    });

    if started {
        debug!("slide drag started");
        haptics.prepare();
    }
    started
}

/// Pointer-move with the translation since the drag started.
pub(super) fn handle_drag_update(
    state: &State<SlideConfirmController>,
    layout: &SlideLayout,
    env: &Environment,
    translation: f32,
) {
    if !env.enabled {
        return;
    }

    let delta = env.layout_direction.leading_delta(translation);
    state.with_mut(|c| {
        // A late update after release must not move the completed knob.
        if c.phase != Phase::Dragging {
            return;
        }
        c.drag_offset = layout.clamp_offset(delta);
        trace!(offset = c.drag_offset, "slide drag moved");
    });
}

/// Pointer-up with the final and the optional predicted translation.
pub(super) fn handle_drag_end(
    state: &State<SlideConfirmController>,
    layout: &SlideLayout,
    env: &Environment,
    haptics: &SharedHaptics,
    action: &ConfirmAction,
    translation: f32,
    predicted: Option<f32>,
) -> DragEnd {
    if !env.enabled {
        // The host disabled the control mid-drag. Never run the action.
        return if handle_drag_cancel(state) {
            DragEnd::Cancelled
        } else {
            DragEnd::Ignored
        };
    }

    let direction = env.layout_direction;
    let translation = direction.leading_delta(translation);
    let predicted = predicted.map(|p| direction.leading_delta(p));

    let confirmed = state.with_mut(|c| {
        if c.phase != Phase::Dragging {
            return None;
        }
        c.phase = Phase::Completed;
        let confirmed = layout.confirms(translation, predicted);
        if !confirmed {
            c.reset();
        }
        Some(confirmed)
    });

    match confirmed {
        None => {
            trace!("drag end ignored outside of a drag");
            DragEnd::Ignored
        }
        Some(false) => {
            debug!(translation, ?predicted, "slide cancelled");
            haptics.impact(ImpactStyle::Light);
            DragEnd::Cancelled
        }
        Some(true) => {
            debug!(translation, ?predicted, "slide confirmed");
            haptics.impact(ImpactStyle::Light);
            DragEnd::Confirmed(launch_action(state.clone(), action, haptics.clone()))
        }
    }
}

/// Programmatic activation, used by assistive technologies.
pub(super) fn handle_activate(
    state: &State<SlideConfirmController>,
    env: &Environment,
    haptics: &SharedHaptics,
    action: &ConfirmAction,
) -> Option<ConfirmTask> {
    if !env.enabled {
        return None;
    }

    let activated = state.with_mut(|c| {
        if c.phase != Phase::Idle {
            return false;
        }
        c.phase = Phase::Completed;
        true
    });
    if !activated {
        return None;
    }

    debug!("slide activated without a drag");
    haptics.impact(ImpactStyle::Light);
    Some(launch_action(state.clone(), action, haptics.clone()))
}

/// Gesture cancelled by the host (for example stolen by a scroll view).
pub(super) fn handle_drag_cancel(state: &State<SlideConfirmController>) -> bool {
    let cancelled = state.with_mut(|c| {
        if c.phase != Phase::Dragging {
            return false;
        }
        c.reset();
        true
    });
    if cancelled {
        debug!("slide drag cancelled by host");
    }
    cancelled
}

fn launch_action(
    state: State<SlideConfirmController>,
    action: &ConfirmAction,
    haptics: SharedHaptics,
) -> ConfirmTask {
    let work = action.invoke();
    ConfirmTask::new(Box::pin(async move {
        let outcome = work.await;
        haptics.notify(outcome.into());
        state.with_mut(SlideConfirmController::reset);
        debug!(?outcome, "slide action settled");
        outcome
    }))
}
