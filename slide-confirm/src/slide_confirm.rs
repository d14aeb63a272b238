//! A slide-to-confirm button.
//!
//! ## Usage
//!
//! Use for destructive or otherwise deliberate actions (unlock, pay, delete)
//! where a plain tap is too easy to trigger by accident.
//!
//! The host forwards its drag gesture to [`SlideConfirm::drag_started`],
//! [`SlideConfirm::drag_changed`] and [`SlideConfirm::drag_ended`], spawns the
//! [`ConfirmTask`] a successful slide returns, and renders
//! [`SlideConfirm::view`] every time the state or the measured width changes.
use std::sync::Arc;

use crate::{
    action::{ConfirmAction, ConfirmTask},
    environment::Environment,
    haptics::{HapticFeedback, SharedHaptics},
    render::{SlideConfirmView, build_view},
    state::State,
    style::SlideConfirmStyle,
};

use interaction::{
    begin_drag, handle_activate, handle_drag_cancel, handle_drag_end, handle_drag_start,
    handle_drag_update,
};

pub use label::{CustomLabel, LabelScope, SlideLabel};
pub use layout::{LabelAnchor, LabelFrame, SlideLayout};

mod interaction;
mod label;
mod layout;

/// Lifecycle of one slide control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// At rest, waiting for a drag.
    #[default]
    Idle,
    /// The indicator follows the pointer.
    Dragging,
    /// The slide was released; the action is in flight.
    Completed,
}

/// Result of releasing a drag.
#[derive(Debug)]
pub enum DragEnd {
    /// No drag was in progress, or the control is disabled.
    Ignored,
    /// The indicator did not travel far enough and snapped back.
    Cancelled,
    /// The slide confirmed. Spawn the task to run the action; the control
    /// returns to idle when it finishes.
    Confirmed(ConfirmTask),
}

impl DragEnd {
    /// Returns `true` for [`DragEnd::Confirmed`].
    pub fn is_confirmed(&self) -> bool {
        matches!(self, DragEnd::Confirmed(_))
    }

    /// Takes the confirm task out, if any.
    pub fn into_task(self) -> Option<ConfirmTask> {
        match self {
            DragEnd::Confirmed(task) => Some(task),
            DragEnd::Ignored | DragEnd::Cancelled => None,
        }
    }
}

/// Controller for the `slide_confirm` component.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideConfirmController {
    phase: Phase,
    drag_offset: f32,
    rest_offset: f32,
}

impl SlideConfirmController {
    /// Creates an idle controller whose indicator rests at `rest_offset`.
    pub fn new(rest_offset: f32) -> Self {
        Self {
            phase: Phase::Idle,
            drag_offset: rest_offset,
            rest_offset,
        }
    }

    /// Creates an idle controller for `style`.
    pub fn for_style(style: &SlideConfirmStyle) -> Self {
        Self::new(style.indicator_spacing.to_f32())
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last stored drag offset.
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    /// Returns `true` while at rest.
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Returns `true` while the indicator follows the pointer.
    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    /// Returns `true` while the action is in flight.
    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Offset at which the indicator is drawn for the current phase.
    pub fn indicator_offset(&self, layout: &SlideLayout) -> f32 {
        match self.phase {
            Phase::Idle => layout.min_offset(),
            Phase::Dragging => self.drag_offset,
            Phase::Completed => layout.max_offset(),
        }
    }

    /// Label progress for the current phase, in `[0, 1]`.
    pub fn label_progress(&self, layout: &SlideLayout) -> f32 {
        layout.progress(self.indicator_offset(layout))
    }

    /// Moves the resting offset. An active drag or action keeps its offset
    /// and picks the new one up on its next reset.
    pub(crate) fn set_rest_offset(&mut self, rest_offset: f32) {
        self.rest_offset = rest_offset;
        if self.phase == Phase::Idle {
            self.drag_offset = rest_offset;
        }
    }

    pub(crate) fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.drag_offset = self.rest_offset;
    }
}

impl Default for SlideConfirmController {
    fn default() -> Self {
        Self::for_style(&SlideConfirmStyle::default())
    }
}

/// A slide-to-confirm button.
///
/// `L` is the label; plain strings work out of the box and
/// [`CustomLabel`] wraps a label-producing function.
///
/// # Examples
///
/// ```
/// use slide_confirm::{ConfirmAction, DragEnd, Environment, LayoutDirection, SlideConfirm};
///
/// let button = SlideConfirm::new("Slide to delete", ConfirmAction::from_unit(|| async {}));
/// let env = Environment::new(300.0).layout_direction(LayoutDirection::RightToLeft);
///
/// // In right-to-left layouts the knob rests at the right edge and slides left.
/// assert!(button.drag_started(290.0, &env));
/// button.drag_changed(-100.0, &env);
/// assert!(matches!(button.drag_ended(-100.0, None, &env), DragEnd::Cancelled));
/// ```
pub struct SlideConfirm<L = String> {
    label: L,
    style: SlideConfirmStyle,
    action: ConfirmAction,
    haptics: SharedHaptics,
    controller: State<SlideConfirmController>,
}

impl<L: SlideLabel> SlideConfirm<L> {
    /// Creates a control with the default style and no haptics.
    pub fn new(label: L, action: ConfirmAction) -> Self {
        let style = SlideConfirmStyle::default();
        let controller = State::new(SlideConfirmController::for_style(&style));
        Self {
            label,
            style,
            action,
            haptics: SharedHaptics::default(),
            controller,
        }
    }

    /// Replaces the style. The controller's rest offset follows the new
    /// spacing without interrupting a drag or a running action.
    pub fn style(mut self, style: SlideConfirmStyle) -> Self {
        self.style = style;
        self.sync_rest_offset();
        self
    }

    /// Sets the haptic feedback capability.
    pub fn haptics(mut self, haptics: Arc<dyn HapticFeedback>) -> Self {
        self.haptics = SharedHaptics(haptics);
        self
    }

    /// Uses an externally owned controller, for hosts that keep interaction
    /// state across rebuilds of the control.
    pub fn controller_state(mut self, controller: State<SlideConfirmController>) -> Self {
        self.controller = controller;
        self.sync_rest_offset();
        self
    }

    fn sync_rest_offset(&self) {
        let rest_offset = self.style.indicator_spacing.to_f32();
        self.controller.with_mut(|c| c.set_rest_offset(rest_offset));
    }

    /// The label.
    pub fn label(&self) -> &L {
        &self.label
    }

    /// The style.
    pub fn config(&self) -> &SlideConfirmStyle {
        &self.style
    }

    /// Handle to the interaction state.
    pub fn controller(&self) -> &State<SlideConfirmController> {
        &self.controller
    }

    /// Resolves the layout for the measured track width in `env`.
    pub fn layout(&self, env: &Environment) -> SlideLayout {
        SlideLayout::new(&self.style, env.track_width)
    }

    /// Pointer-down at physical x coordinate `x` inside the track.
    ///
    /// Starts a drag when the control is enabled, idle, and `x` lands on the
    /// indicator. Returns whether the drag started.
    pub fn drag_started(&self, x: f32, env: &Environment) -> bool {
        handle_drag_start(&self.controller, &self.layout(env), env, &self.haptics, x)
    }

    /// Starts a drag without hit testing, for hosts that attach the gesture
    /// to the indicator itself.
    pub fn begin_drag(&self, env: &Environment) -> bool {
        begin_drag(&self.controller, env, &self.haptics)
    }

    /// Pointer-move. `translation` is the physical horizontal distance from
    /// the point where the drag started.
    pub fn drag_changed(&self, translation: f32, env: &Environment) {
        handle_drag_update(&self.controller, &self.layout(env), env, translation);
    }

    /// Pointer-up. `predicted` is the host's velocity-projected end
    /// translation, when its gesture system provides one.
    ///
    /// Releasing a drag after the host disabled the control cancels it.
    pub fn drag_ended(
        &self,
        translation: f32,
        predicted: Option<f32>,
        env: &Environment,
    ) -> DragEnd {
        handle_drag_end(
            &self.controller,
            &self.layout(env),
            env,
            &self.haptics,
            &self.action,
            translation,
            predicted,
        )
    }

    /// The host cancelled the gesture. Returns the control to rest without
    /// haptics or action.
    pub fn drag_cancelled(&self) -> bool {
        handle_drag_cancel(&self.controller)
    }

    /// Runs the success path without a drag. Returns `None` unless the
    /// control is enabled and idle.
    pub fn activate(&self, env: &Environment) -> Option<ConfirmTask> {
        handle_activate(&self.controller, env, &self.haptics, &self.action)
    }

    /// Builds the view tree for the current state.
    pub fn view(&self, env: &Environment) -> SlideConfirmView<'_, L> {
        let controller = self.controller.get();
        build_view(&self.label, &self.style, &controller, &self.layout(env), env)
    }
}

impl<L: std::fmt::Debug> std::fmt::Debug for SlideConfirm<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideConfirm")
            .field("label", &self.label)
            .field("style", &self.style)
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        action::ConfirmOutcome,
        environment::LayoutDirection,
        haptics::{ImpactStyle, NotificationKind},
        testing::{CountingAction, HapticEvent, RecordingHaptics},
    };

    fn scenario(
        outcome: Option<ConfirmOutcome>,
    ) -> (SlideConfirm, CountingAction, Arc<RecordingHaptics>) {
        let action = CountingAction::new(outcome);
        let haptics = Arc::new(RecordingHaptics::default());
        let button = SlideConfirm::new("Slide to confirm".to_string(), action.action())
            .haptics(haptics.clone());
        (button, action, haptics)
    }

    fn env() -> Environment {
        Environment::new(300.0)
    }

    #[test]
    fn starts_idle_at_rest() {
        let (button, _, _) = scenario(None);
        let controller = button.controller().get();
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.drag_offset(), 5.0);
        assert_eq!(controller.indicator_offset(&button.layout(&env())), 5.0);
    }

    #[test]
    fn scenario_a_long_drag_confirms() {
        let (button, action, haptics) = scenario(Some(ConfirmOutcome::Success));
        let env = env();

        assert!(button.drag_started(20.0, &env));
        button.drag_changed(250.0, &env);
        assert_eq!(button.controller().with(|c| c.drag_offset()), 245.0);

        let task = button
            .drag_ended(250.0, None, &env)
            .into_task()
            .expect("a 250dp drag confirms");
        assert!(button.controller().with(|c| c.is_completed()));
        assert_eq!(
            button.controller().with(|c| c.indicator_offset(&button.layout(&env))),
            245.0
        );

        assert_eq!(pollster::block_on(task), Some(ConfirmOutcome::Success));
        assert_eq!(action.runs(), 1);
        let controller = button.controller().get();
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.drag_offset(), 5.0);
        assert_eq!(
            haptics.events(),
            vec![
                HapticEvent::Prepare,
                HapticEvent::Impact(ImpactStyle::Light),
                HapticEvent::Notify(NotificationKind::Success),
            ]
        );
    }

    #[test]
    fn scenario_b_short_drag_cancels() {
        let (button, action, haptics) = scenario(Some(ConfirmOutcome::Success));
        let env = env();

        assert!(button.drag_started(20.0, &env));
        button.drag_changed(100.0, &env);
        assert!(matches!(
            button.drag_ended(100.0, None, &env),
            DragEnd::Cancelled
        ));

        let controller = button.controller().get();
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.drag_offset(), 5.0);
        assert_eq!(action.runs(), 0);
        assert_eq!(
            haptics.events(),
            vec![HapticEvent::Prepare, HapticEvent::Impact(ImpactStyle::Light)]
        );
    }

    #[test]
    fn scenario_c_right_to_left_mirrors_the_drag() {
        let (button, action, _) = scenario(None);
        let env = env().layout_direction(LayoutDirection::RightToLeft);

        // The knob rests at the right edge: physical x 290 is leading x 10.
        assert!(button.drag_started(290.0, &env));
        button.drag_changed(-250.0, &env);
        assert_eq!(button.controller().with(|c| c.drag_offset()), 245.0);

        let task = button.drag_ended(-250.0, None, &env).into_task();
        assert!(task.is_some());
        assert_eq!(task.map(pollster::block_on), Some(None));
        assert_eq!(action.runs(), 1);
        assert!(button.controller().with(|c| c.is_idle()));
    }

    #[test]
    fn scenario_d_unmeasured_track() {
        let (button, _, _) = scenario(None);
        let env = Environment::new(0.0);
        let controller = button.controller().get();
        assert_eq!(controller.label_progress(&button.layout(&env)), 0.0);
        assert_eq!(button.view(&env).label.progress, 0.0);
    }

    #[test]
    fn predicted_fling_confirms_short_drag() {
        let (button, action, _) = scenario(None);
        let env = env();

        assert!(button.begin_drag(&env));
        button.drag_changed(80.0, &env);
        let end = button.drag_ended(80.0, Some(420.0), &env);
        assert!(end.is_confirmed());
        let _ = end.into_task().map(pollster::block_on);
        assert_eq!(action.runs(), 1);
    }

    #[test]
    fn repeated_drag_end_runs_action_once() {
        let (button, action, _) = scenario(None);
        let env = env();

        assert!(button.begin_drag(&env));
        button.drag_changed(260.0, &env);
        let first = button.drag_ended(260.0, None, &env);
        let second = button.drag_ended(260.0, None, &env);
        assert!(first.is_confirmed());
        assert!(matches!(second, DragEnd::Ignored));

        // Neither a new drag nor activation may start while in flight.
        assert!(!button.begin_drag(&env));
        assert!(button.activate(&env).is_none());

        let _ = first.into_task().map(pollster::block_on);
        assert_eq!(action.runs(), 1);
        assert!(matches!(
            button.drag_ended(260.0, None, &env),
            DragEnd::Ignored
        ));
    }

    #[test]
    fn late_update_after_release_is_ignored() {
        let (button, _, _) = scenario(None);
        let env = env();

        assert!(button.begin_drag(&env));
        button.drag_changed(240.0, &env);
        let task = button.drag_ended(240.0, None, &env).into_task();
        button.drag_changed(10.0, &env);

        assert!(button.controller().with(|c| c.is_completed()));
        assert_eq!(button.controller().with(|c| c.drag_offset()), 240.0);
        let _ = task.map(pollster::block_on);
    }

    #[test]
    fn pointer_down_outside_knob_is_ignored() {
        let (button, _, haptics) = scenario(None);
        assert!(!button.drag_started(150.0, &env()));
        assert!(button.controller().with(|c| c.is_idle()));
        assert!(haptics.events().is_empty());
    }

    #[test]
    fn disabled_control_ignores_gestures() {
        let (button, action, haptics) = scenario(None);
        let env = env().enabled(false);

        assert!(!button.drag_started(20.0, &env));
        assert!(!button.begin_drag(&env));
        button.drag_changed(250.0, &env);
        assert!(matches!(button.drag_ended(250.0, None, &env), DragEnd::Ignored));
        assert!(button.activate(&env).is_none());
        assert!(button.controller().with(|c| c.is_idle()));
        assert_eq!(action.runs(), 0);
        assert!(haptics.events().is_empty());
    }

    #[test]
    fn failure_outcome_still_resets() {
        let (button, _, haptics) = scenario(Some(ConfirmOutcome::Failure));
        let env = env();

        let task = button.activate(&env).expect("idle control activates");
        assert!(button.controller().with(|c| c.is_completed()));
        assert_eq!(pollster::block_on(task), Some(ConfirmOutcome::Failure));
        assert!(button.controller().with(|c| c.is_idle()));
        assert_eq!(
            haptics.events().last(),
            Some(&HapticEvent::Notify(NotificationKind::Failure))
        );
    }

    #[test]
    fn host_cancel_returns_to_rest() {
        let (button, action, _) = scenario(None);
        let env = env();

        assert!(button.begin_drag(&env));
        button.drag_changed(120.0, &env);
        assert!(button.drag_cancelled());
        assert!(!button.drag_cancelled());
        assert_eq!(button.controller().get(), SlideConfirmController::new(5.0));
        assert_eq!(action.runs(), 0);
    }

    #[test]
    fn style_change_moves_rest_offset() {
        let button = SlideConfirm::new("Go", ConfirmAction::default()).style(
            SlideConfirmStyle::default().indicator_spacing(crate::Dp(8.0)),
        );
        assert_eq!(button.controller().with(|c| c.drag_offset()), 8.0);
    }

    #[test]
    fn shared_controller_state() {
        let shared = State::new(SlideConfirmController::default());
        let button =
            SlideConfirm::new("Go", ConfirmAction::default()).controller_state(shared.clone());
        assert!(button.begin_drag(&env()));
        assert!(shared.with(|c| c.is_dragging()));
    }

    #[test]
    fn release_after_disable_cancels_the_drag() {
        let (button, action, haptics) = scenario(Some(ConfirmOutcome::Success));
        let enabled = env();
        let disabled = env().enabled(false);

        assert!(button.drag_started(20.0, &enabled));
        button.drag_changed(120.0, &enabled);
        button.drag_changed(250.0, &disabled);
        assert_eq!(button.controller().with(|c| c.drag_offset()), 120.0);

        assert!(matches!(button.drag_ended(250.0, None, &disabled), DragEnd::Cancelled));
        assert_eq!(button.controller().get(), SlideConfirmController::new(5.0));
        assert_eq!(action.runs(), 0);

        assert!(button.drag_started(20.0, &enabled));
        button.drag_changed(250.0, &enabled);
        let task = button
            .drag_ended(250.0, None, &enabled)
            .into_task()
            .expect("re-enabled control confirms");
        pollster::block_on(task);
        assert_eq!(action.runs(), 1);
        assert_eq!(haptics.events()[..2], [HapticEvent::Prepare, HapticEvent::Prepare]);
    }

    #[test]
    fn rebuild_keeps_an_active_drag() {
        let shared = State::new(SlideConfirmController::default());
        let rebuild_style_first = || {
            SlideConfirm::new("Go", ConfirmAction::default())
                .style(SlideConfirmStyle::default())
                .controller_state(shared.clone())
        };
        let rebuild_state_first = || {
            SlideConfirm::new("Go", ConfirmAction::default())
                .controller_state(shared.clone())
                .style(SlideConfirmStyle::default())
        };
        let env = env();

        let button = rebuild_state_first();
        assert!(button.begin_drag(&env));
        button.drag_changed(200.0, &env);

        for button in [rebuild_state_first(), rebuild_style_first()] {
            let controller = button.controller().get();
            assert_eq!(controller.phase(), Phase::Dragging);
            assert_eq!(controller.drag_offset(), 200.0);
            assert_eq!(button.view(&env).indicator.x, 200.0);
        }

        let task = rebuild_style_first().activate(&env);
        assert!(task.is_none());
        let button = rebuild_state_first();
        let task = button.drag_ended(250.0, None, &env).into_task();
        assert!(task.is_some());
        assert!(rebuild_style_first().controller().with(|c| c.is_completed()));
    }

    #[test]
    fn rebuild_with_new_spacing_moves_the_rest_offset() {
        let spaced = SlideConfirmStyle::default().indicator_spacing(crate::Dp(8.0));

        let shared = State::new(SlideConfirmController::default());
        let button = SlideConfirm::new("Go", ConfirmAction::default())
            .controller_state(shared.clone())
            .style(spaced.clone());
        assert_eq!(button.controller().with(|c| c.drag_offset()), 8.0);

        let shared = State::new(SlideConfirmController::default());
        let button = SlideConfirm::new("Go", ConfirmAction::default())
            .style(spaced)
            .controller_state(shared.clone());
        assert_eq!(shared.with(|c| c.drag_offset()), 8.0);

        assert!(button.begin_drag(&env()));
        assert!(button.drag_cancelled());
        assert_eq!(shared.get(), SlideConfirmController::new(8.0));
    }
}
