//! Accessibility semantics of a slide control.
//!
//! Assistive technologies can't perform a horizontal drag, so the control is
//! exposed as a plain button whose `Click` action runs the same success path
//! as a completed slide.
//!
//! ```
//! use slide_confirm::{ConfirmAction, Environment, SlideConfirm, accesskit::{Action, Role}};
//!
//! let button = SlideConfirm::new("Slide to unlock", ConfirmAction::default());
//! let env = Environment::new(300.0);
//!
//! let node = button.accessibility_node(&env);
//! assert_eq!(node.role(), Role::Button);
//! assert!(node.supports_action(Action::Click));
//!
//! let task = button.perform_accessibility_action(Action::Click, &env);
//! assert!(task.is_some());
//! ```

use accesskit::{Action, Node, Role};
use tracing::debug;

use crate::{
    action::ConfirmTask,
    environment::Environment,
    slide_confirm::{Phase, SlideConfirm, SlideLabel},
};

/// State description announced while the action is in flight.
pub const IN_PROGRESS_DESCRIPTION: &str = "In progress";

/// Role description announced alongside the label.
pub const ROLE_DESCRIPTION: &str = "slide to confirm";

impl<L: SlideLabel> SlideConfirm<L> {
    /// Builds the accessibility node for the current state.
    pub fn accessibility_node(&self, env: &Environment) -> Node {
        let mut node = Node::new(Role::Button);
        node.set_label(self.label().accessibility_text().into_owned());
        node.set_role_description(ROLE_DESCRIPTION);

        if !env.enabled {
            node.set_disabled();
            return node;
        }

        let phase = self.controller().with(|c| c.phase());
        match phase {
            Phase::Idle => node.add_action(Action::Click),
            Phase::Dragging => {}
            Phase::Completed => node.set_state_description(IN_PROGRESS_DESCRIPTION),
        }
        node
    }

    /// Handles an action requested by an assistive technology.
    ///
    /// `Click` activates the control; every other action is ignored.
    pub fn perform_accessibility_action(
        &self,
        action: Action,
        env: &Environment,
    ) -> Option<ConfirmTask> {
        if action != Action::Click {
            debug!(?action, "unsupported accessibility action");
            return None;
        }
        self.activate(env)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        action::ConfirmAction,
        haptics::ImpactStyle,
        testing::{CountingAction, HapticEvent, RecordingHaptics},
    };

    #[test]
    fn enabled_node_is_a_clickable_button() {
        let button = SlideConfirm::new("Slide to pay", ConfirmAction::default());
        let node = button.accessibility_node(&Environment::new(300.0));

        assert_eq!(node.role(), Role::Button);
        assert_eq!(node.label(), Some("Slide to pay"));
        assert!(node.supports_action(Action::Click));
        assert!(!node.is_disabled());
    }

    #[test]
    fn disabled_node_has_no_action() {
        let button = SlideConfirm::new("Slide to pay", ConfirmAction::default());
        let env = Environment::new(300.0).enabled(false);
        let node = button.accessibility_node(&env);

        assert!(node.is_disabled());
        assert!(!node.supports_action(Action::Click));
        assert!(button.perform_accessibility_action(Action::Click, &env).is_none());
    }

    #[test]
    fn click_runs_the_success_path() {
        let action = CountingAction::new(None);
        let haptics = Arc::new(RecordingHaptics::default());
        let button =
            SlideConfirm::new("Slide to pay", action.action()).haptics(haptics.clone());
        let env = Environment::new(300.0);

        let task = button
            .perform_accessibility_action(Action::Click, &env)
            .expect("idle control activates");
        let node = button.accessibility_node(&env);
        assert_eq!(node.state_description(), Some(IN_PROGRESS_DESCRIPTION));
        assert!(!node.supports_action(Action::Click));
        assert!(button.perform_accessibility_action(Action::Click, &env).is_none());

        pollster::block_on(task);
        assert_eq!(action.runs(), 1);
        assert!(button.controller().with(|c| c.is_idle()));
        assert_eq!(haptics.events()[0], HapticEvent::Impact(ImpactStyle::Light));
    }

    #[test]
    fn other_actions_are_ignored() {
        let button = SlideConfirm::new("Slide to pay", ConfirmAction::default());
        let env = Environment::new(300.0);
        assert!(button.perform_accessibility_action(Action::Focus, &env).is_none());
        assert!(button.controller().with(|c| c.is_idle()));
    }

    #[test]
    fn dragging_node_offers_no_click() {
        let button = SlideConfirm::new("Slide to pay", ConfirmAction::default());
        let env = Environment::new(300.0);
        assert!(button.begin_drag(&env));

        let node = button.accessibility_node(&env);
        assert!(!node.supports_action(Action::Click));
        assert_eq!(node.state_description(), None);
        assert!(button.perform_accessibility_action(Action::Click, &env).is_none());
    }
}
