//! Haptic feedback capability.
//!
//! ## Usage
//!
//! Implement [`HapticFeedback`] on top of the platform's feedback generator
//! and pass it to [`crate::SlideConfirm::haptics`]. Every method defaults to a
//! no-op, so hosts without haptics can use [`NoHaptics`].

use std::{fmt, sync::Arc};

use crate::action::ConfirmOutcome;

/// Strength of an impact tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    /// A light tap.
    Light,
}

/// Notification emitted after a confirm action settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The action reported success.
    Success,
    /// The action reported failure.
    Failure,
    /// The action finished without reporting an outcome.
    Neutral,
}

impl From<Option<ConfirmOutcome>> for NotificationKind {
    fn from(outcome: Option<ConfirmOutcome>) -> Self {
        match outcome {
            Some(ConfirmOutcome::Success) => NotificationKind::Success,
            Some(ConfirmOutcome::Failure) => NotificationKind::Failure,
            None => NotificationKind::Neutral,
        }
    }
}

/// Advisory haptic feedback. Nothing the control does depends on these calls.
pub trait HapticFeedback: Send + Sync {
    /// Warms up the feedback generator; called when a drag starts.
    fn prepare(&self) {}

    /// Plays an impact tap.
    fn impact(&self, _style: ImpactStyle) {}

    /// Plays a notification pattern.
    fn notify(&self, _kind: NotificationKind) {}
}

/// Haptics for hosts without a feedback generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {}

/// Shared haptics handle stored by the control.
#[derive(Clone)]
pub(crate) struct SharedHaptics(pub(crate) Arc<dyn HapticFeedback>);

impl Default for SharedHaptics {
    fn default() -> Self {
        Self(Arc::new(NoHaptics))
    }
}

impl fmt::Debug for SharedHaptics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedHaptics")
    }
}

impl std::ops::Deref for SharedHaptics {
    type Target = dyn HapticFeedback;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
