//! Recording fakes for exercising a slide control without a platform.
//!
//! Enabled with the `testing` feature.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use parking_lot::Mutex;

use crate::{
    action::{ConfirmAction, ConfirmOutcome},
    haptics::{HapticFeedback, ImpactStyle, NotificationKind},
};

/// One recorded haptic call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticEvent {
    /// [`HapticFeedback::prepare`].
    Prepare,
    /// [`HapticFeedback::impact`].
    Impact(ImpactStyle),
    /// [`HapticFeedback::notify`].
    Notify(NotificationKind),
}

/// Haptics that record every call in order.
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    events: Mutex<Vec<HapticEvent>>,
}

impl RecordingHaptics {
    /// Returns the calls recorded so far.
    pub fn events(&self) -> Vec<HapticEvent> {
        self.events.lock().clone()
    }

    fn record(&self, event: HapticEvent) {
        self.events.lock().push(event);
    }
}

impl HapticFeedback for RecordingHaptics {
    fn prepare(&self) {
        self.record(HapticEvent::Prepare);
    }

    fn impact(&self, style: ImpactStyle) {
        self.record(HapticEvent::Impact(style));
    }

    fn notify(&self, kind: NotificationKind) {
        self.record(HapticEvent::Notify(kind));
    }
}

/// An action that counts its runs and resolves to a fixed outcome.
#[derive(Debug, Clone)]
pub struct CountingAction {
    runs: Arc<AtomicUsize>,
    outcome: Option<ConfirmOutcome>,
}

impl CountingAction {
    /// Creates a counter whose runs resolve to `outcome`.
    pub fn new(outcome: Option<ConfirmOutcome>) -> Self {
        Self {
            runs: Arc::new(AtomicUsize::new(0)),
            outcome,
        }
    }

    /// Builds the action handle to give to the control.
    pub fn action(&self) -> ConfirmAction {
        let runs = Arc::clone(&self.runs);
        let outcome = self.outcome;
        ConfirmAction::new(move || {
            runs.fetch_add(1, Ordering::SeqCst);
            async move { outcome }
        })
    }

    /// Number of times the action was started.
    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }
}
