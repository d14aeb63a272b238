//! The asynchronous action a slide control confirms.
//!
//! ## Usage
//!
//! Wrap the work in a [`ConfirmAction`]. Returning a [`ConfirmOutcome`] picks
//! the notification haptic played afterwards; [`ConfirmAction::from_unit`]
//! accepts actions that report nothing.
//!
//! ```
//! use slide_confirm::{ConfirmAction, ConfirmOutcome};
//!
//! let unlock = ConfirmAction::new(|| async {
//!     // talk to the lock...
//!     Some(ConfirmOutcome::Success)
//! });
//! let log_only = ConfirmAction::from_unit(|| async {});
//!
//! assert_eq!(pollster::block_on(unlock.invoke()), Some(ConfirmOutcome::Success));
//! assert_eq!(pollster::block_on(log_only.invoke()), None);
//! ```

use std::{
    fmt,
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

/// A boxed, sendable future.
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Outcome an action may report. Only used to pick haptic feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfirmOutcome {
    /// The confirmed operation succeeded.
    Success,
    /// The confirmed operation failed.
    Failure,
}

impl From<bool> for ConfirmOutcome {
    fn from(success: bool) -> Self {
        if success {
            ConfirmOutcome::Success
        } else {
            ConfirmOutcome::Failure
        }
    }
}

/// Stable, comparable handle to the caller's asynchronous action.
///
/// `ConfirmAction` compares by identity (`Arc::ptr_eq`), like the callback
/// handles used for component props.
#[derive(Clone)]
pub struct ConfirmAction {
    slot: Arc<dyn Fn() -> BoxFuture<Option<ConfirmOutcome>> + Send + Sync>,
}

impl ConfirmAction {
    /// Creates an action whose future reports an optional outcome.
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<ConfirmOutcome>> + Send + 'static,
    {
        Self {
            slot: Arc::new(move || -> BoxFuture<Option<ConfirmOutcome>> { Box::pin(action()) }),
        }
    }

    /// Creates an action whose future reports nothing.
    pub fn from_unit<F, Fut>(action: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::new(move || {
            let work = action();
            async move {
                work.await;
                None
            }
        })
    }

    /// Starts one run of the action.
    pub fn invoke(&self) -> BoxFuture<Option<ConfirmOutcome>> {
        (self.slot)()
    }
}

impl Default for ConfirmAction {
    fn default() -> Self {
        Self::from_unit(|| async {})
    }
}

impl PartialEq for ConfirmAction {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl Eq for ConfirmAction {}

impl fmt::Debug for ConfirmAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConfirmAction")
    }
}

/// Work launched by a successful slide.
///
/// The task awaits the action, plays the outcome haptic, and returns the
/// control to idle. Hosts spawn it on their executor; the control stays in
/// [`crate::Phase::Completed`] until it finishes. Dropping the task without
/// polling it to completion leaves the control completed.
#[must_use = "the control stays completed until the task runs"]
pub struct ConfirmTask {
    inner: BoxFuture<Option<ConfirmOutcome>>,
}

impl ConfirmTask {
    pub(crate) fn new(inner: BoxFuture<Option<ConfirmOutcome>>) -> Self {
        Self { inner }
    }
}

impl Future for ConfirmTask {
    type Output = Option<ConfirmOutcome>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}

impl fmt::Debug for ConfirmTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ConfirmTask")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_from_bool() {
        assert_eq!(ConfirmOutcome::from(true), ConfirmOutcome::Success);
        assert_eq!(ConfirmOutcome::from(false), ConfirmOutcome::Failure);
    }

    #[test]
    fn actions_compare_by_identity() {
        let action = ConfirmAction::default();
        assert_eq!(action, action.clone());
        assert_ne!(action, ConfirmAction::default());
    }

    #[test]
    fn each_invoke_runs_the_closure() {
        let runs = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let action = ConfirmAction::from_unit(move || {
            counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            async {}
        });

        let first = action.invoke();
        let second = action.invoke();
        assert_eq!(runs.load(std::sync::atomic::Ordering::SeqCst), 2);
        assert_eq!(pollster::block_on(first), None);
        assert_eq!(pollster::block_on(second), None);
    }
}
