//! A "slide to confirm" control for tessera-style declarative hosts.
//!
//! The crate owns the interaction state machine and the layout math of the
//! control and leaves everything platform specific to the host: gestures are
//! fed in as plain numbers, the action runs on whatever executor the host
//! prefers, haptics go through [`haptics::HapticFeedback`], and rendering
//! consumes the plain-data [`render::SlideConfirmView`] tree.
//!
//! # Example
//!
//! ```
//! use slide_confirm::{
//!     action::{ConfirmAction, ConfirmOutcome},
//!     environment::Environment,
//!     slide_confirm::{DragEnd, SlideConfirm},
//!     style::SlideConfirmStyle,
//! };
//!
//! let button = SlideConfirm::new(
//!     "Slide to unlock",
//!     ConfirmAction::new(|| async { Some(ConfirmOutcome::Success) }),
//! )
//! .style(SlideConfirmStyle::default());
//!
//! let env = Environment::new(300.0);
//! assert!(button.drag_started(10.0, &env));
//! button.drag_changed(250.0, &env);
//!
//! match button.drag_ended(250.0, None, &env) {
//!     DragEnd::Confirmed(task) => {
//!         pollster::block_on(task);
//!     }
//!     other => panic!("expected confirmation, got {other:?}"),
//! }
//! assert!(button.controller().with(|c| c.is_idle()));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod accessibility;
pub mod action;
pub mod color;
pub mod dp;
pub mod environment;
pub mod haptics;
pub mod render;
pub mod slide_confirm;
pub mod state;
pub mod style;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use accesskit;

pub use action::{ConfirmAction, ConfirmOutcome, ConfirmTask};
pub use color::{Color, ParseColorError};
pub use dp::Dp;
pub use environment::{Environment, LayoutDirection};
pub use haptics::{HapticFeedback, ImpactStyle, NoHaptics, NotificationKind};
pub use slide_confirm::{
    CustomLabel, DragEnd, LabelScope, Phase, SlideConfirm, SlideConfirmController, SlideLabel,
};
pub use state::State;
pub use style::{IndicatorShape, SlideConfirmDefaults, SlideConfirmStyle, TextAlignment};
