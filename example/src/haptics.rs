use slide_confirm::{HapticFeedback, ImpactStyle, NotificationKind};
use tracing::info;

/// Haptics for terminals: every call becomes a log line.
#[derive(Debug, Default)]
pub struct TracingHaptics;

impl HapticFeedback for TracingHaptics {
    fn prepare(&self) {
        info!("haptics: prepare");
    }

    fn impact(&self, style: ImpactStyle) {
        info!(?style, "haptics: impact");
    }

    fn notify(&self, kind: NotificationKind) {
        info!(?kind, "haptics: notify");
    }
}
