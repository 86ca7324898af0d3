//! Logging observer for dispatch events.

use tinyroute_core::{DispatchEvent, Observer};

/// An observer that logs dispatch events through `tracing`.
///
/// Registrations, hits and completed actions are logged at `debug`, misses
/// at `trace` and refused transitions at `warn`. Without the `tracing`
/// feature it does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl Observer for LoggingObserver {
    fn on_event(&self, event: &DispatchEvent<'_>) {
        #[cfg(feature = "tracing")]
        {
            match *event {
                DispatchEvent::Registered {
                    kind,
                    key,
                    replaced,
                } => tracing::debug!(%kind, key, replaced, "route registered"),
                DispatchEvent::Resolved { kind, key } => {
                    tracing::debug!(%kind, key, "route resolved")
                }
                DispatchEvent::NotRouted { kind, input } => {
                    tracing::trace!(%kind, input, "no route")
                }
                DispatchEvent::Rejected { input, reason } => {
                    tracing::warn!(input, %reason, "navigation refused")
                }
                DispatchEvent::ActionCompleted { key, success } => {
                    tracing::debug!(key, success, "action completed")
                }
            }
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = event; // Suppress unused warning
        }
    }
}
