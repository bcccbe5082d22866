//! `tracing` implementation of the event logging port.

use saweria_types::EventLogger;

/// Forwards service events to `tracing` under the `saweria` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl EventLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "saweria", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "saweria", "{}", message);
    }
}
