//! Event logging port.
//!
//! Handlers report what they do through this trait instead of writing to a global
//! sink, so tests can capture and assert on log lines.

/// Structured logging collaborator.
pub trait EventLogger: Send + Sync + 'static {
    fn info(&self, message: &str);

    fn error(&self, message: &str);
}
