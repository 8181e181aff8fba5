//! User-facing error reporting.
//!
//! The store never renders errors itself; it forwards a human-readable
//! message through whatever [`ErrorSink`] the application injected at
//! construction (a web UI banner, a notification queue, ...). Failures are
//! always logged as well, so the sink is presentation-only.

/// Injected channel for user-visible error notifications.
pub trait ErrorSink: Send + Sync {
    fn report(&self, message: &str);
}

/// Sink that drops every message; failures still land in the logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl ErrorSink for SilentSink {
    fn report(&self, _message: &str) {}
}
