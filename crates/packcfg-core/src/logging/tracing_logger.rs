//! Logger backed by `tracing`

use super::traits::Logger;

/// A logger that forwards every message to the `tracing` macros
///
/// Which levels are emitted, and where, is decided by the subscriber the
/// host binary installs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "packcfg", "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "packcfg", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "packcfg", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "packcfg", "{}", message);
    }
}
