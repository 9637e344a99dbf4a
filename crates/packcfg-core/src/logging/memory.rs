//! In-memory logger

use std::sync::Mutex;

use super::traits::Logger;

/// A logger that records messages, for testing
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded lines, each prefixed with its level
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Whether any recorded line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    fn record(&self, level: &str, message: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(format!("{}: {}", level, message));
        }
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, message: &str) {
        self.record("DEBUG", message);
    }

    fn info(&self, message: &str) {
        self.record("INFO", message);
    }

    fn warn(&self, message: &str) {
        self.record("WARN", message);
    }

    fn error(&self, message: &str) {
        self.record("ERROR", message);
    }
}
