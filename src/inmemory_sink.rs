// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! A sink that keeps lines in memory instead of printing them, for tests that assert on
//! the exact line format.
//!
//! Lines are rendered with [`LogRecord`]'s `Display` impl and pushed onto a
//! `Mutex<Vec<String>>`.  Share the sink with `Arc` and keep a clone to read it back.

use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::sync::{Mutex, MutexGuard};

/// Captures rendered lines.
///
/// # Example
///
/// ```rust
/// use sevlog::{Config, InMemorySink, Logger};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// let logger = Logger::new(Config::quiet()).with_sink(sink.clone());
///
/// logger.info(format_args!("Test message {}", 42));
///
/// let logs = sink.drain_logs();
/// assert!(logs.contains("Test message 42"));
/// ```
#[derive(Debug, Default)]
pub struct InMemorySink {
    lines: Mutex<Vec<String>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    //a test that panicked mid-push still left whole lines behind
    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Drains all lines into a single string, joined by newlines, and clears the buffer.
    pub fn drain_logs(&self) -> String {
        let mut lines = self.guard();
        let result = lines.join("\n");
        lines.clear();
        result
    }

    /// A copy of the captured lines, oldest first.  The buffer is left alone.
    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }
}

impl Sink for InMemorySink {
    fn write_record(&self, record: &LogRecord) {
        let line = record.to_string();
        self.guard().push(line);
    }
}
