// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type for sevlog.
//!
//! A [`LogRecord`] is one fully formatted line, held in parts until a [`Sink`](crate::Sink)
//! renders it.  Its `Display` output is
//!
//! ```text
//! [<timestamp>] <color><SEVERITY><reset>: <message>
//! ```
//!
//! with no trailing newline; sinks that need line termination add it themselves.
//!
//! # Example
//!
//! ```rust
//! use sevlog::{Color, LogRecord};
//!
//! let record = LogRecord::new("2000/01/02 03:04:05.000", "INFO", Color::None, "Message".to_string());
//! assert_eq!(record.to_string(), "[2000/01/02 03:04:05.000] INFO: Message");
//! ```

use crate::color::Color;
use std::borrow::Cow;
use std::fmt::Display;

/**
A formatted log line.

The parts are kept apart so sinks that care about severity (the browser console, for one)
don't have to parse the rendered line back.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    timestamp: Cow<'static, str>,
    severity: Cow<'static, str>,
    color: Color,
    message: String,
}

impl LogRecord {
    pub fn new(
        timestamp: impl Into<Cow<'static, str>>,
        severity: impl Into<Cow<'static, str>>,
        color: Color,
        message: String,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            severity: severity.into(),
            color,
            message,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn severity(&self) -> &str {
        &self.severity
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// The formatted message, without prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}{}{}: {}",
            self.timestamp,
            self.color,
            self.severity,
            self.color.reset(),
            self.message
        )
    }
}
/*
Boilerplate notes for LogRecord:

- Clone/PartialEq/Eq/Hash: derived, records are plain data and tests compare them.
- Default: no, a record without a timestamp isn't a line.
- Ord: no meaningful order.
- Display: the line format.
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn renders_colored_line() {
        let record = LogRecord::new(
            "2016/11/08 22:00:00.000",
            "WARN",
            Color::Orange,
            "disk at 91%".to_string(),
        );
        assert_eq!(
            record.to_string(),
            "[2016/11/08 22:00:00.000] \x1b[33mWARN\x1b[0m: disk at 91%"
        );
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn accessors() {
        let record = LogRecord::new(
            String::from("0000/01/01 00:00:00.000"),
            "SQL",
            Color::Magenta,
            "SELECT 1".to_string(),
        );
        assert_eq!(record.severity(), "SQL");
        assert_eq!(record.message(), "SELECT 1");
        assert_eq!(record.timestamp(), "0000/01/01 00:00:00.000");
        assert_eq!(record.color(), Color::Magenta);
    }
}
