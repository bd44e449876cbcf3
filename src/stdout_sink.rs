// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use crate::sink::Sink;

/**
The reference sink: one line per record on stdout.

On wasm32, where there is no stdout, lines go to the browser console instead.
 */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StdoutSink {}

impl StdoutSink {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Sink for StdoutSink {
    fn write_record(&self, record: &LogRecord) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let mut lock = std::io::stdout().lock();
            //a closed stdout drops the line, same as any other print
            let _ = writeln!(lock, "{}", record);
        }
        #[cfg(target_arch = "wasm32")]
        {
            let msg = record.to_string();
            match record.severity() {
                "DEBUG" | "NET" | "SQL" => web_sys::console::debug_1(&msg.into()),
                "INFO" => web_sys::console::info_1(&msg.into()),
                "WARN" => web_sys::console::warn_1(&msg.into()),
                "ERROR" => web_sys::console::error_1(&msg.into()),
                _ => web_sys::console::log_1(&msg.into()),
            }
        }
    }
}
