// SPDX-License-Identifier: MIT OR Apache-2.0

//! The logger instance.
//!
//! A [`Logger`] bundles everything that decides what a line looks like and whether it is
//! printed: the [`Config`] toggles, the [`Clock`] that stamps the line, the [`Sink`] that
//! receives it and the [`Halt`] policy for [`Logger::fatal`].
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sevlog::clock::FixedClock;
//! use sevlog::{Config, InMemorySink, Logger};
//! use std::sync::Arc;
//!
//! let at = NaiveDate::from_ymd_opt(1234, 5, 6).unwrap().and_hms_opt(7, 8, 9).unwrap();
//! let sink = Arc::new(InMemorySink::new());
//! let logger = Logger::new(Config::quiet())
//!     .with_clock(Arc::new(FixedClock::new(at)))
//!     .with_sink(sink.clone());
//!
//! logger.info(format_args!("{} of {} shards up", 3, 4));
//! assert_eq!(
//!     sink.drain_logs(),
//!     "[1234/05/06 07:08:09.000] \x1b[36mINFO\x1b[0m: 3 of 4 shards up"
//! );
//! ```

use crate::clock::{Clock, SystemClock, format_timestamp};
use crate::color::Color;
use crate::config::Config;
use crate::level::Level;
use crate::log_record::LogRecord;
use crate::sink::Sink;
use crate::stdout_sink::StdoutSink;
use std::fmt;
use std::sync::Arc;

/// Panic payload used by [`Halt::Panic`].
pub const FATAL_MESSAGE: &str = "Logger::fatal was called";

/// Status code of the default [`Halt`].
pub const FATAL_EXIT_CODE: i32 = 1;

/**
What [Logger::fatal] does once its line is out.

The default exits the whole process with [FATAL_EXIT_CODE], whichever thread called.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Halt {
    /// Exit the process immediately with the given status code.
    Exit(i32),
    /// Panic with [FATAL_MESSAGE].  Only unwinds the calling thread; meant for tests.
    Panic,
}

impl Default for Halt {
    fn default() -> Self {
        Halt::Exit(FATAL_EXIT_CODE)
    }
}

impl Halt {
    pub fn halt(self) -> ! {
        match self {
            Halt::Panic => panic!("{}", FATAL_MESSAGE),
            Halt::Exit(code) => std::process::exit(code),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Logger {
    config: Config,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn Sink>,
    halt: Halt,
}

impl Logger {
    /// A logger printing to stdout with the system clock.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock),
            sink: Arc::new(StdoutSink::new()),
            halt: Halt::default(),
        }
    }

    /// [Logger::new] with [Config::from_env].
    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_halt(mut self, halt: Halt) -> Self {
        self.halt = halt;
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn halt_policy(&self) -> Halt {
        self.halt
    }

    /**
    Formats and writes one line with an arbitrary label and color.

    Only the global toggle applies here; per-level gates are [Logger::log]'s business.
    */
    pub fn print(&self, severity: &str, color: Color, args: fmt::Arguments<'_>) {
        if !self.config.enabled() {
            return;
        }
        let timestamp = format_timestamp(self.clock.now());
        let record = LogRecord::new(timestamp, severity.to_owned(), color, fmt::format(args));
        self.sink.write_record(&record);
    }

    /// Prints at `level` if the config lets `level` through.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if level.is_enabled(&self.config) {
            self.print(level.label(), level.color(), args);
        }
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level.is_enabled(&self.config)
    }

    /// Needs the debug toggle.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    /// Needs the debug toggle.
    pub fn network(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Network, args);
    }

    /// Needs the SQL toggle.
    pub fn sql(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Sql, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warning, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    /**
    Prints an error line, then halts.

    The line obeys the global toggle like any error; the halt does not.
    */
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        self.log(Level::Fatal, args);
        self.halt.halt()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::inmemory_sink::InMemorySink;
    use chrono::NaiveDate;

    //fatal panics instead of exiting the test binary
    fn capture(config: Config) -> (Logger, Arc<InMemorySink>) {
        let at = NaiveDate::from_ymd_opt(2000, 1, 2)
            .unwrap()
            .and_hms_milli_opt(3, 4, 5, 6)
            .unwrap();
        let sink = Arc::new(InMemorySink::new());
        let logger = Logger::new(config)
            .with_clock(Arc::new(FixedClock::new(at)))
            .with_sink(sink.clone())
            .with_halt(Halt::Panic);
        (logger, sink)
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn default_halt_exits_the_process() {
        assert_eq!(Halt::default(), Halt::Exit(FATAL_EXIT_CODE));
        assert_eq!(Logger::new(Config::quiet()).halt_policy(), Halt::Exit(1));
        assert_eq!(Logger::default().halt_policy(), Halt::Exit(1));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn print_without_color() {
        let (logger, sink) = capture(Config::quiet());
        logger.print("Severity", Color::None, format_args!("Message"));
        assert_eq!(sink.drain_logs(), "[2000/01/02 03:04:05.006] Severity: Message");
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn print_formats_arguments() {
        let (logger, sink) = capture(Config::quiet());
        logger.print(
            "INFO",
            Color::None,
            format_args!("The first {} digits of {} are {:.2}.", 3, "Pi", 3.14159),
        );
        assert_eq!(
            sink.drain_logs(),
            "[2000/01/02 03:04:05.006] INFO: The first 3 digits of Pi are 3.14."
        );
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn print_respects_global_toggle() {
        let (logger, sink) = capture(Config::quiet().with_enabled(false));
        logger.print("INFO", Color::Blue, format_args!("hidden"));
        logger.error(format_args!("hidden"));
        assert!(sink.is_empty());
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn gated_levels_stay_quiet() {
        let (logger, sink) = capture(Config::quiet());
        logger.debug(format_args!("d"));
        logger.network(format_args!("n"));
        logger.sql(format_args!("s"));
        assert!(sink.is_empty());

        let logger = logger.with_config(Config::quiet().with_debug(true).with_sql(true));
        logger.debug(format_args!("d"));
        logger.network(format_args!("n"));
        logger.sql(format_args!("s"));
        assert_eq!(
            sink.lines(),
            vec![
                "[2000/01/02 03:04:05.006] \x1b[32mDEBUG\x1b[0m: d".to_string(),
                "[2000/01/02 03:04:05.006] \x1b[37mNET\x1b[0m: n".to_string(),
                "[2000/01/02 03:04:05.006] \x1b[95mSQL\x1b[0m: s".to_string(),
            ]
        );
    }

    #[test]
    fn fatal_prints_error_then_panics() {
        let (logger, sink) = capture(Config::quiet());
        let result = std::panic::catch_unwind::<_, ()>(std::panic::AssertUnwindSafe(|| {
            logger.fatal(format_args!("out of {}", "disk"))
        }));
        let payload = result.expect_err("fatal must not return");
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some(FATAL_MESSAGE));
        assert_eq!(
            sink.drain_logs(),
            "[2000/01/02 03:04:05.006] \x1b[31mERROR\x1b[0m: out of disk"
        );
    }

    #[test]
    #[should_panic(expected = "Logger::fatal was called")]
    fn fatal_halts_even_when_disabled() {
        let (logger, _sink) = capture(Config::quiet().with_enabled(false));
        logger.fatal(format_args!("silent"));
    }
}
