// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logger configuration.
//!
//! A [`Config`] carries the three switches that decide whether a line is printed:
//!
//! | Field     | Source                       | Effect                                           |
//! |-----------|------------------------------|--------------------------------------------------|
//! | `enabled` | set in code, default `true`  | when false, nothing is printed                   |
//! | `debug`   | [`DEBUG_VAR`] is non-empty   | enables debug and network lines, detailed RPC errors |
//! | `sql`     | [`SQL_LOG_VAR`] is non-empty | enables SQL lines                                |
//!
//! `DEBUG=` is the same as leaving `DEBUG` unset.
//!
//! # Example
//!
//! ```
//! use sevlog::Config;
//!
//! let config = Config::from_lookup(|name| match name {
//!     "DEBUG" => Some("1".to_string()),
//!     _ => None,
//! });
//! assert!(config.debug());
//! assert!(!config.sql());
//! assert!(config.enabled());
//! ```

/// Environment variable that turns on debug output.
pub const DEBUG_VAR: &str = "DEBUG";
/// Environment variable that turns on SQL output.
pub const SQL_LOG_VAR: &str = "SQL_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    enabled: bool,
    debug: bool,
    sql: bool,
}

impl Config {
    /// Reads the toggles from the process environment.
    ///
    /// Values need not be valid UTF-8; any non-empty value counts as set.
    pub fn from_env() -> Self {
        Self::from_flags(|name| std::env::var_os(name).is_some_and(|v| !v.is_empty()))
    }

    /**
    Reads the toggles through `lookup`, which maps a variable name to its value.

    This is [Config::from_env] without the process environment, which keeps tests
    from racing on `std::env`.
    */
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_flags(|name| lookup(name).is_some_and(|v| !v.is_empty()))
    }

    fn from_flags(is_set: impl Fn(&str) -> bool) -> Self {
        Self {
            enabled: true,
            debug: is_set(DEBUG_VAR),
            sql: is_set(SQL_LOG_VAR),
        }
    }

    /// A config with every gate closed except the global toggle.
    pub const fn quiet() -> Self {
        Self {
            enabled: true,
            debug: false,
            sql: false,
        }
    }

    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub const fn with_sql(mut self, sql: bool) -> Self {
        self.sql = sql;
        self
    }

    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    pub const fn debug(&self) -> bool {
        self.debug
    }

    pub const fn sql(&self) -> bool {
        self.sql
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
