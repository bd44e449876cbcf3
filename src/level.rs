// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::color::Color;
use crate::config::Config;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Print-style debugging, needs `DEBUG`
    Debug,
    /// Traffic on the wire, needs `DEBUG`
    Network,
    /// Queries, needs `SQL_LOG`
    Sql,
    Info,
    /// Suspicious condition
    Warning,
    /// Runtime error
    Error,
    /// Unrecoverable; the logger halts after printing
    Fatal,
}

impl Level {
    /// The label printed between the color escapes.
    pub const fn label(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Network => "NET",
            Level::Sql => "SQL",
            Level::Info => "INFO",
            Level::Warning => "WARN",
            //fatal lines read as errors
            Level::Error | Level::Fatal => "ERROR",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Level::Debug => Color::Green,
            Level::Network => Color::Grey,
            Level::Sql => Color::Magenta,
            Level::Info => Color::Blue,
            Level::Warning => Color::Orange,
            Level::Error | Level::Fatal => Color::Red,
        }
    }

    /**
    Whether `config` lets this level through.

    The global toggle closes every level.  Debug and network lines additionally need
    the debug toggle, SQL lines need the SQL toggle.
    */
    pub const fn is_enabled(self, config: &Config) -> bool {
        if !config.enabled() {
            return false;
        }
        match self {
            Level::Debug | Level::Network => config.debug(),
            Level::Sql => config.sql(),
            Level::Info | Level::Warning | Level::Error | Level::Fatal => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn gated_levels() {
        let quiet = Config::quiet();
        assert!(!Level::Debug.is_enabled(&quiet));
        assert!(!Level::Network.is_enabled(&quiet));
        assert!(!Level::Sql.is_enabled(&quiet));
        assert!(Level::Info.is_enabled(&quiet));

        let debug = quiet.with_debug(true);
        assert!(Level::Debug.is_enabled(&debug));
        assert!(Level::Network.is_enabled(&debug));
        assert!(!Level::Sql.is_enabled(&debug));

        let sql = quiet.with_sql(true);
        assert!(Level::Sql.is_enabled(&sql));
        assert!(!Level::Debug.is_enabled(&sql));
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn disabled_closes_everything() {
        let off = Config::quiet()
            .with_debug(true)
            .with_sql(true)
            .with_enabled(false);
        for level in [
            Level::Debug,
            Level::Network,
            Level::Sql,
            Level::Info,
            Level::Warning,
            Level::Error,
            Level::Fatal,
        ] {
            assert!(!level.is_enabled(&off), "{level:?} leaked through");
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn fatal_prints_as_error() {
        assert_eq!(Level::Fatal.label(), Level::Error.label());
        assert_eq!(Level::Fatal.color(), Color::Red);
        assert_eq!(Level::Network.label(), "NET");
        assert_eq!(Level::Warning.label(), "WARN");
    }
}
