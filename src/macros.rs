// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging macros.
//!
//! Every severity has a macro taking a `format!`-style template and arguments.  Each comes in
//! two forms:
//!
//! ```rust
//! use sevlog::{Config, InMemorySink, Logger};
//! use std::sync::Arc;
//!
//! // 1. the process-wide default logger
//! sevlog::info!("listening on port {}", 8080);
//!
//! // 2. an explicit logger
//! let sink = Arc::new(InMemorySink::new());
//! let logger = Logger::new(Config::quiet()).with_sink(sink.clone());
//! sevlog::info!(logger: &logger, "listening on port {}", 8080);
//! assert!(sink.drain_logs().ends_with("listening on port 8080"));
//! ```
//!
//! See the [crate docs](crate) for when each severity prints; "always" still means
//! "while the logger is enabled".  The arguments are formatted lazily, so a suppressed line
//! costs no formatting.

/// Logs at [`Level::Debug`](crate::Level::Debug).
#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        ($logger).debug(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global_logger::global_logger().debug(::core::format_args!($($arg)+))
    };
}

/// Logs at [`Level::Network`](crate::Level::Network).
#[macro_export]
macro_rules! network {
    (logger: $logger:expr, $($arg:tt)+) => {
        ($logger).network(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global_logger::global_logger().network(::core::format_args!($($arg)+))
    };
}

/// Logs at [`Level::Sql`](crate::Level::Sql).
#[macro_export]
macro_rules! sql {
    (logger: $logger:expr, $($arg:tt)+) => {
        ($logger).sql(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global_logger::global_logger().sql(::core::format_args!($($arg)+))
    };
}

/// Logs at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        ($logger).info(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global_logger::global_logger().info(::core::format_args!($($arg)+))
    };
}

/// Logs at [`Level::Warning`](crate::Level::Warning).
#[macro_export]
macro_rules! warning {
    (logger: $logger:expr, $($arg:tt)+) => {
        ($logger).warning(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global_logger::global_logger().warning(::core::format_args!($($arg)+))
    };
}

/// Logs at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        ($logger).error(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global_logger::global_logger().error(::core::format_args!($($arg)+))
    };
}

/**
Logs an error line, then halts through the logger's [`Halt`](crate::Halt) policy.

Evaluates to `!`.
*/
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr, $($arg:tt)+) => {
        ($logger).fatal(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global_logger::global_logger().fatal(::core::format_args!($($arg)+))
    };
}

/**
Logs an error and evaluates to the [`RpcError`](crate::RpcError) to hand a remote caller.

See [`Logger::rpc_error`](crate::Logger::rpc_error).

```rust
use sevlog::{Config, InMemorySink, Logger};
use std::sync::Arc;

let logger = Logger::new(Config::quiet().with_debug(true)).with_sink(Arc::new(InMemorySink::new()));
let err = sevlog::rpc_error!(logger: &logger, "no route to {}", "billing");
assert_eq!(err.to_string(), "no route to billing");
```
*/
#[macro_export]
macro_rules! rpc_error {
    (logger: $logger:expr, $($arg:tt)+) => {
        ($logger).rpc_error(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global_logger::global_logger().rpc_error(::core::format_args!($($arg)+))
    };
}

/// Returns whether the default logger would print at the given [`Level`](crate::Level).
#[macro_export]
macro_rules! log_enabled {
    ($level:expr) => {
        $crate::global_logger::global_logger().is_enabled($level)
    };
}
