// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default logger.
//!
//! The macros ([`info!`](crate::info), [`error!`](crate::error), ...) need a logger when
//! none is passed explicitly.  That logger lives here.  It is built lazily with
//! [`Logger::from_env`] the first time anything asks for it, so the environment is read
//! once, at first use.
//!
//! Code that wants its own configuration should hold a [`Logger`] and pass it to the
//! macros' `logger:` form instead of swapping the global.  Swapping is meant for test setup
//! and teardown.
//!
//! # Examples
//!
//! ## Capturing the default logger's output
//!
//! ```
//! use sevlog::global_logger::{global_logger, set_global_logger};
//! use sevlog::{Config, InMemorySink, Logger};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(InMemorySink::new());
//! let previous = set_global_logger(Arc::new(Logger::new(Config::quiet()).with_sink(sink.clone())));
//!
//! sevlog::warning!("queue depth {}", 120);
//! assert!(sink.drain_logs().contains("queue depth 120"));
//!
//! // put things back
//! set_global_logger(previous);
//! ```

use crate::logger::Logger;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

static GLOBAL_LOGGER: OnceLock<RwLock<Arc<Logger>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<Logger>> {
    GLOBAL_LOGGER.get_or_init(|| RwLock::new(Arc::new(Logger::from_env())))
}

/// The current default logger.
///
/// The lock is held only long enough to clone the `Arc`, so a logger obtained here keeps
/// working even if [`set_global_logger`] replaces it mid-call.
pub fn global_logger() -> Arc<Logger> {
    slot()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replaces the default logger, returning the one it replaced.
pub fn set_global_logger(logger: Arc<Logger>) -> Arc<Logger> {
    let mut current = slot().write().unwrap_or_else(PoisonError::into_inner);
    std::mem::replace(&mut *current, logger)
}
