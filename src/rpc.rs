// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shaping errors that cross a service boundary.
//!
//! [`Logger::rpc_error`] logs the failure locally and hands back an error fit for a remote
//! caller:
//!
//! 1. Without the debug toggle, the caller gets [`RpcError::Generic`].  Nothing about
//!    the failure leaks outside the service.
//! 2. With the debug toggle, the caller gets [`RpcError::Detailed`] with the formatted
//!    message, so failures can be chased across services.
//!
//! Either way the message is logged at error severity, capitalized and ending in a period.
//!
//! ```rust
//! use sevlog::{Config, InMemorySink, Logger, RpcError};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(InMemorySink::new());
//! let logger = Logger::new(Config::quiet()).with_sink(sink.clone());
//!
//! let err = logger.rpc_error(format_args!("user {} not found", 7));
//! assert_eq!(err, RpcError::Generic);
//! assert!(sink.drain_logs().ends_with("User 7 not found."));
//! ```

use crate::logger::Logger;
use std::fmt;

/// Display text of [`RpcError::Generic`].
pub const GENERIC_RPC_MESSAGE: &str = "failed to complete RPC request";

#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RpcError {
    #[error("failed to complete RPC request")]
    Generic,
    #[error("{0}")]
    Detailed(String),
}

impl RpcError {
    pub fn is_generic(&self) -> bool {
        matches!(self, RpcError::Generic)
    }
}

impl Logger {
    /**
    Logs `args` as an error and returns the error to send back to the remote caller.

    An empty message is not logged.  The returned detail, when there is one, is the message as
    formatted, without the capital or the period added for the log line.
    */
    pub fn rpc_error(&self, args: fmt::Arguments<'_>) -> RpcError {
        let message = fmt::format(args);
        if !message.is_empty() {
            self.error(format_args!("{}", punctuate(&message)));
        }
        if self.config().debug() {
            RpcError::Detailed(message)
        } else {
            RpcError::Generic
        }
    }
}

//capitalize the first character and end with a period
fn punctuate(message: &str) -> String {
    let mut chars = message.chars();
    let mut out = String::with_capacity(message.len() + 1);
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
    out.push('.');
    out
}
