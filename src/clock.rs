// SPDX-License-Identifier: MIT OR Apache-2.0

//! Timestamp sources.
//!
//! Every line starts with the wall-clock time it was printed at.  The logger asks a
//! [`Clock`] for that time, so tests can pin it with [`FixedClock`] instead of racing
//! the real clock.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use sevlog::clock::{Clock, FixedClock, format_timestamp};
//!
//! let at = NaiveDate::from_ymd_opt(2000, 1, 2)
//!     .unwrap()
//!     .and_hms_milli_opt(3, 4, 5, 6)
//!     .unwrap();
//! let clock = FixedClock::new(at);
//! assert_eq!(format_timestamp(clock.now()), "2000/01/02 03:04:05.006");
//! ```

use chrono::NaiveDateTime;
use std::fmt::Debug;

/// Layout of the bracketed timestamp: `YYYY/MM/DD HH:MM:SS.mmm`.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.3f";

pub trait Clock: Debug + Send + Sync {
    /// The current local time.
    fn now(&self) -> NaiveDateTime;
}

/**
Reads the system wall clock in the local timezone.
*/
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/**
A clock stuck at one instant.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedClock {
    at: NaiveDateTime,
}

impl FixedClock {
    pub const fn new(at: NaiveDateTime) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.at
    }
}

/// Renders `time` for the line prefix, truncated to milliseconds.
pub fn format_timestamp(time: NaiveDateTime) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}
