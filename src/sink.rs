// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use std::fmt::Debug;

/**
Where a [crate::Logger] puts its lines.

A logger holds exactly one sink.
*/
pub trait Sink: Debug + Send + Sync {
    /**
    Writes one record as a complete line.

    Sinks swallow their own I/O failures; logging never fails the caller.
    */
    fn write_record(&self, record: &LogRecord);
}

/*
Boilerplate notes.

Clone on a sink is up to the implementation; a handle to stdout is trivially copyable but a
capture buffer is shared through Arc instead.
PartialEq, Hash: unclear whether that means "same destination" or "same contents".  Skip.
Default: depends on the destination.
*/
