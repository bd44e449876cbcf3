// SPDX-License-Identifier: MIT OR Apache-2.0

//! Call-stack inspection for diagnostics.
//!
//! Two questions can be asked of the running thread:
//!
//! * [`caller_name`]: who called the function I'm in?
//! * [`call_stack`]: where are the last `depth` call sites, as `file:line`?
//!
//! Both walk outward from the *immediate caller*, the function that called into this
//! module.  Frames belonging to this module are skipped, so wrappers inside sevlog don't
//! shift the answer.
//!
//! # Symbolication
//!
//! Turning return addresses into names and source locations is the platform's job.  The
//! [`Symbolizer`] trait is the seam: [`NativeSymbolizer`] resolves through the `backtrace`
//! crate (DWARF on Linux, dbghelp on Windows, and so on), and the `_with` variants accept any
//! other implementation.  Inlined functions are reported as frames of their own, so the walk
//! follows the source rather than the optimizer.
//!
//! Without debug info there are no names or lines to find; expect [`WalkError::Unresolved`]
//! from stripped binaries.  Release builds need at least `debug = "line-tables-only"`.
//!
//! A function that ends by returning another call's result may be compiled as a tail call,
//! and its frame is then gone before the walk starts.  The walk reports the frames that
//! are on the stack, so in optimized builds the answer can skip such a function.
//!
//! # Example
//!
//! ```
//! fn handler() -> Vec<String> {
//!     sevlog::callstack::call_stack(1).unwrap_or_else(|e| e.into_partial())
//! }
//!
//! let stack = handler();
//! assert!(stack.len() <= 1);
//! ```

use std::path::{Path, PathBuf};

/// Position of [`caller_name`]'s answer in the walk; 0 is the immediate caller.
const CALLER_DEPTH: usize = 1;

//symbol names of the functions that start a walk
const ENTRY_POINTS: [&str; 4] = [
    concat!(module_path!(), "::caller_name"),
    concat!(module_path!(), "::caller_name_with"),
    concat!(module_path!(), "::call_stack"),
    concat!(module_path!(), "::call_stack_with"),
];

/**
One logical call-site record.

Any part may be missing when the platform can't resolve it.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Frame {
    /// Demangled, without the trailing hash.
    pub name: Option<String>,
    pub file: Option<PathBuf>,
    pub line: Option<u32>,
}

impl Frame {
    /// `file:line`, when both are known.
    pub fn location(&self) -> Option<String> {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => Some(format!("{}:{}", file.display(), line)),
            _ => None,
        }
    }
}

/**
Captures and symbolizes the current thread's stack.
*/
pub trait Symbolizer {
    /// All frames of the current thread, innermost first.
    fn capture(&self) -> Vec<Frame>;
}

/// Symbolizes with the platform's native facility, through the `backtrace` crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NativeSymbolizer;

impl Symbolizer for NativeSymbolizer {
    #[inline(never)]
    fn capture(&self) -> Vec<Frame> {
        let mut frames = Vec::new();
        backtrace::trace(|raw| {
            let before = frames.len();
            //called once per inlined function, innermost first
            backtrace::resolve_frame(raw, |symbol| {
                frames.push(Frame {
                    name: symbol.name().map(|name| format!("{:#}", name)),
                    file: symbol.filename().map(Path::to_path_buf),
                    line: symbol.lineno(),
                });
            });
            if frames.len() == before {
                frames.push(Frame::default());
            }
            true
        });
        frames
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum WalkError {
    /// The stack ends before `depth`.
    #[error("failed to retrieve caller frame {depth}")]
    MissingFrame { depth: usize },
    /// The frame at `depth` exists, but has no symbol or source location.
    #[error("failed to resolve caller frame {depth}")]
    Unresolved { depth: usize },
}

impl WalkError {
    pub fn depth(&self) -> usize {
        match self {
            WalkError::MissingFrame { depth } | WalkError::Unresolved { depth } => *depth,
        }
    }
}

/**
A [call_stack] that stopped early.

Keeps whatever was collected before the walk failed.
*/
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("call stack incomplete after {} frames", .partial.len())]
pub struct CallStackError {
    #[source]
    cause: WalkError,
    partial: Vec<String>,
}

impl CallStackError {
    pub fn cause(&self) -> WalkError {
        self.cause
    }

    /// Entries collected before the failure, immediate caller first.
    pub fn partial(&self) -> &[String] {
        &self.partial
    }

    pub fn into_partial(self) -> Vec<String> {
        self.partial
    }
}

//the frames outside the first run of entry points, or nothing if no entry point was captured
fn outside_entry_points(frames: &[Frame]) -> &[Frame] {
    let is_entry = |frame: &Frame| {
        frame
            .name
            .as_deref()
            .is_some_and(|name| ENTRY_POINTS.iter().any(|entry| *entry == name))
    };
    match frames.iter().position(is_entry) {
        Some(first) => {
            let run = frames[first..].iter().take_while(|&f| is_entry(f)).count();
            &frames[first + run..]
        }
        None => &[],
    }
}

/**
The qualified name of the function that called the calling function.

If `a` calls `b` and `b` calls `caller_name()`, the answer is `a`.  Closures count as
functions of their own.
*/
#[inline(never)]
pub fn caller_name() -> Result<String, WalkError> {
    caller_name_with(&NativeSymbolizer)
}

/// [caller_name] with an explicit [Symbolizer].
#[inline(never)]
pub fn caller_name_with(symbolizer: &dyn Symbolizer) -> Result<String, WalkError> {
    let frames = symbolizer.capture();
    let frame = outside_entry_points(&frames)
        .get(CALLER_DEPTH)
        .ok_or(WalkError::MissingFrame {
            depth: CALLER_DEPTH,
        })?;
    frame.name.clone().ok_or(WalkError::Unresolved {
        depth: CALLER_DEPTH,
    })
}

/**
`depth` call sites as `file:line`, walking outward from the immediate caller.

Entry 0 is where the immediate caller called `call_stack`, entry 1 is where *its* caller
called it, and so on.  If the stack is shallower than `depth`, or a frame can't be placed
in the source, the error carries the entries collected up to that point.
*/
#[inline(never)]
pub fn call_stack(depth: usize) -> Result<Vec<String>, CallStackError> {
    call_stack_with(&NativeSymbolizer, depth)
}

/// [call_stack] with an explicit [Symbolizer].
#[inline(never)]
pub fn call_stack_with(
    symbolizer: &dyn Symbolizer,
    depth: usize,
) -> Result<Vec<String>, CallStackError> {
    let frames = symbolizer.capture();
    let walk = outside_entry_points(&frames);
    let mut stack = Vec::with_capacity(depth.min(walk.len()));
    for at in 0..depth {
        let cause = match walk.get(at) {
            None => WalkError::MissingFrame { depth: at },
            Some(frame) => match frame.location() {
                Some(location) => {
                    stack.push(location);
                    continue;
                }
                None => WalkError::Unresolved { depth: at },
            },
        };
        return Err(CallStackError {
            cause,
            partial: stack,
        });
    }
    Ok(stack)
}
