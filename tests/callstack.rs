// SPDX-License-Identifier: MIT OR Apache-2.0

//! Walks real stacks.  Each helper keeps its call on the same line as the `line!()` it
//! records, so the expected `file:line` entries can be built without hardcoding numbers.
//! Results pass through `black_box` so optimized builds can't turn the calls into tail
//! calls and drop the frames being looked for.

use sevlog::callstack::{WalkError, call_stack, caller_name};
use std::hint::black_box;

type Lines = Vec<u32>;

#[inline(never)]
fn f1(lines: &mut Lines, depth: usize) -> Vec<String> {
    lines.push(line!()); black_box(f2(lines, depth))
}

#[inline(never)]
fn f2(lines: &mut Lines, depth: usize) -> Vec<String> {
    lines.push(line!()); black_box(f3(lines, depth))
}

#[inline(never)]
fn f3(lines: &mut Lines, depth: usize) -> Vec<String> {
    lines.push(line!()); black_box(call_stack(depth)).expect("stack should be deep enough")
}

fn location(line: u32) -> String {
    format!("{}:{}", file!(), line)
}

#[test]
fn stack_walks_outward_from_the_caller() {
    let mut lines = Lines::new();
    let stack = black_box(f1(&mut lines, 4));
    assert_eq!(stack.len(), 4);

    //innermost first: f3, f2, f1, then this test
    lines.reverse();
    for (entry, line) in stack.iter().zip(&lines) {
        assert!(
            entry.ends_with(&location(*line)),
            "{entry} should end with {}",
            location(*line)
        );
    }
}

#[test]
fn depth_zero_is_empty() {
    assert_eq!(call_stack(0).unwrap(), Vec::<String>::new());
}

#[test]
fn too_deep_returns_partial() {
    let err = call_stack(100_000).unwrap_err();
    let partial = err.partial();
    assert!(!partial.is_empty());
    assert!(partial.len() < 100_000);
    assert_eq!(err.cause().depth(), partial.len());
    assert!(matches!(
        err.cause(),
        WalkError::MissingFrame { .. } | WalkError::Unresolved { .. }
    ));
    //the first entry is this test's own call site
    assert!(partial[0].contains(file!()), "{partial:?}");
}

#[inline(never)]
fn outer() -> String {
    black_box(inner())
}

#[inline(never)]
fn inner() -> String {
    black_box(caller_name()).expect("caller should resolve")
}

#[test]
fn caller_name_is_the_callers_caller() {
    let name = outer();
    assert_eq!(name.rsplit("::").next(), Some("outer"), "{name}");
}
