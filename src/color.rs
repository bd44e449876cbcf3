// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal color codes placed in front of the severity label.

use std::fmt::Display;

/// The escape sequence that ends a colored label.
pub const RESET: &str = "\x1b[0m";

/**
An ANSI foreground color.

[Color::None] renders as the empty string and also suppresses the trailing [RESET]
when a line is rendered.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    None,
    Red,
    Orange,
    Blue,
    Grey,
    Green,
    Magenta,
}

impl Color {
    /// The escape sequence for this color.
    pub const fn code(self) -> &'static str {
        match self {
            Color::None => "",
            Color::Red => "\x1b[31m",
            Color::Orange => "\x1b[33m",
            Color::Blue => "\x1b[36m",
            Color::Grey => "\x1b[37m",
            Color::Green => "\x1b[32m",
            Color::Magenta => "\x1b[95m",
        }
    }

    /// The escape sequence that closes this color, empty for [Color::None].
    pub const fn reset(self) -> &'static str {
        match self {
            Color::None => "",
            _ => RESET,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
