//! ANSI color escapes used on the console sink

use std::fmt;

/// Terminal colors the console sink knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Reset,
    Red,
    Green,
    Cyan,
    Yellow,
    /// Bright blue (`94`), distinct from the plain `34` blue
    Blue,
}

impl Color {
    /// The raw escape sequence for this color
    pub const fn escape(self) -> &'static str {
        match self {
            Color::Reset => "\x1b[0m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Cyan => "\x1b[36m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[94m",
        }
    }

    /// Wrap `text` in this color followed by a reset
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.escape(), text, Color::Reset.escape())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.escape())
    }
}
