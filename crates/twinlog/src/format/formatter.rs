//! Level prefix formatting with the TIME stopwatch

use crate::timing::Stopwatch;
use crate::types::Level;

/// Formats messages with their level prefix
///
/// The TIME level reads the formatter's stopwatch, so formatting a TIME
/// line is not free of side effects: the first one sets the baseline and
/// every later one reports the time since it.
///
/// # Example
///
/// ```
/// use twinlog::Formatter;
///
/// let formatter = Formatter::new();
/// assert_eq!(formatter.format("warn", "disk low", false), "  [WARN] disk low");
/// assert_eq!(formatter.format("TIME", "boot", false), "[TIMING] boot (start)");
/// ```
#[derive(Debug, Default)]
pub struct Formatter {
    stopwatch: Stopwatch,
}

impl Formatter {
    /// Formatter with a system-clock stopwatch
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter reading the given stopwatch
    pub fn with_stopwatch(stopwatch: Stopwatch) -> Self {
        Self { stopwatch }
    }

    /// Format a message for a level given by name (case-insensitive)
    pub fn format(&self, level: &str, message: &str, colorize: bool) -> String {
        self.format_level(Level::parse(level), message, colorize)
    }

    /// Format a message for an already-parsed level
    pub fn format_level(&self, level: Level, message: &str, colorize: bool) -> String {
        let prefix = match level.color() {
            Some(color) if colorize => color.paint(level.prefix()),
            _ => level.prefix().to_string(),
        };

        if level == Level::Time {
            let lap = self.stopwatch.lap();
            format!("{} {}{}", prefix, message, lap.suffix())
        } else {
            format!("{} {}", prefix, message)
        }
    }

    /// The stopwatch used by TIME lines
    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    /// Clear the TIME baseline
    pub fn reset_timer(&self) {
        self.stopwatch.reset();
    }
}
