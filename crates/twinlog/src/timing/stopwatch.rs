//! Single-baseline stopwatch

use std::fmt;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use super::clock::{Clock, SystemClock};
use super::duration::{format_duration, truncate_to_millis};

/// Result of reading the stopwatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lap {
    /// No baseline existed; this reading set it
    Start,
    /// Time since the baseline, truncated to whole milliseconds
    Elapsed(Duration),
}

impl Lap {
    /// Suffix appended to a TIME message: ` (start)` or ` (+1.234s)`
    pub fn suffix(&self) -> String {
        format!(" ({self})")
    }
}

impl fmt::Display for Lap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lap::Start => f.write_str("start"),
            Lap::Elapsed(d) => write!(f, "+{}", format_duration(*d)),
        }
    }
}

/// Stopwatch with one baseline instant
///
/// The first [`lap`](Stopwatch::lap) sets the baseline; later laps measure
/// against it without moving it. [`reset`](Stopwatch::reset) clears it.
pub struct Stopwatch {
    clock: Box<dyn Clock>,
    baseline: Mutex<Option<Instant>>,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Stopwatch on the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Stopwatch on a custom clock
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            baseline: Mutex::new(None),
        }
    }

    /// Read the stopwatch, setting the baseline if it is unset
    pub fn lap(&self) -> Lap {
        let now = self.clock.now();
        let mut baseline = self.baseline.lock();
        match *baseline {
            None => {
                *baseline = Some(now);
                Lap::Start
            }
            Some(start) => Lap::Elapsed(truncate_to_millis(now.saturating_duration_since(start))),
        }
    }

    /// Clear the baseline so the next lap starts over
    pub fn reset(&self) {
        *self.baseline.lock() = None;
    }

    /// Whether a baseline is currently set
    pub fn is_running(&self) -> bool {
        self.baseline.lock().is_some()
    }
}

impl fmt::Debug for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stopwatch")
            .field("is_running", &self.is_running())
            .finish()
    }
}
