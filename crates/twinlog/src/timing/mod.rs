//! Stopwatch backing the TIME level
//!
//! - `Clock`: source of instants (`SystemClock`, or `ManualClock` in tests)
//! - `Stopwatch`: a single baseline, set on first lap and cleared on reset
//! - `format_duration`: millisecond-truncated durations as `1.234s`, `500ms`, ...

mod clock;
mod duration;
mod stopwatch;

pub use clock::{Clock, ManualClock, SystemClock};
pub use duration::{format_duration, truncate_to_millis};
pub use stopwatch::{Lap, Stopwatch};
