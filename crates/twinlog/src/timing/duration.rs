//! Duration rendering for TIME lines

use std::fmt::Write;
use std::time::Duration;

const MILLIS_PER_SECOND: u128 = 1_000;
const MILLIS_PER_MINUTE: u128 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u128 = 60 * MILLIS_PER_MINUTE;

/// Drop everything below one millisecond
pub fn truncate_to_millis(duration: Duration) -> Duration {
    let millis = duration.as_millis();
    Duration::new(
        (millis / MILLIS_PER_SECOND) as u64,
        ((millis % MILLIS_PER_SECOND) as u32) * 1_000_000,
    )
}

/// Render a duration at millisecond precision
///
/// Sub-second values print as `500ms`, longer ones as `[<h>h][<m>m]<s>[.<frac>]s`
/// with trailing zeros dropped from the fraction, zero prints as `0s`.
///
/// ```
/// use std::time::Duration;
/// use twinlog::timing::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(1234)), "1.234s");
/// assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_millis();
    if total == 0 {
        return "0s".to_string();
    }
    if total < MILLIS_PER_SECOND {
        return format!("{total}ms");
    }

    let hours = total / MILLIS_PER_HOUR;
    let minutes = (total % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
    let seconds = (total % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND;
    let millis = total % MILLIS_PER_SECOND;

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    let _ = write!(out, "{seconds}");
    if millis > 0 {
        let frac = format!("{millis:03}");
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out.push('s');
    out
}
