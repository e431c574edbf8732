//! Log levels and their fixed-width prefixes

use std::fmt;

use super::Color;

/// Severity or category of a log line
///
/// Parsing never fails: anything that is not a known level name becomes
/// [`Level::Log`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Warn,
    Error,
    Fatal,
    Debug,
    /// Stopwatch level, rendered as `[TIMING]`
    Time,
    /// Catch-all for unrecognized level names
    Log,
}

impl Level {
    /// Match a level name, ignoring case
    pub fn parse(name: &str) -> Self {
        match name.to_uppercase().as_str() {
            "INFO" => Level::Info,
            "WARN" => Level::Warn,
            "ERROR" => Level::Error,
            "FATAL" => Level::Fatal,
            "DEBUG" => Level::Debug,
            "TIME" => Level::Time,
            _ => Level::Log,
        }
    }

    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Debug => "DEBUG",
            Level::Time => "TIME",
            Level::Log => "LOG",
        }
    }

    /// Bracketed prefix, right-aligned to eight columns
    pub fn prefix(&self) -> &'static str {
        match self {
            Level::Info => "  [INFO]",
            Level::Warn => "  [WARN]",
            Level::Error => " [ERROR]",
            Level::Fatal => " [FATAL]",
            Level::Debug => " [DEBUG]",
            Level::Time => "[TIMING]",
            Level::Log => "   [LOG]",
        }
    }

    /// Console color for the prefix, `None` for uncolored levels
    ///
    /// INFO is cyan and TIME is green.
    pub fn color(&self) -> Option<Color> {
        match self {
            Level::Info => Some(Color::Cyan),
            Level::Warn => Some(Color::Yellow),
            Level::Error | Level::Fatal => Some(Color::Red),
            Level::Debug => Some(Color::Blue),
            Level::Time => Some(Color::Green),
            Level::Log => None,
        }
    }
}

impl From<&str> for Level {
    fn from(name: &str) -> Self {
        Level::parse(name)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Level::parse("info"), Level::Info);
        assert_eq!(Level::parse("Warn"), Level::Warn);
        assert_eq!(Level::parse("ERROR"), Level::Error);
        assert_eq!(Level::parse("fAtAl"), Level::Fatal);
        assert_eq!(Level::parse("debug"), Level::Debug);
        assert_eq!(Level::parse("time"), Level::Time);
    }

    #[test]
    fn test_unknown_is_log() {
        assert_eq!(Level::parse("trace"), Level::Log);
        assert_eq!(Level::parse(""), Level::Log);
        assert_eq!(Level::parse("TIMING"), Level::Log);
        assert_eq!(Level::Log.color(), None);
    }

    #[test]
    fn test_prefixes_are_aligned() {
        for level in [
            Level::Info,
            Level::Warn,
            Level::Error,
            Level::Fatal,
            Level::Debug,
            Level::Time,
            Level::Log,
        ] {
            assert_eq!(level.prefix().len(), 8, "{level}");
        }
    }
}
