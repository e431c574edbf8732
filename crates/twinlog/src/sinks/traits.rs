//! Sink trait definition

use std::panic::Location;

/// Source position of a logging call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl<'a> Caller<'a> {
    pub fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// File name without its directories
    pub fn short_file(&self) -> &'a str {
        self.file
            .rsplit(|c: char| c == '/' || c == '\\')
            .next()
            .unwrap_or(self.file)
    }
}

impl From<&'static Location<'static>> for Caller<'static> {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Line-oriented output destination
///
/// Implementations:
/// - `LineSink<File>`: append-only log file, header `date time file:line: `
/// - `LineSink<Stdout>`: console, header `date time `
/// - `LineSink<SharedBuffer>`: in-memory capture for tests
///
/// Writes are best-effort: implementations swallow I/O errors.
pub trait Sink: Send + Sync {
    /// Human-readable name of this sink
    fn name(&self) -> &str;

    /// Write one line, prefixed with the sink's own metadata
    fn write_line(&self, line: &str, caller: Option<Caller<'_>>);
}

/// Type alias for a boxed sink
pub type BoxedSink = Box<dyn Sink>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_file() {
        assert_eq!(Caller::new("src/logger/dual.rs", 10).short_file(), "dual.rs");
        assert_eq!(Caller::new("C:\\app\\main.rs", 1).short_file(), "main.rs");
        assert_eq!(Caller::new("main.rs", 1).short_file(), "main.rs");
    }

    #[test]
    fn test_from_location() {
        let caller = Caller::from(Location::caller());
        assert!(caller.file.ends_with(".rs"));
        assert!(caller.line > 0);
    }
}
