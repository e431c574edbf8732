//! File + console logger

use std::fmt;
use std::panic::Location;
use std::path::Path;

use crate::config::LoggerConfig;
use crate::error::LoggerResult;
use crate::format::{Dump, Formatter};
use crate::sinks::{BoxedSink, Caller, LineSink};
use crate::timing::Stopwatch;
use crate::types::Level;

/// Exit status used by [`DualLogger::fatal`]
const FATAL_EXIT_CODE: i32 = 1;

/// Logger writing plain lines to a file and colored lines to the console
///
/// The file sink is optional; without it every file-directed call is a
/// silent no-op. The console sink always exists.
///
/// Levels are given by name and matched case-insensitively. Unknown names
/// are logged with the `[LOG]` prefix.
///
/// # Example
///
/// ```no_run
/// use twinlog::DualLogger;
///
/// let logger = DualLogger::new("/var/log/app.log")?;
/// logger.to_both("info", "service started");
/// logger.to_screen("warn", "disk low");
/// logger.to_both("time", "warmup");   // ... (start)
/// logger.to_both("time", "ready");    // ... (+1.234s)
/// # Ok::<(), twinlog::LoggerError>(())
/// ```
pub struct DualLogger {
    file: Option<BoxedSink>,
    console: BoxedSink,
    formatter: Formatter,
}

impl DualLogger {
    /// Create a logger, opening `path` for appending when it is non-empty
    ///
    /// An empty path disables the file sink without touching the
    /// filesystem. A path that cannot be opened returns
    /// [`LoggerError::Open`](crate::LoggerError::Open).
    pub fn new(path: impl AsRef<Path>) -> LoggerResult<Self> {
        let path = path.as_ref();
        let file: Option<BoxedSink> = if path.as_os_str().is_empty() {
            None
        } else {
            Some(Box::new(LineSink::append_file(path)?))
        };

        Ok(Self::with_sinks(file, Box::new(LineSink::stdout())))
    }

    /// Logger with only the console sink
    pub fn console_only() -> Self {
        Self::with_sinks(None, Box::new(LineSink::stdout()))
    }

    /// Logger over caller-provided sinks
    pub fn with_sinks(file: Option<BoxedSink>, console: BoxedSink) -> Self {
        Self {
            file,
            console,
            formatter: Formatter::new(),
        }
    }

    /// Build from a [`LoggerConfig`]
    pub fn from_config(config: &LoggerConfig) -> LoggerResult<Self> {
        match config.file_path() {
            Some(path) => Self::new(path),
            None => Ok(Self::console_only()),
        }
    }

    /// Replace the stopwatch used by TIME lines
    pub fn with_stopwatch(mut self, stopwatch: Stopwatch) -> Self {
        self.formatter = Formatter::with_stopwatch(stopwatch);
        self
    }

    /// Whether a file sink is attached
    pub fn has_file_sink(&self) -> bool {
        self.file.is_some()
    }

    /// The formatter shared by both sinks
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Log an uncolored line to the file sink, if there is one
    #[track_caller]
    pub fn to_file(&self, level: impl Into<Level>, message: &str) {
        self.file_at(level.into(), message, Some(Caller::from(Location::caller())));
    }

    /// Log a colored line to the console
    #[track_caller]
    pub fn to_screen(&self, level: impl Into<Level>, message: &str) {
        self.screen_at(level.into(), message, Some(Caller::from(Location::caller())));
    }

    /// Log to the file sink, then to the console
    #[track_caller]
    pub fn to_both(&self, level: impl Into<Level>, message: &str) {
        let level = level.into();
        let caller = Caller::from(Location::caller());
        self.file_at(level, message, Some(caller));
        self.screen_at(level, message, Some(caller));
    }

    /// Clear the TIME baseline so the next TIME line reads `(start)`
    pub fn reset_timer(&self) {
        self.formatter.reset_timer();
    }

    /// Log a FATAL line to both sinks and exit the process with status 1
    ///
    /// Prefer the [`fatal!`](crate::fatal) macro, which builds the arguments.
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        let caller = Caller::from(Location::caller());
        self.file_at(Level::Fatal, &message, Some(caller));
        self.screen_at(Level::Fatal, &message, Some(caller));
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Send a value dump to the console at DEBUG level
    ///
    /// Dumps never reach the file sink. See also the [`dump!`](crate::dump) macro.
    #[track_caller]
    pub fn debug(&self, dump: &Dump) {
        let caller = Caller::from(Location::caller());
        self.screen_at(Level::Debug, &dump.to_string(), Some(caller));
    }

    pub(crate) fn file_at(&self, level: Level, message: &str, caller: Option<Caller<'_>>) {
        if let Some(sink) = &self.file {
            let line = self.formatter.format_level(level, message, false);
            sink.write_line(&line, caller);
        }
    }

    pub(crate) fn screen_at(&self, level: Level, message: &str, caller: Option<Caller<'_>>) {
        let line = self.formatter.format_level(level, message, true);
        self.console.write_line(line.trim(), caller);
    }
}

impl fmt::Debug for DualLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DualLogger")
            .field("file", &self.file.as_ref().map(|s| s.name().to_string()))
            .field("console", &self.console.name())
            .field("formatter", &self.formatter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::{SharedBuffer, SinkFlags};
    use crate::timing::ManualClock;
    use std::time::Duration;

    struct Capture {
        file: SharedBuffer,
        console: SharedBuffer,
    }

    fn capture_logger(with_file: bool) -> (DualLogger, Capture) {
        let file = SharedBuffer::new();
        let console = SharedBuffer::new();
        let file_sink: Option<BoxedSink> = if with_file {
            Some(Box::new(LineSink::new("file", file.clone(), SinkFlags::NONE)))
        } else {
            None
        };
        let logger = DualLogger::with_sinks(
            file_sink,
            Box::new(LineSink::new("console", console.clone(), SinkFlags::NONE)),
        );
        (logger, Capture { file, console })
    }

    #[test]
    fn test_to_both_error() {
        let (logger, capture) = capture_logger(true);

        logger.to_both("ERROR", "x");

        assert_eq!(capture.file.lines(), vec![" [ERROR] x"]);
        assert_eq!(capture.console.lines(), vec!["\x1b[31m [ERROR]\x1b[0m x"]);
    }

    #[test]
    fn test_to_screen_warn_without_file() {
        let (logger, capture) = capture_logger(false);

        logger.to_screen("WARN", "disk low");

        assert_eq!(capture.console.lines(), vec!["\x1b[33m  [WARN]\x1b[0m disk low"]);
        assert!(capture.file.is_empty());
    }

    #[test]
    fn test_to_screen_trims_uncolored_padding() {
        let (logger, capture) = capture_logger(false);

        logger.to_screen("whatever", "m");

        assert_eq!(capture.console.lines(), vec!["[LOG] m"]);
    }

    #[test]
    fn test_to_file_without_sink_is_noop() {
        let (logger, capture) = capture_logger(false);

        logger.to_file("INFO", "nothing");
        logger.to_file("TIME", "nothing");

        assert!(capture.file.is_empty());
        assert!(capture.console.is_empty());
        // the stopwatch is only read when a line is actually formatted
        assert!(!logger.formatter().stopwatch().is_running());
    }

    #[test]
    fn test_to_file_is_uncolored() {
        let (logger, capture) = capture_logger(true);

        logger.to_file("info", "hello");

        assert_eq!(capture.file.lines(), vec!["  [INFO] hello"]);
        assert!(capture.console.is_empty());
    }

    #[test]
    fn test_timing_through_both_sinks() {
        let clock = ManualClock::new();
        let (logger, capture) = capture_logger(true);
        let logger = logger.with_stopwatch(Stopwatch::with_clock(clock.clone()));

        logger.to_both("TIME", "load");
        clock.advance(Duration::from_millis(500));
        logger.to_file("TIME", "parsed");

        // file formats first and sets the baseline, console reads it right after
        assert_eq!(
            capture.file.lines(),
            vec!["[TIMING] load (start)", "[TIMING] parsed (+500ms)"]
        );
        assert_eq!(
            capture.console.lines(),
            vec!["\x1b[32m[TIMING]\x1b[0m load (+0s)"]
        );
    }

    #[test]
    fn test_reset_timer() {
        let (logger, capture) = capture_logger(false);

        logger.to_screen("time", "a");
        logger.reset_timer();
        logger.to_screen("time", "b");

        let lines = capture.console.lines();
        assert!(lines[0].ends_with("a (start)"));
        assert!(lines[1].ends_with("b (start)"));
    }

    #[test]
    fn test_debug_goes_to_console_only() {
        let (logger, capture) = capture_logger(true);

        logger.debug(&Dump::new().value(&vec![1, 2, 3]));

        assert!(capture.file.is_empty());
        let contents = capture.console.contents();
        assert!(contents.starts_with("\x1b[94m [DEBUG]\x1b[0m ("));
        assert!(contents.contains("Vec<i32>) ["));
        // trailing newline of the dump is trimmed before the sink adds its own
        assert!(contents.ends_with("]\n"));
    }

    #[test]
    fn test_level_enum_accepted() {
        let (logger, capture) = capture_logger(true);

        logger.to_file(Level::Fatal, "boom");

        assert_eq!(capture.file.lines(), vec![" [FATAL] boom"]);
    }

    #[test]
    fn test_debug_format() {
        let (logger, _capture) = capture_logger(true);
        let text = format!("{:?}", logger);
        assert!(text.contains("DualLogger"));
        assert!(text.contains("\"console\""));
    }
}
