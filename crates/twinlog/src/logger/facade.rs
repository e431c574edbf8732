//! Bridge from the `log` crate facade
//!
//! Once installed, `log::info!` and friends go to both sinks just like
//! [`DualLogger::to_both`], with the file sink reporting the position of
//! the `log` macro call.

use log::{LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;

use super::dual::DualLogger;
use crate::error::{LoggerError, LoggerResult};
use crate::sinks::Caller;
use crate::types::Level;

/// Logger registered with the `log` facade
static INSTALLED: OnceCell<&'static DualLogger> = OnceCell::new();

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}

impl Log for DualLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = Level::from(record.level());
        let message = record.args().to_string();
        let caller = record
            .file()
            .zip(record.line())
            .map(|(file, line)| Caller::new(file, line));

        self.file_at(level, &message, caller);
        self.screen_at(level, &message, caller);
    }

    fn flush(&self) {}
}

/// Register `logger` as the global `log` backend
///
/// Returns the installed logger so the caller can keep using the TIME,
/// `fatal` and `debug` operations on it. Fails with
/// [`LoggerError::AlreadyInstalled`] if any global logger is already set.
pub fn install(logger: DualLogger, max_level: LevelFilter) -> LoggerResult<&'static DualLogger> {
    if INSTALLED.get().is_some() {
        return Err(LoggerError::AlreadyInstalled);
    }

    let logger: &'static DualLogger = Box::leak(Box::new(logger));
    log::set_logger(logger).map_err(|_| LoggerError::AlreadyInstalled)?;
    log::set_max_level(max_level);
    let _ = INSTALLED.set(logger);

    Ok(logger)
}

/// The logger registered by [`install`], if any
pub fn installed() -> Option<&'static DualLogger> {
    INSTALLED.get().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::{LineSink, SharedBuffer, SinkFlags};

    #[test]
    fn test_level_mapping() {
        assert_eq!(Level::from(log::Level::Error), Level::Error);
        assert_eq!(Level::from(log::Level::Warn), Level::Warn);
        assert_eq!(Level::from(log::Level::Info), Level::Info);
        assert_eq!(Level::from(log::Level::Debug), Level::Debug);
        assert_eq!(Level::from(log::Level::Trace), Level::Debug);
    }

    #[test]
    fn test_record_reaches_both_sinks() {
        let file = SharedBuffer::new();
        let console = SharedBuffer::new();
        let logger = DualLogger::with_sinks(
            Some(Box::new(LineSink::new("file", file.clone(), SinkFlags::FILE))),
            Box::new(LineSink::new("console", console.clone(), SinkFlags::NONE)),
        );

        logger.log(
            &Record::builder()
                .level(log::Level::Warn)
                .args(format_args!("queue at {}%", 90))
                .file(Some("src/worker/queue.rs"))
                .line(Some(17))
                .build(),
        );

        assert!(file.contents().ends_with(" queue.rs:17:   [WARN] queue at 90%\n"));
        assert_eq!(console.lines(), vec!["\x1b[33m  [WARN]\x1b[0m queue at 90%"]);
    }

    #[test]
    fn test_record_without_location() {
        let file = SharedBuffer::new();
        let logger = DualLogger::with_sinks(
            Some(Box::new(LineSink::new("file", file.clone(), SinkFlags::FILE))),
            Box::new(LineSink::new("console", SharedBuffer::new(), SinkFlags::NONE)),
        );

        logger.log(&Record::builder().level(log::Level::Info).args(format_args!("up")).build());

        assert!(file.contents().ends_with(" ???:0:   [INFO] up\n"));
    }
}
