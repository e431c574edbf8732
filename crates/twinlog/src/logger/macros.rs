//! Convenience macros over `DualLogger`

/// Log a formatted FATAL line to both sinks and exit with status 1
///
/// ```no_run
/// use twinlog::{fatal, DualLogger};
///
/// let logger = DualLogger::console_only();
/// let path = "/etc/app.yaml";
/// fatal!(logger, "cannot read {}: {}", path, "permission denied");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatal(::std::format_args!($($arg)*))
    };
}

/// Dump one or more values to the console at DEBUG level
///
/// ```
/// use twinlog::{dump, DualLogger};
///
/// let logger = DualLogger::console_only();
/// let retries = vec![100, 250, 500];
/// dump!(logger, retries, "backoff", Some(3));
/// ```
#[macro_export]
macro_rules! dump {
    ($logger:expr, $($value:expr),+ $(,)?) => {{
        let mut dump = $crate::Dump::new();
        $( dump.push(&$value); )+
        $logger.debug(&dump)
    }};
}

#[cfg(test)]
mod tests {
    use crate::sinks::{LineSink, SharedBuffer, SinkFlags};
    use crate::DualLogger;

    #[test]
    fn test_dump_macro() {
        let console = SharedBuffer::new();
        let logger = DualLogger::with_sinks(
            None,
            Box::new(LineSink::new("console", console.clone(), SinkFlags::NONE)),
        );

        let name = "worker";
        dump!(logger, name, 7u16,);

        let contents = console.contents();
        assert!(contents.contains("(&str) \"worker\""));
        assert!(contents.contains("(u16) 7"));
    }
}
