//! twinlog
//!
//! Leveled logging to two sinks at once: an optional append-only file that
//! gets plain lines, and the console that gets color-coded ones.
//!
//! ```text
//! file:    2024/01/23 01:23:23 main.rs:42:  [ERROR] x
//! console: 2024/01/23 01:23:23 \x1b[31m [ERROR]\x1b[0m x
//! ```
//!
//! ## Levels
//!
//! `INFO`, `WARN`, `ERROR`, `FATAL`, `DEBUG` and `TIME`, matched without
//! regard to case. Anything else is logged as `[LOG]`. `TIME` is a
//! stopwatch: the first line reads `(start)`, later ones `(+1.234s)` until
//! [`DualLogger::reset_timer`] is called.
//!
//! ```rust,no_run
//! use twinlog::{dump, fatal, DualLogger};
//!
//! let logger = DualLogger::new("app.log")?;
//! logger.to_both("time", "load");
//! logger.to_both("info", "config loaded");
//! logger.to_both("time", "load");
//! dump!(logger, vec![1, 2, 3]);
//! fatal!(logger, "giving up after {} retries", 3);
//! # Ok::<(), twinlog::LoggerError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod sinks;
pub mod timing;
pub mod types;
mod logger;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use format::{Dump, Formatter};
pub use logger::{install, installed, DualLogger};
pub use sinks::{Sink, SharedBuffer};
pub use timing::Stopwatch;
pub use types::{Color, Level};
