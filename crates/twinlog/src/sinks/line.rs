//! Header-prefixing line writer

use std::fmt::Write as _;
use std::fs::{File, OpenOptions};
use std::io::{self, Stdout, Write};
use std::path::Path;

use chrono::{DateTime, Local};
use parking_lot::Mutex;

use super::traits::{Caller, Sink};
use crate::error::{LoggerError, LoggerResult};

/// Which metadata a [`LineSink`] puts in front of each line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkFlags {
    /// Local date as `2024/01/23`
    pub date: bool,
    /// Local time as `01:23:23`
    pub time: bool,
    /// Caller position as `file.rs:23:`
    pub short_file: bool,
}

impl SinkFlags {
    pub const NONE: SinkFlags = SinkFlags { date: false, time: false, short_file: false };
    /// Header used by the log file sink
    pub const FILE: SinkFlags = SinkFlags { date: true, time: true, short_file: true };
    /// Header used by the console sink
    pub const CONSOLE: SinkFlags = SinkFlags { date: true, time: true, short_file: false };
}

/// Writes one header-prefixed line per call
///
/// Each line is assembled in full and handed to the writer with a single
/// `write_all` under the sink's lock, so concurrent lines never interleave.
pub struct LineSink<W: Write + Send> {
    name: String,
    flags: SinkFlags,
    writer: Mutex<W>,
}

impl<W: Write + Send> LineSink<W> {
    pub fn new(name: impl Into<String>, writer: W, flags: SinkFlags) -> Self {
        Self {
            name: name.into(),
            flags,
            writer: Mutex::new(writer),
        }
    }

    pub fn flags(&self) -> SinkFlags {
        self.flags
    }

    /// Build the full line, header included, as it will be written
    pub fn render(&self, at: DateTime<Local>, line: &str, caller: Option<Caller<'_>>) -> String {
        let mut out = String::with_capacity(line.len() + 32);

        if self.flags.date {
            let _ = write!(out, "{} ", at.format("%Y/%m/%d"));
        }
        if self.flags.time {
            let _ = write!(out, "{} ", at.format("%H:%M:%S"));
        }
        if self.flags.short_file {
            match caller {
                Some(caller) => {
                    let _ = write!(out, "{}:{}: ", caller.short_file(), caller.line);
                }
                None => out.push_str("???:0: "),
            }
        }

        out.push_str(line);
        if !line.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

impl LineSink<File> {
    /// Open `path` for appending, creating it if needed
    pub fn append_file(path: impl AsRef<Path>) -> LoggerResult<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LoggerError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::new("file", file, SinkFlags::FILE))
    }
}

impl LineSink<Stdout> {
    /// Console sink on standard output
    pub fn stdout() -> Self {
        Self::new("console", io::stdout(), SinkFlags::CONSOLE)
    }
}

impl<W: Write + Send> Sink for LineSink<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_line(&self, line: &str, caller: Option<Caller<'_>>) {
        let rendered = self.render(Local::now(), line, caller);
        let mut writer = self.writer.lock();
        let _ = writer.write_all(rendered.as_bytes());
        let _ = writer.flush();
    }
}

impl<W: Write + Send> std::fmt::Debug for LineSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineSink")
            .field("name", &self.name)
            .field("flags", &self.flags)
            .finish()
    }
}
