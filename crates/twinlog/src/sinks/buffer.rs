//! In-memory writer for capturing sink output

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Growable byte buffer shared between clones
///
/// Hand one clone to a [`LineSink`](super::LineSink) and read the output
/// back through another.
///
/// # Example
///
/// ```
/// use twinlog::sinks::{LineSink, SharedBuffer, Sink, SinkFlags};
///
/// let buffer = SharedBuffer::new();
/// let sink = LineSink::new("capture", buffer.clone(), SinkFlags::NONE);
/// sink.write_line("hello", None);
/// assert_eq!(buffer.lines(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Written lines without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
