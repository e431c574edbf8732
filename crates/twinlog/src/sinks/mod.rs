//! Output sinks
//!
//! A sink owns a writer and puts its own metadata (date, time and, for
//! files, the caller's source position) in front of every line.
//!
//! - `Sink`: the trait the logger dispatches to
//! - `LineSink`: header + line writer over any `io::Write`
//! - `SharedBuffer`: in-memory writer for capturing output

mod buffer;
mod line;
mod traits;

pub use buffer::SharedBuffer;
pub use line::{LineSink, SinkFlags};
pub use traits::{BoxedSink, Caller, Sink};
