//! Line formatting
//!
//! `Formatter` turns a level and message into `"<prefix> <message>"`,
//! optionally colored. `Dump` renders arbitrary values for DEBUG lines.

mod dump;
mod formatter;

pub use dump::Dump;
pub use formatter::Formatter;
