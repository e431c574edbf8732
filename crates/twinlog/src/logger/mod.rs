//! The dual-sink logger
//!
//! - `DualLogger`: dispatch to the file sink, the console sink, or both
//! - `log` facade bridge: `install` / `installed`
//! - `fatal!` and `dump!` convenience macros

mod dual;
mod facade;
mod macros;

pub use dual::DualLogger;
pub use facade::{install, installed};
