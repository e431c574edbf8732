//! Core types shared by the formatter and the sinks

mod color;
mod level;

pub use color::Color;
pub use level::Level;
