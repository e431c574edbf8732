//! Logger configuration
//!
//! Sources, highest precedence first:
//! - `TWINLOG_FILE` environment variable
//! - user config file (`~/.config/twinlog/config.yaml`)
//! - defaults (console only)

mod settings;

pub use settings::{LoggerConfig, FILE_ENV_VAR};
