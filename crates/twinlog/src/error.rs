//! Error types for logger construction and configuration

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a logger
///
/// Only construction and configuration can fail. Once a [`DualLogger`]
/// exists every logging call is best-effort and never reports an error.
///
/// [`DualLogger`]: crate::DualLogger
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Failed to open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("A global logger is already installed")]
    AlreadyInstalled,
}

pub type LoggerResult<T> = Result<T, LoggerError>;
