//! YAML / environment logger settings

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LoggerError, LoggerResult};

/// Environment variable naming the log file; empty disables the file sink
pub const FILE_ENV_VAR: &str = "TWINLOG_FILE";

/// Logger settings
///
/// ```yaml
/// # ~/.config/twinlog/config.yaml
/// file: /var/log/app.log
/// ```
///
/// # Example
///
/// ```
/// use twinlog::LoggerConfig;
///
/// let config = LoggerConfig::from_yaml_str("file: app.log").unwrap();
/// assert_eq!(config.file_path().unwrap().to_str(), Some("app.log"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Log file path; absent or empty means console only
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl LoggerConfig {
    /// Config with a log file
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
        }
    }

    /// Log file path, `None` when unset or empty
    pub fn file_path(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    /// Parse YAML; an empty document yields the defaults
    pub fn from_yaml_str(content: &str) -> LoggerResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| LoggerError::Config(format!("Failed to parse YAML: {}", e)))
    }

    /// Load from a YAML file; a missing file yields the defaults
    pub fn load(path: impl AsRef<Path>) -> LoggerResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Serialize to YAML
    pub fn to_yaml_string(&self) -> LoggerResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| LoggerError::Config(format!("Failed to serialize YAML: {}", e)))
    }

    /// Settings from [`FILE_ENV_VAR`], if it is set
    pub fn from_env() -> Option<Self> {
        env::var_os(FILE_ENV_VAR).map(|value| Self {
            file: Some(PathBuf::from(value)),
        })
    }

    /// User-level config file (`<config dir>/twinlog/config.yaml`)
    pub fn user_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("twinlog").join("config.yaml"))
    }

    /// Environment first, then the user config file, then defaults
    pub fn resolve() -> LoggerResult<Self> {
        if let Some(config) = Self::from_env() {
            return Ok(config);
        }
        match Self::user_path() {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
