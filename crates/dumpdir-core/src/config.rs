//! Optional configuration loaded from a TOML file.
//!
//! Defaults reproduce the fixed output format, so a config file is only
//! needed to change it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> CoreResult<Self> {
        toml::from_str(content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// Settings for the printed blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Number of `-` characters in each separator line.
    #[serde(default = "default_separator_width")]
    pub separator_width: usize,
    /// Print files whose name starts with `.`.
    #[serde(default = "default_true")]
    pub show_hidden: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator_width: default_separator_width(),
            show_hidden: true,
        }
    }
}

fn default_separator_width() -> usize {
    40
}

fn default_true() -> bool {
    true
}
