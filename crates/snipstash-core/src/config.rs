//! Configuration.
//!
//! Presentation policy flags loaded from a JSON file. A missing config
//! file yields defaults; malformed JSON is an error.

use crate::error::{ConfigError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI policy flags.
    pub ui: UiConfig,
}

/// Presentation policy flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show a notice after copying a snippet to the clipboard.
    pub show_copy_notification: bool,
    /// Ask for confirmation before deleting a snippet or a file.
    pub show_delete_confirm_dialog: bool,
    /// Show the snippet creation time.
    pub show_snippet_create_time: bool,
    /// Show the snippet last-update time.
    pub show_snippet_update_time: bool,
    /// Show the snippet copy count.
    pub show_snippet_copy_count: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_copy_notification: true,
            show_delete_confirm_dialog: true,
            show_snippet_create_time: true,
            show_snippet_update_time: true,
            show_snippet_copy_count: true,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// Returns defaults if the file doesn't exist.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: Config =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidJson {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(config)
    }

    /// Load from the default platform config file, or defaults if the
    /// platform has no config directory.
    pub fn load_default() -> CoreResult<Self> {
        match snipstash_util::path::config_file() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}
