//! Platform directory resolution.

use std::path::PathBuf;

/// Get the snipstash configuration directory.
///
/// This follows XDG conventions on Linux/macOS:
/// - `$XDG_CONFIG_HOME/snipstash` if set
/// - `~/.config/snipstash` otherwise
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("snipstash"))
}

/// Get the snipstash data directory.
///
/// This follows XDG conventions:
/// - `$XDG_DATA_HOME/snipstash` if set
/// - `~/.local/share/snipstash` otherwise
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("snipstash"))
}

/// Get the default config file path.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_under_config_dir() {
        if let (Some(dir), Some(file)) = (config_dir(), config_file()) {
            assert!(file.starts_with(dir));
            assert_eq!(file.file_name().unwrap(), "config.json");
        }
    }
}
