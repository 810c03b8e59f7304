//! # Application Configuration
//!
//! Small YAML file controlling presentation details of the expense screens.
//! The file is optional; a missing file means defaults.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable pointing at an alternative config file
pub const CONFIG_PATH_ENV: &str = "EXPENSE_TRACKER_CONFIG";
const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Shown in the amount hint and the expense table
    pub currency_symbol: String,
    pub window_title: String,
    /// Images offered by the built-in image picker
    pub sample_images: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "R".to_string(),
            window_title: "Savings".to_string(),
            sample_images: vec![
                "https://picsum.photos/id/292/400/300".to_string(),
                "https://picsum.photos/id/1060/400/300".to_string(),
                "https://picsum.photos/id/431/400/300".to_string(),
            ],
        }
    }
}

impl AppConfig {
    /// Load from `$EXPENSE_TRACKER_CONFIG`, else the per-user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from_path(&path),
            None => {
                log::warn!("⚙️ No config directory available, using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`; defaults when the file does not exist
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("⚙️ No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        log::info!("⚙️ Loaded config from {}", path.display());
        Ok(config)
    }

    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("com", "example", "savings")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.yaml");

        let config = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.currency_symbol, "R");
    }

    #[test]
    fn test_partial_file_overrides_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "currency_symbol: \"$\"\nsample_images:\n  - file:///tmp/receipt.png\n").unwrap();

        let config = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.sample_images, vec!["file:///tmp/receipt.png".to_string()]);
        assert_eq!(config.window_title, "Savings");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        std::fs::write(&path, "sample_images: 12\n").unwrap();

        let err = AppConfig::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }
}
