//! Config management use case

use crate::domain::Theme;
use crate::error::{Result, SleepVaultError};
use crate::infrastructure::Config;
use std::path::PathBuf;
use std::str::FromStr;

/// Keys accepted by `config`
pub const CONFIG_KEYS: [&str; 3] = ["theme", "export_path", "dashboard_after_add"];

/// Service for reading and updating the config file
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Create a config service for a file, usually from `Config::locate`
    pub fn new(path: PathBuf) -> Self {
        ConfigService { path }
    }

    /// Get a single config value as stored in the file
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.list()?;

        match key {
            "theme" => Ok(config.theme.to_string()),
            "export_path" => Ok(config.export_path.display().to_string()),
            "dashboard_after_add" => Ok(config.dashboard_after_add.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value and write the file
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.list()?;

        match key {
            "theme" => {
                config.theme = Theme::from_str(value).map_err(SleepVaultError::Config)?;
            }
            "export_path" => {
                if value.trim().is_empty() {
                    return Err(SleepVaultError::Config(
                        "export_path cannot be empty".to_string(),
                    ));
                }
                config.export_path = PathBuf::from(value);
            }
            "dashboard_after_add" => {
                config.dashboard_after_add = value.parse().map_err(|_| {
                    SleepVaultError::Config(format!(
                        "dashboard_after_add must be true or false, got '{}'",
                        value
                    ))
                })?;
            }
            _ => return Err(unknown_key(key)),
        }

        config.save_to_file(&self.path)?;
        tracing::info!(key, value, path = %self.path.display(), "config updated");
        Ok(())
    }

    /// Load the file without environment overrides
    pub fn list(&self) -> Result<Config> {
        // Setting a value creates the file, so it need not exist yet
        Config::load_from_file(&self.path, false)
    }
}

fn unknown_key(key: &str) -> SleepVaultError {
    SleepVaultError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
