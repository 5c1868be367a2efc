//! Configuration management

use crate::domain::Theme;
use crate::error::{Result, SleepVaultError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "sleepvault.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub export_path: PathBuf,
    pub dashboard_after_add: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: Theme::default(),
            export_path: PathBuf::from("sleep_log.csv"),
            dashboard_after_add: false,
        }
    }
}

impl Config {
    /// Resolve which file to use: an explicit path, then SLEEPVAULT_CONFIG,
    /// then the default file name. The flag says whether it was requested.
    pub fn locate(explicit: Option<&Path>) -> (PathBuf, bool) {
        if let Some(path) = explicit {
            return (path.to_path_buf(), true);
        }
        if let Ok(path) = std::env::var("SLEEPVAULT_CONFIG") {
            return (PathBuf::from(path), true);
        }
        (PathBuf::from(DEFAULT_CONFIG_FILE), false)
    }

    /// Load configuration, then apply the SLEEPVAULT_THEME override.
    ///
    /// A missing file falls back to defaults unless it was explicitly
    /// requested.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (path, required) = Self::locate(explicit);
        let mut config = Self::load_from_file(&path, required)?;

        if let Ok(theme) = std::env::var("SLEEPVAULT_THEME") {
            config.theme = Theme::from_str(&theme).map_err(SleepVaultError::Config)?;
        }

        tracing::debug!(?config, path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path, required: bool) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
                return Ok(Config::default());
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SleepVaultError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Err(e) => return Err(SleepVaultError::Io(e)),
        };

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }
}
