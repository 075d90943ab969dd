//! # Application Configuration
//!
//! A single YAML file, `petshop_config.yaml`, in the platform config
//! directory (`~/.config/petshop/` on Linux).
//!
//! ```yaml
//! database_path: petshop.db
//! log_level: info
//! window_width: 1100.0
//! window_height: 750.0
//! ```
//!
//! The file is created with defaults on first run. A missing or unreadable
//! file never stops the app; defaults are used instead.
//!
//! Config is read before logging is set up, so loading does not log.
//! Callers get a [`ConfigSource`] back and log it once the logger exists.

use anyhow::Result;
use log::{debug, info, warn};
use std::fmt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "petshop_config.yaml";
const APP_DIR_NAME: &str = "petshop";

/// Where the settings in use came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Read from an existing file
    Loaded(PathBuf),
    /// The file was missing and has been written with defaults
    Created(PathBuf),
    /// Defaults are in use; the reason is kept for logging
    Fallback(String),
}

impl ConfigSource {
    /// Log the outcome: `info` for a file, `warn` for a fallback
    pub fn log(&self) {
        match self {
            ConfigSource::Fallback(_) => warn!("{}", self),
            _ => info!("{}", self),
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Loaded(path) => write!(f, "Loaded config from {:?}", path),
            ConfigSource::Created(path) => write!(f, "Created default config at {:?}", path),
            ConfigSource::Fallback(reason) => write!(f, "Using default settings: {}", reason),
        }
    }
}

/// Settings read at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite database file; relative paths resolve against the working directory
    pub database_path: PathBuf,
    /// Default `env_logger` filter when `RUST_LOG` is not set
    pub log_level: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("petshop.db"),
            log_level: "info".to_string(),
            window_width: 1100.0,
            window_height: 750.0,
        }
    }
}

impl AppConfig {
    /// Location of the config file, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the config from the default location, falling back to defaults
    pub fn load() -> (Self, ConfigSource) {
        match Self::default_path() {
            Some(path) => Self::load_or_default(&path),
            None => (
                Self::default(),
                ConfigSource::Fallback("no config directory on this platform".to_string()),
            ),
        }
    }

    /// Load from `path`, writing defaults there first if the file is missing.
    /// Any failure yields the defaults and a `Fallback` carrying the cause.
    pub fn load_or_default(path: &Path) -> (Self, ConfigSource) {
        let existed = path.exists();
        match Self::load_or_create(path) {
            Ok(config) if existed => (config, ConfigSource::Loaded(path.to_path_buf())),
            Ok(config) => (config, ConfigSource::Created(path.to_path_buf())),
            Err(e) => (
                Self::default(),
                ConfigSource::Fallback(format!("failed to load {:?}: {}", path, e)),
            ),
        }
    }

    /// Load from `path`, creating it with defaults if it does not exist
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let yaml_content = fs::read_to_string(path)?;
            let config: AppConfig = serde_yaml::from_str(&yaml_content)?;
            debug!("Loaded config from {:?}", path);
            Ok(config)
        } else {
            let config = AppConfig::default();
            config.save(path)?;
            debug!("Created default config at {:?}", path);
            Ok(config)
        }
    }

    /// Write the config atomically (temp file, then rename)
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                debug!("Created config directory: {:?}", parent);
            }
        }

        let yaml_content = serde_yaml::to_string(self)?;
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, path)?;

        debug!("Saved config to {:?}", path);
        Ok(())
    }
}
