//! Configuration loading
//!
//! Reads `~/.config/podsuggest/config.toml`. A missing file is not an error;
//! an unreadable or malformed one falls back to defaults and reports a warning
//! the UI shows once.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod types;

pub use types::{ApiConfig, Config, RefocusPolicy, SuggestConfig};

pub const CONFIG_DIR: &str = "podsuggest";
const CONFIG_FILE: &str = "config.toml";

/// Errors while reading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Loaded configuration plus an optional warning for the status line
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Directory holding config and debug log
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

/// Load config from the default location, or from `path` when given
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => p,
            None => return ConfigResult::default(),
        },
    };

    if !path.exists() {
        log::debug!("No config file at {}, using defaults", path.display());
        return ConfigResult::default();
    }

    match load_config_from_path(&path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&contents).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Settings given on the command line, each replacing its file value
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub debounce_ms: Option<u64>,
}

impl Config {
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(base_url) = &overrides.base_url {
            self.api.base_url = base_url.clone();
        }
        if let Some(ms) = overrides.debounce_ms {
            self.suggest.debounce_ms = ms;
        }
        self
    }
}

pub fn parse_config(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}
