use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::clock::face::{Link, DEFAULT_LINK_LABEL, DEFAULT_LINK_URL};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Optional settings from `config.json`. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output name to place the clock on.
    pub screen: Option<String>,
    pub link_url: Option<String>,
    pub link_label: Option<String>,
}

impl Config {
    pub fn link(&self) -> Link {
        Link::new(
            self.link_url.as_deref().unwrap_or(DEFAULT_LINK_URL),
            self.link_label.as_deref().unwrap_or(DEFAULT_LINK_LABEL),
        )
    }

    /// `NEON_CLOCK_SCREEN` wins over the file.
    pub fn screen(&self) -> Option<String> {
        std::env::var("NEON_CLOCK_SCREEN")
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| self.screen.clone())
    }
}

pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("neon-clock/config.json")
}

/// Read a config file. A missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&content).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the user config, logging and falling back to defaults on error.
pub fn load() -> Config {
    let path = config_file_path();
    match load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e}; using defaults");
            Config::default()
        }
    }
}
