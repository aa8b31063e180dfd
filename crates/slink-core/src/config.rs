//! Configuration loading and defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Settings read from the user's `config.toml`, with defaults for every
/// field so a missing or partial file never blocks startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where and how to reach the shortener server.
    #[serde(default)]
    pub server: ServerConfig,
    /// Slug generation preferences.
    #[serde(default)]
    pub slugs: SlugConfig,
}

/// Server connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the shortener server.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Slug generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlugConfig {
    /// Characters in a requested or locally generated slug.
    #[serde(default = "default_slug_length")]
    pub length: usize,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_slug_length() -> usize {
    6
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            length: default_slug_length(),
        }
    }
}

impl Config {
    /// Loads the configuration from the platform config directory.
    ///
    /// Returns defaults when no config directory or file exists. A file
    /// that exists but cannot be read or parsed is an error rather than a
    /// silent fallback, so a typo in the file does not go unnoticed.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config file is unreadable or not
    /// valid TOML.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads the configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or not valid
    /// TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {e}")))?;
        toml::from_str(&contents).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Writes the configuration to a specific file, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(path, contents)
            .map_err(|e| Error::Config(format!("Failed to write config: {e}")))
    }
}

/// Platform location of `config.toml`, `None` when no home directory can
/// be determined.
fn config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("dev", "slink", "slink")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
