//! Configuration management for tutorlab.
//!
//! Loads configuration from ${TUTORLAB_HOME}/config.toml with sensible
//! defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Embedded commented config template, written by `tutorlab config init`.
const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("default_config.toml");

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the tutoring backend, including the /api prefix.
    pub server_url: String,

    /// Pre-filled tutor name on the setup screen.
    pub tutor_name: Option<String>,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Default log filter (tracing syntax); TUTORLAB_LOG overrides.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: Self::DEFAULT_SERVER_URL.to_string(),
            tutor_name: None,
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    const DEFAULT_SERVER_URL: &str = "http://localhost:8000/api";
    /// Learner replies come from a language model; allow for slow turns.
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
    const DEFAULT_LOG_FILTER: &str = "warn";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Returns the request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Saves only the tutor_name field to the config file.
    ///
    /// Creates the file if it doesn't exist.
    /// Preserves existing fields and comments using toml_edit.
    pub fn save_tutor_name(name: &str) -> Result<()> {
        Self::save_tutor_name_to(&paths::config_path(), name)
    }

    /// Saves only the tutor_name field to a specific config file path.
    pub fn save_tutor_name_to(path: &Path, name: &str) -> Result<()> {
        Self::save_field(path, "tutor_name", name)
    }

    /// Sets a single string field in the config file, preserving everything
    /// else (including comments).
    fn save_field(path: &Path, key: &str, new_value: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?
        } else {
            DEFAULT_CONFIG_TEMPLATE.to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        doc[key] = value(new_value);

        Self::write_config(path, &doc.to_string())
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, DEFAULT_CONFIG_TEMPLATE)
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path)
            .with_context(|| format!("Failed to move config into place at {}", path.display()))?;
        Ok(())
    }
}

pub mod paths {
    //! Path resolution for tutorlab configuration and data directories.
    //!
    //! TUTORLAB_HOME resolution order:
    //! 1. TUTORLAB_HOME environment variable (if set)
    //! 2. ~/.config/tutorlab (default)

    use std::path::PathBuf;

    /// Returns the tutorlab home directory.
    pub fn tutorlab_home() -> PathBuf {
        if let Ok(home) = std::env::var("TUTORLAB_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("tutorlab"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        tutorlab_home().join("config.toml")
    }

    /// Returns the directory chat-mode log files are written to.
    pub fn logs_dir() -> PathBuf {
        tutorlab_home().join("logs")
    }
}
