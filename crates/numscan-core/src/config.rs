//! Configuration management for numscan.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use crate::types::DEFAULT_MIN_NUMBER_LENGTH;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `extraction.min_number_length`.
pub const ENV_MIN_NUMBER_LENGTH: &str = "NUMSCAN_MIN_NUMBER_LENGTH";
/// Environment variable overriding `uri.exclude_urls`.
pub const ENV_EXCLUDE_URLS: &str = "NUMSCAN_EXCLUDE_URLS";
/// Environment variable overriding `uri.allow_bare_hosts`.
pub const ENV_ALLOW_BARE_HOSTS: &str = "NUMSCAN_ALLOW_BARE_HOSTS";

/// Main configuration.
///
/// This is loaded from `~/.config/numscan/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Scanning and threshold settings
    pub extraction: ExtractionConfig,
    /// URL exclusion settings
    pub uri: UriConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path.
    ///
    /// Unlike [`AppConfig::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }

        tracing::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `NUMSCAN_MIN_NUMBER_LENGTH`: Override the minimum digit count
    /// - `NUMSCAN_EXCLUDE_URLS`: Enable/disable URL exclusion (true/false)
    /// - `NUMSCAN_ALLOW_BARE_HOSTS`: Treat scheme-less hostnames as URLs (true/false)
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup. Values that fail to parse are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_MIN_NUMBER_LENGTH) {
            match val.trim().parse() {
                Ok(length) => {
                    self.extraction.min_number_length = length;
                    tracing::debug!("Override min_number_length from env: {}", length);
                }
                Err(_) => tracing::debug!("Ignoring unparsable {}={}", ENV_MIN_NUMBER_LENGTH, val),
            }
        }

        if let Some(val) = lookup(ENV_EXCLUDE_URLS) {
            match val.trim().parse() {
                Ok(enabled) => {
                    self.uri.exclude_urls = enabled;
                    tracing::debug!("Override uri.exclude_urls from env: {}", enabled);
                }
                Err(_) => tracing::debug!("Ignoring unparsable {}={}", ENV_EXCLUDE_URLS, val),
            }
        }

        if let Some(val) = lookup(ENV_ALLOW_BARE_HOSTS) {
            match val.trim().parse() {
                Ok(allowed) => {
                    self.uri.allow_bare_hosts = allowed;
                    tracing::debug!("Override uri.allow_bare_hosts from env: {}", allowed);
                }
                Err(_) => tracing::debug!("Ignoring unparsable {}={}", ENV_ALLOW_BARE_HOSTS, val),
            }
        }
    }

    /// Check values that would make extraction meaningless.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.extraction.min_number_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "extraction.min_number_length".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Save configuration to the default path.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, config_path: &Path) -> ConfigResult<()> {
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/numscan/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("com", "numscan", "numscan").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Scanning and threshold settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Minimum number of digits a block needs after normalization
    pub min_number_length: usize,
    /// Extra single-character separators on top of space, `-` and `.`
    pub extra_single_delimiters: Vec<char>,
    /// Extra bracket pairs on top of `(` / `)`
    pub extra_pairs: Vec<PairConfig>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_number_length: DEFAULT_MIN_NUMBER_LENGTH,
            extra_single_delimiters: Vec::new(),
            extra_pairs: Vec::new(),
        }
    }
}

/// A bracket-like delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairConfig {
    /// Opening character, e.g. `[`
    pub open: char,
    /// Closing character, e.g. `]`
    pub close: char,
}

/// URL exclusion settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UriConfig {
    /// Drop blocks whose enclosing token is a URL
    pub exclude_urls: bool,
    /// Count scheme-less hostnames (`www.example.com/123`) as URLs
    pub allow_bare_hosts: bool,
}

impl Default for UriConfig {
    fn default() -> Self {
        Self {
            exclude_urls: true,
            allow_bare_hosts: true,
        }
    }
}
