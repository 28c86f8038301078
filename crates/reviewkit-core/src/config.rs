//! Configuration management for reviewkit
//!
//! Supports a versioned TOML configuration with a [review] section
//! controlling ignore patterns and the per-review file bound.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Current configuration version
pub const CURRENT_CONFIG_VERSION: &str = "1";

/// Supported configuration versions
pub const SUPPORTED_CONFIG_VERSIONS: &[&str] = &["1"];

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version for tracking schema changes
    #[serde(default = "default_config_version")]
    pub version: String,

    /// Log level for the CLI (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Review preparation configuration
    #[serde(default)]
    pub review: Option<ReviewConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            log_level: default_log_level(),
            review: None,
        }
    }
}

/// Configuration for diff review preparation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Glob patterns for files to exclude from review
    #[serde(default = "default_ignore_patterns")]
    pub ignore_patterns: Vec<String>,

    /// Maximum files per review (also the default batch size);
    /// 0 means unbounded
    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            ignore_patterns: default_ignore_patterns(),
            max_files: default_max_files(),
        }
    }
}

fn default_config_version() -> String {
    CURRENT_CONFIG_VERSION.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_ignore_patterns() -> Vec<String> {
    vec![
        "*.lock".to_string(),
        "*.min.js".to_string(),
        "*.map".to_string(),
        "node_modules/**".to_string(),
        "dist/**".to_string(),
        "build/**".to_string(),
        "target/**".to_string(),
        "vendor/**".to_string(),
    ]
}

fn default_max_files() -> usize {
    25
}

impl Config {
    /// Check if the configuration version is supported
    pub fn is_version_supported(&self) -> bool {
        SUPPORTED_CONFIG_VERSIONS.contains(&self.version.as_str())
    }

    /// Get a warning message for unsupported versions
    pub fn version_warning(&self) -> Option<String> {
        if !self.is_version_supported() {
            Some(format!(
                "Warning: Configuration version '{}' is not supported. Supported versions: {}. Using defaults where needed.",
                self.version,
                SUPPORTED_CONFIG_VERSIONS.join(", ")
            ))
        } else {
            None
        }
    }

    /// Load configuration from file
    pub fn load_from_file(path: &PathBuf) -> CoreResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config =
            toml::from_str(&content).map_err(|e| CoreError::Config(e.to_string()))?;

        // Warn if version is not supported
        if let Some(warning) = config.version_warning() {
            tracing::warn!("{}", warning);
        }

        // Set to current version if empty or missing
        if config.version.is_empty() {
            config.version = CURRENT_CONFIG_VERSION.to_string();
        }

        Ok(config)
    }

    /// Get the default config directory path
    pub fn get_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("reviewkit"))
    }

    /// Load configuration with priority:
    /// 1. Defaults
    /// 2. Global config (~/.config/reviewkit/config.toml)
    /// 3. Repo config (.reviewkit.toml)
    pub fn load() -> Self {
        let mut config = Self::default();

        // Try to load global config
        if let Some(config_dir) = Self::get_config_dir() {
            let global_config = config_dir.join("config.toml");
            if global_config.exists() {
                if let Ok(loaded) = Self::load_from_file(&global_config) {
                    config = config.merge(loaded);
                }
            }
        }

        // Try to load repo config
        let repo_config = PathBuf::from(".reviewkit.toml");
        if repo_config.exists() {
            if let Ok(loaded) = Self::load_from_file(&repo_config) {
                config = config.merge(loaded);
            }
        }

        config
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(mut self, other: Config) -> Self {
        if !other.version.is_empty() {
            self.version = other.version;
        }
        if other.log_level != default_log_level() {
            self.log_level = other.log_level;
        }
        if other.review.is_some() {
            self.review = other.review;
        }
        self
    }
}
