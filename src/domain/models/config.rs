//! Client configuration model.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the dashboard client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend API settings.
    pub api: ApiConfig,
    /// Language defaults for language-filtered listings.
    pub language: LanguageConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            language: LanguageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Backend API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin all endpoint paths are resolved against.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            // Default development server origin.
            base_url: "http://localhost:8181".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Language defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Language code used when a command does not pass one explicitly.
    pub default_code: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            default_code: "en".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level: trace, debug, info, warn, or error.
    pub level: String,
    /// Output format: json or pretty.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
