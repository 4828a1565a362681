//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::utils::errors::Result;

/// Name of the bare environment variable holding the backend base URL
pub const API_URL_ENV: &str = "API_URL";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the backend, e.g. `https://api.example.org`
    #[serde(default)]
    pub url: String,
    /// Session cookie (`name=value`) sent with every request
    #[serde(default)]
    pub session_cookie: Option<String>,
    /// Request timeout; unset means the client never times out
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for the daily rolling log file; stdout only when unset
    #[serde(default)]
    pub file_path: Option<String>,
}

fn default_user_agent() -> String {
    format!("plais-client/{}", env!("CARGO_PKG_VERSION"))
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_path: None,
        }
    }
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self> {
        Self::from_file("config")
    }

    /// Load settings using `path` (without extension) as the optional file source
    ///
    /// Precedence, lowest first: the file, `PLAIS__*` variables, then `API_URL`.
    pub fn from_file(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("logging.level", default_log_level())?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("PLAIS")
                    .prefix_separator("__")
                    .try_parsing(true)
                    .separator("__"),
            )
            .set_override_option("api.url", std::env::var(API_URL_ENV).ok())?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Settings pointing at `url` with everything else defaulted
    pub fn with_api_url(url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                url: url.into(),
                ..ApiConfig::default()
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            session_cookie: None,
            timeout_seconds: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
