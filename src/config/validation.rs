//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use crate::utils::errors::{PlaisError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.url.trim().is_empty() {
        return Err(PlaisError::Config(
            "API URL is required (set API_URL)".to_string()
        ));
    }

    let url = Url::parse(&config.url).map_err(|e| {
        PlaisError::Config(format!("Invalid API URL '{}': {}", config.url, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(PlaisError::Config(
            format!("API URL must use http or https, got '{}'", url.scheme())
        ));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(PlaisError::Config(
            "API URL must not carry a query string or fragment".to_string()
        ));
    }

    if config.timeout_seconds == Some(0) {
        return Err(PlaisError::Config(
            "API timeout must be greater than 0 when set".to_string()
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(PlaisError::Config(
            "User agent must not be empty".to_string()
        ));
    }

    if let Some(ref cookie) = config.session_cookie {
        if !cookie.contains('=') {
            return Err(PlaisError::Config(
                "Session cookie must have the form name=value".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(PlaisError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(PlaisError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if let Some(ref path) = config.file_path {
        if path.trim().is_empty() {
            return Err(PlaisError::Config(
                "Log file path must not be empty when set".to_string()
            ));
        }
    }

    Ok(())
}
