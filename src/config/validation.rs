//! Configuration validation logic
//!
//! Checks settings values before any network call is attempted, so a bad
//! local file fails fast instead of surfacing as a transport error.

use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::config::settings::{
    ConfigServerConfig, HttpClientConfig, LoggerSettings, SecretStoreConfig, Settings,
    TokenSourceKind,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl HttpClientConfig {
    /// Validate HTTP client configuration
    ///
    /// # Validation Rules
    /// - Request timeout must be greater than 0
    /// - Connect timeout must be greater than 0 and not exceed the request timeout
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "http.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout == 0 {
            return Err(ConfigError::validation(
                "http.connect_timeout",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout > self.request_timeout {
            return Err(ConfigError::ValidationError {
                field: "http.connect_timeout".to_string(),
                message: format!(
                    "Connect timeout ({}s) cannot exceed request timeout ({}s).",
                    self.connect_timeout, self.request_timeout
                ),
            });
        }

        Ok(())
    }
}

impl ConfigServerConfig {
    /// The configuration server URL is the one setting boot cannot do without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::validation(
                "config_server.url",
                "Configuration server URL is required.",
            ));
        }

        if !is_http_url(&self.url) {
            return Err(ConfigError::ValidationError {
                field: "config_server.url".to_string(),
                message: format!(
                    "Invalid configuration server URL '{}'. Expected an http:// or https:// URL.",
                    self.url
                ),
            });
        }

        Ok(())
    }
}

impl SecretStoreConfig {
    /// Validate secret store configuration
    ///
    /// # Validation Rules
    /// - Endpoint must be an http(s) URL
    /// - Static token source requires a non-empty access token
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_http_url(&self.endpoint) {
            return Err(ConfigError::ValidationError {
                field: "secret_store.endpoint".to_string(),
                message: format!(
                    "Invalid secret store endpoint '{}'. Expected an http:// or https:// URL.",
                    self.endpoint
                ),
            });
        }

        if self.token_source == TokenSourceKind::Static && self.access_token.trim().is_empty() {
            return Err(ConfigError::validation(
                "secret_store.access_token",
                "Access token is required when token_source is 'static'.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// A level may be a bare level or a full filter directive; only bare
    /// levels are checked against the known list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.to_lowercase();
        let is_directive = level.contains('=') || level.contains(',');
        if !is_directive && !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration settings
    ///
    /// Returns the first validation error encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.http.validate()?;
        self.config_server.validate()?;
        self.secret_store.validate()?;
        self.logger.validate()?;
        Ok(())
    }

    /// Validate the settings for the given deployment environment
    ///
    /// Deployed environments must obtain secret store tokens from application
    /// default credentials; a static token is a development convenience.
    pub fn validate_for(&self, environment: Environment) -> Result<(), ConfigError> {
        self.validate()?;

        if environment.is_production() && self.secret_store.token_source == TokenSourceKind::Static
        {
            return Err(ConfigError::ValidationError {
                field: "secret_store.token_source".to_string(),
                message: format!(
                    "Static access tokens are not allowed in {}; use 'application-default'.",
                    environment
                ),
            });
        }

        Ok(())
    }
}
