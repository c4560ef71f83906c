//! Configuration settings structures for tenant-config
//!
//! These are the static process settings loaded from TOML files and
//! environment variables. The per-domain document itself comes from the
//! configuration server and lives in [`crate::models`].

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "tenant-config".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_secret_store_endpoint() -> String {
    "https://secretmanager.googleapis.com/v1".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// HTTP Client Configuration
// ============================================================================

/// Shared HTTP client settings.
///
/// The request timeout is the only deadline applied to configuration-server
/// and secret-store calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Whole-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// TCP connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Custom User-Agent; defaults to `tenant-config/<version>`
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
            user_agent: None,
        }
    }
}

// ============================================================================
// Configuration Server
// ============================================================================

/// Remote configuration server settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigServerConfig {
    /// URL answering GET with `{ "Response": <document> }`
    #[serde(default)]
    pub url: String,
}

// ============================================================================
// Secret Store
// ============================================================================

/// Where the secret store bearer token comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TokenSourceKind {
    /// `secret_store.access_token` is sent as-is
    Static,
    /// Application default credentials: credentials file, gcloud, or the
    /// metadata server. The token is cached until it expires.
    #[default]
    ApplicationDefault,
}

/// Managed secret store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretStoreConfig {
    /// Base URL of the secret manager REST API
    #[serde(default = "default_secret_store_endpoint")]
    pub endpoint: String,

    /// Bearer token strategy
    #[serde(default)]
    pub token_source: TokenSourceKind,

    /// Token used when `token_source = "static"`.
    /// Prefer `TENANT_SECRET_STORE__ACCESS_TOKEN` over committing it to a file.
    #[serde(default)]
    pub access_token: String,
}

impl Default for SecretStoreConfig {
    fn default() -> Self {
        Self {
            endpoint: default_secret_store_endpoint(),
            token_source: TokenSourceKind::default(),
            access_token: String::new(),
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Console output settings; the console is the only log sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleSettings {
    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            colored: default_true(),
        }
    }
}

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level or filter directive, e.g. "info" or "tenant_config=debug"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Console output settings
    #[serde(default)]
    pub console: ConsoleSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: ConsoleSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert LoggerSettings to the runtime LoggerConfig
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = self.parse_format()?;
        let console = ConsoleConfig::new(self.console.colored);

        LoggerConfig::new(console, format, self.level).map_err(|e| ConfigError::ValidationError {
            field: "logger".to_string(),
            message: e.to_string(),
        })
    }

    fn parse_format(&self) -> Result<LogFormat, ConfigError> {
        self.format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::ValidationError {
                field: "logger.format".to_string(),
                message: e.to_string(),
            })
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete process settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Shared HTTP client
    #[serde(default)]
    pub http: HttpClientConfig,

    /// Remote configuration server
    #[serde(default)]
    pub config_server: ConfigServerConfig,

    /// Secret store
    #[serde(default)]
    pub secret_store: SecretStoreConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}
