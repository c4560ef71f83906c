//! Local process settings for tenant-config
//!
//! Provides layered loading of the static settings that boot the resolution
//! layer (configuration server URL, secret store access, HTTP and logger
//! options):
//! - TOML configuration files
//! - Environment variable overrides
//! - Multiple environment configurations (development, test, staging, production)
//!
//! # Configuration Priority (lowest to highest)
//! 1. `default.toml` - Base default configuration
//! 2. `{environment}.toml` - Environment-specific configuration
//! 3. `local.toml` - Local development overrides (not committed to version control)
//! 4. `TENANT_*` environment variables

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{
    ConfigServerConfig, HttpClientConfig, LoggerSettings, SecretStoreConfig, Settings,
    TokenSourceKind,
};
