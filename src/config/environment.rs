//! Deployment environment
//!
//! Selects the optional `{environment}.toml` settings layer and decides which
//! settings are acceptable for a deployed process.

use std::fmt;
use std::str::FromStr;

use crate::config::error::ConfigError;

/// Deployment environment of the running process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Staging,
    Production,
}

/// Accepted spellings, canonical name first
const NAMES: &[(Environment, &[&str])] = &[
    (Environment::Development, &["development", "dev"]),
    (Environment::Test, &["test"]),
    (Environment::Staging, &["staging", "stage"]),
    (Environment::Production, &["production", "prod"]),
];

impl Environment {
    /// Variable naming the environment; unset or blank means development
    pub const ENV_VAR: &'static str = "TENANT_APP_ENV";

    /// Read the environment from `TENANT_APP_ENV`.
    ///
    /// # Errors
    ///
    /// Returns `EnvVarError` when the variable holds an unknown name, so a typo
    /// never silently boots a deployed process with development settings.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(Self::ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => value.parse(),
            _ => Ok(Self::default()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        NAMES
            .iter()
            .find(|(env, _)| env == self)
            .map(|(_, names)| names[0])
            .unwrap_or("development")
    }

    /// File name of the settings layer loaded for this environment
    pub fn settings_file(&self) -> String {
        format!("{}.toml", self.as_str())
    }

    /// Deployed environments; static secret store tokens are refused here
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Staging | Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        NAMES
            .iter()
            .find(|(_, names)| names.contains(&wanted.as_str()))
            .map(|(env, _)| *env)
            .ok_or_else(|| {
                ConfigError::EnvVarError(format!(
                    "Invalid {} value '{}'. Valid values are: development, test, staging, production",
                    Self::ENV_VAR,
                    s
                ))
            })
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
