//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file-based configuration,
//! implementing the configuration precedence logic.

use super::parser::Cli;
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Environment, settings::Settings};

/// Configuration merger that handles CLI argument integration with file-based configuration
///
/// CLI arguments override configuration file and environment values.
pub struct ConfigurationMerger {
    base_config: Settings,
    environment: Environment,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self {
            base_config,
            environment: Environment::default(),
        }
    }

    /// Validate merged settings against the rules of this environment
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Load the base configuration the way the CLI asks for it
    ///
    /// `--config` switches to single-file loading and `--env` overrides the
    /// detected environment. Validation is deferred to [`merge_cli_args`].
    ///
    /// # Errors
    /// Returns ConfigError if the loader cannot be built or the files cannot be parsed
    ///
    /// [`merge_cli_args`]: ConfigurationMerger::merge_cli_args
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut loader = match cli.config.as_ref() {
            Some(path) => ConfigLoader::with_file(path)?,
            None => ConfigLoader::new()?,
        };

        if let Some(env) = cli.env {
            loader = loader.with_environment(env.into());
        }

        tracing::debug!(
            environment = %loader.environment(),
            config_dir = %loader.config_dir().display(),
            "Loading settings"
        );

        Ok(Self::new(loader.load_unvalidated()?).with_environment(loader.environment()))
    }

    /// Merge CLI arguments with the base configuration
    ///
    /// # Returns
    /// A new, validated Settings instance with CLI overrides applied
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if let Some(level) = cli.log_level_override() {
            config.logger.level = level.to_string();
        }

        config.validate_for(self.environment)?;

        Ok(config)
    }

    /// Get the current configuration (useful for inspection)
    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::tests::{EnvGuard, TEST_MUTEX};
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_valid_base_config() -> Settings {
        let mut config = Settings::default();
        config.config_server.url = "http://127.0.0.1:8500/configurations".to_string();
        config
    }

    #[test]
    fn test_configuration_merger_new() {
        let base_config = Settings::default();
        let merger = ConfigurationMerger::new(base_config.clone());
        assert_eq!(merger.config(), &base_config);
    }

    #[test]
    fn test_configuration_merger_merge_verbose_flag() {
        let merger = ConfigurationMerger::new(create_valid_base_config());

        let cli = Cli::try_parse_from(["tenant-config", "--verbose"]).unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.logger.level, "debug");
    }

    #[test]
    fn test_configuration_merger_merge_quiet_flag() {
        let merger = ConfigurationMerger::new(create_valid_base_config());

        let cli = Cli::try_parse_from(["tenant-config", "--quiet"]).unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.logger.level, "error");
    }

    #[test]
    fn test_configuration_merger_rejects_missing_url() {
        let merger = ConfigurationMerger::new(Settings::default());

        let cli = Cli::try_parse_from(["tenant-config"]).unwrap();
        let err = merger.merge_cli_args(&cli).unwrap_err();

        assert_eq!(err.field(), Some("config_server.url"));
    }

    #[test]
    fn test_production_rejects_static_token() {
        let mut base = create_valid_base_config();
        base.secret_store.token_source = crate::config::TokenSourceKind::Static;
        base.secret_store.access_token = "ya29.token".to_string();
        let cli = Cli::try_parse_from(["tenant-config"]).unwrap();

        assert!(ConfigurationMerger::new(base.clone()).merge_cli_args(&cli).is_ok());

        let err = ConfigurationMerger::new(base)
            .with_environment(Environment::Production)
            .merge_cli_args(&cli)
            .unwrap_err();
        assert_eq!(err.field(), Some("secret_store.token_source"));
    }

    #[test]
    fn test_from_cli_with_config_file() {
        let _lock = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut guard = EnvGuard::new();
        guard.clear_loader_vars();

        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[config_server]\nurl = \"https://config.internal/configurations\"\n\n[logger]\nlevel = \"warn\""
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from(["tenant-config", "-c", &path, "-v", "check"]).unwrap();
        let merger = ConfigurationMerger::from_cli(&cli).unwrap();
        assert_eq!(merger.config().logger.level, "warn");

        let merged = merger.merge_cli_args(&cli).unwrap();
        assert_eq!(merged.config_server.url, "https://config.internal/configurations");
        assert_eq!(merged.logger.level, "debug");
    }
}
