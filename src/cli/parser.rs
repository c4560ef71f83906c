//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::models::Service;

/// Per-domain configuration and secret resolution diagnostics
#[derive(Parser, Debug)]
#[command(name = "tenant-config")]
#[command(about = "Per-domain configuration and secret resolution diagnostics")]
#[command(long_about = "
tenant-config loads the per-domain configuration document from the remote
configuration server and resolves domain secrets from the secret store.
Secret values are never printed.

EXAMPLES:
    # Load and validate the remote configuration (default command)
    tenant-config check

    # Use a single settings file instead of the layered config directory
    tenant-config --config /etc/tenant-config/production.toml check

    # List domain to bucket mappings
    tenant-config domains

    # List the valid domains of one service
    tenant-config domains --service contact-form

    # Check that a secret resolves and passes its integrity check
    tenant-config --verbose resolve shop.example api-key
")]
#[command(version = crate::build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Read settings from this TOML file instead of the layered
    /// configuration directory. The file must exist and be readable.
    ///
    /// Example: --config /etc/tenant-config/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `{environment}.toml` layer is loaded.
    ///
    /// Available values: development (dev), test, staging (stage), production (prod)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Increases log output to debug level. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only. Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Load and validate the remote configuration (default)
    ///
    /// Prints the number of configured domains and the document checksum.
    /// Exits non-zero if the document cannot be loaded or has no domains.
    Check,
    /// List configured domains
    ///
    /// Without --service, prints every domain with its storage bucket.
    /// With --service, prints the valid domains of that service.
    ///
    /// Examples:
    ///   tenant-config domains
    ///   tenant-config domains --service super-chat
    Domains {
        /// Service whose valid domains are listed
        ///
        /// Available values: contact-form, super-chat (chat), user
        #[arg(short, long, value_name = "SERVICE")]
        service: Option<Service>,
    },
    /// Resolve one secret and report its length
    ///
    /// Performs the full lookup including the integrity check. Only the
    /// byte length of the value is printed.
    ///
    /// Example:
    ///   tenant-config resolve shop.example api-key
    Resolve {
        /// Domain whose secret template is used
        #[arg(value_name = "DOMAIN", value_parser = super::validation::validate_domain)]
        domain: String,

        /// Logical secret key substituted into the template
        #[arg(value_name = "KEY", value_parser = super::validation::validate_logical_key)]
        key: String,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "test")]
    Test,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl Cli {
    /// The command to run, `check` when none was given
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Check)
    }

    /// Log level forced by --verbose or --quiet
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        <Cli as CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_help_flag() {
        let result = Cli::try_parse_from(["tenant-config", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["tenant-config", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_default_behavior() {
        let cli = Cli::try_parse_from(["tenant-config"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.command(), Commands::Check);
        assert!(!cli.verbose);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
        assert!(cli.env.is_none());
        assert_eq!(cli.log_level_override(), None);
    }

    #[test]
    fn test_domains_command() {
        let cli = Cli::try_parse_from(["tenant-config", "domains"]).unwrap();
        assert_eq!(cli.command(), Commands::Domains { service: None });

        let cli =
            Cli::try_parse_from(["tenant-config", "domains", "--service", "chat"]).unwrap();
        assert_eq!(
            cli.command(),
            Commands::Domains {
                service: Some(Service::SuperChat)
            }
        );
    }

    #[test]
    fn test_domains_unknown_service() {
        let result = Cli::try_parse_from(["tenant-config", "domains", "--service", "billing"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_command() {
        let cli =
            Cli::try_parse_from(["tenant-config", "resolve", "shop.example", "api-key"]).unwrap();
        assert_eq!(
            cli.command(),
            Commands::Resolve {
                domain: "shop.example".to_string(),
                key: "api-key".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_requires_key() {
        let result = Cli::try_parse_from(["tenant-config", "resolve", "shop.example"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_env_alias() {
        let cli = Cli::try_parse_from(["tenant-config", "-e", "prod"]).unwrap();
        assert_eq!(cli.env, Some(Environment::Production));
        let env: crate::config::Environment = cli.env.unwrap().into();
        assert!(env.is_production());
        let env: crate::config::Environment = Environment::Test.into();
        assert!(!env.is_production());
    }

    #[test]
    fn test_verbose_flag() {
        let cli = Cli::try_parse_from(["tenant-config", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_level_override(), Some("debug"));
    }

    #[test]
    fn test_conflicting_verbose_quiet() {
        let result = Cli::try_parse_from(["tenant-config", "--verbose", "--quiet"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
