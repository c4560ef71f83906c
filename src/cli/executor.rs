//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::{CheckCommandHandler, DomainsCommandHandler, ResolveCommandHandler};
use super::parser::{Cli, Commands};
use crate::AppState;
use crate::config::settings::Settings;
use crate::error::AppResult;

/// Execute a CLI command with the given settings
///
/// Every command needs the remote document, so the application state is
/// bootstrapped first; a boot failure is returned before any handler runs.
///
/// # Errors
/// Returns boot errors (`Transport`, `Decode`, `InvalidConfiguration`) or the
/// handler's own errors
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    let state = AppState::bootstrap(&settings).await?;
    dispatch(cli.command(), state).await
}

/// Run `command` against an already bootstrapped state
pub async fn dispatch(command: Commands, state: AppState) -> AppResult<()> {
    match command {
        Commands::Check => {
            CheckCommandHandler::new(state).execute();
            Ok(())
        }
        Commands::Domains { service } => {
            DomainsCommandHandler::new(state, service).execute();
            Ok(())
        }
        Commands::Resolve { domain, key } => {
            ResolveCommandHandler::new(state)
                .execute(&domain, &key)
                .await
        }
    }
}
