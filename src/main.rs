use clap::Parser;

use tenant_config::cli::{Cli, execute_command, init_logger_from_settings, load_and_merge_config};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let settings = match load_and_merge_config(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logger_from_settings(&settings) {
        eprintln!("Logger initialization error: {}", e);
        std::process::exit(1);
    }

    tracing::info!(
        app = %settings.application.name,
        version = tenant_config::pkg_version(),
        config_server = %settings.config_server.url,
        "Starting tenant-config"
    );

    if let Err(e) = execute_command(&cli, settings).await {
        tracing::error!(error = %e, retryable = e.is_retryable(), "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
