// Siphon - Inventory and Retail Data Export Tool
// Copyright (c) 2025 Siphon Contributors
// Licensed under the MIT License

use clap::Parser;
use siphon::cli::commands::fetch::FetchTarget;
use siphon::cli::{Cli, Commands};
use siphon::config::LoggingConfig;
use siphon::domain::Source;
use siphon::logging::init_logging;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging with console-only config (no file logging for CLI)
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let logging_config = LoggingConfig::default();
    let _guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Siphon - Inventory and Retail Data Export Tool"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    // Exit with appropriate code
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::FetchInventory(args) => {
            args.execute(&cli.config, FetchTarget::Source(Source::Inventory))
                .await
        }
        Commands::FetchRetail(args) => {
            args.execute(&cli.config, FetchTarget::Source(Source::Retail))
                .await
        }
        Commands::FetchAll(args) => args.execute(&cli.config, FetchTarget::Combined).await,
        Commands::Export(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
