//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Siphon using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Siphon - Inventory and Retail Data Export Tool
#[derive(Parser, Debug)]
#[command(name = "siphon")]
#[command(version, about, long_about = None)]
#[command(author = "Siphon Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "siphon.toml", env = "SIPHON_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SIPHON_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch inventory data and print the JSON payload
    FetchInventory(commands::fetch::FetchArgs),

    /// Fetch retail data and print the JSON payload
    FetchRetail(commands::fetch::FetchArgs),

    /// Fetch both sources and print one merged JSON object
    FetchAll(commands::fetch::FetchArgs),

    /// Fetch inventory and retail data and export them as CSV files
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["siphon", "export"]);
        assert_eq!(cli.config, "siphon.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["siphon", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["siphon", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_fetch_commands() {
        let cli = Cli::parse_from(["siphon", "fetch-inventory"]);
        assert!(matches!(cli.command, Commands::FetchInventory(_)));

        let cli = Cli::parse_from(["siphon", "fetch-retail"]);
        assert!(matches!(cli.command, Commands::FetchRetail(_)));

        let cli = Cli::parse_from(["siphon", "fetch-all"]);
        assert!(matches!(cli.command, Commands::FetchAll(_)));
    }

    #[test]
    fn test_cli_parse_export_with_output_dir() {
        let cli = Cli::parse_from(["siphon", "export", "--output-dir", "out/csv"]);
        match cli.command {
            Commands::Export(args) => assert_eq!(args.output_dir, Some("out/csv".to_string())),
            _ => panic!("Expected export command"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["siphon", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["siphon", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
