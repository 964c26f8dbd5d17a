//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Siphon configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading runs the full validation pass
        match load_config(config_path) {
            Ok(config) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Log Level: {}", config.application.log_level);
                println!("  Inventory URL: {}", config.sources.inventory.url);
                println!("  Retail URL: {}", config.sources.retail.url);
                println!("  Request Timeout: {}s", config.http.timeout_seconds);
                println!("  Connect Timeout: {}s", config.http.connect_timeout_seconds);
                println!("  Output Directory: {}", config.export.output_dir);
                println!(
                    "  File Logging: {}",
                    if config.logging.file_enabled {
                        "enabled"
                    } else {
                        "disabled"
                    }
                );
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2) // Configuration error exit code
            }
        }
    }
}
