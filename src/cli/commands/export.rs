//! Export command implementation
//!
//! This module implements the `export` command that pulls inventory and
//! retail data from the upstream services and writes the processed CSV
//! files.

use crate::config::load_config;
use crate::core::export::ExportCoordinator;
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Override the output directory for CSV files
    #[arg(short, long)]
    pub output_dir: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply CLI overrides
        if let Some(output_dir) = &self.output_dir {
            tracing::info!(output_dir = %output_dir, "Overriding output directory from CLI");
            config.export.output_dir = output_dir.clone();
        }

        // Create export coordinator
        let coordinator = match ExportCoordinator::new(&config) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create export coordinator");
                eprintln!("❌ Failed to initialize export: {e}");
                return Ok(2);
            }
        };

        println!("🚀 Starting export...");
        println!();

        let summary = coordinator.execute_export().await;

        // Display summary
        println!("📊 Export Summary:");
        println!("  Sources written: {}", summary.sources_written());
        println!("  Sources skipped: {}", summary.sources_skipped());
        println!("  Sources failed: {}", summary.sources_failed());
        println!("  Rows written: {}", summary.rows_written());
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!();
        println!("{}", summary.render());

        // Determine exit code
        if summary.is_successful() {
            Ok(0)
        } else {
            Ok(1) // Partial or full failure
        }
    }
}
