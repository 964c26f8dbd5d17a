//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "siphon.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Siphon configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        // Generate configuration content
        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        // Write to file
        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your service URLs", self.output);
                println!("  2. Optional: create a .env file to override settings");
                println!("     - SIPHON_INVENTORY_URL and SIPHON_RETAIL_URL");
                println!("     - SIPHON_OUTPUT_DIR and SIPHON_LOG_LEVEL");
                println!("  3. Validate configuration: siphon validate-config");
                println!("  4. Run export: siphon export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Siphon Configuration File
# Inventory and retail JSON to CSV export tool

[application]
log_level = "info"

[sources.inventory]
url = "http://localhost:8081/api/inventory"

[sources.retail]
url = "http://localhost:8082/api/retail"

[http]
timeout_seconds = 30
connect_timeout_seconds = 10

[export]
output_dir = "data/processed"

[logging]
console_enabled = true
file_enabled = false
file_path = "logs"
file_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Siphon Configuration File
# Inventory and retail JSON to CSV export tool
#
# This file contains all configuration options with examples and explanations.
#
# Every setting can also be overridden through environment variables:
#   SIPHON_LOG_LEVEL, SIPHON_INVENTORY_URL, SIPHON_RETAIL_URL,
#   SIPHON_OUTPUT_DIR, SIPHON_HTTP_TIMEOUT_SECONDS

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Upstream Sources
# ============================================================================
# URLs of the services that serve JSON arrays of records.
# Values may reference environment variables, for example:
#   url = "${SIPHON_INVENTORY_URL}"

[sources.inventory]
url = "http://localhost:8081/api/inventory"

[sources.retail]
url = "http://localhost:8082/api/retail"

# ============================================================================
# HTTP Client Settings
# ============================================================================
[http]
# Total request timeout in seconds
timeout_seconds = 30

# Connection establishment timeout in seconds
connect_timeout_seconds = 10

# ============================================================================
# Export Configuration
# ============================================================================
[export]
# Directory where CSV files are written
# (inventory_data.csv and retail_data.csv)
output_dir = "data/processed"

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Console logging on stderr
console_enabled = true

# JSON file logging with rotation
file_enabled = false

# Log file directory
file_path = "logs"

# Log rotation (daily, hourly or never)
file_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiphonConfig;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "siphon.toml".to_string(),
            with_examples: false,
            force: false,
        };

        assert_eq!(args.output, "siphon.toml");
        assert!(!args.with_examples);
        assert!(!args.force);
    }

    #[test]
    fn test_generate_minimal_config() {
        let config = InitArgs::generate_minimal_config();
        assert!(config.contains("[application]"));
        assert!(config.contains("[sources.inventory]"));
        assert!(config.contains("[sources.retail]"));
        assert!(config.contains("[export]"));
    }

    #[test]
    fn test_generate_config_with_examples() {
        let config = InitArgs::generate_config_with_examples();
        assert!(config.contains("# Siphon Configuration File"));
        assert!(config.contains("output_dir"));
        assert!(config.contains("timeout_seconds"));
    }

    #[test]
    fn test_generated_configs_parse() {
        let minimal: SiphonConfig =
            toml::from_str(&InitArgs::generate_minimal_config()).expect("minimal should parse");
        assert!(minimal.validate().is_ok());

        let full: SiphonConfig = toml::from_str(&InitArgs::generate_config_with_examples())
            .expect("example config should parse");
        assert!(full.validate().is_ok());
    }
}
