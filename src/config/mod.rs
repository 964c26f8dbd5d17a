//! Configuration management for Siphon.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Siphon uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - `SIPHON_*` environment variable overrides
//! - Validation at load time
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use siphon::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("siphon.toml")?;
//!
//! // Access configuration sections
//! println!("Inventory URL: {}", config.sources.inventory.url);
//! println!("Output dir: {}", config.export.output_dir);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [sources.inventory]
//! url = "https://inventory.example.com/api/items"
//!
//! [sources.retail]
//! url = "https://retail.example.com/api/sales"
//!
//! [http]
//! timeout_seconds = 30
//!
//! [export]
//! output_dir = "data/processed"
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax for environment variable substitution inside the
//! file, or override individual settings with `SIPHON_INVENTORY_URL`,
//! `SIPHON_RETAIL_URL`, `SIPHON_OUTPUT_DIR`, `SIPHON_LOG_LEVEL`, and
//! `SIPHON_HTTP_TIMEOUT_SECONDS`.

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, EndpointConfig, ExportConfig, HttpConfig, LoggingConfig, SiphonConfig,
    SourcesConfig,
};
