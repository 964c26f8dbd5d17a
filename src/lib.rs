// Siphon - Inventory and Retail Data Export Tool
// Copyright (c) 2025 Siphon Contributors
// Licensed under the MIT License

//! # Siphon - Inventory and Retail Data Export
//!
//! Siphon is a small integration tool built in Rust that pulls JSON record
//! arrays from an inventory service and a retail service and exports them
//! as CSV files for downstream processing.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Fetching** JSON payloads from the configured upstream services
//! - **Normalizing** payloads into ordered, flat records
//! - **Serializing** records into CSV files with stable headers
//! - **Coordinating** the full export across both sources
//!
//! ## Architecture
//!
//! Siphon follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (fetch, normalize, export)
//! - [`adapters`] - External integrations (HTTP client, CSV writer)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use siphon::config::load_config;
//! use siphon::core::export::ExportCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("siphon.toml")?;
//!
//!     // Create export coordinator
//!     let coordinator = ExportCoordinator::new(&config)?;
//!
//!     // Execute export across all sources
//!     let summary = coordinator.execute_export().await;
//!
//!     println!("{}", summary.render());
//!     Ok(())
//! }
//! ```
//!
//! ## Fetching Without Exporting
//!
//! The fetch layer can be used on its own to inspect upstream payloads:
//!
//! ```rust,no_run
//! use siphon::core::fetch::FetchService;
//! use siphon::domain::Source;
//!
//! # async fn example(service: &FetchService) -> Result<(), Box<dyn std::error::Error>> {
//! let payload = service.fetch_source(Source::Inventory).await?;
//! println!("{payload}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Siphon uses the [`domain::SiphonError`] type for all errors:
//!
//! ```rust,no_run
//! use siphon::domain::SiphonError;
//!
//! fn example() -> Result<(), SiphonError> {
//!     // Errors are automatically converted using the ? operator
//!     let _config = siphon::config::load_config("siphon.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Siphon uses structured logging with the `tracing` crate. Console output
//! goes to stderr so fetched payloads on stdout stay pipeable:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(source = "inventory", "Fetching data");
//! warn!(source = "retail", "No records found");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
