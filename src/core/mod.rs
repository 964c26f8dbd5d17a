//! Core business logic for Siphon.
//!
//! This module contains the fetch-transform-export pipeline.
//!
//! # Modules
//!
//! - [`fetch`] - Raw payload fetches and the combined two-source merge
//! - [`normalize`] - JSON array-of-objects parsing into ordered datasets
//! - [`export`] - Per-source export coordination, summary, and reporting
//!
//! # Export Workflow
//!
//! For each of the two sources, in order:
//!
//! 1. **Fetch**: GET the configured URL and buffer the body
//! 2. **Normalize**: parse the payload into an ordered dataset
//! 3. **Write**: serialize the dataset to its CSV file
//! 4. **Record**: collect the outcome (written, skipped, or failed)
//!
//! A failure in any step marks that source failed and processing moves on to
//! the next source; the collected outcomes become the caller-facing report.
//!
//! # Example
//!
//! ```rust,no_run
//! use siphon::config::load_config;
//! use siphon::core::export::ExportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration
//! let config = load_config("siphon.toml")?;
//!
//! // Create export coordinator
//! let coordinator = ExportCoordinator::new(&config)?;
//!
//! // Execute export
//! let summary = coordinator.execute_export().await;
//!
//! println!("{}", summary.render());
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod fetch;
pub mod normalize;
