//! Fetch command implementations
//!
//! This module implements the `fetch-inventory`, `fetch-retail` and
//! `fetch-all` commands that print upstream JSON payloads to stdout.

use crate::adapters::UpstreamClient;
use crate::config::load_config;
use crate::core::fetch::FetchService;
use crate::domain::{SiphonError, Source};
use clap::Args;
use std::sync::Arc;

/// Target of a fetch command
#[derive(Debug, Clone, Copy)]
pub enum FetchTarget {
    /// Fetch a single upstream source
    Source(Source),
    /// Fetch both sources and merge them into one JSON object
    Combined,
}

/// Arguments for the fetch commands
#[derive(Args, Debug)]
pub struct FetchArgs {}

impl FetchArgs {
    /// Execute a fetch command against the configured upstream services
    pub async fn execute(&self, config_path: &str, target: FetchTarget) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, target = ?target, "Starting fetch command");

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let client = match UpstreamClient::new(&config.http) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to build HTTP client");
                eprintln!("❌ Failed to build HTTP client: {e}");
                return Ok(2);
            }
        };
        let service = FetchService::new(Arc::new(client), config.sources.clone());

        let payload = match target {
            FetchTarget::Source(source) => service.fetch_source(source).await,
            FetchTarget::Combined => service.fetch_combined().await,
        };

        match payload {
            Ok(body) => {
                // Payload goes to stdout so it can be piped; logs stay on stderr
                println!("{body}");
                Ok(0)
            }
            Err(e @ SiphonError::Network(_)) => {
                tracing::error!(error = %e, "Fetch failed");
                eprintln!("❌ Failed to fetch data: {e}");
                Ok(4) // Connection error exit code
            }
            Err(e) => {
                tracing::error!(error = %e, "Fetch failed");
                eprintln!("❌ Failed to fetch data: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }
}
