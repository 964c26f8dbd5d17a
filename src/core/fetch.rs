//! Raw fetch operations
//!
//! This module resolves source URLs from configuration and issues fetches
//! through the shared upstream client. It also builds the combined raw
//! payload that embeds both sources in one JSON object.

use crate::adapters::upstream::UpstreamClient;
use crate::config::SourcesConfig;
use crate::domain::{Result, Source};
use std::sync::Arc;

/// Fetches raw payloads from the configured sources
pub struct FetchService {
    client: Arc<UpstreamClient>,
    sources: SourcesConfig,
}

impl FetchService {
    /// Create a new fetch service over a shared upstream client
    pub fn new(client: Arc<UpstreamClient>, sources: SourcesConfig) -> Self {
        Self { client, sources }
    }

    /// Fetch the raw payload for one source
    pub async fn fetch_source(&self, source: Source) -> Result<String> {
        let url = self.sources.url_for(source);
        tracing::info!(source = %source, url = %url, "Fetching source data");
        self.client.fetch(url).await
    }

    /// Fetch both sources and merge them into one JSON object
    ///
    /// Sources are fetched sequentially, inventory first. The first failure
    /// aborts the whole operation; no partial combined payload is produced.
    pub async fn fetch_combined(&self) -> Result<String> {
        tracing::info!("Fetching all data from inventory and retail");
        let inventory = self.fetch_source(Source::Inventory).await?;
        let retail = self.fetch_source(Source::Retail).await?;
        Ok(format!(
            "{{\"inventory\": {inventory}, \"retail\": {retail}}}"
        ))
    }
}
