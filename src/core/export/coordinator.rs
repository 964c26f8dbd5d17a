//! Export coordinator - main orchestrator for the export process
//!
//! This module runs the fetch, normalize, and write steps for each source in
//! turn. Failures are isolated per source: a bad inventory endpoint never
//! stops the retail export. Every outcome is captured in the summary instead
//! of raised, so callers always get a complete report.

use crate::adapters::csv::{CsvExporter, CsvWriteOutcome};
use crate::adapters::upstream::UpstreamClient;
use crate::config::SiphonConfig;
use crate::core::export::summary::{ExportSummary, SourceOutcome, SourceReport};
use crate::core::fetch::FetchService;
use crate::core::normalize::normalize;
use crate::domain::{Result, Source};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Export coordinator
pub struct ExportCoordinator {
    fetcher: FetchService,
    exporter: CsvExporter,
    output_dir: PathBuf,
}

impl ExportCoordinator {
    /// Create a new export coordinator from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &SiphonConfig) -> Result<Self> {
        let client = Arc::new(UpstreamClient::new(&config.http)?);
        let fetcher = FetchService::new(client, config.sources.clone());

        Ok(Self {
            fetcher,
            exporter: CsvExporter::new(),
            output_dir: PathBuf::from(&config.export.output_dir),
        })
    }

    /// Execute the export
    ///
    /// For each source: fetch the payload, normalize it, and write the CSV
    /// under the output directory. Each source's errors are recorded in the
    /// summary and processing continues with the next source, so this never
    /// fails as a whole.
    pub async fn execute_export(&self) -> ExportSummary {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();

        tracing::info!(
            output_dir = %self.output_dir.display(),
            "Starting export of inventory and retail data"
        );

        for source in Source::ALL {
            let report = self.export_source(source).await;
            if let SourceOutcome::Failed { reason } = &report.outcome {
                tracing::error!(source = %source, reason = %reason, "Source export failed");
            }
            summary.add_report(report);
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        summary
    }

    async fn export_source(&self, source: Source) -> SourceReport {
        let payload = match self.fetcher.fetch_source(source).await {
            Ok(payload) => payload,
            Err(e) => return SourceReport::failed(source, e.to_string()),
        };

        let dataset = match normalize(&payload) {
            Ok(dataset) => dataset,
            Err(e) => return SourceReport::failed(source, e.to_string()),
        };

        tracing::debug!(source = %source, records = dataset.len(), "Normalized payload");

        let path = self.output_dir.join(source.output_file_name());
        match self.exporter.write(&dataset, &path) {
            Ok(CsvWriteOutcome::Written { rows }) => SourceReport::written(source, path, rows),
            Ok(CsvWriteOutcome::SkippedEmpty) => SourceReport::skipped(source),
            Err(e) => SourceReport::failed(source, e.to_string()),
        }
    }
}
