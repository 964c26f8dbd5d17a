//! Export summary and reporting
//!
//! This module defines structures for tracking per-source export outcomes
//! and composing them into the human-readable report returned to callers.

use crate::domain::Source;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of exporting one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    /// CSV written to this path
    Written {
        /// Final output path
        path: PathBuf,
        /// Data rows written, excluding the header
        rows: usize,
    },
    /// Upstream returned an empty dataset; nothing written
    Skipped,
    /// Fetch, decode, or write failed
    Failed {
        /// Human-readable failure cause
        reason: String,
    },
}

/// Report entry for one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    /// Which source this entry describes
    pub source: Source,

    /// What happened to it
    pub outcome: SourceOutcome,
}

impl SourceReport {
    /// Create a success entry
    pub fn written(source: Source, path: PathBuf, rows: usize) -> Self {
        Self {
            source,
            outcome: SourceOutcome::Written { path, rows },
        }
    }

    /// Create a skipped entry for an empty dataset
    pub fn skipped(source: Source) -> Self {
        Self {
            source,
            outcome: SourceOutcome::Skipped,
        }
    }

    /// Create a failure entry
    pub fn failed(source: Source, reason: impl Into<String>) -> Self {
        Self {
            source,
            outcome: SourceOutcome::Failed {
                reason: reason.into(),
            },
        }
    }

    /// Whether this entry records a failure
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, SourceOutcome::Failed { .. })
    }

    fn render_line(&self) -> String {
        match &self.outcome {
            SourceOutcome::Written { path, rows } => {
                format!("{} CSV: {} ({} rows)", self.source, path.display(), rows)
            }
            SourceOutcome::Skipped => format!("{}: skipped (no rows)", self.source),
            SourceOutcome::Failed { reason } => format!("{}: failed - {}", self.source, reason),
        }
    }
}

/// Summary of one export run
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Per-source outcomes, in processing order
    pub reports: Vec<SourceReport>,

    /// Duration of the run
    pub duration: Duration,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self {
            reports: Vec::new(),
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record the outcome for one source
    pub fn add_report(&mut self, report: SourceReport) {
        self.reports.push(report);
    }

    /// Number of sources whose CSV was written
    pub fn sources_written(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, SourceOutcome::Written { .. }))
            .count()
    }

    /// Number of sources skipped for lack of rows
    pub fn sources_skipped(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, SourceOutcome::Skipped))
            .count()
    }

    /// Number of sources that failed
    pub fn sources_failed(&self) -> usize {
        self.reports.iter().filter(|r| r.is_failure()).count()
    }

    /// Total data rows written across all sources
    pub fn rows_written(&self) -> usize {
        self.reports
            .iter()
            .map(|r| match r.outcome {
                SourceOutcome::Written { rows, .. } => rows,
                _ => 0,
            })
            .sum()
    }

    /// Check if the export was successful (no failures)
    pub fn is_successful(&self) -> bool {
        self.sources_failed() == 0
    }

    /// Compose the human-readable report text
    ///
    /// One status line followed by one line per source. Failures are
    /// embedded as text; this report is the only surface callers see.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.reports.len() + 1);
        lines.push(self.status_line().to_string());
        for report in &self.reports {
            lines.push(report.render_line());
        }
        lines.join("\n")
    }

    fn status_line(&self) -> &'static str {
        let failed = self.sources_failed();
        if failed == 0 {
            "✅ Export success!"
        } else if failed == self.reports.len() {
            "❌ Export failed"
        } else {
            "⚠️ Export completed with failures"
        }
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            written = self.sources_written(),
            skipped = self.sources_skipped(),
            failed = self.sources_failed(),
            rows = self.rows_written(),
            duration_ms = self.duration.as_millis() as u64,
            "Export completed"
        );

        for report in self.reports.iter().filter(|r| r.is_failure()) {
            if let SourceOutcome::Failed { reason } = &report.outcome {
                tracing::warn!(
                    source = %report.source,
                    reason = %reason,
                    "Source export failed"
                );
            }
        }
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_summary_creation() {
        let summary = ExportSummary::new();

        assert!(summary.reports.is_empty());
        assert_eq!(summary.duration, Duration::from_secs(0));
        assert!(summary.is_successful());
    }

    #[test]
    fn test_export_summary_with_duration() {
        let summary = ExportSummary::new().with_duration(Duration::from_secs(3));
        assert_eq!(summary.duration, Duration::from_secs(3));
    }

    #[test]
    fn test_counters() {
        let mut summary = ExportSummary::new();
        summary.add_report(SourceReport::written(
            Source::Inventory,
            PathBuf::from("data/processed/inventory_data.csv"),
            3,
        ));
        summary.add_report(SourceReport::failed(Source::Retail, "connection refused"));

        assert_eq!(summary.sources_written(), 1);
        assert_eq!(summary.sources_skipped(), 0);
        assert_eq!(summary.sources_failed(), 1);
        assert_eq!(summary.rows_written(), 3);
        assert!(!summary.is_successful());
    }

    #[test]
    fn test_render_all_successful() {
        let mut summary = ExportSummary::new();
        summary.add_report(SourceReport::written(
            Source::Inventory,
            PathBuf::from("data/processed/inventory_data.csv"),
            3,
        ));
        summary.add_report(SourceReport::written(
            Source::Retail,
            PathBuf::from("data/processed/retail_data.csv"),
            2,
        ));

        let report = summary.render();
        assert_eq!(
            report,
            "✅ Export success!\n\
             inventory CSV: data/processed/inventory_data.csv (3 rows)\n\
             retail CSV: data/processed/retail_data.csv (2 rows)"
        );
    }

    #[test]
    fn test_render_partial_failure() {
        let mut summary = ExportSummary::new();
        summary.add_report(SourceReport::failed(
            Source::Inventory,
            "Network error: connection refused",
        ));
        summary.add_report(SourceReport::written(
            Source::Retail,
            PathBuf::from("data/processed/retail_data.csv"),
            2,
        ));

        let report = summary.render();
        assert!(report.starts_with("⚠️ Export completed with failures"));
        assert!(report.contains("inventory: failed - Network error: connection refused"));
        assert!(report.contains("retail CSV: data/processed/retail_data.csv (2 rows)"));
    }

    #[test]
    fn test_render_all_failed() {
        let mut summary = ExportSummary::new();
        summary.add_report(SourceReport::failed(Source::Inventory, "unreachable"));
        summary.add_report(SourceReport::failed(Source::Retail, "unreachable"));

        assert!(summary.render().starts_with("❌ Export failed"));
    }

    #[test]
    fn test_render_skipped_source() {
        let mut summary = ExportSummary::new();
        summary.add_report(SourceReport::skipped(Source::Inventory));

        let report = summary.render();
        assert!(report.starts_with("✅ Export success!"));
        assert!(report.contains("inventory: skipped (no rows)"));
    }

    #[test]
    fn test_skipped_is_not_failure() {
        let mut summary = ExportSummary::new();
        summary.add_report(SourceReport::skipped(Source::Inventory));
        summary.add_report(SourceReport::skipped(Source::Retail));

        assert!(summary.is_successful());
        assert_eq!(summary.sources_skipped(), 2);
    }
}
