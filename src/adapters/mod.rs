//! External system integrations for Siphon.
//!
//! This module provides adapters for the two boundaries of the pipeline:
//!
//! - [`upstream`] - HTTP fetches against the configured source endpoints
//! - [`csv`] - CSV file output on local storage
//!
//! Adapters isolate external dependencies so the core pipeline stays free of
//! transport and filesystem detail.

pub mod csv;
pub mod upstream;

pub use csv::{CsvExporter, CsvWriteOutcome};
pub use upstream::UpstreamClient;
