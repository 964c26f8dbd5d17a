//! CSV file sink
//!
//! This module serializes a dataset to a CSV file. The header row is the
//! first record's columns in document order; later records render missing
//! columns as empty cells and extra columns are ignored. Rows are written to
//! a temporary sibling file that is atomically renamed into place on success,
//! so a failed or interrupted export never leaves a half-written file behind.

use crate::domain::{Dataset, Result, SiphonError};
use std::fs;
use std::path::Path;

/// Outcome of a single CSV write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvWriteOutcome {
    /// File written and moved into place
    Written {
        /// Data rows written, excluding the header
        rows: usize,
    },
    /// Dataset was empty; no filesystem I/O performed
    SkippedEmpty,
}

/// Writes datasets to CSV files under an output directory
#[derive(Debug, Clone, Default)]
pub struct CsvExporter;

impl CsvExporter {
    /// Create a new exporter
    pub fn new() -> Self {
        Self
    }

    /// Write a dataset to `path`
    ///
    /// An empty dataset short-circuits with [`CsvWriteOutcome::SkippedEmpty`]
    /// and touches nothing on disk. Otherwise the parent directory is created
    /// if missing and the file is replaced atomically.
    ///
    /// # Errors
    ///
    /// Returns an I/O error on any filesystem failure; the destination file
    /// is left untouched in that case.
    pub fn write(&self, dataset: &Dataset, path: &Path) -> Result<CsvWriteOutcome> {
        let Some(first) = dataset.first() else {
            tracing::warn!(path = %path.display(), "No rows to write, skipping CSV");
            return Ok(CsvWriteOutcome::SkippedEmpty);
        };

        let header: Vec<&str> = first.columns().collect();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = temp_sibling(path)?;
        match write_rows(dataset, &header, &tmp_path) {
            Ok(rows) => {
                fs::rename(&tmp_path, path)?;
                tracing::info!(path = %path.display(), rows, "CSV file written");
                Ok(CsvWriteOutcome::Written { rows })
            }
            Err(e) => {
                let _ = fs::remove_file(&tmp_path);
                Err(e)
            }
        }
    }
}

/// Temporary sibling path for the atomic rename scheme
///
/// The process id keeps two concurrently exporting processes from clobbering
/// each other's in-progress file.
fn temp_sibling(path: &Path) -> Result<std::path::PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        SiphonError::Io(format!("Invalid output path: {}", path.display()))
    })?;

    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(format!(".{}.tmp", std::process::id()));
    Ok(path.with_file_name(tmp_name))
}

fn write_rows(dataset: &Dataset, header: &[&str], tmp_path: &Path) -> Result<usize> {
    let mut writer = csv::Writer::from_path(tmp_path)?;
    writer.write_record(header)?;

    for record in dataset {
        let row: Vec<String> = header
            .iter()
            .map(|column| {
                record
                    .get(column)
                    .map(|value| value.to_string())
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(dataset.len())
}
