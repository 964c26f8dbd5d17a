//! Export orchestration and reporting
//!
//! This module provides the core export logic, including:
//! - Per-source fetch, normalize, and write coordination
//! - Outcome collection and report rendering

pub mod coordinator;
pub mod summary;

pub use coordinator::ExportCoordinator;
pub use summary::{ExportSummary, SourceOutcome, SourceReport};
