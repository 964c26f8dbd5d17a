//! Domain models and types for Siphon.
//!
//! This module contains the core domain models and error types for the
//! fetch-transform-export pipeline.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Source identities** ([`Source`]) with fixed output file names
//! - **Tabular row model** ([`Record`], [`CellValue`], [`Dataset`])
//! - **Error taxonomy** ([`SiphonError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust
//! use siphon::domain::{Result, SiphonError};
//!
//! fn example(payload: &str) -> Result<Vec<siphon::domain::Record>> {
//!     serde_json::from_str(payload).map_err(|e| SiphonError::Decode(e.to_string()))
//! }
//! ```

pub mod errors;
pub mod record;
pub mod result;
pub mod source;

// Re-export commonly used types for convenience
pub use errors::SiphonError;
pub use record::{CellValue, Dataset, Record};
pub use result::Result;
pub use source::Source;
