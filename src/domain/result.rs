//! Result type alias for Siphon
//!
//! This module provides a convenient Result type alias that uses SiphonError
//! as the error type.

use super::errors::SiphonError;

/// Result type alias for Siphon operations
///
/// This is a convenience type alias that uses `SiphonError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use siphon::domain::result::Result;
/// use siphon::domain::errors::SiphonError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SiphonError::Decode("Invalid payload".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SiphonError>;
