//! Payload normalization
//!
//! Upstream payloads arrive as JSON arrays of flat objects. Normalization
//! parses that text into an ordered [`Dataset`], keeping array order and each
//! record's column order. Anything that is not an array of objects is a
//! decode failure; an empty array is a valid, empty dataset.

use crate::domain::{Dataset, Result};

/// Parse a raw JSON payload into a dataset
///
/// # Errors
///
/// Returns a decode error if the text is not valid JSON or is not shaped as
/// an array of objects.
///
/// # Examples
///
/// ```
/// use siphon::core::normalize::normalize;
///
/// let dataset = normalize(r#"[{"sku":"A-1","qty":7}]"#).unwrap();
/// assert_eq!(dataset.len(), 1);
/// ```
pub fn normalize(json_text: &str) -> Result<Dataset> {
    let dataset: Dataset = serde_json::from_str(json_text)?;
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CellValue, SiphonError};

    #[test]
    fn test_normalize_preserves_length_and_order() {
        let dataset =
            normalize(r#"[{"id": 1, "name": "first"}, {"id": 2, "name": "second"}]"#).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset[0].get("name"),
            Some(&CellValue::Text("first".to_string()))
        );
        assert_eq!(
            dataset[1].get("name"),
            Some(&CellValue::Text("second".to_string()))
        );
    }

    #[test]
    fn test_normalize_first_record_fixes_canonical_columns() {
        let dataset = normalize(r#"[{"b": 1, "a": 2}, {"a": 3, "c": 4}]"#).unwrap();

        let columns: Vec<&str> = dataset[0].columns().collect();
        assert_eq!(columns, vec!["b", "a"]);
    }

    #[test]
    fn test_normalize_empty_array_is_valid() {
        let dataset = normalize("[]").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_normalize_rejects_invalid_json() {
        let err = normalize("not json at all").unwrap_err();
        assert!(matches!(err, SiphonError::Decode(_)));
    }

    #[test]
    fn test_normalize_rejects_non_array_payload() {
        let err = normalize(r#"{"sku": "A-1"}"#).unwrap_err();
        assert!(matches!(err, SiphonError::Decode(_)));
    }

    #[test]
    fn test_normalize_rejects_array_of_scalars() {
        let err = normalize("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, SiphonError::Decode(_)));
    }

    #[test]
    fn test_normalize_stringifies_nested_values() {
        let dataset = normalize(r#"[{"sku": "A-1", "dims": {"w": 2, "h": 3}}]"#).unwrap();

        assert_eq!(
            dataset[0].get("dims"),
            Some(&CellValue::Text(r#"{"w":2,"h":3}"#.to_string()))
        );
    }
}
