//! Flat record model for tabular export
//!
//! This module defines the row shape produced by normalization: an ordered
//! mapping from column name to a tagged scalar value. Column order must match
//! the upstream JSON document because the CSV header is fixed by the first
//! record's columns in encounter order; a plain `serde_json::Map` would
//! alphabetize keys, so `Record` carries its own map visitor over a
//! `Vec<(String, CellValue)>`.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// A single scalar cell value
///
/// Upstream payloads are heterogeneous, so each cell keeps its JSON scalar
/// type until render time. Nested objects and arrays are stringified to
/// compact JSON rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// A JSON string
    Text(String),
    /// A JSON number (integers render without a trailing `.0`)
    Number(serde_json::Number),
    /// A JSON boolean
    Bool(bool),
    /// JSON null; renders as the empty string
    Null,
}

impl CellValue {
    fn from_json(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Bool(b) => CellValue::Bool(b),
            Value::Number(n) => CellValue::Number(n),
            Value::String(s) => CellValue::Text(s),
            nested => CellValue::Text(nested.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

/// One row of source data: column names mapped to scalar values, in the
/// order the upstream document listed them
///
/// # Examples
///
/// ```
/// use siphon::domain::record::Record;
///
/// let record: Record = serde_json::from_str(r#"{"sku":"A-1","qty":7}"#).unwrap();
/// assert_eq!(record.columns().collect::<Vec<_>>(), vec!["sku", "qty"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    /// Creates an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a column value
    ///
    /// A repeated column keeps its first position; the later value wins,
    /// matching JSON object semantics.
    pub fn push(&mut self, column: impl Into<String>, value: CellValue) {
        let column = column.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some(field) => field.1 = value,
            None => self.fields.push((column, value)),
        }
    }

    /// Returns the value for a column, if present
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column names in document order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Number of columns in this record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether this record has no columns
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a JSON object of column values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Record, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut record = Record {
                    fields: Vec::with_capacity(access.size_hint().unwrap_or(0)),
                };
                while let Some((column, value)) = access.next_entry::<String, Value>()? {
                    record.push(column, CellValue::from_json(value));
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// Ordered sequence of records originating from one source
pub type Dataset = Vec<Record>;
