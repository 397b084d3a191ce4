//! Reading the root description document.
//!
//! The document is a JSON object carrying the declared record count `n` and
//! the required root count `k` (inside a `keys` object, or at the top level),
//! plus one entry per 1-based index:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" },
//!   "3": { "base": 10, "value": "12" },
//!   "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! Entries that are missing or malformed are treated as absent; only the
//! header fields are mandatory. A well-formed entry whose base is out of
//! range (zero, one, negative) is still a record and fails when decoded.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::record::RootRecord;

/// Result type specialized for document parsing.
pub type InputResult<T> = Result<T, InputError>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("input must be a JSON object")]
    NotAnObject,
    #[error("Failed to extract {0}")]
    MissingField(&'static str),
    #[error("Invalid {field}: {value} (must be a positive integer)")]
    InvalidCount { field: &'static str, value: String },
}

/// Why an index did not produce a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Absence {
    Missing,
    NotAnObject,
    MissingBase,
    InvalidBase,
    MissingValue,
}

impl fmt::Display for Absence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Absence::Missing => "no entry",
            Absence::NotAnObject => "entry is not an object",
            Absence::MissingBase => "entry has no base",
            Absence::InvalidBase => "base is not an integer",
            Absence::MissingValue => "entry has no string value",
        };
        f.write_str(reason)
    }
}

/// A parsed root description: header counts plus lazily extracted records.
#[derive(Clone, Debug)]
pub struct Document {
    n: NonZeroUsize,
    k: NonZeroUsize,
    entries: Map<String, Value>,
    /// Canonical numeric keys within `1..=n`, ascending.
    indices: Vec<usize>,
}

impl Document {
    pub fn parse(text: &str) -> InputResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> InputResult<Self> {
        let Value::Object(entries) = value else {
            return Err(InputError::NotAnObject);
        };
        let n = header_count(&entries, "n")?;
        let k = header_count(&entries, "k")?;
        let mut indices: Vec<usize> = entries
            .keys()
            .filter_map(|key| entry_index(key))
            .filter(|&index| index <= n.get())
            .collect();
        indices.sort_unstable();
        debug!(
            n = n.get(),
            k = k.get(),
            entries = indices.len(),
            "parsed document header"
        );
        Ok(Self {
            n,
            k,
            entries,
            indices,
        })
    }

    /// Declared number of records.
    pub fn n(&self) -> NonZeroUsize {
        self.n
    }

    /// Number of roots to select.
    pub fn k(&self) -> NonZeroUsize {
        self.k
    }

    /// Extract the record stored under `index`, if it is present and well
    /// formed.
    pub fn record(&self, index: usize) -> Option<RootRecord> {
        match self.extract(index) {
            Ok(record) => Some(record),
            Err(Absence::Missing) => {
                debug!(index, "record absent");
                None
            }
            Err(reason) => {
                warn!(index, %reason, "skipping malformed record");
                None
            }
        }
    }

    /// Present records for indices `1..=n`, in ascending order. Only keys
    /// that exist are visited, so the cost follows the document size rather
    /// than `n`. Extraction is lazy: a consumer that stops early never
    /// inspects later entries.
    pub fn records(&self) -> impl Iterator<Item = RootRecord> + '_ {
        self.indices.iter().filter_map(|&index| self.record(index))
    }

    fn extract(&self, index: usize) -> Result<RootRecord, Absence> {
        let entry = self
            .entries
            .get(&index.to_string())
            .ok_or(Absence::Missing)?;
        let Value::Object(fields) = entry else {
            return Err(Absence::NotAnObject);
        };
        let base = parse_base(fields.get("base").ok_or(Absence::MissingBase)?)?;
        let literal = fields
            .get("value")
            .and_then(Value::as_str)
            .ok_or(Absence::MissingValue)?;
        Ok(RootRecord::new(index, base, literal))
    }
}

impl FromStr for Document {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Look a header count up under `keys`, falling back to the top level.
fn header_count(
    entries: &Map<String, Value>,
    field: &'static str,
) -> InputResult<NonZeroUsize> {
    let value = entries
        .get("keys")
        .and_then(|keys| keys.get(field))
        .or_else(|| entries.get(field))
        .ok_or(InputError::MissingField(field))?;

    let invalid = || InputError::InvalidCount {
        field,
        value: value.to_string(),
    };
    let count = value.as_i64().ok_or(InputError::MissingField(field))?;
    usize::try_from(count)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(invalid)
}

/// Entry keys are plain decimal indices; `"01"` or `"+1"` never alias `"1"`.
fn entry_index(key: &str) -> Option<usize> {
    key.parse::<usize>()
        .ok()
        .filter(|&index| index >= 1 && index.to_string() == key)
}

/// Bases are written either as JSON integers or as decimal strings. The sign
/// is kept; range checks belong to the decoder.
fn parse_base(value: &Value) -> Result<i64, Absence> {
    match value {
        Value::Number(number) => number.as_i64().ok_or(Absence::InvalidBase),
        Value::String(text) => {
            text.trim().parse::<i64>().map_err(|_| Absence::InvalidBase)
        }
        _ => Err(Absence::InvalidBase),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn k(value: usize) -> NonZeroUsize {
        NonZeroUsize::new(value).unwrap()
    }

    #[test]
    fn parses_header_from_keys_object() {
        let doc = Document::from_value(json!({
            "keys": { "n": 4, "k": 3 },
        }))
        .unwrap();
        assert_eq!(doc.n(), k(4));
        assert_eq!(doc.k(), k(3));
    }

    #[test]
    fn falls_back_to_top_level_header() {
        let doc: Document = r#"{ "n": 2, "k": 1 }"#.parse().unwrap();
        assert_eq!(doc.n(), k(2));
        assert_eq!(doc.k(), k(1));
    }

    #[test]
    fn missing_header_fields_are_errors() {
        let err = Document::from_value(json!({ "keys": { "n": 3 } })).unwrap_err();
        assert!(matches!(err, InputError::MissingField("k")));
        assert_eq!(err.to_string(), "Failed to extract k");

        let err = Document::from_value(json!({ "n": "3", "k": 1 })).unwrap_err();
        assert!(matches!(err, InputError::MissingField("n")));
    }

    #[test]
    fn non_positive_counts_are_rejected() {
        let err = Document::from_value(json!({ "keys": { "n": 0, "k": 1 } }))
            .unwrap_err();
        assert!(matches!(err, InputError::InvalidCount { field: "n", .. }));

        let err = Document::from_value(json!({ "keys": { "n": 2, "k": -1 } }))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid k: -1 (must be a positive integer)"
        );
    }

    #[test]
    fn rejects_non_object_documents_and_bad_json() {
        assert!(matches!(
            Document::parse("[1, 2]").unwrap_err(),
            InputError::NotAnObject
        ));
        assert!(matches!(
            Document::parse("{ \"keys\": ").unwrap_err(),
            InputError::Json(_)
        ));
    }

    #[test]
    fn bases_may_be_numbers_or_strings() {
        let doc = Document::from_value(json!({
            "keys": { "n": 2, "k": 2 },
            "1": { "base": "16", "value": "ff" },
            "2": { "base": 2, "value": "-101" },
        }))
        .unwrap();
        assert_eq!(doc.record(1), Some(RootRecord::new(1, 16, "ff")));
        assert_eq!(doc.record(2), Some(RootRecord::new(2, 2, "-101")));
    }

    #[test]
    fn malformed_entries_are_absent() {
        let doc = Document::from_value(json!({
            "keys": { "n": 6, "k": 1 },
            "1": "not an object",
            "2": { "value": "1" },
            "3": { "base": "ten", "value": "1" },
            "4": { "base": 1.5, "value": "1" },
            "5": { "base": 10, "value": 7 },
        }))
        .unwrap();
        for index in 1..=6 {
            assert_eq!(doc.record(index), None, "index {index}");
        }
        assert_eq!(doc.extract(1), Err(Absence::NotAnObject));
        assert_eq!(doc.extract(2), Err(Absence::MissingBase));
        assert_eq!(doc.extract(3), Err(Absence::InvalidBase));
        assert_eq!(doc.extract(4), Err(Absence::InvalidBase));
        assert_eq!(doc.extract(5), Err(Absence::MissingValue));
        assert_eq!(doc.extract(6), Err(Absence::Missing));
    }

    #[test]
    fn negative_bases_are_kept_for_the_decoder() {
        let doc = Document::from_value(json!({
            "keys": { "n": 2, "k": 1 },
            "1": { "base": "-2", "value": "1" },
            "2": { "base": -16, "value": "ff" },
        }))
        .unwrap();
        assert_eq!(doc.record(1), Some(RootRecord::new(1, -2, "1")));
        assert_eq!(doc.record(2), Some(RootRecord::new(2, -16, "ff")));
    }

    #[test]
    fn records_visit_only_present_keys() {
        let doc = Document::from_value(json!({
            "keys": { "n": 1_000_000_000_000u64, "k": 2 },
            "7": { "base": "10", "value": "1" },
            "999999999999": { "base": "10", "value": "2" },
            "1000000000001": { "base": "10", "value": "3" },
            "01": { "base": "10", "value": "4" },
            "+2": { "base": "10", "value": "5" },
        }))
        .unwrap();
        assert_eq!(doc.indices, vec![7, 999_999_999_999]);
        let indices: Vec<usize> = doc.records().map(|r| r.index).collect();
        assert_eq!(indices, vec![7, 999_999_999_999]);
    }

    #[test]
    fn records_walk_indices_up_to_n_only() {
        let doc = Document::from_value(json!({
            "keys": { "n": 3, "k": 2 },
            "1": { "base": "10", "value": "4" },
            "3": { "base": "10", "value": "5" },
            "4": { "base": "10", "value": "6" },
        }))
        .unwrap();
        let indices: Vec<usize> = doc.records().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 3]);
    }
}
