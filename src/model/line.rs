//! Line model: one CSV record as an ordered field list
//!
//! A `CsvLine` owns its fields; insertion order is column order and index
//! `i` keeps referring to the same logical column unless fields are
//! explicitly inserted or removed. Serialization is computed on demand,
//! never cached.

use std::ops::{Index, IndexMut};

use super::column::ColumnKey;
use crate::codec::{encode_field, split_line};
use crate::config::CsvConfig;

/// A single CSV record: an ordered sequence of field values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvLine {
    /// Field values in column order
    pub fields: Vec<String>,
}

impl CsvLine {
    /// Construct a line directly from an ordered field list
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Construct a line by parsing one raw CSV-formatted line of text
    ///
    /// Never fails: malformed input produces a best-effort parse with at
    /// least one field.
    pub fn parse(raw: &str, config: &CsvConfig) -> Self {
        Self {
            fields: split_line(raw, config.delimiter),
        }
    }

    /// Serialize the line to raw CSV text
    ///
    /// Every field is encoded (always quoted) and joined with the
    /// delimiter; no trailing delimiter is emitted.
    pub fn to_raw(&self, config: &CsvConfig) -> String {
        let delimiter = config.delimiter.to_string();
        self.fields
            .iter()
            .map(|field| encode_field(field))
            .collect::<Vec<_>>()
            .join(&delimiter)
    }

    /// Bounds-checked field access
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Bounds-checked field replacement
    ///
    /// Returns the previous value, or `None` (leaving the line unchanged)
    /// when `index` is out of range.
    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Option<String> {
        let slot = self.fields.get_mut(index)?;
        Some(std::mem::replace(slot, value.into()))
    }

    /// Append a field at the end of the line
    pub fn push_field(&mut self, value: impl Into<String>) {
        self.fields.push(value.into());
    }

    /// Number of fields in the line
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the line has no fields
    ///
    /// Note that a line parsed from raw text never is: even an empty line
    /// parses to a single empty field.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The fields as a slice, in column order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl From<Vec<String>> for CsvLine {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

/// Positional access by raw index or by [`ColumnKey`]
///
/// Out-of-range access is a precondition violation and panics; callers
/// validate against [`CsvLine::len`] or use [`CsvLine::get`].
impl<K: ColumnKey> Index<K> for CsvLine {
    type Output = String;

    fn index(&self, key: K) -> &Self::Output {
        &self.fields[key.index()]
    }
}

impl<K: ColumnKey> IndexMut<K> for CsvLine {
    fn index_mut(&mut self, key: K) -> &mut Self::Output {
        &mut self.fields[key.index()]
    }
}
