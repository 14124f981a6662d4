//! Materialized composite values.
//!
//! [`Record`] is an owned, ordered list of [`Field`]s: the result of fully
//! consuming a [`Parser`](crate::Parser), or the input handed to the serializer.
//!
//! ## Examples
//!
//! ```rust
//! use pg_composite::{Field, Record};
//!
//! let record: Record = r#"(42,,"x y")"#.parse().unwrap();
//! assert_eq!(record.len(), 3);
//! assert_eq!(record.get(0).and_then(Field::as_str), Some("42"));
//! assert!(record.get(1).map_or(false, Field::is_null));
//! assert_eq!(record.to_literal().unwrap(), r#"(42,,"x y")"#);
//! ```

use crate::{Error, Field, Result};
use serde::{Deserialize, Serialize};
use std::ops::Index;
use std::str::FromStr;

/// An ordered sequence of composite fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Vec<Field>);

impl Record {
    /// Creates an empty `Record`.
    #[must_use]
    pub fn new() -> Self {
        Record(Vec::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Record(Vec::with_capacity(capacity))
    }

    /// Appends a field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pg_composite::{Field, Record};
    ///
    /// let mut record = Record::new();
    /// record.push("a");
    /// record.push(Field::Null);
    /// assert_eq!(record.to_literal().unwrap(), "(a,)");
    /// ```
    pub fn push(&mut self, field: impl Into<Field>) {
        self.0.push(field.into());
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Field> {
        self.0.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Field] {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<Field> {
        self.0
    }

    /// Serializes this record with the strict empty policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if the record has no fields.
    pub fn to_literal(&self) -> Result<String> {
        crate::serialize(self.iter())
    }
}

impl FromStr for Record {
    type Err = Error;

    /// Parses a whole literal, failing on the first malformed construct.
    fn from_str(s: &str) -> Result<Self> {
        crate::parse(s).collect()
    }
}

impl Index<usize> for Record {
    type Output = Field;

    fn index(&self, index: usize) -> &Field {
        &self.0[index]
    }
}

impl From<Vec<Field>> for Record {
    fn from(fields: Vec<Field>) -> Self {
        Record(fields)
    }
}

impl From<Record> for Vec<Field> {
    fn from(record: Record) -> Self {
        record.0
    }
}

impl IntoIterator for Record {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<F: Into<Field>> FromIterator<F> for Record {
    fn from_iter<T: IntoIterator<Item = F>>(iter: T) -> Self {
        Record(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_reports_first_error() {
        let err = "(1,\"oops)".parse::<Record>().unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_empty_record_does_not_serialize() {
        assert_eq!(Record::new().to_literal(), Err(Error::EmptyInput));
    }

    #[test]
    fn test_collect_from_options() {
        let record: Record = vec![Some("a"), None].into_iter().collect();
        assert_eq!(record[0], Field::from("a"));
        assert_eq!(record[1], Field::Null);
    }

    #[test]
    fn test_serde_transparent() {
        let record: Record = "(a,,\"\")".parse().unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"["a",null,""]"#);
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
