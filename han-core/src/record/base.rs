//! Base implementation of records.
use std::collections::{
    btree_map::{Iter, Keys},
    BTreeMap,
};
use thiserror::Error;

/// Errors raised when reading a [`Record`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Record key error.
    #[error("Record key error: {0}")]
    KeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    ValueTypeError(String),
}

/// Represents possible types of values that can be stored in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A single floating-point value.
    Scalar(f64),

    /// A text value.
    String(String),
}

/// A container for storing key-value pairs.
///
/// Keys are kept in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(BTreeMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f64) -> Self {
        Self(BTreeMap::from([(name.into(), RecordValue::Scalar(value))]))
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Returns an iterator over the keys in the record.
    pub fn keys(&self) -> Keys<'_, String, RecordValue> {
        self.0.keys()
    }

    /// Inserts a key-value pair into the record.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Returns an iterator over the key-value pairs in the record.
    pub fn iter(&self) -> Iter<'_, String, RecordValue> {
        self.0.iter()
    }

    /// Gets a reference to the value associated with the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// Merges two records, consuming both.
    ///
    /// Values of `record` overwrite values of `self` with the same key.
    pub fn merge(self, record: Record) -> Self {
        Record(self.0.into_iter().chain(record.0).collect())
    }

    /// Gets a scalar value from the record.
    pub fn get_scalar(&self, k: &str) -> Result<f64, RecordError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(RecordError::ValueTypeError("Scalar".to_string())),
            None => Err(RecordError::KeyError(k.to_string())),
        }
    }

    /// Gets a string value from the record.
    pub fn get_string(&self, k: &str) -> Result<String, RecordError> {
        match self.0.get(k) {
            Some(RecordValue::String(s)) => Ok(s.clone()),
            Some(_) => Err(RecordError::ValueTypeError("String".to_string())),
            None => Err(RecordError::KeyError(k.to_string())),
        }
    }

    /// Checks if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_get() {
        let record = Record::from_slice(&[
            ("reward", RecordValue::Scalar(-1.0)),
            ("kind", RecordValue::String("counter".to_string())),
        ]);
        assert_eq!(record.get_scalar("reward"), Ok(-1.0));
        assert_eq!(record.get_string("kind"), Ok("counter".to_string()));
        assert_eq!(
            record.get_scalar("kind"),
            Err(RecordError::ValueTypeError("Scalar".to_string()))
        );
        assert_eq!(
            record.get_string("step"),
            Err(RecordError::KeyError("step".to_string()))
        );
    }

    #[test]
    fn test_merge() {
        let a = Record::from_scalar("x", 1.0).merge(Record::from_slice(&[
            ("x", RecordValue::Scalar(2.0)),
            ("y", RecordValue::Scalar(3.0)),
        ]));
        assert_eq!(a.get_scalar("x"), Ok(2.0));
        assert_eq!(a.keys().cloned().collect::<Vec<_>>(), vec!["x", "y"]);
    }
}
