//! Records and line classification.
//!
//! A vector file is a sequence of `Name = Value` lines. Consecutive
//! assignments form a [`Record`]; any line without the delimiter is a
//! boundary.

use std::collections::HashMap;

use crate::error::{CoreError, Result};

/// Separator between a field name and its value.
pub const DELIMITER: &str = " = ";

/// Field names used by the bundled templates.
pub mod fields {
    pub const COUNT: &str = "Count";
    pub const KEY: &str = "Key";
    pub const NONCE: &str = "Nonce";
    pub const PLAINTEXT: &str = "PT";
    pub const ASSOCIATED_DATA: &str = "AD";
    pub const CIPHERTEXT: &str = "CT";
    pub const MESSAGE: &str = "Msg";
    pub const DIGEST: &str = "MD";
}

/// One test vector: field name to field value.
///
/// Field order carries no meaning; templates look fields up by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, overwriting any previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Look up a field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Look up a field that must be present.
    pub fn require(&self, field: &str) -> Result<&str> {
        self.get(field).ok_or_else(|| CoreError::MissingField {
            field: field.to_string(),
        })
    }

    /// Whether the field is present.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Remove all fields.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Move the fields out, leaving this record empty.
    pub fn take(&mut self) -> Record {
        std::mem::take(self)
    }

    /// Iterate over `(field, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (field, value) in iter {
            record.insert(field, value);
        }
        record
    }
}

/// A classified input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `field = value`, split on the first delimiter.
    Assignment { field: &'a str, value: &'a str },
    /// Any line without the delimiter, with its terminator removed.
    Boundary(&'a str),
}

impl<'a> Line<'a> {
    /// Classify a raw line. A trailing `\n` or `\r\n` is ignored.
    pub fn classify(raw: &'a str) -> Self {
        let line = strip_terminator(raw);
        match line.split_once(DELIMITER) {
            Some((field, value)) => Line::Assignment { field, value },
            None => Line::Boundary(line),
        }
    }

    /// Whether this line ends a record.
    pub fn is_boundary(&self) -> bool {
        matches!(self, Line::Boundary(_))
    }

    /// The `(field, value)` entry this line contributes to a record.
    ///
    /// A boundary degenerates to its own text as the field with an empty value.
    pub fn entry(&self) -> (&'a str, &'a str) {
        match *self {
            Line::Assignment { field, value } => (field, value),
            Line::Boundary(text) => (text, ""),
        }
    }
}

fn strip_terminator(raw: &str) -> &str {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    line.strip_suffix('\r').unwrap_or(line)
}
