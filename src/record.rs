//! Raw tabular records
//!
//! A [`Record`] is one row of a data source with named columns. Values are kept as the raw text
//! found in the source and are only interpreted when a feature extractor asks for them.
use std::collections::HashMap;
use std::iter::FromIterator;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    /// Add a column, replacing any previous value under the same name
    pub fn with_field<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Return the raw text of a column
    ///
    /// # Errors
    ///
    /// Returns [`MissingField`](Error::MissingField) if the column is absent.
    pub fn text(&self, name: &str) -> Result<&str> {
        self.fields
            .get(name)
            .map(|x| x.trim())
            .ok_or_else(|| Error::MissingField(name.to_string()))
    }

    /// Return a column as non-negative number
    ///
    /// # Errors
    ///
    /// Returns [`MissingField`](Error::MissingField) if the column is absent and
    /// [`InvalidField`](Error::InvalidField) if it is not a finite, non-negative number.
    pub fn number(&self, name: &str) -> Result<f64> {
        let raw = self.text(name)?;
        let invalid = || Error::InvalidField {
            field: name.to_string(),
            value: raw.to_string(),
        };

        let value = raw.parse::<f64>().map_err(|_| invalid())?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid());
        }

        Ok(value)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
