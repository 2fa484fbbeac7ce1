use crate::cell::CellValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One dataset record, keyed by column name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(HashMap<String, CellValue>);

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<V: Into<CellValue>>(mut self, column: &str, value: V) -> Self {
        self.0.insert(column.to_string(), value.into());
        self
    }

    /// Reads a column. `None` means the row has no such column, which is not
    /// the same as an explicit null.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.0.get(column)
    }

    /// Reads an optional column; an unset column reads as absent.
    pub fn field(&self, column: Option<&str>) -> Option<&CellValue> {
        column.and_then(|column| self.get(column))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Ordered rows supplied by the host. The gallery only ever reads it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Row>> for Dataset {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<Row> for Dataset {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
