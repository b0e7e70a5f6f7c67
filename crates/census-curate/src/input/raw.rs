//! Flattened raw table keyed by geography id.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Raw values of one geography.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    /// Geography display name.
    pub name: String,
    /// Values keyed by raw column code.
    pub values: BTreeMap<String, f64>,
}

impl RawRow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, code: impl Into<String>, value: f64) -> Self {
        self.values.insert(code.into(), value);
        self
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.values.get(code).copied()
    }
}

/// Mapping geography id → raw row, iterated in sorted geography id order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub rows: BTreeMap<String, RawRow>,
    /// Column codes the source tables declare, when known.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub columns: BTreeSet<String>,
}

impl RawTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row(mut self, geoid: impl Into<String>, row: RawRow) -> Self {
        self.insert(geoid, row);
        self
    }

    pub fn insert(&mut self, geoid: impl Into<String>, row: RawRow) {
        self.rows.insert(geoid.into(), row);
    }

    pub fn row(&self, geoid: &str) -> Option<&RawRow> {
        self.rows.get(geoid)
    }

    pub fn get(&self, geoid: &str, code: &str) -> Option<f64> {
        self.row(geoid).and_then(|r| r.get(code))
    }

    /// Geography ids in sorted order.
    pub fn geoids(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
