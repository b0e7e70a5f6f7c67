//! Serde model of the `data/show` endpoint.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Response body of `/data/show/{release}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Release the data was served from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<Release>,
    /// Table metadata keyed by table id, columns in table order.
    #[serde(default)]
    pub tables: IndexMap<String, TableMeta>,
    /// Values keyed by geography id, then table id.
    #[serde(default)]
    pub data: BTreeMap<String, BTreeMap<String, TableData>>,
    /// Geography metadata keyed by geography id.
    #[serde(default)]
    pub geography: BTreeMap<String, Geography>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Release {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub years: String,
}

/// Metadata for one table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub universe: String,
    #[serde(default)]
    pub columns: IndexMap<String, ColumnMeta>,
}

/// Metadata for one column of a table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnMeta {
    pub name: String,
    /// Nesting depth in the table's hierarchy; absent for flat columns.
    #[serde(default)]
    pub indent: Option<usize>,
}

/// Estimates and margins of error of one table for one geography.
///
/// Suppressed cells come back as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableData {
    #[serde(default)]
    pub estimate: BTreeMap<String, Option<f64>>,
    #[serde(default)]
    pub error: BTreeMap<String, Option<f64>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Geography {
    pub name: String,
}
