//! Curated output rows and export.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::topic::Topic;

/// Curated metrics of one geography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratedRow {
    /// Geography display name.
    pub name: String,
    pub geoid: String,
    /// One value per label of the owning table, in label order.
    pub values: Vec<f64>,
}

/// Curated table for one topic and request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratedTable {
    pub topic: Topic,
    /// Curated column labels, in rule order.
    pub labels: Vec<String>,
    pub rows: Vec<CuratedRow>,
}

impl CuratedTable {
    pub fn new(topic: Topic, labels: Vec<String>) -> Self {
        Self {
            topic,
            labels,
            rows: Vec::new(),
        }
    }

    /// Header of the exported table: identity columns then labels.
    pub fn header(&self) -> Vec<&str> {
        let mut header = vec!["name", "geoid"];
        header.extend(self.labels.iter().map(String::as_str));
        header
    }

    /// Value of a labeled column for a geography.
    pub fn value(&self, geoid: &str, label: &str) -> Option<f64> {
        let column = self.labels.iter().position(|l| l == label)?;
        self.rows
            .iter()
            .find(|r| r.geoid == geoid)
            .and_then(|r| r.values.get(column).copied())
    }

    /// Write the table as delimited text (TSV with `b'\t'`, CSV with `b','`).
    pub fn write_delimited<W: Write>(&self, writer: W, delimiter: u8) -> Result<()> {
        let mut out = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(writer);

        out.write_record(self.header())?;
        for row in &self.rows {
            let mut record = vec![row.name.clone(), row.geoid.clone()];
            record.extend(row.values.iter().map(|v| v.to_string()));
            out.write_record(&record)?;
        }
        out.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}
