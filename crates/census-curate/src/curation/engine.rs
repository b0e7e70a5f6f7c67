//! Rule-driven curation of a [`RawTable`].

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{CurateError, Result};
use crate::input::{RawRow, RawTable};
use crate::topic::{CurationRule, Topic};

use super::table::{CuratedRow, CuratedTable};

/// Curate a raw table with the topic's own rules.
pub fn curate(raw: &RawTable, topic: Topic) -> Result<CuratedTable> {
    curate_with_rules(raw, topic, topic.rules())
}

/// Curate a raw table with an explicit rule list.
///
/// Geographies are visited in sorted id order. The first one is the parent
/// geography of the requested set and is dropped. Any rule column missing
/// from a row aborts the whole curation.
pub fn curate_with_rules(
    raw: &RawTable,
    topic: Topic,
    rules: &[CurationRule],
) -> Result<CuratedTable> {
    let mut table = CuratedTable::new(topic, rules.iter().map(|r| r.label.to_string()).collect());

    for (geoid, row) in raw.rows.iter().skip(1) {
        let values = rules
            .iter()
            .map(|rule| sum_rule(geoid, row, rule))
            .collect::<Result<Vec<_>>>()?;
        table.rows.push(CuratedRow {
            name: row.name.clone(),
            geoid: geoid.clone(),
            values,
        });
    }

    debug!(
        topic = %topic,
        rows = table.rows.len(),
        columns = table.labels.len(),
        "curated table"
    );
    Ok(table)
}

fn sum_rule(geoid: &str, row: &RawRow, rule: &CurationRule) -> Result<f64> {
    rule.columns.iter().try_fold(0.0, |total, code| {
        row.get(code)
            .map(|v| total + v)
            .ok_or_else(|| CurateError::MissingColumn {
                geoid: geoid.to_string(),
                column: code.to_string(),
                label: rule.label.to_string(),
            })
    })
}

/// Check that every rule column exists in a table's declared column space.
///
/// Reports the first offending column with geography `*`.
pub fn check_rules(topic: Topic, known_columns: &BTreeSet<String>) -> Result<()> {
    for rule in topic.rules() {
        if let Some(code) = rule.columns.iter().find(|c| !known_columns.contains(**c)) {
            return Err(CurateError::MissingColumn {
                geoid: "*".to_string(),
                column: code.to_string(),
                label: rule.label.to_string(),
            });
        }
    }
    Ok(())
}
