//! Human-readable column names from table metadata.

use indexmap::IndexMap;

use super::response::TableMeta;

/// Label every column of a table, in table order.
///
/// Nested columns are named after their ancestors, skipping the indent-0
/// root (usually "Total:"): under "Male:" the column "Under 5 years"
/// becomes "Male: Under 5 years".
pub fn column_labels(table: &TableMeta) -> IndexMap<String, String> {
    let mut labels = IndexMap::with_capacity(table.columns.len());
    let mut path: Vec<&str> = Vec::new();

    for (code, column) in &table.columns {
        let label = match column.indent {
            None => column.name.clone(),
            Some(indent) => {
                if indent >= path.len() {
                    path.push(&column.name);
                } else {
                    path.truncate(indent);
                    path.push(&column.name);
                }
                if indent == 0 {
                    column.name.clone()
                } else {
                    path[1..].join(" ")
                }
            }
        };
        labels.insert(code.clone(), label);
    }

    labels
}
