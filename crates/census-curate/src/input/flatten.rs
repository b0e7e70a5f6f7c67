//! Flatten nested estimate/error responses into a [`RawTable`].

use tracing::debug;

use super::raw::{RawRow, RawTable};
use super::response::ApiResponse;

/// Suffix for margin-of-error columns.
pub const MOE_SUFFIX: &str = "_moe";

/// Options for [`flatten`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FlattenOptions {
    /// Also copy margins of error, as `<code>_moe` columns.
    pub include_moe: bool,
}

/// Build one row per geography from a `data/show` response.
///
/// Every geography listed under `geography` gets a row, even without data.
/// Null cells are left out of the row.
pub fn flatten(response: &ApiResponse, options: FlattenOptions) -> RawTable {
    let mut table = RawTable::new();

    for (geoid, geography) in &response.geography {
        table.insert(geoid.clone(), RawRow::new(geography.name.clone()));
    }

    for (geoid, tables) in &response.data {
        let row = table
            .rows
            .entry(geoid.clone())
            .or_insert_with(|| RawRow::new(geoid.clone()));

        for data in tables.values() {
            for (code, value) in &data.estimate {
                match value {
                    Some(v) => {
                        row.values.insert(code.clone(), *v);
                    }
                    None => debug!(geoid = %geoid, column = %code, "null estimate skipped"),
                }
            }
            if options.include_moe {
                for (code, value) in &data.error {
                    if let Some(v) = value {
                        row.values.insert(format!("{}{}", code, MOE_SUFFIX), *v);
                    }
                }
            }
        }
    }

    for meta in response.tables.values() {
        for code in meta.columns.keys() {
            table.columns.insert(code.clone());
            if options.include_moe {
                table.columns.insert(format!("{}{}", code, MOE_SUFFIX));
            }
        }
    }

    table
}
