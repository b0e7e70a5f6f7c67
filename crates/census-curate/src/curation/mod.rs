//! Curation: raw table columns aggregated into labeled topic metrics.

mod engine;
mod table;

pub use engine::{check_rules, curate, curate_with_rules};
pub use table::{CuratedRow, CuratedTable};
