//! census-curate: curated topic metrics from American Community Survey tables.
//!
//! Raw ACS tables served by the Census Reporter API are keyed by geography id
//! and column code. This crate turns them into a small, fixed set of labeled
//! metrics per topic, and migrates legacy request parameters to the current
//! schema.
//!
//! # Core Pieces
//!
//! - **Topic registry** ([`topic`]): 20 topics, their source tables and the
//!   ordered rules summing raw columns into curated columns.
//! - **Curation** ([`curation`]): applies a topic's rules to a flattened
//!   [`RawTable`], failing on any missing column.
//! - **Parameter migration** ([`migrate`]): index-based v0 payloads to
//!   string-keyed v1 payloads, through frozen [`legacy`] menu tables.
//!
//! # Example
//!
//! ```no_run
//! use census_curate::{CensusReporterClient, Renderer};
//! use serde_json::json;
//!
//! let renderer = Renderer::new(CensusReporterClient::new().unwrap());
//! let output = renderer
//!     .render(json!({"topic": "sex", "sumlevel": "counties", "statecode": "al"}))
//!     .unwrap();
//!
//! println!("Columns: {:?}", output.table.labels);
//! println!("Rows: {}", output.table.rows.len());
//! ```

pub mod client;
pub mod curation;
pub mod error;
pub mod geo;
pub mod input;
pub mod legacy;
pub mod migrate;
pub mod render;
pub mod topic;

pub use client::{CensusReporterClient, DataSource, MockSource};
pub use curation::{CuratedRow, CuratedTable, curate};
pub use error::{CurateError, Result};
pub use geo::{Sumlevel, geo_filter, state_fips};
pub use input::{ApiResponse, RawRow, RawTable};
pub use migrate::{ParamsV0, ParamsV1, SchemaVersion, migrate_params};
pub use render::{RenderConfig, RenderOutput, Renderer};
pub use topic::{CurationRule, Topic, rules, source_table};
