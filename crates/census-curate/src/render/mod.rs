//! Request orchestration: parameters → geography filter → fetch → flatten → curate.

mod config;

pub use config::{DEFAULT_API_URL, DEFAULT_RELEASE, RenderConfig};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::client::DataSource;
use crate::curation::{CuratedTable, check_rules, curate};
use crate::error::Result;
use crate::input::{ApiResponse, FlattenOptions, MOE_SUFFIX, RawTable, column_labels, flatten};
use crate::migrate::ParamsV1;
use crate::topic::Topic;

/// Provenance of a rendered table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestInfo {
    pub topic: Topic,
    pub table_id: String,
    pub geo_filter: String,
    /// Release requested, or the one the API reported serving.
    pub release: String,
    pub fetched_at: DateTime<Utc>,
}

/// Curated table plus request provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOutput {
    pub request: RequestInfo,
    pub table: CuratedTable,
}

/// Flattened table plus human-readable column labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOutput {
    pub request: RequestInfo,
    /// Column code → label, in table order.
    pub labels: IndexMap<String, String>,
    pub table: RawTable,
}

/// Resolves requests against a data source.
pub struct Renderer<S: DataSource> {
    source: S,
    config: RenderConfig,
}

impl<S: DataSource> Renderer<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, RenderConfig::default())
    }

    pub fn with_config(source: S, config: RenderConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Render a v0 or v1 parameter payload.
    pub fn render(&self, params: Value) -> Result<RenderOutput> {
        let params = ParamsV1::from_value(params)?;
        self.render_params(&params)
    }

    /// Render already-migrated parameters.
    pub fn render_params(&self, params: &ParamsV1) -> Result<RenderOutput> {
        let (topic, response, request) = self.fetch(params)?;

        let raw = flatten(&response, FlattenOptions::default());
        if !raw.columns.is_empty() {
            check_rules(topic, &raw.columns)?;
        }
        let table = curate(&raw, topic)?;

        info!(
            topic = %topic,
            geo_filter = %request.geo_filter,
            rows = table.rows.len(),
            "rendered topic"
        );
        Ok(RenderOutput { request, table })
    }

    /// Fetch and flatten a topic's source table without curating it.
    pub fn render_raw(&self, params: &ParamsV1) -> Result<RawOutput> {
        let (_, response, request) = self.fetch(params)?;
        let options = FlattenOptions {
            include_moe: self.config.include_moe,
        };

        let mut labels = IndexMap::new();
        if let Some(meta) = response.tables.get(&request.table_id) {
            for (code, label) in column_labels(meta) {
                if options.include_moe {
                    let moe_label = format!("{} (margin of error)", label);
                    labels.insert(code.clone(), label);
                    labels.insert(format!("{}{}", code, MOE_SUFFIX), moe_label);
                } else {
                    labels.insert(code, label);
                }
            }
        }

        Ok(RawOutput {
            request,
            labels,
            table: flatten(&response, options),
        })
    }

    fn fetch(&self, params: &ParamsV1) -> Result<(Topic, ApiResponse, RequestInfo)> {
        let topic = params.resolve_topic()?;
        let geo_filter = params.geo_filter()?;
        let table_id = topic.source_table();
        debug!(topic = %topic, table_id, geo_filter = %geo_filter, "resolved request");

        let response = self
            .source
            .fetch(&[table_id], &geo_filter, &self.config.release)?;
        let release = response
            .release
            .as_ref()
            .map(|r| r.id.clone())
            .unwrap_or_else(|| self.config.release.clone());

        let request = RequestInfo {
            topic,
            table_id: table_id.to_string(),
            geo_filter,
            release,
            fetched_at: Utc::now(),
        };
        Ok((topic, response, request))
    }
}
