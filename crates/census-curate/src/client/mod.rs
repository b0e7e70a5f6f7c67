//! Data sources for raw Census Reporter tables.

mod census_reporter;
mod mock;

pub use census_reporter::CensusReporterClient;
pub use mock::{MockRequest, MockSource};

use crate::error::Result;
use crate::input::ApiResponse;

/// Anything that can answer a `data/show` query.
pub trait DataSource {
    /// Fetch `tables` for the geographies matched by `geo_filter`.
    fn fetch(&self, tables: &[&str], geo_filter: &str, release: &str) -> Result<ApiResponse>;
}

impl<T: DataSource + ?Sized> DataSource for Box<T> {
    fn fetch(&self, tables: &[&str], geo_filter: &str, release: &str) -> Result<ApiResponse> {
        (**self).fetch(tables, geo_filter, release)
    }
}
