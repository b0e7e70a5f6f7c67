//! Canned data source for tests and offline use.

use std::cell::RefCell;
use std::path::Path;

use crate::error::{CurateError, Result};
use crate::input::ApiResponse;

use super::DataSource;

/// A request seen by a [`MockSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRequest {
    pub tables: Vec<String>,
    pub geo_filter: String,
    pub release: String,
}

/// Data source that answers every query with the same response.
pub struct MockSource {
    response: ApiResponse,
    requests: RefCell<Vec<MockRequest>>,
}

impl MockSource {
    pub fn new(response: ApiResponse) -> Self {
        Self {
            response,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Load the canned response from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path).map_err(|e| CurateError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::new(serde_json::from_str(&body)?))
    }

    /// Requests answered so far, oldest first.
    pub fn requests(&self) -> Vec<MockRequest> {
        self.requests.borrow().clone()
    }
}

impl DataSource for MockSource {
    fn fetch(&self, tables: &[&str], geo_filter: &str, release: &str) -> Result<ApiResponse> {
        self.requests.borrow_mut().push(MockRequest {
            tables: tables.iter().map(|t| t.to_string()).collect(),
            geo_filter: geo_filter.to_string(),
            release: release.to_string(),
        });
        Ok(self.response.clone())
    }
}
