//! Position records endpoint (read-only history).

use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiError, PageResponse};
use crate::config::ApiConfig;
use crate::endpoints::{to_params, Endpoint};

/// Filters accepted by the position records operations.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PositionRecordFilter {
    /// Position resource URL.
    pub position: Option<String>,
    /// Free-text search term.
    pub search: Option<String>,
}

/// Client-side binding to the position records collection.
#[derive(Clone, Debug)]
pub struct PositionRecords {
    endpoint: Endpoint,
}

impl PositionRecords {
    /// Base path of the position records collection.
    pub const BASE_PATH: &'static str = "/position_records";

    /// Creates the binding from a configuration.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            endpoint: Endpoint::new(Self::BASE_PATH, config),
        }
    }

    /// Returns the underlying endpoint binding.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the underlying endpoint binding for overrides.
    pub fn endpoint_mut(&mut self) -> &mut Endpoint {
        &mut self.endpoint
    }

    /// Lists position records matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list(&self, filter: &PositionRecordFilter) -> Result<PageResponse, ApiError> {
        self.endpoint.list(to_params(filter)?).await
    }

    /// Retrieves one position record by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn retrieve(
        &self,
        id: u64,
        filter: &PositionRecordFilter,
    ) -> Result<Value, ApiError> {
        self.endpoint.retrieve(id, to_params(filter)?).await
    }
}
