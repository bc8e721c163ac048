//! Area records endpoint (read-only history).

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiError, PageResponse};
use crate::config::ApiConfig;
use crate::endpoints::{to_params, wire_datetime_opt, Endpoint};

/// Filters accepted by the area records operations.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AreaRecordFilter {
    /// Area resource URL.
    pub area: Option<String>,
    /// Code of the area.
    pub code: Option<String>,
    /// Lower bound on creation datetime.
    #[serde(rename = "created__gt", with = "wire_datetime_opt")]
    pub created_after: Option<NaiveDateTime>,
    /// Upper bound on creation datetime.
    #[serde(rename = "created__lt", with = "wire_datetime_opt")]
    pub created_before: Option<NaiveDateTime>,
    /// Lower bound on modification datetime.
    #[serde(rename = "modified__gt", with = "wire_datetime_opt")]
    pub modified_after: Option<NaiveDateTime>,
    /// Upper bound on modification datetime.
    #[serde(rename = "modified__lt", with = "wire_datetime_opt")]
    pub modified_before: Option<NaiveDateTime>,
    /// Free-text search term.
    pub search: Option<String>,
}

/// Client-side binding to the area records collection.
#[derive(Clone, Debug)]
pub struct AreaRecords {
    endpoint: Endpoint,
}

impl AreaRecords {
    /// Base path of the area records collection.
    pub const BASE_PATH: &'static str = "/area_records";

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

    /// Lists area records matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list(&self, filter: &AreaRecordFilter) -> Result<PageResponse, ApiError> {
        self.endpoint.list(to_params(filter)?).await
    }

    /// Retrieves one area record by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn retrieve(&self, id: u64, filter: &AreaRecordFilter) -> Result<Value, ApiError> {
        self.endpoint.retrieve(id, to_params(filter)?).await
    }
}
