//! Parent areas endpoint (read-only hierarchy records).

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiError, PageResponse};
use crate::config::ApiConfig;
use crate::endpoints::{areas::Areas, to_params, wire_datetime_opt, Endpoint};

/// Filters accepted by the parent areas operations.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ParentAreaFilter {
    /// Area id; sent on the wire as the area's resource URL.
    #[serde(skip)]
    pub area: Option<u64>,
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

/// Client-side binding to the parent areas collection.
#[derive(Clone, Debug)]
pub struct ParentAreas {
    endpoint: Endpoint,
}

impl ParentAreas {
    /// Base path of the parent areas collection.
    pub const BASE_PATH: &'static str = "/parent_areas";

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

    /// Lists parent area records matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list(&self, filter: &ParentAreaFilter) -> Result<PageResponse, ApiError> {
        self.endpoint.list(self.params(filter)?).await
    }

    /// Retrieves one parent area record by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn retrieve(&self, id: u64, filter: &ParentAreaFilter) -> Result<Value, ApiError> {
        self.endpoint.retrieve(id, self.params(filter)?).await
    }

    fn params(
        &self,
        filter: &ParentAreaFilter,
    ) -> Result<serde_json::Map<String, Value>, ApiError> {
        let mut params = to_params(filter)?;
        params.insert(
            "area".to_string(),
            filter.area.map_or(Value::Null, |id| {
                Value::String(self.endpoint.resource_url(Areas::BASE_PATH, id))
            }),
        );
        Ok(params)
    }
}
