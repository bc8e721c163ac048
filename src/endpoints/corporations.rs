//! Corporations endpoint.
//!
//! Corporations carry the full uniform CRUD surface: list, retrieve,
//! create, partial and full update, and delete.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiError, ApiResponse, PageResponse};
use crate::config::ApiConfig;
use crate::endpoints::{to_params, wire_datetime_opt, Endpoint};

/// Filters accepted by the corporations list and retrieve operations.
///
/// Shared with [branch corporations](crate::endpoints::BranchCorporations),
/// which filter on the same fields.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CorporationFilter {
    /// Case-insensitive exact match on the name.
    #[serde(rename = "name__iexact")]
    pub name_iexact: Option<String>,
    /// Code of the corporation.
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
    /// Comma-separated response fields to expand (e.g. `"uuid"`).
    pub expand: Option<String>,
}

/// Payload for creating or updating a corporation.
#[derive(Clone, Debug, Serialize)]
pub struct CorporationFields {
    /// Code of the corporation.
    pub code: String,
    /// Name of the corporation.
    pub name: String,
}

/// Client-side binding to the corporations collection.
#[derive(Clone, Debug)]
pub struct Corporations {
    endpoint: Endpoint,
}

impl Corporations {
    /// Base path of the corporations collection.
    pub const BASE_PATH: &'static str = "/corporations";

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

    /// Lists corporations matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list(&self, filter: &CorporationFilter) -> Result<PageResponse, ApiError> {
        self.endpoint.list(to_params(filter)?).await
    }

    /// Retrieves one corporation by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn retrieve(&self, id: u64, filter: &CorporationFilter) -> Result<Value, ApiError> {
        self.endpoint.retrieve(id, to_params(filter)?).await
    }

    /// Creates a new corporation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create(&self, fields: &CorporationFields) -> Result<Value, ApiError> {
        self.endpoint.create(Value::Object(to_params(fields)?)).await
    }

    /// Partially updates a corporation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_partial(
        &self,
        id: u64,
        fields: &CorporationFields,
    ) -> Result<Value, ApiError> {
        self.endpoint
            .update_partial(id, Value::Object(to_params(fields)?))
            .await
    }

    /// Fully replaces a corporation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_full(
        &self,
        id: u64,
        fields: &CorporationFields,
    ) -> Result<Value, ApiError> {
        self.endpoint
            .update_full(id, Value::Object(to_params(fields)?))
            .await
    }

    /// Deletes a corporation.
    ///
    /// The returned sentinel carries status 204 on success; no body is
    /// decoded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete(
        &self,
        id: u64,
        filter: &CorporationFilter,
    ) -> Result<ApiResponse, ApiError> {
        self.endpoint.delete(id, to_params(filter)?).await
    }
}
