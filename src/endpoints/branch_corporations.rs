//! Branch corporations endpoint.

use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiError, ApiResponse, PageResponse};
use crate::config::ApiConfig;
use crate::endpoints::{corporations::CorporationFilter, to_params, Endpoint};

/// Payload for creating or updating a branch corporation.
#[derive(Clone, Debug, Serialize)]
pub struct BranchCorporationFields {
    /// Code of the branch.
    pub code: String,
    /// Name of the branch.
    pub name: String,
    /// Id of the owning corporation.
    pub corporation: u64,
}

/// Client-side binding to the branch corporations collection.
///
/// Filters are shared with [`Corporations`](crate::endpoints::Corporations);
/// both collections filter on the same fields.
#[derive(Clone, Debug)]
pub struct BranchCorporations {
    endpoint: Endpoint,
}

impl BranchCorporations {
    /// Base path of the branch corporations collection.
    pub const BASE_PATH: &'static str = "/branch_corporations";

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

    /// Lists branch corporations matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list(&self, filter: &CorporationFilter) -> Result<PageResponse, ApiError> {
        self.endpoint.list(to_params(filter)?).await
    }

    /// Retrieves one branch corporation by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn retrieve(&self, id: u64, filter: &CorporationFilter) -> Result<Value, ApiError> {
        self.endpoint.retrieve(id, to_params(filter)?).await
    }

    /// Creates a new branch corporation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create(&self, fields: &BranchCorporationFields) -> Result<Value, ApiError> {
        self.endpoint.create(Value::Object(to_params(fields)?)).await
    }

    /// Partially updates a branch corporation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_partial(
        &self,
        id: u64,
        fields: &BranchCorporationFields,
    ) -> Result<Value, ApiError> {
        self.endpoint
            .update_partial(id, Value::Object(to_params(fields)?))
            .await
    }

    /// Fully replaces a branch corporation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_full(
        &self,
        id: u64,
        fields: &BranchCorporationFields,
    ) -> Result<Value, ApiError> {
        self.endpoint
            .update_full(id, Value::Object(to_params(fields)?))
            .await
    }

    /// Deletes a branch corporation.
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
