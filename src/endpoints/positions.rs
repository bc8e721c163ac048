//! Positions endpoint.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiError, PageResponse};
use crate::config::ApiConfig;
use crate::endpoints::{to_params, wire_date, wire_date_opt, wire_datetime_opt, Endpoint};

/// Filters accepted by the positions list and retrieve operations.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PositionFilter {
    /// Position name.
    pub name: Option<String>,
    /// Code of the position.
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
    /// Filter by active status.
    pub active: Option<bool>,
    /// Free-text search term.
    pub search: Option<String>,
}

/// Payload for creating a complete position.
#[derive(Clone, Debug, Serialize)]
pub struct NewPosition {
    /// Code of the position.
    pub code: String,
    /// Name of the position.
    pub name: String,
    /// Position start date.
    #[serde(with = "wire_date")]
    pub start_date: NaiveDate,
    /// Position category.
    pub category: Option<String>,
    /// Position description.
    pub description: Option<String>,
}

/// Payload for editing a position together with its last record.
#[derive(Clone, Debug, Default, Serialize)]
pub struct EditPosition {
    /// Code of the position.
    pub code: Option<String>,
    /// Name of the position.
    pub name: Option<String>,
    /// Position category.
    pub category: Option<String>,
    /// Position description.
    pub description: Option<String>,
    /// Position start date.
    #[serde(with = "wire_date_opt")]
    pub start_date: Option<NaiveDate>,
    /// Position end date.
    #[serde(with = "wire_date_opt")]
    pub end_date: Option<NaiveDate>,
}

/// Client-side binding to the positions collection.
#[derive(Clone, Debug)]
pub struct Positions {
    endpoint: Endpoint,
}

impl Positions {
    /// Base path of the positions collection.
    pub const BASE_PATH: &'static str = "/positions";

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

    /// Lists positions matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list(&self, filter: &PositionFilter) -> Result<PageResponse, ApiError> {
        self.endpoint.list(to_params(filter)?).await
    }

    /// Retrieves one position by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn retrieve(&self, id: u64, filter: &PositionFilter) -> Result<Value, ApiError> {
        self.endpoint.retrieve(id, to_params(filter)?).await
    }

    /// Creates a new position together with its initial record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create_complete(&self, position: &NewPosition) -> Result<Value, ApiError> {
        let fields = to_params(position)?;
        self.endpoint
            .post_action("/create_complete", Value::Object(fields))
            .await
    }

    /// Edits a position and its last record in one operation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn edit_position_and_record(
        &self,
        id: u64,
        edit: &EditPosition,
    ) -> Result<Value, ApiError> {
        let fields = to_params(edit)?;
        self.endpoint
            .patch_action(
                &format!("/{id}/edit_position_and_record"),
                Value::Object(fields),
            )
            .await
    }
}
