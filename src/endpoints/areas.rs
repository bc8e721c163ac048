//! Areas endpoint.
//!
//! Areas are edited through dedicated domain actions that keep the area and
//! its historical record in sync, rather than plain PATCH/PUT on the record.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::{json, Value};

use crate::clients::{ApiError, PageResponse};
use crate::config::ApiConfig;
use crate::endpoints::{
    to_params, wire_date, wire_date_opt, wire_datetime_opt, Endpoint, DATE_FORMAT,
};

/// Filters accepted by the areas list and retrieve operations.
#[derive(Clone, Debug, Default, Serialize)]
pub struct AreaFilter {
    /// Area name.
    pub name: Option<String>,
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
    /// Filter by active status.
    pub active: Option<bool>,
    /// Free-text search term.
    pub search: Option<String>,
}

/// Payload for creating a complete area.
#[derive(Clone, Debug, Serialize)]
pub struct NewArea {
    /// Code of the area.
    pub code: String,
    /// Name of the area.
    pub name: String,
    /// Area start date.
    #[serde(with = "wire_date")]
    pub start_date: NaiveDate,
    /// Parent area id.
    pub parent_area: Option<u64>,
}

/// Payload for editing an area together with its last record.
#[derive(Clone, Debug, Default, Serialize)]
pub struct EditArea {
    /// Code of the area.
    pub code: Option<String>,
    /// Name of the area.
    pub name: Option<String>,
    /// Area start date.
    #[serde(with = "wire_date_opt")]
    pub start_date: Option<NaiveDate>,
    /// Area end date.
    #[serde(with = "wire_date_opt")]
    pub end_date: Option<NaiveDate>,
}

/// Client-side binding to the areas collection.
#[derive(Clone, Debug)]
pub struct Areas {
    endpoint: Endpoint,
}

impl Areas {
    /// Base path of the areas collection.
    pub const BASE_PATH: &'static str = "/areas";

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

    /// Lists areas matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list(&self, filter: &AreaFilter) -> Result<PageResponse, ApiError> {
        self.endpoint.list(to_params(filter)?).await
    }

    /// Retrieves one area by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn retrieve(&self, id: u64, filter: &AreaFilter) -> Result<Value, ApiError> {
        self.endpoint.retrieve(id, to_params(filter)?).await
    }

    /// Creates a new area together with its initial record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create_complete(&self, area: &NewArea) -> Result<Value, ApiError> {
        let fields = to_params(area)?;
        self.endpoint
            .post_action("/create_complete", Value::Object(fields))
            .await
    }

    /// Edits an area and its last record in one operation.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn edit_area_and_record(&self, id: u64, edit: &EditArea) -> Result<Value, ApiError> {
        let fields = to_params(edit)?;
        self.endpoint
            .patch_action(&format!("/{id}/edit_area_and_record"), Value::Object(fields))
            .await
    }

    /// Reassigns the parent of an area.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn edit_parent(
        &self,
        id: u64,
        parent_id: u64,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<Value, ApiError> {
        let payload = json!({
            "parent_id": parent_id,
            "start_date": start_date.format(DATE_FORMAT).to_string(),
            "end_date": end_date.map(|date| date.format(DATE_FORMAT).to_string()),
        });
        self.endpoint
            .patch_action(&format!("/{id}/edit_parent"), payload)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_area_payload_shape() {
        let area = NewArea {
            code: "ENG".to_string(),
            name: "Engineering".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            parent_area: None,
        };

        let value = serde_json::to_value(&area).unwrap();
        assert_eq!(
            value,
            json!({
                "code": "ENG",
                "name": "Engineering",
                "start_date": "2024-01-15",
                "parent_area": null,
            })
        );
    }

    #[test]
    fn test_edit_area_defaults_to_all_null() {
        let value = serde_json::to_value(EditArea::default()).unwrap();
        assert_eq!(
            value,
            json!({"code": null, "name": null, "start_date": null, "end_date": null})
        );
    }
}
