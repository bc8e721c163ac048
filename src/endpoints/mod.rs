//! Resource endpoint bindings for the People Control API.
//!
//! Each resource type (employees, areas, positions, corporations, users, and
//! their historical record sub-resources) wraps an [`Endpoint`] binding: a
//! fixed base path plus the page size and timeout inherited from the
//! configuration. The binding offers the uniform list/retrieve/create/
//! update/delete operations; the resource types add the typed filters,
//! payloads, and domain actions the remote API documents.
//!
//! # Example
//!
//! ```rust,ignore
//! use people_control_api::{ApiConfig, AuthToken, BaseUrl};
//! use people_control_api::endpoints::{Employees, EmployeeFilter};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com")?)
//!     .auth_token(AuthToken::new(std::env::var("PEOPLE_CONTROL_API_TOKEN")?)?)
//!     .build()?;
//!
//! let employees = Employees::new(config);
//! let mut page = employees.list(&EmployeeFilter::default()).await?;
//! page.fetch_all(1).await?;
//! ```

mod area_records;
mod areas;
mod branch_corporations;
mod corporations;
mod employee_areas;
mod employee_managers;
mod employee_positions;
mod employee_records;
mod employees;
mod parent_areas;
mod position_records;
mod positions;
mod users;

pub use area_records::{AreaRecordFilter, AreaRecords};
pub use areas::{AreaFilter, Areas, EditArea, NewArea};
pub use branch_corporations::{BranchCorporationFields, BranchCorporations};
pub use corporations::{CorporationFields, CorporationFilter, Corporations};
pub use employee_areas::{EmployeeAreaFilter, EmployeeAreas};
pub use employee_managers::{EmployeeManagerFilter, EmployeeManagers};
pub use employee_positions::{EmployeePositionFilter, EmployeePositions};
pub use employee_records::{EmployeeRecordFilter, EmployeeRecords};
pub use employees::{
    ActivateEmployee, DeactivateEmployee, EmployeeFilter, Employees, NewEmployee, TerminationType,
    WorkType,
};
pub use parent_areas::{ParentAreaFilter, ParentAreas};
pub use position_records::{PositionRecordFilter, PositionRecords};
pub use positions::{EditPosition, NewPosition, PositionFilter, Positions};
pub use users::{UserFields, UserFilter, UserUpdate, Users};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::{ApiClient, ApiError, ApiRequest, ApiResponse, HttpMethod, PageResponse};
use crate::config::ApiConfig;
use crate::error::ConfigError;

/// Wire format for date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format for datetime fields.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A client-side binding to one remote collection.
///
/// Owns no network state beyond the executor; `page_size` and `timeout`
/// start from the configuration defaults and can be overridden per binding.
/// Both are validated at write time.
#[derive(Clone, Debug)]
pub struct Endpoint {
    client: ApiClient,
    page_size: u32,
    timeout: u64,
}

impl Endpoint {
    /// Creates a binding for the given resource base path.
    #[must_use]
    pub fn new(base_path: impl Into<String>, config: ApiConfig) -> Self {
        let page_size = config.page_size();
        let timeout = config.timeout();
        Self {
            client: ApiClient::new(base_path, config),
            page_size,
            timeout,
        }
    }

    /// Returns the resource base path.
    #[must_use]
    pub fn base_path(&self) -> &str {
        self.client.base_path()
    }

    /// Returns the number of records requested per page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the per-request timeout in seconds.
    #[must_use]
    pub const fn timeout(&self) -> u64 {
        self.timeout
    }

    /// Overrides the number of records requested per page.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointValue`] if `value` is zero.
    pub fn set_page_size(&mut self, value: u32) -> Result<(), ConfigError> {
        if value == 0 {
            return Err(ConfigError::InvalidEndpointValue {
                field: "page_size",
                value: 0,
            });
        }
        self.page_size = value;
        Ok(())
    }

    /// Overrides the per-request timeout in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointValue`] if `value` is zero.
    pub fn set_timeout(&mut self, value: u64) -> Result<(), ConfigError> {
        if value == 0 {
            return Err(ConfigError::InvalidEndpointValue {
                field: "timeout",
                value: 0,
            });
        }
        self.timeout = value;
        Ok(())
    }

    /// Builds the fully qualified URL referencing a record of a resource.
    #[must_use]
    pub fn resource_url(&self, base_path: &str, id: u64) -> String {
        self.client.resource_url(base_path, id)
    }

    /// Lists the collection with the given filters.
    ///
    /// The binding's `page_size` is appended to the sanitized filters; the
    /// result is page 1 of the collection, ready for
    /// [`PageResponse::fetch_all`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request or classification failure.
    pub async fn list(&self, mut filters: Map<String, Value>) -> Result<PageResponse, ApiError> {
        filters.insert("page_size".to_string(), Value::from(self.page_size));
        self.execute(HttpMethod::Get, "", Some(filters), None)
            .await?
            .page()
    }

    /// Retrieves one record by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request or classification failure.
    pub async fn retrieve(
        &self,
        id: u64,
        filters: Map<String, Value>,
    ) -> Result<Value, ApiError> {
        self.execute(HttpMethod::Get, &format!("/{id}"), Some(filters), None)
            .await?
            .single()
    }

    /// Creates a record with a POST to the collection root.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request or classification failure.
    pub async fn create(&self, fields: Value) -> Result<Value, ApiError> {
        self.execute(HttpMethod::Post, "", None, Some(fields))
            .await?
            .single()
    }

    /// Partially updates a record; null fields are stripped from the body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request or classification failure.
    pub async fn update_partial(&self, id: u64, fields: Value) -> Result<Value, ApiError> {
        self.execute(HttpMethod::Patch, &format!("/{id}"), None, Some(fields))
            .await?
            .single()
    }

    /// Fully replaces a record with a PUT.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request or classification failure.
    pub async fn update_full(&self, id: u64, fields: Value) -> Result<Value, ApiError> {
        self.execute(HttpMethod::Put, &format!("/{id}"), None, Some(fields))
            .await?
            .single()
    }

    /// Deletes a record.
    ///
    /// Returns the empty-success sentinel; callers verify completion by
    /// checking [`ApiResponse::status`] for 204.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request or classification failure.
    pub async fn delete(
        &self,
        id: u64,
        filters: Map<String, Value>,
    ) -> Result<ApiResponse, ApiError> {
        self.execute(HttpMethod::Delete, &format!("/{id}"), Some(filters), None)
            .await
    }

    /// GETs an operation sub-path, e.g. `/{id}/current_area`.
    pub(crate) async fn get_action(&self, sub_path: &str) -> Result<Value, ApiError> {
        self.execute(HttpMethod::Get, sub_path, None, None)
            .await?
            .single()
    }

    /// POSTs a domain action to an operation sub-path.
    pub(crate) async fn post_action(&self, sub_path: &str, body: Value) -> Result<Value, ApiError> {
        self.execute(HttpMethod::Post, sub_path, None, Some(body))
            .await?
            .single()
    }

    /// PATCHes a domain action; null fields are stripped from the body.
    pub(crate) async fn patch_action(
        &self,
        sub_path: &str,
        body: Value,
    ) -> Result<Value, ApiError> {
        self.execute(HttpMethod::Patch, sub_path, None, Some(body))
            .await?
            .single()
    }

    async fn execute(
        &self,
        method: HttpMethod,
        sub_path: &str,
        query: Option<Map<String, Value>>,
        body: Option<Value>,
    ) -> Result<ApiResponse, ApiError> {
        let mut builder = ApiRequest::builder(method, sub_path).timeout(self.timeout);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }
        self.client.request(builder.build()?).await
    }
}

/// Serializes filter/field arguments into a JSON parameter mapping.
///
/// Absent (`None`) members serialize to null and are stripped by the
/// executor before transmission.
pub(crate) fn to_params<T: Serialize>(value: &T) -> Result<Map<String, Value>, ApiError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(ApiError::UnexpectedResponse {
            expected: "an object-shaped parameter set",
        }),
    }
}

pub(crate) mod wire_date {
    //! Serde helpers for date fields in the fixed wire format.

    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(super::DATE_FORMAT).to_string())
    }
}

pub(crate) mod wire_date_opt {
    //! Serde helpers for optional date fields in the fixed wire format.

    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => {
                serializer.serialize_str(&date.format(super::DATE_FORMAT).to_string())
            }
            None => serializer.serialize_none(),
        }
    }
}

pub(crate) mod wire_datetime_opt {
    //! Serde helpers for optional datetime fields in the fixed wire format.

    use chrono::NaiveDateTime;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(datetime) => {
                serializer.serialize_str(&datetime.format(super::DATETIME_FORMAT).to_string())
            }
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthToken, BaseUrl};
    use chrono::NaiveDate;
    use serde_json::json;

    fn test_config() -> ApiConfig {
        ApiConfig::builder()
            .base_url(BaseUrl::new("https://api.example.com").unwrap())
            .auth_token(AuthToken::new("token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_endpoint_inherits_config_defaults() {
        let endpoint = Endpoint::new("/areas", test_config());
        assert_eq!(endpoint.base_path(), "/areas");
        assert_eq!(endpoint.page_size(), crate::config::DEFAULT_PAGE_SIZE);
        assert_eq!(endpoint.timeout(), crate::config::DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_set_page_size_validates_at_write_time() {
        let mut endpoint = Endpoint::new("/areas", test_config());

        endpoint.set_page_size(50).unwrap();
        assert_eq!(endpoint.page_size(), 50);

        let result = endpoint.set_page_size(0);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEndpointValue {
                field: "page_size",
                ..
            })
        ));
        assert_eq!(endpoint.page_size(), 50);
    }

    #[test]
    fn test_set_timeout_validates_at_write_time() {
        let mut endpoint = Endpoint::new("/areas", test_config());

        endpoint.set_timeout(30).unwrap();
        assert_eq!(endpoint.timeout(), 30);

        assert!(endpoint.set_timeout(0).is_err());
        assert_eq!(endpoint.timeout(), 30);
    }

    #[test]
    fn test_resource_url_delegates_to_builder() {
        let endpoint = Endpoint::new("/employee_records", test_config());
        assert_eq!(
            endpoint.resource_url("/employees", 3),
            "https://api.example.com/v1/employees/3/"
        );
    }

    #[test]
    fn test_to_params_keeps_null_members() {
        #[derive(Serialize)]
        struct Filter {
            search: Option<String>,
            active: Option<bool>,
        }

        let params = to_params(&Filter {
            search: None,
            active: Some(false),
        })
        .unwrap();

        assert_eq!(params.get("search"), Some(&Value::Null));
        assert_eq!(params.get("active"), Some(&json!(false)));
    }

    #[test]
    fn test_wire_date_formats() {
        #[derive(Serialize)]
        struct Payload {
            #[serde(with = "wire_date")]
            start_date: NaiveDate,
            #[serde(with = "wire_date_opt")]
            end_date: Option<NaiveDate>,
        }

        let payload = Payload {
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: None,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({"start_date": "2024-03-01", "end_date": null}));
    }

    #[test]
    fn test_wire_datetime_format() {
        #[derive(Serialize)]
        struct Payload {
            #[serde(with = "wire_datetime_opt")]
            created_after: Option<chrono::NaiveDateTime>,
        }

        let payload = Payload {
            created_after: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(12, 30, 0),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({"created_after": "2024-03-01T12:30:00Z"}));
    }
}
