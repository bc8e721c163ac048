//! Employee managers endpoint (read-only assignment history).

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiError, PageResponse};
use crate::config::ApiConfig;
use crate::endpoints::{employees::Employees, to_params, wire_datetime_opt, Endpoint};

/// Filters accepted by the employee managers operations.
///
/// Both `manager` and `employee` reference the employees collection.
#[derive(Clone, Debug, Default, Serialize)]
pub struct EmployeeManagerFilter {
    /// Manager employee id; sent on the wire as a resource URL.
    #[serde(skip)]
    pub manager: Option<u64>,
    /// Employee id; sent on the wire as a resource URL.
    #[serde(skip)]
    pub employee: Option<u64>,
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

/// Client-side binding to the employee managers collection.
#[derive(Clone, Debug)]
pub struct EmployeeManagers {
    endpoint: Endpoint,
}

impl EmployeeManagers {
    /// Base path of the employee managers collection.
    pub const BASE_PATH: &'static str = "/employee_managers";

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

    /// Lists employee manager records matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list(&self, filter: &EmployeeManagerFilter) -> Result<PageResponse, ApiError> {
        self.endpoint.list(self.params(filter)?).await
    }

    /// Retrieves one employee manager record by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn retrieve(
        &self,
        id: u64,
        filter: &EmployeeManagerFilter,
    ) -> Result<Value, ApiError> {
        self.endpoint.retrieve(id, self.params(filter)?).await
    }

    fn params(
        &self,
        filter: &EmployeeManagerFilter,
    ) -> Result<serde_json::Map<String, Value>, ApiError> {
        let mut params = to_params(filter)?;
        params.insert(
            "manager".to_string(),
            filter.manager.map_or(Value::Null, |id| {
                Value::String(self.endpoint.resource_url(Employees::BASE_PATH, id))
            }),
        );
        params.insert(
            "employee".to_string(),
            filter.employee.map_or(Value::Null, |id| {
                Value::String(self.endpoint.resource_url(Employees::BASE_PATH, id))
            }),
        );
        Ok(params)
    }
}
