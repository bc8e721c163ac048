//! Employees endpoint.
//!
//! Beyond the uniform list/retrieve operations, employees carry the domain
//! actions of the remote API: complete creation, activation/deactivation,
//! and reassignment of the current area, manager, and position.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use serde_json::{json, Value};

use crate::clients::{ApiError, PageResponse};
use crate::config::ApiConfig;
use crate::endpoints::{
    areas::Areas, branch_corporations::BranchCorporations, corporations::Corporations,
    positions::Positions, to_params, wire_date, wire_date_opt, wire_datetime_opt, Endpoint,
    DATE_FORMAT,
};

/// Filters accepted by the employees list and retrieve operations.
#[derive(Clone, Debug, Default, Serialize)]
pub struct EmployeeFilter {
    /// Employee first name.
    pub first_name: Option<String>,
    /// Employee last name.
    pub last_name: Option<String>,
    /// Employee email.
    pub email: Option<String>,
    /// The employee code.
    pub employee_code: Option<String>,
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

/// Work arrangement of an employee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    /// Mixed office and remote work.
    Hybrid,
    /// Fully in office.
    Inoffice,
    /// Fully remote.
    Remote,
    /// Not informed.
    Unknown,
}

/// Payload for creating a complete employee record.
///
/// Related entities (`area`, `position`, `manager`, `corporation`,
/// `branch_corporation`) are given as ids and sent on the wire as fully
/// qualified resource URLs.
#[derive(Clone, Debug, Serialize)]
pub struct NewEmployee {
    /// Employee first name, 200 characters or fewer.
    pub first_name: String,
    /// Employee last name, 200 characters or fewer.
    pub last_name: String,
    /// Username, 254 characters or fewer.
    pub username: String,
    /// Employee email.
    pub email: String,
    /// The employee code.
    pub employee_code: String,
    /// Start date of the employee.
    #[serde(with = "wire_date")]
    pub start_date: NaiveDate,
    /// Area id.
    #[serde(skip)]
    pub area: Option<u64>,
    /// Position id.
    #[serde(skip)]
    pub position: Option<u64>,
    /// Manager employee id.
    #[serde(skip)]
    pub manager: Option<u64>,
    /// Gender.
    pub gender: Option<String>,
    /// Brazilian CPF document number.
    pub cpf: Option<String>,
    /// Birth date.
    #[serde(with = "wire_date_opt")]
    pub birth_date: Option<NaiveDate>,
    /// Referral inside the company.
    pub company_referal: Option<String>,
    /// Work arrangement.
    pub work_type: Option<WorkType>,
    /// City the employee works from.
    pub work_city: Option<String>,
    /// System permission names granted to the employee.
    pub systems_permissions: Option<Vec<String>>,
    /// Corporation id.
    #[serde(skip)]
    pub corporation: Option<u64>,
    /// Branch corporation id.
    #[serde(skip)]
    pub branch_corporation: Option<u64>,
}

/// Payload for activating an employee.
#[derive(Clone, Debug, Serialize)]
pub struct ActivateEmployee {
    /// Start date of the activation.
    #[serde(with = "wire_date")]
    pub start_date: NaiveDate,
    /// Area id to assign on activation.
    #[serde(skip)]
    pub area: Option<u64>,
    /// Position id to assign on activation.
    #[serde(skip)]
    pub position: Option<u64>,
    /// Manager employee id to assign on activation.
    #[serde(skip)]
    pub manager: Option<u64>,
}

/// Reason class for an employee termination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationType {
    /// Dismissed by the company.
    Dismissed,
    /// Resigned voluntarily.
    Resigned,
    /// Transferred to another entity.
    Transfer,
    /// Converted from internship to a full position.
    InternToFull,
    /// Any other reason.
    #[default]
    Others,
}

/// Payload for deactivating an employee.
#[derive(Clone, Debug, Serialize)]
pub struct DeactivateEmployee {
    /// Last day of the employee.
    #[serde(with = "wire_date")]
    pub end_date: NaiveDate,
    /// Termination type.
    pub termination_type: TerminationType,
    /// Free-text termination reason.
    pub termination_reason: Option<String>,
}

/// Client-side binding to the employees collection.
///
/// # Example
///
/// ```rust,ignore
/// let employees = Employees::new(config);
/// let mut page = employees.list(&EmployeeFilter {
///     active: Some(true),
///     ..Default::default()
/// }).await?;
/// page.fetch_all(1).await?;
/// ```
#[derive(Clone, Debug)]
pub struct Employees {
    endpoint: Endpoint,
}

impl Employees {
    /// Base path of the employees collection.
    pub const BASE_PATH: &'static str = "/employees";

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

    /// Lists employees matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list(&self, filter: &EmployeeFilter) -> Result<PageResponse, ApiError> {
        self.endpoint.list(to_params(filter)?).await
    }

    /// Retrieves one employee by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn retrieve(&self, id: u64, filter: &EmployeeFilter) -> Result<Value, ApiError> {
        self.endpoint.retrieve(id, to_params(filter)?).await
    }

    /// Creates a new employee together with its initial records.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create_complete(&self, employee: &NewEmployee) -> Result<Value, ApiError> {
        let mut fields = to_params(employee)?;
        fields.insert(
            "area".to_string(),
            self.relation(Areas::BASE_PATH, employee.area),
        );
        fields.insert(
            "position".to_string(),
            self.relation(Positions::BASE_PATH, employee.position),
        );
        fields.insert(
            "manager".to_string(),
            self.relation(Self::BASE_PATH, employee.manager),
        );
        fields.insert(
            "corporation".to_string(),
            self.relation(Corporations::BASE_PATH, employee.corporation),
        );
        fields.insert(
            "branch_corporation".to_string(),
            self.relation(BranchCorporations::BASE_PATH, employee.branch_corporation),
        );

        self.endpoint
            .post_action("/create_complete", Value::Object(fields))
            .await
    }

    /// Activates an employee, optionally assigning area, position, and manager.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn activate(&self, id: u64, params: &ActivateEmployee) -> Result<Value, ApiError> {
        let mut fields = to_params(params)?;
        fields.insert(
            "area".to_string(),
            self.relation(Areas::BASE_PATH, params.area),
        );
        fields.insert(
            "position".to_string(),
            self.relation(Positions::BASE_PATH, params.position),
        );
        fields.insert(
            "manager".to_string(),
            self.relation(Self::BASE_PATH, params.manager),
        );

        self.endpoint
            .post_action(&format!("/{id}/activate"), Value::Object(fields))
            .await
    }

    /// Deactivates an employee.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn deactivate(
        &self,
        id: u64,
        params: &DeactivateEmployee,
    ) -> Result<Value, ApiError> {
        let fields = to_params(params)?;
        self.endpoint
            .post_action(&format!("/{id}/deactivate"), Value::Object(fields))
            .await
    }

    /// Retrieves the employee's current area record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn current_area(&self, id: u64) -> Result<Value, ApiError> {
        self.endpoint
            .get_action(&format!("/{id}/current_area"))
            .await
    }

    /// Changes the employee's current area.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn change_current_area(
        &self,
        id: u64,
        area_id: u64,
        start_date: NaiveDate,
        review_access: bool,
    ) -> Result<Value, ApiError> {
        let payload = json!({
            "area": self.endpoint.resource_url(Areas::BASE_PATH, area_id),
            "start_date": start_date.format(DATE_FORMAT).to_string(),
            "review_access": review_access,
        });
        self.endpoint
            .post_action(&format!("/{id}/current_area"), payload)
            .await
    }

    /// Retrieves the employee's current manager record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn current_manager(&self, id: u64) -> Result<Value, ApiError> {
        self.endpoint
            .get_action(&format!("/{id}/current_manager"))
            .await
    }

    /// Changes the employee's current manager.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn change_current_manager(
        &self,
        id: u64,
        manager_id: u64,
        start_date: NaiveDate,
        review_access: bool,
    ) -> Result<Value, ApiError> {
        let payload = json!({
            "manager": self.endpoint.resource_url(Self::BASE_PATH, manager_id),
            "start_date": start_date.format(DATE_FORMAT).to_string(),
            "review_access": review_access,
        });
        self.endpoint
            .post_action(&format!("/{id}/current_manager"), payload)
            .await
    }

    /// Retrieves the employee's current position record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn current_position(&self, id: u64) -> Result<Value, ApiError> {
        self.endpoint
            .get_action(&format!("/{id}/current_position"))
            .await
    }

    /// Changes the employee's current position.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn change_current_position(
        &self,
        id: u64,
        position_id: u64,
        start_date: NaiveDate,
        review_access: bool,
    ) -> Result<Value, ApiError> {
        let payload = json!({
            "position": self.endpoint.resource_url(Positions::BASE_PATH, position_id),
            "start_date": start_date.format(DATE_FORMAT).to_string(),
            "review_access": review_access,
        });
        self.endpoint
            .post_action(&format!("/{id}/current_position"), payload)
            .await
    }

    /// Renders an optional related-entity id as its resource URL, or null.
    fn relation(&self, base_path: &str, id: Option<u64>) -> Value {
        id.map_or(Value::Null, |id| {
            Value::String(self.endpoint.resource_url(base_path, id))
        })
    }
}
