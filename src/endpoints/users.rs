//! Users endpoint.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::Value;

use crate::clients::{ApiError, ApiResponse, PageResponse};
use crate::config::ApiConfig;
use crate::endpoints::{to_params, wire_datetime_opt, Endpoint};

/// Filters accepted by the users list, retrieve, and delete operations.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UserFilter {
    /// Free-text search term.
    pub search: Option<String>,
}

/// Payload for creating or fully replacing a user.
#[derive(Clone, Debug, Serialize)]
pub struct UserFields {
    /// Username, 254 characters or fewer.
    pub username: String,
    /// User email, 254 characters or fewer.
    pub email: Option<String>,
    /// User first name, 100 characters or fewer.
    pub first_name: Option<String>,
    /// User last name, 150 characters or fewer.
    pub last_name: Option<String>,
    /// Super user permission.
    pub is_superuser: bool,
    /// Access to the admin site.
    pub is_staff: bool,
    /// Access to the front site.
    pub is_active: bool,
    /// Datetime of last login.
    #[serde(with = "wire_datetime_opt")]
    pub last_login: Option<NaiveDateTime>,
    /// Datetime the user joined.
    #[serde(with = "wire_datetime_opt")]
    pub date_joined: Option<NaiveDateTime>,
}

/// Payload for partially updating a user; absent fields are left untouched.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UserUpdate {
    /// Username, 254 characters or fewer.
    pub username: Option<String>,
    /// User email, 254 characters or fewer.
    pub email: Option<String>,
    /// User first name, 100 characters or fewer.
    pub first_name: Option<String>,
    /// User last name, 150 characters or fewer.
    pub last_name: Option<String>,
    /// Super user permission.
    pub is_superuser: Option<bool>,
    /// Access to the admin site.
    pub is_staff: Option<bool>,
    /// Access to the front site.
    pub is_active: Option<bool>,
    /// Datetime of last login.
    #[serde(with = "wire_datetime_opt")]
    pub last_login: Option<NaiveDateTime>,
    /// Datetime the user joined.
    #[serde(with = "wire_datetime_opt")]
    pub date_joined: Option<NaiveDateTime>,
}

/// Client-side binding to the users collection.
#[derive(Clone, Debug)]
pub struct Users {
    endpoint: Endpoint,
}

impl Users {
    /// Base path of the users collection.
    pub const BASE_PATH: &'static str = "/users";

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

    /// Lists users matching the filter.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list(&self, filter: &UserFilter) -> Result<PageResponse, ApiError> {
        self.endpoint.list(to_params(filter)?).await
    }

    /// Retrieves one user by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn retrieve(&self, id: u64, filter: &UserFilter) -> Result<Value, ApiError> {
        self.endpoint.retrieve(id, to_params(filter)?).await
    }

    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create(&self, fields: &UserFields) -> Result<Value, ApiError> {
        self.endpoint.create(Value::Object(to_params(fields)?)).await
    }

    /// Partially updates a user; null fields are stripped from the body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_partial(&self, id: u64, fields: &UserUpdate) -> Result<Value, ApiError> {
        self.endpoint
            .update_partial(id, Value::Object(to_params(fields)?))
            .await
    }

    /// Fully replaces a user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_full(&self, id: u64, fields: &UserFields) -> Result<Value, ApiError> {
        self.endpoint
            .update_full(id, Value::Object(to_params(fields)?))
            .await
    }

    /// Deletes a user.
    ///
    /// The returned sentinel carries status 204 on success.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete(&self, id: u64, filter: &UserFilter) -> Result<ApiResponse, ApiError> {
        self.endpoint.delete(id, to_params(filter)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_user_fields_datetime_wire_format() {
        let fields = UserFields {
            username: "jdoe".to_string(),
            email: None,
            first_name: None,
            last_name: None,
            is_superuser: false,
            is_staff: false,
            is_active: true,
            last_login: None,
            date_joined: NaiveDate::from_ymd_opt(2024, 6, 1)
                .unwrap()
                .and_hms_opt(8, 0, 0),
        };

        let value = serde_json::to_value(&fields).unwrap();
        assert_eq!(value["date_joined"], json!("2024-06-01T08:00:00Z"));
        assert_eq!(value["is_active"], json!(true));
        assert_eq!(value["last_login"], Value::Null);
    }

    #[test]
    fn test_user_update_defaults_to_all_null() {
        let value = serde_json::to_value(UserUpdate::default()).unwrap();
        assert!(value
            .as_object()
            .unwrap()
            .values()
            .all(serde_json::Value::is_null));
    }
}
