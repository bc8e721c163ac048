//! HTTP request types for the People Control API client.
//!
//! This module provides the [`ApiRequest`] type and its builder for
//! constructing requests against a resource endpoint.

use std::collections::HashMap;
use std::fmt;

use serde_json::{Map, Value};

use crate::clients::errors::InvalidRequestError;

/// HTTP methods supported by the People Control API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and domain actions.
    Post,
    /// HTTP PUT method for full updates.
    Put,
    /// HTTP PATCH method for partial updates.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request to be sent to the People Control API.
///
/// The request is relative to an endpoint's base path: `sub_path` is the
/// operation-specific segment (e.g. `"/42"` or `"/42/activate"`), and the
/// executor composes the full URL from the configured base URL, version
/// segment, endpoint base path, and this sub-path.
///
/// Use [`ApiRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use people_control_api::clients::{ApiRequest, HttpMethod};
/// use serde_json::json;
///
/// // GET request
/// let get_request = ApiRequest::builder(HttpMethod::Get, "/42")
///     .build()
///     .unwrap();
///
/// // POST request with JSON body
/// let post_request = ApiRequest::builder(HttpMethod::Post, "")
///     .body(json!({"username": "jdoe"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The operation-specific path segment, appended to the endpoint base path.
    pub sub_path: String,
    /// Query parameters; null-valued keys are stripped before transmission.
    pub query: Option<Map<String, Value>>,
    /// The JSON request body, if any.
    pub body: Option<Value>,
    /// Additional headers; override the default headers on key collision.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Per-request timeout override in seconds.
    pub timeout: Option<u64>,
}

impl ApiRequest {
    /// Creates a new builder for constructing an `ApiRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, sub_path: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(method, sub_path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::MissingBody`] if `method` is `Post`,
    /// `Put`, or `Patch` but no body is set.
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        if matches!(
            self.method,
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch
        ) && self.body.is_none()
        {
            return Err(InvalidRequestError::MissingBody {
                method: self.method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`ApiRequest`] instances.
///
/// Provides a fluent API for building requests with optional parameters.
#[derive(Debug)]
pub struct ApiRequestBuilder {
    method: HttpMethod,
    sub_path: String,
    query: Option<Map<String, Value>>,
    body: Option<Value>,
    extra_headers: Option<HashMap<String, String>>,
    timeout: Option<u64>,
}

impl ApiRequestBuilder {
    /// Creates a new builder with the required method and sub-path.
    fn new(method: HttpMethod, sub_path: impl Into<String>) -> Self {
        Self {
            method,
            sub_path: sub_path.into(),
            query: None,
            body: None,
            extra_headers: None,
            timeout: None,
        }
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: Map<String, Value>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the per-request timeout in seconds.
    #[must_use]
    pub const fn timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Builds the [`ApiRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if the request fails validation.
    pub fn build(self) -> Result<ApiRequest, InvalidRequestError> {
        let request = ApiRequest {
            method: self.method,
            sub_path: self.sub_path,
            query: self.query,
            body: self.body,
            extra_headers: self.extra_headers,
            timeout: self.timeout,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = ApiRequest::builder(HttpMethod::Get, "/42").build().unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.sub_path, "/42");
        assert!(request.body.is_none());
        assert!(request.query.is_none());
        assert!(request.timeout.is_none());
    }

    #[test]
    fn test_builder_creates_valid_post_request() {
        let request = ApiRequest::builder(HttpMethod::Post, "")
            .body(json!({"code": "eng"}))
            .build()
            .unwrap();

        assert_eq!(request.method, HttpMethod::Post);
        assert!(request.body.is_some());
    }

    #[test]
    fn test_verify_requires_body_for_post() {
        let result = ApiRequest::builder(HttpMethod::Post, "").build();

        assert!(matches!(
            result,
            Err(InvalidRequestError::MissingBody { method }) if method == "post"
        ));
    }

    #[test]
    fn test_verify_requires_body_for_put_and_patch() {
        let put = ApiRequest::builder(HttpMethod::Put, "/1").build();
        assert!(matches!(
            put,
            Err(InvalidRequestError::MissingBody { method }) if method == "put"
        ));

        let patch = ApiRequest::builder(HttpMethod::Patch, "/1").build();
        assert!(matches!(
            patch,
            Err(InvalidRequestError::MissingBody { method }) if method == "patch"
        ));
    }

    #[test]
    fn test_delete_without_body_is_valid() {
        let request = ApiRequest::builder(HttpMethod::Delete, "/1")
            .build()
            .unwrap();
        assert_eq!(request.method, HttpMethod::Delete);
    }

    #[test]
    fn test_builder_with_query_params() {
        let request = ApiRequest::builder(HttpMethod::Get, "")
            .query_param("search", "jdoe")
            .query_param("page_size", 50)
            .build()
            .unwrap();

        let query = request.query.unwrap();
        assert_eq!(query.get("search"), Some(&json!("jdoe")));
        assert_eq!(query.get("page_size"), Some(&json!(50)));
    }

    #[test]
    fn test_builder_with_extra_headers() {
        let request = ApiRequest::builder(HttpMethod::Get, "")
            .header("X-Custom-Header", "custom-value")
            .build()
            .unwrap();

        let headers = request.extra_headers.unwrap();
        assert_eq!(
            headers.get("X-Custom-Header"),
            Some(&"custom-value".to_string())
        );
    }

    #[test]
    fn test_builder_with_timeout_override() {
        let request = ApiRequest::builder(HttpMethod::Get, "")
            .timeout(30)
            .build()
            .unwrap();
        assert_eq!(request.timeout, Some(30));
    }
}
