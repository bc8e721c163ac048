//! HTTP request executor for People Control API communication.
//!
//! This module provides the [`ApiClient`] type for issuing authenticated
//! requests against one resource base path and classifying the responses.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::clients::errors::ApiError;
use crate::clients::pagination::{PageEnvelope, PageResponse};
use crate::clients::params::{strip_nulls, to_query_pairs};
use crate::clients::request::{ApiRequest, HttpMethod};
use crate::clients::response::ApiResponse;
use crate::config::ApiConfig;

/// Request executor bound to one resource base path.
///
/// The client handles:
/// - URL construction from the configured base URL, version segment,
///   resource base path, and per-operation sub-path
/// - Default headers including the `Token` authorization scheme
/// - Parameter sanitization and the forced `ordering=id` on GET requests
/// - Response classification into [`ApiResponse`]
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use people_control_api::clients::{ApiClient, ApiRequest, HttpMethod};
///
/// let client = ApiClient::new("/employees", config);
/// let request = ApiRequest::builder(HttpMethod::Get, "/42").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Clone, Debug)]
pub struct ApiClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Client configuration (base URL, version, token, defaults).
    config: ApiConfig,
    /// Resource base path (e.g. `"/employees"`).
    base_path: String,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a new executor for the given resource base path.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(base_path: impl Into<String>, config: ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            base_path: base_path.into(),
        }
    }

    /// Returns the resource base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Builds the absolute URL for an operation sub-path on this resource.
    #[must_use]
    pub fn build_url(&self, sub_path: &str) -> String {
        join_url(
            self.config.base_url().as_ref(),
            self.config.api_version(),
            &self.base_path,
            sub_path,
        )
    }

    /// Builds the absolute URL identifying a record of another resource.
    ///
    /// Related entities are referenced on the wire by their fully qualified
    /// resource URL rather than a bare id.
    #[must_use]
    pub fn resource_url(&self, base_path: &str, id: u64) -> String {
        join_url(
            self.config.base_url().as_ref(),
            self.config.api_version(),
            base_path,
            &format!("/{id}"),
        )
    }

    /// Returns the headers sent with every request.
    ///
    /// Caller-supplied extra headers override these on key collision.
    #[must_use]
    pub fn default_headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(
            "Authorization".to_string(),
            format!("Token {}", self.config.auth_token().as_ref()),
        );
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    /// Sends a request and classifies the response.
    ///
    /// Query parameters are sanitized (null-valued keys stripped) and every
    /// GET carries `ordering=id` so page order is deterministic across
    /// pagination continuations. PATCH bodies are null-stripped, matching
    /// the partial-update contract; POST and PUT bodies are sent as built.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The connection fails (`Network`)
    /// - The API answers 400 (`BadRequest`), 500 (`ServerError`), or any
    ///   other non-2xx status (`Transport`); the raw response body is
    ///   preserved as the error message
    /// - A success body is not valid JSON (`Json`)
    pub async fn request(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        request.verify()?;

        let url = self.build_url(&request.sub_path);

        let mut headers = self.default_headers();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let timeout = request.timeout.unwrap_or(self.config.timeout());

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };
        builder = builder.timeout(Duration::from_secs(timeout));

        for (key, value) in &headers {
            builder = builder.header(key, value);
        }

        let mut query = request.query.unwrap_or_default();
        if request.method == HttpMethod::Get {
            // Stable ordering keeps continuation pages append-only even when
            // the collection is written to between page fetches.
            query.insert("ordering".to_string(), Value::String("id".to_string()));
        }
        let query = strip_nulls(query);
        if !query.is_empty() {
            builder = builder.query(&to_query_pairs(&query));
        }

        if let Some(body) = request.body {
            let body = if request.method == HttpMethod::Patch {
                sanitize_body(body)
            } else {
                body
            };
            builder = builder.json(&body);
        }

        let response = builder.send().await?;
        let code = response.status().as_u16();

        if code == 204 {
            return Ok(ApiResponse::Empty(code));
        }

        let text = response.text().await.unwrap_or_default();

        if !(200..300).contains(&code) {
            return Err(ApiError::from_status(code, text));
        }

        let body: Value = serde_json::from_str(&text)?;

        if is_page_envelope(&body) {
            let envelope: PageEnvelope = serde_json::from_value(body)?;
            return Ok(ApiResponse::Page(PageResponse::new(
                envelope,
                headers,
                timeout,
                self.client.clone(),
            )));
        }

        Ok(ApiResponse::Single(body))
    }
}

/// Composes an absolute request URL.
///
/// The result always carries a trailing slash; path segments are taken as
/// given, without validation.
fn join_url(base_url: &str, api_version: &str, base_path: &str, sub_path: &str) -> String {
    format!("{base_url}/{api_version}{base_path}{sub_path}/")
}

/// Returns `true` if a success body is a pagination envelope.
///
/// A JSON object carrying both a `count` and a `next` key is treated as
/// page 1 of a collection; `next` may be null, in which case the collection
/// is single-page and already exhausted.
fn is_page_envelope(body: &Value) -> bool {
    body.as_object()
        .map_or(false, |map| map.contains_key("count") && map.contains_key("next"))
}

/// Strips null members from a PATCH body, leaving other shapes untouched.
fn sanitize_body(body: Value) -> Value {
    match body {
        Value::Object(map) => Value::Object(strip_nulls(map)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthToken, BaseUrl};
    use serde_json::json;

    fn test_config() -> ApiConfig {
        ApiConfig::builder()
            .base_url(BaseUrl::new("https://api.example.com").unwrap())
            .auth_token(AuthToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_join_url_round_trip() {
        assert_eq!(
            join_url("https://api.example.com", "v1", "/employees", "/42"),
            "https://api.example.com/v1/employees/42/"
        );
    }

    #[test]
    fn test_join_url_with_empty_sub_path() {
        assert_eq!(
            join_url("https://api.example.com", "v1", "/areas", ""),
            "https://api.example.com/v1/areas/"
        );
    }

    #[test]
    fn test_build_url_uses_configured_base_and_version() {
        let client = ApiClient::new("/employees", test_config());
        assert_eq!(
            client.build_url("/42"),
            "https://api.example.com/v1/employees/42/"
        );
    }

    #[test]
    fn test_resource_url_points_at_other_resource() {
        let client = ApiClient::new("/employees", test_config());
        assert_eq!(
            client.resource_url("/areas", 7),
            "https://api.example.com/v1/areas/7/"
        );
    }

    #[test]
    fn test_default_headers_carry_token_scheme() {
        let client = ApiClient::new("/employees", test_config());
        let headers = client.default_headers();

        assert_eq!(
            headers.get("Authorization"),
            Some(&"Token test-token".to_string())
        );
        assert_eq!(
            headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_is_page_envelope_requires_count_and_next() {
        assert!(is_page_envelope(&json!({
            "count": 2, "next": null, "previous": null, "results": []
        })));
        assert!(!is_page_envelope(&json!({"count": 2, "results": []})));
        assert!(!is_page_envelope(&json!({"id": 1, "name": "ops"})));
        assert!(!is_page_envelope(&json!([1, 2, 3])));
    }

    #[test]
    fn test_sanitize_body_strips_only_nulls() {
        let body = sanitize_body(json!({
            "name": "ops",
            "code": null,
            "active": false,
        }));

        assert_eq!(body, json!({"name": "ops", "active": false}));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiClient>();
    }
}
