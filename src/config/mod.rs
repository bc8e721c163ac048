//! Configuration types for the People Control API client.
//!
//! This module provides the core configuration types used to initialize
//! the client for API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiConfig`]: The main configuration struct holding all client settings
//! - [`ApiConfigBuilder`]: A builder for constructing [`ApiConfig`] instances
//! - [`AuthToken`]: A validated API token newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use people_control_api::{ApiConfig, AuthToken, BaseUrl};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .auth_token(AuthToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_version(), "v1");
//! ```

mod newtypes;

pub use newtypes::{AuthToken, BaseUrl};

use crate::error::ConfigError;

/// Default API version segment.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Default number of records per page on list requests.
pub const DEFAULT_PAGE_SIZE: u32 = 1000;

/// Configuration for the People Control API client.
///
/// This struct holds everything needed to reach the remote API: the base
/// URL, the version segment, the token used for the `Authorization` header,
/// and the default timeout and page size inherited by every endpoint.
///
/// Configuration is instance-based and passed explicitly to each endpoint
/// at construction; there is no global state. Endpoints may override
/// `timeout` and `page_size` individually after construction.
///
/// # Thread Safety
///
/// `ApiConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: BaseUrl,
    api_version: String,
    auth_token: AuthToken,
    timeout: u64,
    page_size: u32,
}

impl ApiConfig {
    /// Creates a new builder for constructing an `ApiConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use people_control_api::{ApiConfig, AuthToken, BaseUrl};
    ///
    /// let config = ApiConfig::builder()
    ///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
    ///     .auth_token(AuthToken::new("token").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API version segment.
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Returns the API token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the default per-request timeout in seconds.
    #[must_use]
    pub const fn timeout(&self) -> u64 {
        self.timeout
    }

    /// Returns the default page size for list requests.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }
}

// Verify ApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiConfig>();
};

/// Builder for constructing [`ApiConfig`] instances.
///
/// Required fields are `base_url` and `auth_token`. All other fields have
/// sensible defaults.
///
/// # Defaults
///
/// - `api_version`: `"v1"`
/// - `timeout`: 600 seconds
/// - `page_size`: 1000
///
/// # Example
///
/// ```rust
/// use people_control_api::{ApiConfig, AuthToken, BaseUrl};
///
/// let config = ApiConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .auth_token(AuthToken::new("token").unwrap())
///     .timeout(30)
///     .page_size(100)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<BaseUrl>,
    api_version: Option<String>,
    auth_token: Option<AuthToken>,
    timeout: Option<u64>,
    page_size: Option<u32>,
}

impl ApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API version segment.
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Sets the default per-request timeout in seconds.
    #[must_use]
    pub const fn timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Sets the default page size for list requests.
    #[must_use]
    pub const fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Builds the [`ApiConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or
    /// `auth_token` are not set, or [`ConfigError::InvalidEndpointValue`]
    /// if `timeout` or `page_size` is zero.
    pub fn build(self) -> Result<ApiConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let auth_token = self.auth_token.ok_or(ConfigError::MissingRequiredField {
            field: "auth_token",
        })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout == 0 {
            return Err(ConfigError::InvalidEndpointValue {
                field: "timeout",
                value: 0,
            });
        }

        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(ConfigError::InvalidEndpointValue {
                field: "page_size",
                value: 0,
            });
        }

        Ok(ApiConfig {
            base_url,
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            auth_token,
            timeout,
            page_size,
        })
    }
}
