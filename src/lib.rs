//! # People Control API Rust Client
//!
//! A Rust client for the People Control HR API, providing type-safe
//! configuration, authenticated request execution, transparent pagination,
//! and typed per-resource endpoints.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ApiConfig`] and [`ApiConfigBuilder`]
//! - Validated newtypes for the API token and base URL
//! - An authenticated request executor with parameter sanitization and
//!   explicit response classification
//! - Transparent multi-page aggregation via [`PageResponse`]
//! - HTTP-to-domain error translation via [`ApiError`]
//! - One endpoint type per remote collection (employees, areas, positions,
//!   corporations, branch corporations, users, and their record
//!   sub-resources)
//!
//! ## Quick Start
//!
//! ```rust
//! use people_control_api::{ApiConfig, AuthToken, BaseUrl};
//!
//! // Create configuration using the builder pattern
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://api.example.com").unwrap())
//!     .auth_token(AuthToken::new("your-api-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Listing a Collection
//!
//! List operations return page 1 of the server's paginated envelope;
//! `fetch_all` walks the remaining pages sequentially:
//!
//! ```rust,ignore
//! use people_control_api::endpoints::{EmployeeFilter, Employees};
//!
//! let employees = Employees::new(config);
//!
//! let mut page = employees
//!     .list(&EmployeeFilter {
//!         active: Some(true),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! page.fetch_all(1).await?;
//! assert_eq!(page.count() as usize, page.results().len());
//! ```
//!
//! ## Error Handling
//!
//! Every failure surfaces as an [`ApiError`]; the raw server response body
//! is always preserved as the error message:
//!
//! ```rust,ignore
//! use people_control_api::ApiError;
//!
//! match employees.retrieve(42, &Default::default()).await {
//!     Ok(employee) => println!("{employee}"),
//!     Err(ApiError::BadRequest { message }) => eprintln!("rejected: {message}"),
//!     Err(error) => eprintln!("failed: {error}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed
//!   explicitly to each endpoint
//! - **Fail-fast validation**: Newtypes and endpoint overrides validate on
//!   construction/write
//! - **Explicit classification**: Responses are a tagged union of single
//!   payload, page, and empty success, never duck-typed field probing
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod endpoints;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{ApiConfig, ApiConfigBuilder, AuthToken, BaseUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiClient, ApiError, ApiRequest, ApiRequestBuilder, ApiResponse, HttpMethod,
    InvalidRequestError, PageResponse,
};

// Re-export the endpoint binding
pub use endpoints::Endpoint;
