//! HTTP client types for People Control API communication.
//!
//! This module provides the shared request layer that every resource
//! endpoint is built on: authenticated request execution, parameter
//! sanitization, response classification, pagination aggregation, and
//! HTTP-to-domain error translation.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiClient`]: the request executor, bound to one resource base path
//! - [`ApiRequest`]: a request to be sent, built via [`ApiRequestBuilder`]
//! - [`ApiResponse`]: a classified response (single payload, page, or empty)
//! - [`PageResponse`]: accumulator for multi-page collection responses
//! - [`ApiError`]: the domain error raised for every failure
//!
//! # Example
//!
//! ```rust,ignore
//! use people_control_api::clients::{ApiClient, ApiRequest, ApiResponse, HttpMethod};
//!
//! let client = ApiClient::new("/employees", config);
//! let request = ApiRequest::builder(HttpMethod::Get, "").build()?;
//!
//! match client.request(request).await? {
//!     ApiResponse::Page(mut page) => {
//!         page.fetch_all(1).await?;
//!         println!("{} employees", page.results().len());
//!     }
//!     other => println!("unexpected: {other:?}"),
//! }
//! ```
//!
//! # Retry Behavior
//!
//! Single requests are never retried; failures surface immediately with the
//! raw server message preserved. Pagination continuation requests are the
//! one exception: [`PageResponse::fetch_all`] retries a failed continuation
//! after a fixed 30-second wait, bounded by its `max_retries` argument.

mod errors;
mod http_client;
mod pagination;
mod params;
mod request;
mod response;

pub use errors::{ApiError, InvalidRequestError};
pub use http_client::ApiClient;
pub use pagination::{PageResponse, PAGE_RETRY_WAIT};
pub use request::{ApiRequest, ApiRequestBuilder, HttpMethod};
pub use response::ApiResponse;
