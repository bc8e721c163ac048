//! Error types for People Control API operations.
//!
//! This module contains the domain error raised by the request executor and
//! the pagination aggregator. HTTP failure statuses are translated into
//! typed variants; the raw response body text is always preserved as the
//! error message so caller diagnostics never lose server detail.
//!
//! # Error Handling
//!
//! - [`ApiError::BadRequest`]: HTTP 400, client-correctable
//! - [`ApiError::ServerError`]: HTTP 500
//! - [`ApiError::Transport`]: any other non-2xx/204 response
//! - [`ApiError::Network`]: connection-level failures from the transport
//! - [`ApiError::PaginationRetriesExhausted`]: bounded pagination retry failed
//!
//! # Example
//!
//! ```rust,ignore
//! match endpoint.retrieve(42, &Default::default()).await {
//!     Ok(employee) => println!("{employee}"),
//!     Err(ApiError::BadRequest { message }) => eprintln!("rejected: {message}"),
//!     Err(error) => eprintln!("failed: {error}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// A POST, PUT, or PATCH request was built without a body.
    #[error("Cannot use {method} without specifying a body.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all People Control API operations.
///
/// Use pattern matching to handle specific failure classes. The message of
/// the status-mapped variants is the raw response body returned by the
/// server, verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API rejected the request with HTTP 400.
    #[error("bad request: {message}")]
    BadRequest {
        /// Raw response body text.
        message: String,
    },

    /// The API failed with HTTP 500.
    #[error("server error: {message}")]
    ServerError {
        /// Raw response body text.
        message: String,
    },

    /// Any other non-2xx/204 response.
    #[error("request failed with status {code}: {message}")]
    Transport {
        /// The HTTP status code of the response.
        code: u16,
        /// Raw response body text.
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request validation failed before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// A response body could not be encoded or decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response had a different shape than the operation expects.
    #[error("unexpected response shape: expected {expected}")]
    UnexpectedResponse {
        /// Description of the expected shape.
        expected: &'static str,
    },

    /// Pagination continuation kept failing after the bounded retries.
    #[error("exceeded maximum retry count of {retries} fetching next page: {source}")]
    PaginationRetriesExhausted {
        /// The retry budget that was exhausted.
        retries: u32,
        /// The last continuation failure.
        source: Box<ApiError>,
    },
}

impl ApiError {
    /// Classifies an HTTP failure status into a domain error.
    ///
    /// 400 maps to [`Self::BadRequest`], 500 to [`Self::ServerError`], and
    /// every other failure status to [`Self::Transport`]. The response body
    /// text is carried as the message in all cases.
    #[must_use]
    pub fn from_status(code: u16, message: String) -> Self {
        match code {
            400 => Self::BadRequest { message },
            500 => Self::ServerError { message },
            _ => Self::Transport { code, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_400_maps_to_bad_request() {
        let error = ApiError::from_status(400, "invalid code".to_string());
        assert!(matches!(
            &error,
            ApiError::BadRequest { message } if message == "invalid code"
        ));
        assert!(error.to_string().contains("invalid code"));
    }

    #[test]
    fn test_status_500_maps_to_server_error() {
        let error = ApiError::from_status(500, "boom".to_string());
        assert!(matches!(error, ApiError::ServerError { .. }));
    }

    #[test]
    fn test_other_statuses_map_to_transport() {
        for code in [401, 403, 404, 422, 502] {
            let error = ApiError::from_status(code, "denied".to_string());
            assert!(
                matches!(&error, ApiError::Transport { code: c, .. } if *c == code),
                "expected Transport for status {code}"
            );
        }
    }

    #[test]
    fn test_transport_message_includes_status_and_body() {
        let error = ApiError::from_status(404, "not found".to_string());
        let message = error.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_pagination_exhausted_wraps_last_failure() {
        let inner = ApiError::from_status(500, "still down".to_string());
        let error = ApiError::PaginationRetriesExhausted {
            retries: 1,
            source: Box::new(inner),
        };

        let message = error.to_string();
        assert!(message.contains("maximum retry count of 1"));
        assert!(message.contains("still down"));
    }

    #[test]
    fn test_invalid_request_error_message() {
        let error = InvalidRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying a body.");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let api_error: &dyn std::error::Error = &ApiError::BadRequest {
            message: "test".to_string(),
        };
        let _ = api_error;

        let invalid: &dyn std::error::Error = &InvalidRequestError::MissingBody {
            method: "put".to_string(),
        };
        let _ = invalid;
    }
}
