//! Decoded API response types.
//!
//! The request executor classifies every successful response into one of
//! three shapes, so call sites match on an explicit enum instead of probing
//! JSON fields.

use serde_json::Value;

use crate::clients::errors::ApiError;
use crate::clients::pagination::PageResponse;

/// A classified successful response from the People Control API.
///
/// - [`Single`](Self::Single): a plain JSON payload (object or array)
/// - [`Page`](Self::Page): page 1 of a paginated collection, wrapped in a
///   [`PageResponse`] ready for continuation
/// - [`Empty`](Self::Empty): a bodyless success carrying only the status
///   code (deletes are verified by status 204 alone)
#[derive(Debug)]
pub enum ApiResponse {
    /// A plain decoded JSON payload.
    Single(Value),
    /// Page 1 of a paginated collection.
    Page(PageResponse),
    /// A success with no content, e.g. HTTP 204 from a delete.
    Empty(u16),
}

impl ApiResponse {
    /// Returns the status code of an empty success, if this is one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Empty(code) => Some(*code),
            _ => None,
        }
    }

    /// Returns `true` if this is a bodyless success.
    #[must_use]
    pub const fn is_empty_success(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    /// Unwraps the plain JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedResponse`] if the response was a page
    /// or an empty success.
    pub fn single(self) -> Result<Value, ApiError> {
        match self {
            Self::Single(value) => Ok(value),
            _ => Err(ApiError::UnexpectedResponse {
                expected: "a single JSON payload",
            }),
        }
    }

    /// Unwraps the paginated collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedResponse`] if the response was a plain
    /// payload or an empty success.
    pub fn page(self) -> Result<PageResponse, ApiError> {
        match self {
            Self::Page(page) => Ok(page),
            _ => Err(ApiError::UnexpectedResponse {
                expected: "a paginated collection",
            }),
        }
    }
}
