//! Paginated collection handling.
//!
//! List operations return a [`PageResponse`] seeded from the first page of
//! the server's pagination envelope (`count`/`next`/`previous`/`results`).
//! Calling [`PageResponse::fetch_all`] walks the remaining pages through the
//! stored continuation URL, appending results in server order until the
//! collection is exhausted.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::clients::errors::ApiError;

/// Fixed wait before retrying a failed pagination continuation request.
pub const PAGE_RETRY_WAIT: Duration = Duration::from_secs(30);

/// The wire envelope for paginated list responses.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct PageEnvelope {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<Value>,
}

/// In-memory accumulator for a multi-page collection response.
///
/// The accumulator starts from page 1 (already consumed by the request that
/// produced it) and is either exhausted (`next` absent) or has more pages.
/// [`fetch_all`](Self::fetch_all) drains the remaining pages sequentially,
/// reusing the headers of the originating request so continuation calls stay
/// authenticated.
///
/// Once exhausted, `count` equals `results().len()`; before that, the
/// accumulated results are a prefix of the full collection.
///
/// # Example
///
/// ```rust,ignore
/// let mut page = employees.list(&EmployeeFilter::default()).await?;
/// page.fetch_all(1).await?;
/// assert_eq!(page.count() as usize, page.results().len());
/// ```
#[derive(Clone, Debug)]
pub struct PageResponse {
    count: u64,
    next: Option<String>,
    previous: Option<String>,
    results: Vec<Value>,
    headers: HashMap<String, String>,
    timeout: u64,
    client: reqwest::Client,
}

impl PageResponse {
    /// Seeds an accumulator from a decoded first page.
    pub(crate) fn new(
        envelope: PageEnvelope,
        headers: HashMap<String, String>,
        timeout: u64,
        client: reqwest::Client,
    ) -> Self {
        Self {
            count: envelope.count,
            next: envelope.next,
            previous: envelope.previous,
            results: envelope.results,
            headers,
            timeout,
            client,
        }
    }

    /// Returns the total number of items the server reported.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Returns the results accumulated so far, in server order.
    #[must_use]
    pub fn results(&self) -> &[Value] {
        &self.results
    }

    /// Consumes the accumulator and returns the accumulated results.
    #[must_use]
    pub fn into_results(self) -> Vec<Value> {
        self.results
    }

    /// Returns the continuation URL for the next page, if any.
    #[must_use]
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Returns the URL of the previous page, if any.
    #[must_use]
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Returns `true` once all pages have been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }

    /// Fetches and merges all remaining pages into the accumulator.
    ///
    /// Pages are fetched strictly in sequence: each continuation URL is only
    /// known once the prior page has resolved. Results are appended in the
    /// order the server returns them. A failed continuation request is
    /// retried after a fixed 30-second wait while the per-page retry budget
    /// lasts; the budget is restored after every successfully fetched page.
    ///
    /// Calling this on an exhausted accumulator is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PaginationRetriesExhausted`] wrapping the last
    /// failure once `max_retries` consecutive attempts for the same page
    /// have failed. The results accumulated so far remain accessible, but
    /// the collection must not be assumed complete.
    pub async fn fetch_all(&mut self, max_retries: u32) -> Result<&mut Self, ApiError> {
        let mut retries = max_retries;

        while let Some(next) = self.next.clone() {
            match self.fetch_page(&next).await {
                Ok(envelope) => {
                    self.results.extend(envelope.results);
                    self.count = envelope.count;
                    self.next = envelope.next;
                    self.previous = envelope.previous;
                    retries = max_retries;
                }
                Err(error) => {
                    if retries == 0 {
                        return Err(ApiError::PaginationRetriesExhausted {
                            retries: max_retries,
                            source: Box::new(error),
                        });
                    }
                    retries -= 1;
                    tracing::warn!(
                        url = %next,
                        %error,
                        "failed to fetch next page; retrying in {}s",
                        PAGE_RETRY_WAIT.as_secs()
                    );
                    tokio::time::sleep(PAGE_RETRY_WAIT).await;
                }
            }
        }

        Ok(self)
    }

    /// Issues one continuation GET against a stored `next` URL.
    async fn fetch_page(&self, url: &str) -> Result<PageEnvelope, ApiError> {
        let mut request = self
            .client
            .get(url)
            .timeout(Duration::from_secs(self.timeout));
        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        let response = request.send().await?;
        let code = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();

        if !(200..300).contains(&code) {
            return Err(ApiError::from_status(code, text));
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(value: Value) -> PageEnvelope {
        serde_json::from_value(value).unwrap()
    }

    fn seeded(value: Value) -> PageResponse {
        PageResponse::new(
            envelope(value),
            HashMap::new(),
            600,
            reqwest::Client::new(),
        )
    }

    #[test]
    fn test_envelope_deserializes_all_fields() {
        let envelope = envelope(json!({
            "count": 5,
            "next": "https://api.example.com/v1/employees/?page=2",
            "previous": null,
            "results": [{"id": 1}, {"id": 2}],
        }));

        assert_eq!(envelope.count, 5);
        assert!(envelope.next.is_some());
        assert!(envelope.previous.is_none());
        assert_eq!(envelope.results.len(), 2);
    }

    #[test]
    fn test_envelope_defaults_missing_results() {
        let envelope = envelope(json!({"count": 0, "next": null, "previous": null}));
        assert!(envelope.results.is_empty());
    }

    #[test]
    fn test_seeded_page_with_next_is_not_exhausted() {
        let page = seeded(json!({
            "count": 3,
            "next": "https://api.example.com/v1/areas/?page=2",
            "previous": null,
            "results": [{"id": 1}],
        }));

        assert!(!page.is_exhausted());
        assert_eq!(page.count(), 3);
        assert_eq!(page.results().len(), 1);
    }

    #[test]
    fn test_seeded_page_without_next_is_exhausted() {
        let page = seeded(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{"id": 1}],
        }));

        assert!(page.is_exhausted());
    }

    #[tokio::test]
    async fn test_fetch_all_is_noop_when_exhausted() {
        let mut page = seeded(json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [{"id": 1}, {"id": 2}],
        }));

        page.fetch_all(1).await.unwrap();

        assert_eq!(page.results().len(), 2);
        assert_eq!(page.count(), 2);
        assert!(page.is_exhausted());
    }

    #[test]
    fn test_into_results_preserves_order() {
        let page = seeded(json!({
            "count": 3,
            "next": null,
            "previous": null,
            "results": [{"id": 1}, {"id": 2}, {"id": 3}],
        }));

        let results = page.into_results();
        let ids: Vec<i64> = results
            .iter()
            .map(|item| item.get("id").and_then(Value::as_i64).unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
