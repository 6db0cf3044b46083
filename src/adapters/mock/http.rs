//! Mock HTTP client for testing.
//!
//! Returns predefined responses or errors per URL, optionally after a
//! per-URL latency, and records every request it receives.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::traits::{ByteStream, Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET or POST)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST requests)
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful response
    Success(Response),
    /// Return an error
    Error(HttpError),
    /// Return a stream of bytes
    Stream(Vec<Bytes>),
    /// Return a stream error
    StreamError(HttpError),
    /// Never resolve; the request stays pending until it is dropped
    Pending,
}

/// Mock HTTP client for testing.
///
/// # Example
///
/// ```ignore
/// use inflight::adapters::mock::{MockHttpClient, MockResponse};
/// use inflight::traits::{HttpClient, Response, Headers};
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "https://api.example.com/users/1",
///     MockResponse::Success(Response::new(200, r#"{"id":1}"#)),
/// );
///
/// let response = client.get("https://api.example.com/users/1", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses by URL (exact or prefix match)
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Latency applied before answering, by URL
    latencies: Arc<Mutex<HashMap<String, Duration>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a URL. Exact matches win over prefix matches.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        lock(&self.responses).insert(url.to_string(), response);
    }

    /// Delay the answer for `url` by `latency`.
    pub fn set_latency(&self, url: &str, latency: Duration) {
        lock(&self.latencies).insert(url.to_string(), latency);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        lock(&self.requests).push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = lock(&self.responses);

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        // Longest prefix wins so overlapping patterns are deterministic
        let prefix_match = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefix_match.is_some() {
            return prefix_match;
        }

        lock(&self.default_response).clone()
    }

    /// Wait out the configured latency, then resolve the configured response.
    async fn respond(&self, url: &str) -> Option<MockResponse> {
        let latency = lock(&self.latencies).get(url).copied();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        let response = self.get_response(url);
        if let Some(MockResponse::Pending) = response {
            futures::future::pending::<()>().await;
        }
        response
    }

    async fn unary(&self, url: &str) -> Result<Response, HttpError> {
        match self.respond(url).await {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) | Some(MockResponse::StreamError(err)) => Err(err),
            Some(MockResponse::Stream(_)) => Err(HttpError::Other(
                "Stream response on non-stream request".to_string(),
            )),
            Some(MockResponse::Pending) | None => {
                Err(HttpError::Other(format!("No mock response for URL: {}", url)))
            }
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.unary(url).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));
        self.unary(url).await
    }

    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<ByteStream, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));

        match self.respond(url).await {
            Some(MockResponse::Stream(chunks)) => {
                let stream = futures::stream::iter(chunks.into_iter().map(Ok));
                Ok(Box::pin(stream))
            }
            Some(MockResponse::StreamError(err)) | Some(MockResponse::Error(err)) => Err(err),
            Some(MockResponse::Success(_)) => Err(HttpError::Other(
                "Non-stream response on stream request".to_string(),
            )),
            Some(MockResponse::Pending) | None => {
                Err(HttpError::Other(format!("No mock response for URL: {}", url)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_with_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/test",
            MockResponse::Success(Response::new(200, "Hello")),
        );

        let response = client
            .get("https://example.com/test", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.body, Bytes::from("Hello"));

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].url, "https://example.com/test");
    }

    #[tokio::test]
    async fn test_prefix_and_default_matching() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/users",
            MockResponse::Success(Response::new(200, "users")),
        );
        client.set_response(
            "https://example.com/users/9",
            MockResponse::Success(Response::new(200, "nine")),
        );
        client.set_default_response(MockResponse::Error(HttpError::Cancelled));

        let nine = client
            .get("https://example.com/users/99", &Headers::new())
            .await
            .unwrap();
        assert_eq!(nine.text().unwrap(), "nine");

        let other = client
            .get("https://example.com/users/3", &Headers::new())
            .await
            .unwrap();
        assert_eq!(other.text().unwrap(), "users");

        let fallback = client.get("https://other.test/", &Headers::new()).await;
        assert_eq!(fallback.unwrap_err(), HttpError::Cancelled);
    }

    #[tokio::test]
    async fn test_no_response_configured() {
        let client = MockHttpClient::new();
        let result = client.get("https://example.com/missing", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_applied() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://example.com/slow",
            MockResponse::Success(Response::new(200, "")),
        );
        client.set_latency("https://example.com/slow", Duration::from_millis(300));

        let started = tokio::time::Instant::now();
        client
            .get("https://example.com/slow", &Headers::new())
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test]
    async fn test_pending_never_resolves() {
        let client = MockHttpClient::new();
        client.set_response("https://example.com/hang", MockResponse::Pending);

        let headers = Headers::new();
        let result = tokio::time::timeout(
            Duration::from_millis(20),
            client.get("https://example.com/hang", &headers),
        )
        .await;
        assert!(result.is_err());
        assert_eq!(client.get_requests().len(), 1);
    }
}
