//! Interceptor that keeps the loading tracker in sync with outgoing requests.

use async_trait::async_trait;

use super::track::{track, track_stream};
use crate::loading::LoadingTracker;
use crate::traits::{ByteStream, Headers, HttpClient, HttpError, Response};

/// Counts every request made through `inner` on a [`LoadingTracker`].
///
/// Each request starts the tracker before it is forwarded and stops it
/// exactly once when the request is no longer pending: after the response
/// arrives, after an error, or when the caller drops the request future.
/// For [`post_stream`](HttpClient::post_stream) the request stays pending
/// until the body stream ends or is dropped.
///
/// Responses and errors from `inner` are returned unchanged.
#[derive(Debug, Clone)]
pub struct LoadingInterceptor<C> {
    inner: C,
    tracker: LoadingTracker,
}

impl<C> LoadingInterceptor<C> {
    pub fn new(inner: C, tracker: LoadingTracker) -> Self {
        Self { inner, tracker }
    }

    /// The tracker requests are counted on.
    pub fn tracker(&self) -> &LoadingTracker {
        &self.tracker
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for LoadingInterceptor<C> {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        tracing::debug!(url, "GET in flight");
        track(&self.tracker, self.inner.get(url, headers)).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        tracing::debug!(url, "POST in flight");
        track(&self.tracker, self.inner.post(url, body, headers)).await
    }

    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<ByteStream, HttpError> {
        tracing::debug!(url, "streaming POST in flight");
        let guard = self.tracker.begin();
        // An error here drops the guard and ends the request
        let stream = self.inner.post_stream(url, body, headers).await?;
        Ok(Box::pin(track_stream(guard, stream)))
    }
}
