//! Interceptor that holds responses back for a while.
//!
//! Used by the demo so that requests to a fast API stay in flight long
//! enough for the loading indicator to be seen.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use crate::traits::{ByteStream, Headers, HttpClient, HttpError, Response};

/// How long a successful response is held back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelayPolicy {
    /// Deliver responses immediately
    #[default]
    None,
    /// Always wait exactly this long
    Fixed(Duration),
    /// Wait a uniformly random duration in `[0, max)`
    UpTo(Duration),
}

impl DelayPolicy {
    /// Pick the delay for one response.
    pub fn sample(&self) -> Duration {
        match *self {
            DelayPolicy::None => Duration::ZERO,
            DelayPolicy::Fixed(delay) => delay,
            DelayPolicy::UpTo(max) if max.is_zero() => Duration::ZERO,
            DelayPolicy::UpTo(max) => {
                let millis = max.as_millis().min(u64::MAX as u128) as u64;
                Duration::from_millis(rand::thread_rng().gen_range(0..millis.max(1)))
            }
        }
    }

    /// The longest delay this policy can produce.
    pub fn max(&self) -> Duration {
        match *self {
            DelayPolicy::None => Duration::ZERO,
            DelayPolicy::Fixed(delay) | DelayPolicy::UpTo(delay) => delay,
        }
    }
}

/// Delays successful responses from `inner` according to a [`DelayPolicy`].
///
/// Errors are returned as soon as `inner` produces them.
#[derive(Debug, Clone)]
pub struct DelayInterceptor<C> {
    inner: C,
    policy: DelayPolicy,
}

impl<C> DelayInterceptor<C> {
    pub fn new(inner: C, policy: DelayPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> DelayPolicy {
        self.policy
    }

    async fn hold(&self) {
        let delay = self.policy.sample();
        if !delay.is_zero() {
            tracing::trace!(delay_ms = delay.as_millis() as u64, "delaying response");
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for DelayInterceptor<C> {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let response = self.inner.get(url, headers).await?;
        self.hold().await;
        Ok(response)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        let response = self.inner.post(url, body, headers).await?;
        self.hold().await;
        Ok(response)
    }

    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<ByteStream, HttpError> {
        let stream = self.inner.post_stream(url, body, headers).await?;
        self.hold().await;
        Ok(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};

    const URL: &str = "https://example.com/users/2";

    #[test]
    fn test_policy_sample_bounds() {
        assert_eq!(DelayPolicy::None.sample(), Duration::ZERO);
        assert_eq!(
            DelayPolicy::Fixed(Duration::from_millis(5)).sample(),
            Duration::from_millis(5)
        );
        assert_eq!(DelayPolicy::UpTo(Duration::ZERO).sample(), Duration::ZERO);

        let max = Duration::from_millis(50);
        for _ in 0..100 {
            assert!(DelayPolicy::UpTo(max).sample() < max);
        }
    }

    #[test]
    fn test_policy_max() {
        assert_eq!(DelayPolicy::default().max(), Duration::ZERO);
        assert_eq!(
            DelayPolicy::UpTo(Duration::from_secs(3)).max(),
            Duration::from_secs(3)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_delay_holds_response() {
        let mock = MockHttpClient::new();
        mock.set_response(URL, MockResponse::Success(Response::new(200, "ok")));
        let client = DelayInterceptor::new(mock, DelayPolicy::Fixed(Duration::from_secs(2)));

        let started = tokio::time::Instant::now();
        let response = client.get(URL, &Headers::new()).await.unwrap();
        assert_eq!(response.status, 200);
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_errors_are_not_delayed() {
        let mock = MockHttpClient::new();
        mock.set_response(URL, MockResponse::Error(HttpError::Timeout("slow".into())));
        let client = DelayInterceptor::new(mock, DelayPolicy::Fixed(Duration::from_secs(2)));

        let started = tokio::time::Instant::now();
        let result = client.get(URL, &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Timeout(_))));
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}
