//! Request interceptors.
//!
//! An interceptor is an [`HttpClient`] that wraps another [`HttpClient`] and
//! adds behavior around every request. Interceptors compose by nesting; the
//! outermost one sees the request first and the response last:
//!
//! ```
//! use std::time::Duration;
//! use inflight::adapters::ReqwestHttpClient;
//! use inflight::interceptor::{DelayPolicy, InterceptorExt};
//! use inflight::loading::LoadingTracker;
//!
//! let tracker = LoadingTracker::new();
//! let client = ReqwestHttpClient::new()
//!     .with_delay(DelayPolicy::UpTo(Duration::from_secs(3)))
//!     .with_loading(tracker.clone());
//! ```
//!
//! [`track`] and [`track_stream`] expose the loading bookkeeping for
//! operations that do not go through an [`HttpClient`].

mod delay;
mod loading;
mod track;

pub use delay::{DelayInterceptor, DelayPolicy};
pub use loading::LoadingInterceptor;
pub use track::{track, track_stream, TrackedStream};

use crate::loading::LoadingTracker;
use crate::traits::HttpClient;

/// Builder-style composition of interceptors around a client.
pub trait InterceptorExt: HttpClient + Sized {
    /// Count requests made through this client on `tracker`.
    fn with_loading(self, tracker: LoadingTracker) -> LoadingInterceptor<Self> {
        LoadingInterceptor::new(self, tracker)
    }

    /// Hold successful responses back according to `policy`.
    fn with_delay(self, policy: DelayPolicy) -> DelayInterceptor<Self> {
        DelayInterceptor::new(self, policy)
    }
}

impl<C: HttpClient + Sized> InterceptorExt for C {}
