//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses, latency
//!   and never-resolving requests

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
