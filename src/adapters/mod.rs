//! Concrete implementations of [`crate::traits::HttpClient`].
//!
//! - [`ReqwestHttpClient`] - HTTP transport using reqwest
//! - [`mock::MockHttpClient`] - configurable responses for tests

pub mod mock;
pub mod reqwest_http;

pub use mock::MockHttpClient;
pub use reqwest_http::ReqwestHttpClient;
