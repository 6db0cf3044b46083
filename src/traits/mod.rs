//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, streaming POST)
//!
//! Interceptors in [`crate::interceptor`] implement [`HttpClient`] by wrapping
//! another [`HttpClient`], so a transport and any number of interceptors
//! compose into a single client.

pub mod http;

pub use http::{ByteStream, Headers, HttpClient, HttpError, Response};
