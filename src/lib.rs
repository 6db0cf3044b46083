//! inflight - a global "request in flight" indicator for HTTP clients
//!
//! The core is [`loading::LoadingTracker`], a shared counter of pending
//! requests exposed as an observable boolean, and the
//! [`interceptor::LoadingInterceptor`] that brackets every request through an
//! [`traits::HttpClient`] with exactly one start and one stop, whether the
//! request succeeds, fails or is dropped. The rest of the crate is a small
//! TUI that fetches users and shows a spinner while anything is loading.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod loading;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;
