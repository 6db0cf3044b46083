//! Error handling for inflight.
//!
//! - **Transport errors**: [`crate::traits::HttpError`], passed through
//!   interceptors unchanged
//! - **Unified error type**: [`AppError`] wraps transport, decode, config
//!   and I/O failures
//! - **Categories**: [`ErrorCategory`] drives how the UI words an error
//!
//! Loading-counter imbalance is not an error value: the tracker clamps at
//! zero and logs it (see [`crate::loading::LoadingTracker::stop`]).

mod app_error;
mod category;
mod result;

pub use app_error::AppError;
pub use category::ErrorCategory;
pub use result::AppResult;
