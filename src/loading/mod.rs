//! Global loading state.
//!
//! A [`LoadingTracker`] counts operations that are currently in flight and
//! publishes a single derived boolean, "is anything loading", to any number
//! of observers. The count itself is private: callers can only move it with
//! [`LoadingTracker::start`] / [`LoadingTracker::stop`] (or the RAII
//! [`LoadingGuard`] returned by [`LoadingTracker::begin`]) and read it back.
//!
//! # Example
//!
//! ```
//! use inflight::loading::LoadingTracker;
//!
//! let tracker = LoadingTracker::new();
//! let observer = tracker.observe();
//! assert!(!observer.current());
//!
//! let guard = tracker.begin();
//! assert!(tracker.is_loading());
//!
//! drop(guard);
//! assert!(!tracker.is_loading());
//! assert_eq!(tracker.count(), 0);
//! ```

mod guard;
mod observer;
mod tracker;

pub use guard::LoadingGuard;
pub use observer::LoadingObserver;
pub use tracker::LoadingTracker;
