//! Pending request counter.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;

use super::{LoadingGuard, LoadingObserver};

/// Shared state behind every clone of a tracker.
struct Inner {
    /// Number of operations currently in flight
    count: Mutex<usize>,
    /// Number of `stop()` calls that had no matching `start()`
    imbalances: AtomicU64,
    /// Publishes `count > 0`
    loading_tx: watch::Sender<bool>,
}

/// Counts in-flight operations and publishes whether any are pending.
///
/// Cloning is cheap and every clone shares the same counter, so one tracker
/// created at startup can be handed to every interceptor and view.
///
/// The count and the published boolean are updated under the same lock, so
/// `is_loading()` always equals `count() > 0` for every observer.
#[derive(Clone)]
pub struct LoadingTracker {
    inner: Arc<Inner>,
}

impl LoadingTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        let (loading_tx, _) = watch::channel(false);
        Self {
            inner: Arc::new(Inner {
                count: Mutex::new(0),
                imbalances: AtomicU64::new(0),
                loading_tx,
            }),
        }
    }

    /// Record the start of an operation.
    ///
    /// Observers are notified only on the idle to loading transition.
    pub fn start(&self) {
        let mut count = self.lock_count();
        *count += 1;
        tracing::trace!(count = *count, "loading start");
        self.publish(*count);
    }

    /// Record the end of an operation.
    ///
    /// Must be called once per prior [`start`](Self::start). An unmatched
    /// call leaves the count at zero and is logged as a caller bug.
    pub fn stop(&self) {
        let mut count = self.lock_count();
        if *count == 0 {
            self.inner.imbalances.fetch_add(1, Ordering::Relaxed);
            tracing::warn!("loading stop() called without a matching start(); count stays at 0");
            return;
        }
        *count -= 1;
        tracing::trace!(count = *count, "loading stop");
        self.publish(*count);
    }

    /// Start an operation and return a guard that stops it exactly once.
    pub fn begin(&self) -> LoadingGuard {
        self.start();
        LoadingGuard::new(self.clone())
    }

    /// Subscribe to the derived "is loading" value.
    pub fn observe(&self) -> LoadingObserver {
        LoadingObserver::new(self.inner.loading_tx.subscribe())
    }

    /// Number of operations currently in flight.
    pub fn count(&self) -> usize {
        *self.lock_count()
    }

    /// Whether at least one operation is in flight.
    pub fn is_loading(&self) -> bool {
        *self.inner.loading_tx.borrow()
    }

    /// Number of unmatched `stop()` calls seen so far.
    pub fn imbalance_count(&self) -> u64 {
        self.inner.imbalances.load(Ordering::Relaxed)
    }

    fn publish(&self, count: usize) {
        let loading = count > 0;
        let changed = self.inner.loading_tx.send_if_modified(|current| {
            if *current == loading {
                false
            } else {
                *current = loading;
                true
            }
        });
        if changed {
            tracing::debug!(loading, "loading state changed");
        }
    }

    fn lock_count(&self) -> MutexGuard<'_, usize> {
        // The guarded value is a plain integer, a poisoned lock still holds a valid count.
        self.inner
            .count
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for LoadingTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoadingTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingTracker")
            .field("count", &self.count())
            .field("loading", &self.is_loading())
            .field("imbalances", &self.imbalance_count())
            .finish()
    }
}
