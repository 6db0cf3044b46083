//! RAII guard for a single in-flight operation.

use super::LoadingTracker;

/// Keeps one operation counted as in flight until it is dropped.
///
/// The guard calls [`LoadingTracker::stop`] exactly once, whether it is
/// released with [`finish`](Self::finish), dropped at the end of a scope,
/// or dropped because the future holding it was cancelled.
#[must_use = "dropping the guard immediately ends the operation"]
#[derive(Debug)]
pub struct LoadingGuard {
    tracker: Option<LoadingTracker>,
}

impl LoadingGuard {
    pub(super) fn new(tracker: LoadingTracker) -> Self {
        Self {
            tracker: Some(tracker),
        }
    }

    /// End the operation now.
    pub fn finish(mut self) {
        self.release();
    }

    /// Whether this guard still holds its operation open.
    pub fn is_active(&self) -> bool {
        self.tracker.is_some()
    }

    fn release(&mut self) {
        if let Some(tracker) = self.tracker.take() {
            tracker.stop();
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.release();
    }
}
