//! Push-based view of the loading state.

use futures::stream::{self, Stream, StreamExt};
use tokio::sync::watch;

/// Read-only subscription to a [`LoadingTracker`](super::LoadingTracker).
///
/// A new observer sees the current value immediately through
/// [`current`](Self::current). [`changed`](Self::changed) then resolves only
/// when the value differs from the last one this observer saw; a
/// loading → idle → loading flip that happens between two reads collapses
/// into no notification.
#[derive(Debug, Clone)]
pub struct LoadingObserver {
    rx: watch::Receiver<bool>,
    last: bool,
}

impl LoadingObserver {
    pub(super) fn new(mut rx: watch::Receiver<bool>) -> Self {
        let last = *rx.borrow_and_update();
        Self { rx, last }
    }

    /// The latest published value.
    pub fn current(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait for the next distinct value.
    ///
    /// Returns `None` once every tracker handle has been dropped.
    pub async fn changed(&mut self) -> Option<bool> {
        loop {
            self.rx.changed().await.ok()?;
            let value = *self.rx.borrow_and_update();
            if value != self.last {
                self.last = value;
                return Some(value);
            }
        }
    }

    /// Take the latest value without waiting, returning it only if it
    /// differs from the last one this observer saw.
    pub fn poll_change(&mut self) -> Option<bool> {
        let value = *self.rx.borrow_and_update();
        if value != self.last {
            self.last = value;
            Some(value)
        } else {
            None
        }
    }

    /// Convert into a stream that yields the current value first and then
    /// each distinct change.
    pub fn into_stream(mut self) -> impl Stream<Item = bool> + Send + 'static {
        let first = *self.rx.borrow_and_update();
        self.last = first;
        stream::once(async move { first }).chain(stream::unfold(self, |mut observer| async move {
            observer.changed().await.map(|value| (value, observer))
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::loading::LoadingTracker;
    use futures::StreamExt;
    use std::time::Duration;

    #[test]
    fn test_new_observer_sees_current_value() {
        let tracker = LoadingTracker::new();
        tracker.start();
        let observer = tracker.observe();
        assert!(observer.current());
    }

    #[test]
    fn test_poll_change_reports_transitions_only() {
        let tracker = LoadingTracker::new();
        let mut observer = tracker.observe();
        assert_eq!(observer.poll_change(), None);

        tracker.start();
        assert_eq!(observer.poll_change(), Some(true));
        tracker.start();
        assert_eq!(observer.poll_change(), None);
        tracker.stop();
        assert_eq!(observer.poll_change(), None);
        tracker.stop();
        assert_eq!(observer.poll_change(), Some(false));
    }

    #[test]
    fn test_collapsed_flip_is_not_reported() {
        let tracker = LoadingTracker::new();
        let mut observer = tracker.observe();
        tracker.start();
        tracker.stop();
        assert_eq!(observer.poll_change(), None);
    }

    #[tokio::test]
    async fn test_changed_waits_for_transition() {
        let tracker = LoadingTracker::new();
        let mut observer = tracker.observe();

        let background = tracker.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            background.start();
        });

        let value = tokio::time::timeout(Duration::from_secs(1), observer.changed())
            .await
            .expect("observer timed out");
        assert_eq!(value, Some(true));
    }

    #[tokio::test]
    async fn test_changed_returns_none_when_tracker_dropped() {
        let tracker = LoadingTracker::new();
        let mut observer = tracker.observe();
        drop(tracker);
        assert_eq!(observer.changed().await, None);
    }

    #[tokio::test]
    async fn test_stream_yields_current_then_changes() {
        let tracker = LoadingTracker::new();
        tracker.start();
        let mut stream = Box::pin(tracker.observe().into_stream());

        assert_eq!(stream.next().await, Some(true));

        tracker.stop();
        assert_eq!(stream.next().await, Some(false));

        tracker.start();
        assert_eq!(stream.next().await, Some(true));
    }

    #[tokio::test]
    async fn test_stream_starts_from_value_at_conversion() {
        let tracker = LoadingTracker::new();
        let observer = tracker.observe();
        tracker.start();

        let mut stream = Box::pin(observer.into_stream());
        assert_eq!(stream.next().await, Some(true));

        // The start before conversion is not replayed as a change
        tracker.stop();
        assert_eq!(stream.next().await, Some(false));
    }
}
