//! Lifecycle tracking for futures and streams.
//!
//! Both adapters hold a [`LoadingGuard`] for as long as the wrapped operation
//! is pending. The guard is released when the operation produces its final
//! value or when the adapter is dropped early, so completion, error and
//! cancellation all end in exactly one `stop()`.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;

use crate::loading::{LoadingGuard, LoadingTracker};

/// Count `future` as in flight on `tracker` until it resolves or is dropped.
///
/// `start()` is called immediately, before the returned future is first
/// polled. The inner output is returned unchanged.
pub fn track<F>(tracker: &LoadingTracker, future: F) -> impl Future<Output = F::Output>
where
    F: Future,
{
    let guard = tracker.begin();
    async move {
        let output = future.await;
        guard.finish();
        output
    }
}

/// Keep `guard` alive until `stream` is exhausted or dropped.
pub fn track_stream<S>(guard: LoadingGuard, stream: S) -> TrackedStream<S>
where
    S: Stream + Unpin,
{
    TrackedStream {
        inner: stream,
        guard: Some(guard),
    }
}

/// Stream adapter returned by [`track_stream`].
#[derive(Debug)]
pub struct TrackedStream<S> {
    inner: S,
    guard: Option<LoadingGuard>,
}

impl<S> TrackedStream<S> {
    /// Whether the underlying operation is still counted as in flight.
    pub fn is_pending(&self) -> bool {
        self.guard.is_some()
    }
}

impl<S> Stream for TrackedStream<S>
where
    S: Stream + Unpin,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let poll = Pin::new(&mut this.inner).poll_next(cx);
        if let Poll::Ready(None) = poll {
            if let Some(guard) = this.guard.take() {
                guard.finish();
            }
        }
        poll
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
