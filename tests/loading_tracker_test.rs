//! Behavior of the in-flight counter and its observers.

mod common;

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use inflight::loading::LoadingTracker;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use common::wait_for_loading;

// ============================================================================
// Counter invariants
// ============================================================================

#[test]
fn test_balanced_interleavings_return_to_idle() {
    let mut rng = StdRng::seed_from_u64(0x1f1f);

    for _ in 0..200 {
        let tracker = LoadingTracker::new();
        let pairs = rng.gen_range(1..20);
        let (mut starts_left, mut stops_left) = (pairs, pairs);

        while starts_left + stops_left > 0 {
            // A stop is only legal while something is in flight
            let can_stop = stops_left > starts_left;
            if starts_left > 0 && (!can_stop || rng.gen_bool(0.5)) {
                tracker.start();
                starts_left -= 1;
            } else {
                tracker.stop();
                stops_left -= 1;
            }
            assert_eq!(tracker.is_loading(), tracker.count() > 0);
            assert_eq!(tracker.count(), stops_left - starts_left);
        }

        assert_eq!(tracker.count(), 0);
        assert!(!tracker.is_loading());
        assert_eq!(tracker.imbalance_count(), 0);
    }
}

#[test]
fn test_concurrent_guards_from_many_threads() {
    let tracker = LoadingTracker::new();
    let barrier = Arc::new(std::sync::Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let tracker = tracker.clone();
            let barrier = Arc::clone(&barrier);
            std::thread::spawn(move || {
                barrier.wait();
                for _ in 0..500 {
                    let guard = tracker.begin();
                    assert!(tracker.is_loading());
                    drop(guard);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(tracker.count(), 0);
    assert!(!tracker.is_loading());
}

#[test]
fn test_unmatched_stop_is_clamped_and_counted() {
    let tracker = LoadingTracker::new();
    tracker.stop();
    tracker.stop();
    assert_eq!(tracker.count(), 0);
    assert!(!tracker.is_loading());
    assert_eq!(tracker.imbalance_count(), 2);

    // Later requests still count normally
    tracker.start();
    assert!(tracker.is_loading());
    tracker.stop();
    assert_eq!(tracker.count(), 0);
}

// ============================================================================
// Request scenarios
// ============================================================================

#[test]
fn test_two_requests_scenario() {
    let tracker = LoadingTracker::new();

    let a = tracker.begin();
    assert!(tracker.is_loading());

    let b = tracker.begin();
    assert!(tracker.is_loading());

    a.finish();
    assert!(tracker.is_loading(), "B is still pending");

    b.finish();
    assert!(!tracker.is_loading());
}

#[test]
fn test_out_of_order_completion_stays_loading_until_last() {
    let tracker = LoadingTracker::new();
    let mut observer = tracker.observe();

    let r1 = tracker.begin();
    let r2 = tracker.begin();
    let r3 = tracker.begin();
    assert_eq!(observer.poll_change(), Some(true));

    r2.finish();
    assert!(tracker.is_loading());
    r1.finish();
    assert!(tracker.is_loading());
    assert_eq!(observer.poll_change(), None, "no flicker during the overlap");

    r3.finish();
    assert_eq!(tracker.count(), 0);
    assert_eq!(observer.poll_change(), Some(false));
}

#[tokio::test]
async fn test_cancelled_future_restores_prior_count() {
    let tracker = LoadingTracker::new();
    tracker.start(); // Unrelated request already in flight

    let task_tracker = tracker.clone();
    let handle = tokio::spawn(async move {
        let _guard = task_tracker.begin();
        std::future::pending::<()>().await;
    });

    tokio::time::timeout(Duration::from_secs(2), async {
        while tracker.count() < 2 {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("request never started");

    handle.abort();
    assert!(handle.await.unwrap_err().is_cancelled());

    assert_eq!(tracker.count(), 1);
    assert_eq!(tracker.imbalance_count(), 0);
    tracker.stop();
    assert!(!tracker.is_loading());
}

// ============================================================================
// Observers
// ============================================================================

#[tokio::test]
async fn test_mid_flight_observer_gets_current_value_then_changes() {
    let tracker = LoadingTracker::new();
    let guard = tracker.begin();

    let mut stream = Box::pin(tracker.observe().into_stream());
    assert_eq!(stream.next().await, Some(true));

    // Another start while loading publishes nothing new
    let second = tracker.begin();
    drop(guard);
    drop(second);
    assert_eq!(stream.next().await, Some(false));

    tracker.start();
    assert_eq!(stream.next().await, Some(true));
}

#[tokio::test]
async fn test_observers_follow_requests_on_other_tasks() {
    let tracker = LoadingTracker::new();
    let mut observer = tracker.observe();
    assert!(!observer.current());

    let (release_tx, release_rx) = tokio::sync::oneshot::channel::<()>();
    let task_tracker = tracker.clone();
    let handle = tokio::spawn(async move {
        let guard = task_tracker.begin();
        let _ = release_rx.await;
        guard.finish();
    });

    wait_for_loading(&mut observer, true).await;
    release_tx.send(()).unwrap();
    handle.await.unwrap();
    wait_for_loading(&mut observer, false).await;
    assert_eq!(tracker.count(), 0);
}

#[tokio::test]
async fn test_observer_ends_when_tracker_dropped() {
    let tracker = LoadingTracker::new();
    let mut observer = tracker.observe();
    drop(tracker);
    assert_eq!(observer.changed().await, None);
}
