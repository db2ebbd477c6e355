use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;

#[tokio::test(start_paused = true)]
async fn test_interval_ticks_until_break() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();

    let handle = spawn_interval(Duration::from_millis(10), move || {
        if counter.fetch_add(1, Ordering::SeqCst) + 1 == 5 {
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    });

    time::sleep(Duration::from_millis(200)).await;
    assert_eq!(count.load(Ordering::SeqCst), 5);
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_interval_waits_one_period_before_first_tick() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();

    let _handle = spawn_interval(Duration::from_millis(100), move || {
        counter.fetch_add(1, Ordering::SeqCst);
        ControlFlow::Continue(())
    });

    time::sleep(Duration::from_millis(50)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);

    time::sleep(Duration::from_millis(60)).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_interval_stops_ticking() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();

    let handle = spawn_interval(Duration::from_millis(10), move || {
        counter.fetch_add(1, Ordering::SeqCst);
        ControlFlow::Continue(())
    });

    time::sleep(Duration::from_millis(35)).await;
    drop(handle);
    let seen = count.load(Ordering::SeqCst);

    time::sleep(Duration::from_millis(100)).await;
    assert_eq!(count.load(Ordering::SeqCst), seen);
}

#[tokio::test(start_paused = true)]
async fn test_delayed_fires_once() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();

    let handle = spawn_delayed(Duration::from_millis(500), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    time::sleep(Duration::from_secs(2)).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_delay_never_fires() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();

    let handle = spawn_delayed(Duration::from_millis(500), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    time::sleep(Duration::from_millis(100)).await;
    handle.cancel();
    time::sleep(Duration::from_secs(2)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);
}
