#[cfg(test)]
#[path = "timers_test.rs"]
mod tests;

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time;
use tokio::time::Instant;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Owns a scheduled task. Cancelling or dropping the handle guarantees the
/// task body is never polled again.
pub struct TaskHandle {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl TaskHandle {
    pub fn cancel(&self) {
        self.token.cancel();
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

pub fn spawn<F, Fut>(task: F) -> TaskHandle
where
    F: FnOnce(CancellationToken) -> Fut,
    Fut: Future<Output = ()> + Send + 'static,
{
    let token = CancellationToken::new();
    let handle = tokio::spawn(task(token.clone()));

    return TaskHandle { token, handle };
}

/// Fixed-rate interval whose first tick fires one `period` after spawning.
pub fn interval(period: Duration) -> time::Interval {
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

/// Calls `on_tick` every `period` until it breaks or the handle is cancelled.
pub fn spawn_interval<F>(period: Duration, mut on_tick: F) -> TaskHandle
where
    F: FnMut() -> ControlFlow<()> + Send + 'static,
{
    spawn(move |token| async move {
        let mut ticker = interval(period);
        loop {
            tokio::select! {
                biased;
                _ = token.cancelled() => break,
                _ = ticker.tick() => {
                    if on_tick().is_break() {
                        break;
                    }
                }
            }
        }
    })
}

/// Calls `on_fire` once after `delay` unless cancelled first.
pub fn spawn_delayed<F>(delay: Duration, on_fire: F) -> TaskHandle
where
    F: FnOnce() + Send + 'static,
{
    spawn(move |token| async move {
        tokio::select! {
            biased;
            _ = token.cancelled() => {}
            _ = time::sleep(delay) => on_fire(),
        }
    })
}
