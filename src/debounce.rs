//! Trailing-edge debounce on the tokio timer.
//!
//! Every [`Debouncer::trigger`] replaces the pending arguments and restarts
//! the countdown. The action runs once, with the latest arguments, after a
//! full quiet period. Dropping the debouncer cancels whatever is pending.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;

type Action<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Pending arguments tagged with the trigger that recorded them. A timer
/// only fires if its generation is still the latest one.
struct Pending<T> {
    generation: u64,
    args: Option<T>,
}

pub struct Debouncer<T: Send + 'static> {
    delay: Duration,
    action: Action<T>,
    pending: Arc<Mutex<Pending<T>>>,
    timer: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, action: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            action: Arc::new(action),
            pending: Arc::new(Mutex::new(Pending {
                generation: 0,
                args: None,
            })),
            timer: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record `args` and restart the countdown. Must be called from within
    /// a tokio runtime.
    pub fn trigger(&mut self, args: T) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        let generation = {
            let mut pending = lock(&self.pending);
            pending.generation = pending.generation.wrapping_add(1);
            pending.args = Some(args);
            pending.generation
        };

        let pending = Arc::clone(&self.pending);
        let action = Arc::clone(&self.action);
        let delay = self.delay;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let args = {
                let mut pending = lock(&pending);
                if pending.generation != generation {
                    return;
                }
                pending.args.take()
            };
            if let Some(args) = args {
                action(args);
            }
        }));
    }

    /// Whether a countdown is running.
    pub fn is_pending(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Drop the pending countdown and its arguments without running.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        let mut pending = lock(&self.pending);
        pending.generation = pending.generation.wrapping_add(1);
        pending.args = None;
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, Instant};

    type Calls = Arc<Mutex<Vec<(u32, Instant)>>>;

    fn recorder(delay_ms: u64) -> (Debouncer<u32>, Calls) {
        let calls: Calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let debouncer = Debouncer::new(Duration::from_millis(delay_ms), move |n| {
            sink.lock().unwrap().push((n, Instant::now()));
        });
        (debouncer, calls)
    }

    #[tokio::test(start_paused = true)]
    async fn burst_fires_once_with_last_args() {
        let (mut debouncer, calls) = recorder(1000);

        debouncer.trigger(1);
        sleep(Duration::from_millis(300)).await;
        debouncer.trigger(2);
        sleep(Duration::from_millis(300)).await;
        let last = Instant::now();
        debouncer.trigger(3);

        sleep(Duration::from_millis(999)).await;
        assert!(calls.lock().unwrap().is_empty());
        assert!(debouncer.is_pending());

        sleep(Duration::from_millis(2)).await;
        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, 3);
        assert!(calls[0].1 >= last + Duration::from_millis(1000));
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn single_trigger_fires_after_delay() {
        let (mut debouncer, calls) = recorder(5000);
        let start = Instant::now();
        debouncer.trigger(7);
        sleep(Duration::from_secs(6)).await;

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, 7);
        let waited = calls[0].1 - start;
        assert!(waited >= Duration::from_secs(5));
        assert!(waited < Duration::from_millis(5010));
    }

    #[tokio::test(start_paused = true)]
    async fn no_trigger_never_fires() {
        let (debouncer, calls) = recorder(10);
        sleep(Duration::from_secs(1)).await;
        assert!(calls.lock().unwrap().is_empty());
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn separate_quiet_periods_fire_separately() {
        let (mut debouncer, calls) = recorder(100);
        debouncer.trigger(1);
        sleep(Duration::from_millis(150)).await;
        debouncer.trigger(2);
        sleep(Duration::from_millis(150)).await;

        let fired: Vec<u32> = calls.lock().unwrap().iter().map(|(n, _)| *n).collect();
        assert_eq!(fired, [1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_pending_call() {
        let (mut debouncer, calls) = recorder(100);
        debouncer.trigger(1);
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        sleep(Duration::from_millis(500)).await;
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_pending_call() {
        let (mut debouncer, calls) = recorder(100);
        debouncer.trigger(1);
        drop(debouncer);
        sleep(Duration::from_millis(500)).await;
        assert!(calls.lock().unwrap().is_empty());
    }
}
