//! Cancellable delayed dispatch

use std::time::Duration;
use tokio::task::JoinHandle;

/// A single-slot debounce timer.
///
/// Every [`schedule`](Debouncer::schedule) cancels the pending action and
/// starts a new quiet period. Each scheduled action gets a generation number;
/// only the action carrying the current generation may be acted upon, which
/// filters out a timer that fired just before it was cancelled.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
    generation: u64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            generation: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `fire` after the quiet period unless rescheduled or cancelled first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, fire: F) -> u64
    where
        F: FnOnce(u64) + Send + 'static,
    {
        self.cancel();
        let generation = self.generation;
        // Deadline is fixed now, not when the task is first polled
        let sleep = tokio::time::sleep(self.delay);
        self.pending = Some(tokio::spawn(async move {
            sleep.await;
            fire(generation);
        }));
        generation
    }

    /// Drop the pending action, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.generation += 1;
        match self.pending.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Whether an action is scheduled and not yet settled
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Acknowledge a fired action. Returns false if `generation` was superseded.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.pending.is_none() {
            return false;
        }
        self.pending = None;
        true
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::time::advance;

    fn recorder() -> (Arc<Mutex<Vec<u64>>>, impl Fn() -> Box<dyn FnOnce(u64) + Send>) {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = fired.clone();
        let make = move || {
            let sink = sink.clone();
            Box::new(move |generation: u64| sink.lock().unwrap().push(generation))
                as Box<dyn FnOnce(u64) + Send>
        };
        (fired, make)
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_quiet_period() {
        let (fired, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        let generation = debouncer.schedule(make());
        advance(Duration::from_millis(299)).await;
        assert!(fired.lock().unwrap().is_empty());

        advance(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(*fired.lock().unwrap(), vec![generation]);
        assert!(debouncer.settle(generation));
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_collapses() {
        let (fired, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule(make());
        advance(Duration::from_millis(200)).await;
        debouncer.schedule(make());
        advance(Duration::from_millis(200)).await;
        let last = debouncer.schedule(make());
        advance(Duration::from_millis(400)).await;
        tokio::task::yield_now().await;

        assert_eq!(*fired.lock().unwrap(), vec![last]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_and_stale_generation() {
        let (fired, make) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        let first = debouncer.schedule(make());
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());
        advance(Duration::from_secs(1)).await;
        tokio::task::yield_now().await;

        assert!(fired.lock().unwrap().is_empty());
        assert!(!debouncer.settle(first));
    }
}
