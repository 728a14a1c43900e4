//! Debounce
//!
//! Delays a function until calls have stopped for `wait`; only the most
//! recent arguments reach it.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::services::scheduler::{Scheduler, TimerId};

type SharedFn<A> = Arc<dyn Fn(A) + Send + Sync>;

#[derive(Debug, Default)]
struct DebounceState {
    pending: Option<TimerId>,
    /// Bumped on every call; a timer only fires if it still matches
    generation: u64,
}

/// A debounced function. Clones share the same pending timer.
pub struct Debouncer<A> {
    scheduler: Arc<dyn Scheduler>,
    wait: Duration,
    func: SharedFn<A>,
    state: Arc<Mutex<DebounceState>>,
}

fn lock(state: &Mutex<DebounceState>) -> MutexGuard<'_, DebounceState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new<F>(scheduler: Arc<dyn Scheduler>, wait: Duration, func: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            scheduler,
            wait,
            func: Arc::new(func),
            state: Arc::new(Mutex::new(DebounceState::default())),
        }
    }

    /// Cancel the pending call, if any, and schedule `func(args)` after `wait`
    pub fn call(&self, args: A) {
        let mut state = lock(&self.state);
        if let Some(id) = state.pending.take() {
            self.scheduler.cancel(id);
        }
        state.generation = state.generation.wrapping_add(1);
        let generation = state.generation;

        let func = Arc::clone(&self.func);
        let shared = Arc::clone(&self.state);
        let id = self.scheduler.schedule(
            self.wait,
            Box::new(move || {
                {
                    let mut state = lock(&shared);
                    if state.generation != generation {
                        return;
                    }
                    state.pending = None;
                }
                func(args);
            }),
        );
        state.pending = Some(id);
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}

impl<A> Clone for Debouncer<A> {
    fn clone(&self) -> Self {
        Self {
            scheduler: Arc::clone(&self.scheduler),
            wait: self.wait,
            func: Arc::clone(&self.func),
            state: Arc::clone(&self.state),
        }
    }
}

/// Wrap `func` so that it runs once per quiet period of length `wait`
pub fn debounce<A, F>(scheduler: Arc<dyn Scheduler>, wait: Duration, func: F) -> impl Fn(A) + Send + Sync
where
    A: Send + 'static,
    F: Fn(A) + Send + Sync + 'static,
{
    let debouncer = Debouncer::new(scheduler, wait, func);
    move |args| debouncer.call(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::scheduler::{ManualScheduler, TokioScheduler};

    type Calls = Arc<Mutex<Vec<(u32, Duration)>>>;

    fn recording(scheduler: &Arc<ManualScheduler>) -> (Calls, impl Fn(u32) + Send + Sync + 'static) {
        let calls: Calls = Arc::new(Mutex::new(Vec::new()));
        let calls_clone = Arc::clone(&calls);
        let clock = Arc::clone(scheduler);
        let func = move |arg: u32| {
            calls_clone.lock().expect("lock").push((arg, clock.now()));
        };
        (calls, func)
    }

    #[test]
    fn test_rapid_calls_collapse_to_last() {
        let scheduler = Arc::new(ManualScheduler::new());
        let (calls, func) = recording(&scheduler);
        let debounced = debounce(scheduler.clone(), Duration::from_millis(100), func);

        debounced(1);
        scheduler.advance(Duration::from_millis(50));
        debounced(2);
        scheduler.advance(Duration::from_millis(50));
        debounced(3);

        // Third call happened at t=100; nothing may fire before t=200.
        scheduler.advance(Duration::from_millis(99));
        assert!(calls.lock().expect("lock").is_empty());

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(
            *calls.lock().expect("lock"),
            vec![(3, Duration::from_millis(200))]
        );

        scheduler.advance(Duration::from_secs(5));
        assert_eq!(calls.lock().expect("lock").len(), 1);
    }

    #[test]
    fn test_separate_quiet_periods_fire_separately() {
        let scheduler = Arc::new(ManualScheduler::new());
        let (calls, func) = recording(&scheduler);
        let debouncer = Debouncer::new(scheduler.clone(), Duration::from_millis(100), func);

        debouncer.call(1);
        scheduler.advance(Duration::from_millis(150));
        debouncer.call(2);
        scheduler.advance(Duration::from_millis(150));

        let args: Vec<u32> = calls.lock().expect("lock").iter().map(|(a, _)| *a).collect();
        assert_eq!(args, vec![1, 2]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_clones_share_pending_timer() {
        let scheduler = Arc::new(ManualScheduler::new());
        let (calls, func) = recording(&scheduler);
        let debouncer = Debouncer::new(scheduler.clone(), Duration::from_millis(10), func);
        let other = debouncer.clone();

        debouncer.call(1);
        other.call(2);
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_millis(10));
        let args: Vec<u32> = calls.lock().expect("lock").iter().map(|(a, _)| *a).collect();
        assert_eq!(args, vec![2]);
    }

    #[tokio::test]
    async fn test_debounce_on_tokio_timers() {
        tokio::time::pause();
        let scheduler: Arc<dyn Scheduler> = Arc::new(TokioScheduler::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let debounced = debounce(scheduler, Duration::from_millis(100), move |query: String| {
            seen_clone.lock().expect("lock").push(query);
        });

        debounced("l".to_string());
        tokio::time::sleep(Duration::from_millis(30)).await;
        debounced("la".to_string());
        tokio::time::sleep(Duration::from_millis(30)).await;
        debounced("lap".to_string());

        tokio::time::sleep(Duration::from_millis(90)).await;
        assert!(seen.lock().expect("lock").is_empty());

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(*seen.lock().expect("lock"), vec!["lap".to_string()]);
    }
}
