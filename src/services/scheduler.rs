//! Timer Scheduling
//!
//! Single-shot delayed callbacks with explicit handles. [`TokioScheduler`]
//! runs them on tokio timers; [`ManualScheduler`] runs them against a
//! simulated clock that only moves when [`ManualScheduler::advance`] is called.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use ahash::AHashMap;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;

use super::runtime::runtime_handle;

/// Handle of a scheduled callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Callback run once when its timer fires
pub type TimerTask = Box<dyn FnOnce() + Send + 'static>;

/// Timer capability
pub trait Scheduler: Send + Sync {
    /// Run `task` once after `delay`
    fn schedule(&self, delay: Duration, task: TimerTask) -> TimerId;

    /// Drop a pending callback. Unknown or already fired ids are ignored.
    fn cancel(&self, id: TimerId);
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Scheduler backed by tokio tasks
pub struct TokioScheduler {
    handle: Handle,
    inner: Arc<TokioTimers>,
}

#[derive(Default)]
struct TokioTimers {
    next_id: AtomicU64,
    pending: Mutex<AHashMap<TimerId, AbortHandle>>,
}

impl TokioScheduler {
    /// Use the current runtime, or the process-wide one outside of a runtime
    pub fn new() -> Self {
        let handle = Handle::try_current().unwrap_or_else(|_| runtime_handle());
        Self::with_handle(handle)
    }

    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle,
            inner: Arc::new(TokioTimers::default()),
        }
    }

    /// Number of timers that have neither fired nor been cancelled
    pub fn pending(&self) -> usize {
        lock(&self.inner.pending).len()
    }
}

impl Default for TokioScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: TimerTask) -> TimerId {
        let id = TimerId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let timers = Arc::clone(&self.inner);

        // Register before the task can observe the map, so a zero delay still fires.
        let mut pending = lock(&self.inner.pending);
        let join = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            let armed = lock(&timers.pending).remove(&id).is_some();
            if armed {
                task();
            }
        });
        pending.insert(id, join.abort_handle());

        id
    }

    fn cancel(&self, id: TimerId) {
        if let Some(handle) = lock(&self.inner.pending).remove(&id) {
            handle.abort();
        }
    }
}

/// Scheduler driven by a simulated clock
#[derive(Default)]
pub struct ManualScheduler {
    inner: Mutex<ManualTimers>,
}

#[derive(Default)]
struct ManualTimers {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TimerId), TimerTask>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated time elapsed since creation
    pub fn now(&self) -> Duration {
        lock(&self.inner).now
    }

    /// Number of timers waiting to fire
    pub fn pending(&self) -> usize {
        lock(&self.inner).queue.len()
    }

    /// Move the clock forward, firing due timers in deadline order.
    ///
    /// Timers scheduled by a firing callback run in the same call when their
    /// deadline falls inside the window.
    pub fn advance(&self, by: Duration) {
        let target = lock(&self.inner).now + by;

        loop {
            let next = {
                let mut timers = lock(&self.inner);
                let due = matches!(timers.queue.first_key_value(), Some((&(at, _), _)) if at <= target);
                if due {
                    timers.queue.pop_first().map(|((at, _), task)| {
                        timers.now = at;
                        task
                    })
                } else {
                    None
                }
            };

            match next {
                Some(task) => task(),
                None => break,
            }
        }

        let mut timers = lock(&self.inner);
        if timers.now < target {
            timers.now = target;
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: TimerTask) -> TimerId {
        let mut timers = lock(&self.inner);
        let id = TimerId(timers.next_id);
        timers.next_id += 1;
        let at = timers.now + delay;
        timers.queue.insert((at, id), task);
        id
    }

    fn cancel(&self, id: TimerId) {
        lock(&self.inner).queue.retain(|&(_, timer), _| timer != id);
    }
}
