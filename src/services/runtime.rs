//! Tokio Runtime Bridge
//!
//! Synchronous entry points (the CLI, hosts without their own runtime) still
//! need somewhere to run HTTP requests and tokio timers. This module owns a
//! lazily created process-wide runtime for them.
//!
//! ## Pattern
//!
//! ```text
//! sync caller
//!       │
//!       ▼
//! block_on(async { load_json(..).await })
//!       │
//!       ▼
//! tokio::Runtime (process-wide)
//! ```

use std::future::Future;
use std::sync::OnceLock;
use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("assetflow-rt")
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Block on a future synchronously (use sparingly, mainly for entry points)
///
/// **Warning**: This blocks the current thread and panics when called from
/// inside a runtime.
pub fn block_on<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    get_runtime().block_on(future)
}

/// Get a handle to the process-wide runtime
pub fn runtime_handle() -> tokio::runtime::Handle {
    get_runtime().handle().clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn test_block_on_returns_value() {
        assert_eq!(block_on(async { 21 * 2 }), 42);
    }

    #[test]
    fn test_handle_spawns_on_shared_runtime() {
        let flag = Arc::new(AtomicBool::new(false));
        let flag_clone = flag.clone();

        let join = runtime_handle().spawn(async move {
            flag_clone.store(true, Ordering::SeqCst);
        });
        block_on(join).expect("task completes");

        assert!(flag.load(Ordering::SeqCst));
    }
}
