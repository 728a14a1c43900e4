//! Services - Platform Capabilities
//!
//! HTTP fetch, persisted key-value storage and timers, each behind a trait so
//! the helpers run the same against real and simulated backends.

pub mod http;
pub mod loader;
pub mod runtime;
pub mod scheduler;
pub mod storage;

pub use http::{HttpFetch, ReqwestFetcher};
pub use loader::{load_json, load_json_list};
pub use scheduler::{ManualScheduler, Scheduler, TimerId, TimerTask, TokioScheduler};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
