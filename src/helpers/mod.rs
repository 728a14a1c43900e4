//! Helper Utilities
//!
//! Common utilities used across the crate.

mod debouncer;
mod fs;

pub use debouncer::*;
pub use fs::*;
