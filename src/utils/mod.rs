//! Utils - Formatting and File Storage

pub mod config_store;
pub mod format;
