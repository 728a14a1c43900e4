//! App - Entry Point Wiring and Logging

pub mod application;
pub mod logging;
