//! AssetFlow UI Library
//!
//! Presentation helpers for the AssetFlow asset management front end: JSON
//! loading with an empty-list fallback, date and dong formatting, status and
//! device icon lookups, debouncing, toast notifications, and the sidebar and
//! mobile menu wiring run at page load.
//!
//! Platform access (HTTP, persisted storage, timers, the document) goes
//! through small capability traits in [`services`] and [`components::dom`].

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod services;
pub mod utils;

pub use components::{
    init_mobile_menu, init_page, init_page_with_config, init_sidebar_toggle, show_toast, ToastKind,
};
pub use domain::{device_icon, status_display_name};
pub use helpers::{debounce, Debouncer};
pub use services::{load_json, load_json_list};
pub use utils::format::{format_currency, format_date, format_vnd};
