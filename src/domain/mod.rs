//! Domain - Lookup Tables, Records and Configuration

pub mod asset;
pub mod config;
pub mod device;
pub mod status;

pub use asset::{AssetRecord, AssetRow};
pub use config::AppConfig;
pub use device::{DeviceType, device_icon};
pub use status::{AssetStatus, status_display_name};
