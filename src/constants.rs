//! UI Constants
//!
//! Centralized constants shared by the formatters, lookups and page wiring.

/// Placeholder shown for absent dates and amounts
pub const NOT_AVAILABLE: &str = "N/A";

/// Output of the date formatter for unparseable input
pub const INVALID_DATE: &str = "Invalid Date";

/// Glyph returned for device types missing from the icon table
pub const DEFAULT_DEVICE_ICON: &str = "📦";

/// Vietnamese dong symbol
pub const VND_SYMBOL: &str = "₫";

/// Storage key holding the sidebar collapsed flag (`"true"` / `"false"`)
pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";

/// Viewport width at or below which outside clicks close the mobile menu
pub const MOBILE_BREAKPOINT: f32 = 1024.0;

/// Toast timings
pub const TOAST_DISPLAY_MS: u64 = 3000;
pub const TOAST_FADE_MS: u64 = 300;

/// Document class hooks
pub const SIDEBAR_TOGGLE_CLASS: &str = "sidebar-toggle";
pub const SIDEBAR_CLASS: &str = "sidebar";
pub const MAIN_CONTENT_CLASS: &str = "main-content";
pub const HEADER_CLASS: &str = "header";
pub const MOBILE_MENU_TOGGLE_CLASS: &str = "mobile-menu-toggle";

/// State classes applied by the initializers
pub const COLLAPSED_CLASS: &str = "collapsed";
pub const SIDEBAR_COLLAPSED_CLASS: &str = "sidebar-collapsed";
pub const OPEN_CLASS: &str = "open";

/// Default asset list endpoint for the CLI
pub const DEFAULT_ASSETS_URL: &str = "http://localhost:8080/data/assets.json";

/// File names in the platform directories
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const STORAGE_FILE_NAME: &str = "local_storage.json";
pub const LOG_FILE_PREFIX: &str = "assetflow-ui.log";
