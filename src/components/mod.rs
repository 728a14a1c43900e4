//! Components - Document Model and Page Widgets

pub mod dom;
pub mod mobile_menu;
pub mod sidebar;
pub mod toast;

use std::sync::Arc;

use crate::domain::config::UiConfig;
use crate::services::storage::KeyValueStore;

pub use dom::{ClickEvent, Document, DomTree, ElementId, ListenerTarget, SharedDocument};
pub use mobile_menu::{init_mobile_menu, init_mobile_menu_with_breakpoint};
pub use sidebar::{SidebarState, init_sidebar_toggle, stored_sidebar_state};
pub use toast::{ToastKind, ToastNotifier, ToastTimings, show_toast, show_toast_with};

/// Which page widgets were wired by [`init_page`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageWidgets {
    pub sidebar_toggle: bool,
    pub mobile_menu: bool,
}

/// Page-load hook: wire the sidebar toggle and the mobile menu
pub fn init_page(document: &mut Document, store: Arc<dyn KeyValueStore>) -> PageWidgets {
    init_page_with_config(document, store, &UiConfig::default())
}

/// [`init_page`] with the mobile breakpoint taken from `ui`
pub fn init_page_with_config(
    document: &mut Document,
    store: Arc<dyn KeyValueStore>,
    ui: &UiConfig,
) -> PageWidgets {
    let widgets = PageWidgets {
        sidebar_toggle: init_sidebar_toggle(document, store),
        mobile_menu: init_mobile_menu_with_breakpoint(document, ui.mobile_breakpoint),
    };
    tracing::debug!(?widgets, breakpoint = ui.mobile_breakpoint, "Page initialized");
    widgets
}
