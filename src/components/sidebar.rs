//! Sidebar Collapse Toggle
//!
//! Collapsed / expanded state restored from storage on page load and
//! persisted on every toggle.

use std::sync::Arc;

use super::dom::{ClickEvent, Document, DomTree, ElementId, ListenerTarget};
use crate::constants::{
    COLLAPSED_CLASS, HEADER_CLASS, MAIN_CONTENT_CLASS, SIDEBAR_CLASS, SIDEBAR_COLLAPSED_CLASS,
    SIDEBAR_COLLAPSED_KEY, SIDEBAR_TOGGLE_CLASS,
};
use crate::services::storage::KeyValueStore;

/// Sidebar layout state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarState {
    #[default]
    Expanded,
    Collapsed,
}

impl SidebarState {
    /// Only the exact stored string `"true"` means collapsed
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("true") => SidebarState::Collapsed,
            _ => SidebarState::Expanded,
        }
    }

    pub fn as_stored(&self) -> &'static str {
        match self {
            SidebarState::Expanded => "false",
            SidebarState::Collapsed => "true",
        }
    }

    pub fn is_collapsed(&self) -> bool {
        *self == SidebarState::Collapsed
    }
}

/// Read the persisted sidebar state
pub fn stored_sidebar_state(store: &dyn KeyValueStore) -> SidebarState {
    SidebarState::from_stored(store.get_item(SIDEBAR_COLLAPSED_KEY).as_deref())
}

/// Elements whose classes follow the sidebar state
#[derive(Debug, Clone, Copy)]
struct SidebarParts {
    sidebar: ElementId,
    main_content: Option<ElementId>,
    header: Option<ElementId>,
}

impl SidebarParts {
    fn add_collapsed(&self, tree: &mut DomTree) {
        tree.add_class(self.sidebar, COLLAPSED_CLASS);
        if let Some(main) = self.main_content {
            tree.add_class(main, SIDEBAR_COLLAPSED_CLASS);
        }
        if let Some(header) = self.header {
            tree.add_class(header, COLLAPSED_CLASS);
        }
    }

    fn toggle(&self, tree: &mut DomTree) -> SidebarState {
        tree.toggle_class(self.sidebar, COLLAPSED_CLASS);
        if let Some(main) = self.main_content {
            tree.toggle_class(main, SIDEBAR_COLLAPSED_CLASS);
        }
        if let Some(header) = self.header {
            tree.toggle_class(header, COLLAPSED_CLASS);
        }

        if tree.has_class(self.sidebar, COLLAPSED_CLASS) {
            SidebarState::Collapsed
        } else {
            SidebarState::Expanded
        }
    }
}

/// Restore the stored sidebar state and wire the toggle control.
///
/// Returns `false` without touching anything when `.sidebar-toggle` or
/// `.sidebar` is missing; `.main-content` and `.header` are optional.
pub fn init_sidebar_toggle(document: &mut Document, store: Arc<dyn KeyValueStore>) -> bool {
    let tree = document.tree();
    let (Some(toggle), Some(sidebar)) = (
        tree.query_selector(SIDEBAR_TOGGLE_CLASS),
        tree.query_selector(SIDEBAR_CLASS),
    ) else {
        tracing::debug!("Sidebar toggle not present, skipping");
        return false;
    };

    let parts = SidebarParts {
        sidebar,
        main_content: tree.query_selector(MAIN_CONTENT_CLASS),
        header: tree.query_selector(HEADER_CLASS),
    };

    if stored_sidebar_state(store.as_ref()).is_collapsed() {
        parts.add_collapsed(document.tree_mut());
    }

    document.add_click_listener(
        ListenerTarget::Element(toggle),
        Box::new(move |tree: &mut DomTree, _: &ClickEvent| {
            let state = parts.toggle(tree);
            if let Err(e) = store.set_item(SIDEBAR_COLLAPSED_KEY, state.as_stored()) {
                tracing::warn!(error = %e, "Failed to persist sidebar state");
            }
        }),
    );

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::services::storage::MemoryStore;

    struct Page {
        document: Document,
        toggle: ElementId,
        sidebar: ElementId,
        main: ElementId,
        header: ElementId,
    }

    fn page() -> Page {
        let mut document = Document::new(1440.0);
        let tree = document.tree_mut();
        let body = tree.body();
        let header = tree.append_new(body, "header", "header");
        let toggle = tree.append_new(header, "button", "sidebar-toggle");
        let sidebar = tree.append_new(body, "aside", "sidebar");
        let main = tree.append_new(body, "main", "main-content");
        Page {
            document,
            toggle,
            sidebar,
            main,
            header,
        }
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get_item(&self, _key: &str) -> Option<String> {
            None
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage {
                message: "quota exceeded".to_string(),
            })
        }

        fn remove_item(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_state_parsing() {
        assert_eq!(SidebarState::from_stored(Some("true")), SidebarState::Collapsed);
        assert_eq!(SidebarState::from_stored(Some("false")), SidebarState::Expanded);
        assert_eq!(SidebarState::from_stored(Some("TRUE")), SidebarState::Expanded);
        assert_eq!(SidebarState::from_stored(Some("1")), SidebarState::Expanded);
        assert_eq!(SidebarState::from_stored(None), SidebarState::Expanded);
    }

    #[test]
    fn test_toggle_updates_classes_and_storage() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut p = page();
        assert!(init_sidebar_toggle(&mut p.document, store.clone()));
        assert!(!p.document.tree().has_class(p.sidebar, "collapsed"));

        p.document.click(p.toggle);
        let tree = p.document.tree();
        assert!(tree.has_class(p.sidebar, "collapsed"));
        assert!(tree.has_class(p.main, "sidebar-collapsed"));
        assert!(tree.has_class(p.header, "collapsed"));
        assert_eq!(store.get_item("sidebarCollapsed").as_deref(), Some("true"));

        p.document.click(p.toggle);
        assert!(!p.document.tree().has_class(p.sidebar, "collapsed"));
        assert!(!p.document.tree().has_class(p.main, "sidebar-collapsed"));
        assert_eq!(store.get_item("sidebarCollapsed").as_deref(), Some("false"));
    }

    #[test]
    fn test_state_survives_fresh_load() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

        let mut first = page();
        init_sidebar_toggle(&mut first.document, store.clone());
        first.document.click(first.toggle);

        let mut reloaded = page();
        init_sidebar_toggle(&mut reloaded.document, store.clone());
        let tree = reloaded.document.tree();
        assert!(tree.has_class(reloaded.sidebar, "collapsed"));
        assert!(tree.has_class(reloaded.main, "sidebar-collapsed"));
        assert!(tree.has_class(reloaded.header, "collapsed"));

        reloaded.document.click(reloaded.toggle);
        let mut again = page();
        init_sidebar_toggle(&mut again.document, store);
        assert!(!again.document.tree().has_class(again.sidebar, "collapsed"));
    }

    #[test]
    fn test_optional_parts_may_be_missing() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.set_item("sidebarCollapsed", "true").expect("set");

        let mut document = Document::new(1440.0);
        let tree = document.tree_mut();
        let body = tree.body();
        let sidebar = tree.append_new(body, "aside", "sidebar");
        let toggle = tree.append_new(sidebar, "button", "sidebar-toggle");

        assert!(init_sidebar_toggle(&mut document, store.clone()));
        assert!(document.tree().has_class(sidebar, "collapsed"));

        document.click(toggle);
        assert!(!document.tree().has_class(sidebar, "collapsed"));
        assert_eq!(store.get_item("sidebarCollapsed").as_deref(), Some("false"));
    }

    #[test]
    fn test_missing_toggle_is_noop() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.set_item("sidebarCollapsed", "true").expect("set");

        let mut document = Document::new(1440.0);
        let tree = document.tree_mut();
        let body = tree.body();
        let sidebar = tree.append_new(body, "aside", "sidebar");

        assert!(!init_sidebar_toggle(&mut document, store));
        assert!(!document.tree().has_class(sidebar, "collapsed"));
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn test_storage_failure_does_not_block_toggle() {
        let mut p = page();
        init_sidebar_toggle(&mut p.document, Arc::new(FailingStore));

        p.document.click(p.toggle);
        assert!(p.document.tree().has_class(p.sidebar, "collapsed"));
    }
}
