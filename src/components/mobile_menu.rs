//! Mobile Menu
//!
//! The sidebar doubles as an off-canvas menu on narrow viewports: the toggle
//! opens and closes it, and a click anywhere else closes it.

use super::dom::{ClickEvent, Document, DomTree, ListenerTarget};
use crate::constants::{MOBILE_BREAKPOINT, MOBILE_MENU_TOGGLE_CLASS, OPEN_CLASS, SIDEBAR_CLASS};

/// Wire the mobile menu with the default 1024 breakpoint
pub fn init_mobile_menu(document: &mut Document) -> bool {
    init_mobile_menu_with_breakpoint(document, MOBILE_BREAKPOINT)
}

/// Wire the mobile menu. Outside clicks close the menu only while the
/// viewport is at most `breakpoint` wide.
///
/// Returns `false` without wiring anything when `.mobile-menu-toggle` or
/// `.sidebar` is missing.
pub fn init_mobile_menu_with_breakpoint(document: &mut Document, breakpoint: f32) -> bool {
    let tree = document.tree();
    let (Some(toggle), Some(sidebar)) = (
        tree.query_selector(MOBILE_MENU_TOGGLE_CLASS),
        tree.query_selector(SIDEBAR_CLASS),
    ) else {
        tracing::debug!("Mobile menu toggle not present, skipping");
        return false;
    };

    document.add_click_listener(
        ListenerTarget::Element(toggle),
        Box::new(move |tree: &mut DomTree, _: &ClickEvent| {
            tree.toggle_class(sidebar, OPEN_CLASS);
        }),
    );

    document.add_click_listener(
        ListenerTarget::Document,
        Box::new(move |tree: &mut DomTree, event: &ClickEvent| {
            if tree.viewport_width() <= breakpoint
                && !tree.contains(sidebar, event.target)
                && !tree.contains(toggle, event.target)
                && tree.has_class(sidebar, OPEN_CLASS)
            {
                tree.remove_class(sidebar, OPEN_CLASS);
            }
        }),
    );

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::dom::ElementId;

    struct Page {
        document: Document,
        toggle: ElementId,
        icon: ElementId,
        sidebar: ElementId,
        link: ElementId,
        content: ElementId,
    }

    fn page(width: f32) -> Page {
        let mut document = Document::new(width);
        let tree = document.tree_mut();
        let body = tree.body();
        let header = tree.append_new(body, "header", "header");
        let toggle = tree.append_new(header, "button", "mobile-menu-toggle");
        let icon = tree.append_new(toggle, "span", "icon");
        let sidebar = tree.append_new(body, "aside", "sidebar");
        let link = tree.append_new(sidebar, "a", "nav-link");
        let content = tree.append_new(body, "main", "main-content");
        assert!(init_mobile_menu(&mut document));
        Page {
            document,
            toggle,
            icon,
            sidebar,
            link,
            content,
        }
    }

    fn is_open(p: &Page) -> bool {
        p.document.tree().has_class(p.sidebar, "open")
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut p = page(800.0);
        p.document.click(p.toggle);
        assert!(is_open(&p));

        // Clicking inside the toggle's own content counts as the toggle.
        p.document.click(p.icon);
        assert!(!is_open(&p));
    }

    #[test]
    fn test_outside_click_closes_on_narrow_viewport() {
        let mut p = page(1024.0);
        p.document.click(p.toggle);
        p.document.click(p.content);
        assert!(!is_open(&p));
    }

    #[test]
    fn test_click_inside_menu_keeps_it_open() {
        let mut p = page(600.0);
        p.document.click(p.toggle);
        p.document.click(p.link);
        assert!(is_open(&p));
    }

    #[test]
    fn test_outside_click_ignored_on_wide_viewport() {
        let mut p = page(1025.0);
        p.document.click(p.toggle);
        p.document.click(p.content);
        assert!(is_open(&p));

        p.document.tree_mut().set_viewport_width(900.0);
        p.document.click(p.content);
        assert!(!is_open(&p));
    }

    #[test]
    fn test_custom_breakpoint() {
        let mut document = Document::new(700.0);
        let tree = document.tree_mut();
        let body = tree.body();
        let toggle = tree.append_new(body, "button", "mobile-menu-toggle");
        let sidebar = tree.append_new(body, "aside", "sidebar");
        let content = tree.append_new(body, "main", "main-content");
        assert!(init_mobile_menu_with_breakpoint(&mut document, 640.0));

        document.click(toggle);
        document.click(content);
        assert!(document.tree().has_class(sidebar, "open"));

        document.tree_mut().set_viewport_width(640.0);
        document.click(content);
        assert!(!document.tree().has_class(sidebar, "open"));
    }

    #[test]
    fn test_missing_elements_is_noop() {
        let mut document = Document::new(600.0);
        let tree = document.tree_mut();
        let body = tree.body();
        tree.append_new(body, "aside", "sidebar");

        assert!(!init_mobile_menu(&mut document));
        assert_eq!(document.listener_count(), 0);
    }
}
