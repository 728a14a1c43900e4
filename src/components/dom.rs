//! Document Model
//!
//! A minimal element tree with the operations the page helpers need: class
//! lookup, class lists, inline style, text, containment and click dispatch.
//! Clicks bubble from the target through its ancestors, then reach
//! document-level listeners.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Handle of an element inside a [`DomTree`].
///
/// Slots freed by [`DomTree::remove`] are reused, but each reuse bumps the
/// slot generation, so a handle to a removed element never resolves again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    style: Vec<(String, String)>,
    text: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Element storage and queries
#[derive(Debug, Clone)]
pub struct DomTree {
    slots: Vec<Slot>,
    free: Vec<usize>,
    body: ElementId,
    viewport_width: f32,
}

impl DomTree {
    /// Create a tree holding only `<body>`
    pub fn new(viewport_width: f32) -> Self {
        let body = Node {
            tag: "body".to_string(),
            ..Node::default()
        };
        Self {
            slots: vec![Slot {
                generation: 0,
                node: Some(body),
            }],
            free: Vec::new(),
            body: ElementId {
                index: 0,
                generation: 0,
            },
            viewport_width,
        }
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    fn node(&self, id: ElementId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        let node = Node {
            tag: tag.to_string(),
            ..Node::default()
        };

        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.generation = slot.generation.wrapping_add(1);
                slot.node = Some(node);
                ElementId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                ElementId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        }
    }

    /// Create an element with `class_name` and append it to `parent`
    pub fn append_new(&mut self, parent: ElementId, tag: &str, class_name: &str) -> ElementId {
        let id = self.create_element(tag);
        self.set_class_name(id, class_name);
        self.append_child(parent, id);
        id
    }

    /// Move `child` under `parent`. Refuses moves that would create a cycle.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> bool {
        if !self.exists(parent) || !self.exists(child) || self.contains(child, parent) {
            return false;
        }

        self.detach(child);
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
        true
    }

    fn detach(&mut self, id: ElementId) {
        let parent = self.node_mut(id).and_then(|node| node.parent.take());
        if let Some(parent) = parent.and_then(|p| self.node_mut(p)) {
            parent.children.retain(|c| *c != id);
        }
    }

    /// Remove an element and its descendants, freeing their slots. Removing
    /// `<body>` or an already removed element does nothing.
    pub fn remove(&mut self, id: ElementId) {
        if id == self.body || !self.exists(id) {
            return;
        }

        self.detach(id);
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let taken = self
                .slots
                .get_mut(current.index)
                .filter(|slot| slot.generation == current.generation)
                .and_then(|slot| slot.node.take());
            if let Some(node) = taken {
                self.free.push(current.index);
                stack.extend(node.children);
            }
        }
    }

    pub fn exists(&self, id: ElementId) -> bool {
        self.node(id).is_some()
    }

    /// Whether the element is attached under `<body>`
    pub fn is_connected(&self, id: ElementId) -> bool {
        self.contains(self.body, id)
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node(id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.node(id).map(|node| node.children.as_slice()).unwrap_or_default()
    }

    pub fn tag(&self, id: ElementId) -> Option<&str> {
        self.node(id).map(|node| node.tag.as_str())
    }

    /// Inclusive: an element contains itself
    pub fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if !self.exists(id) {
                return false;
            }
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// First attached element carrying `class`, in document order
    pub fn query_selector(&self, class: &str) -> Option<ElementId> {
        self.descendants().into_iter().find(|id| self.has_class(*id, class))
    }

    /// Every attached element carrying `class`, in document order
    pub fn query_selector_all(&self, class: &str) -> Vec<ElementId> {
        self.descendants()
            .into_iter()
            .filter(|id| self.has_class(*id, class))
            .collect()
    }

    /// Pre-order walk below `<body>`
    fn descendants(&self) -> Vec<ElementId> {
        let mut order = Vec::new();
        let mut stack: Vec<ElementId> = self.children(self.body).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        order
    }

    // ==================== Class list ====================

    pub fn classes(&self, id: ElementId) -> &[String] {
        self.node(id).map(|node| node.classes.as_slice()).unwrap_or_default()
    }

    pub fn class_name(&self, id: ElementId) -> String {
        self.classes(id).join(" ")
    }

    /// Replace the class list with the whitespace-separated `class_name`
    pub fn set_class_name(&mut self, id: ElementId, class_name: &str) {
        if let Some(node) = self.node_mut(id) {
            node.classes.clear();
            for class in class_name.split_whitespace() {
                if !node.classes.iter().any(|c| c == class) {
                    node.classes.push(class.to_string());
                }
            }
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.classes(id).iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(node) = self.node_mut(id) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(node) = self.node_mut(id) {
            node.classes.retain(|c| c != class);
        }
    }

    /// Flip `class`; returns whether it is present afterwards
    pub fn toggle_class(&mut self, id: ElementId, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            self.has_class(id, class)
        }
    }

    // ==================== Text and style ====================

    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.node(id).map(|node| node.text.as_str())
    }

    pub fn set_text(&mut self, id: ElementId, text: &str) {
        if let Some(node) = self.node_mut(id) {
            node.text = text.to_string();
        }
    }

    pub fn style(&self, id: ElementId, property: &str) -> Option<&str> {
        self.node(id)?
            .style
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Set one inline style property, keeping declaration order
    pub fn set_style(&mut self, id: ElementId, property: &str, value: &str) {
        if let Some(node) = self.node_mut(id) {
            match node.style.iter_mut().find(|(p, _)| p == property) {
                Some(entry) => entry.1 = value.to_string(),
                None => node.style.push((property.to_string(), value.to_string())),
            }
        }
    }

    /// Inline style rendered as CSS text
    pub fn style_text(&self, id: ElementId) -> String {
        self.node(id)
            .map(|node| {
                node.style
                    .iter()
                    .map(|(p, v)| format!("{p}: {v};"))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default()
    }
}

/// A click delivered to listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub target: ElementId,
}

/// Where a listener is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerTarget {
    Document,
    Element(ElementId),
}

pub type ClickListener = Box<dyn FnMut(&mut DomTree, &ClickEvent) + Send>;

/// Element tree plus click listeners
pub struct Document {
    tree: DomTree,
    listeners: Vec<(ListenerTarget, ClickListener)>,
}

/// Document shared with timer callbacks
pub type SharedDocument = Arc<Mutex<Document>>;

/// Lock a shared document, recovering from a poisoned lock
pub fn lock_document(document: &SharedDocument) -> MutexGuard<'_, Document> {
    document.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Document {
    pub fn new(viewport_width: f32) -> Self {
        Self::from_tree(DomTree::new(viewport_width))
    }

    pub fn from_tree(tree: DomTree) -> Self {
        Self {
            tree,
            listeners: Vec::new(),
        }
    }

    pub fn into_shared(self) -> SharedDocument {
        Arc::new(Mutex::new(self))
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    pub fn add_click_listener(&mut self, target: ListenerTarget, listener: ClickListener) {
        self.listeners.push((target, listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Dispatch a click on `target`: the target's listeners first, then each
    /// ancestor's, then document listeners; registration order within a node.
    pub fn click(&mut self, target: ElementId) {
        let event = ClickEvent { target };

        let mut path = Vec::new();
        let mut current = self.tree.exists(target).then_some(target);
        while let Some(id) = current {
            path.push(ListenerTarget::Element(id));
            current = self.tree.parent(id);
        }
        path.push(ListenerTarget::Document);

        let mut listeners = std::mem::take(&mut self.listeners);
        for hop in &path {
            for (attached, listener) in listeners.iter_mut() {
                if attached == hop {
                    listener(&mut self.tree, &event);
                }
            }
        }
        listeners.append(&mut self.listeners);
        self.listeners = listeners;
    }
}
