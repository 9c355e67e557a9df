//! Rendering collaborator contract and an in-memory implementation.
//!
//! # Responsibility
//! - Define what the core asks of a renderer: attach nodes, swap list
//!   children, toggle classes, raise blocking alerts.
//! - Provide `MemorySurface` for tests and the terminal shim.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use std::rc::Rc;

/// Shared handle to the renderer used by every component of one board.
pub type SharedSurface = Rc<RefCell<dyn RenderSurface>>;

/// Where a mounted node lands inside its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    AtStart,
    AtEnd,
}

/// Template a node is instantiated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Project submission form.
    Form,
    /// Status list section with a heading.
    ListSection,
    /// Item container inside a list section.
    ListBody,
    /// One project card.
    Card,
}

/// Renderer-agnostic node description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub kind: ElementKind,
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub body: Option<String>,
    pub draggable: bool,
}

impl Element {
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            heading: None,
            subheading: None,
            body: None,
            draggable: false,
        }
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn with_subheading(mut self, subheading: impl Into<String>) -> Self {
        self.subheading = Some(subheading.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn draggable(mut self) -> Self {
        self.draggable = true;
        self
    }
}

/// External renderer driven by the core.
pub trait RenderSurface {
    /// Attaches `element` under `host_id`.
    fn mount(&mut self, host_id: &str, element: Element, position: InsertPosition);
    /// Replaces every child of `parent_id` with `children`, in order.
    fn replace_children(&mut self, parent_id: &str, children: Vec<Element>);
    fn set_class(&mut self, element_id: &str, class: &str, enabled: bool);
    /// Blocking user-facing message.
    fn alert(&mut self, message: &str);
}

#[derive(Debug)]
struct Node {
    element: Element,
    classes: BTreeSet<String>,
}

/// Element tree kept in memory; hosts are created on first use.
#[derive(Debug, Default)]
pub struct MemorySurface {
    nodes: BTreeMap<String, Node>,
    children: BTreeMap<String, Vec<String>>,
    alerts: Vec<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.nodes.get(id).map(|node| &node.element)
    }

    pub fn children_of(&self, id: &str) -> Vec<&Element> {
        self.children
            .get(id)
            .map(|ids| ids.iter().filter_map(|child| self.element(child)).collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|node| node.classes.contains(class))
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    /// Plain-text outline of the tree under `root_id`.
    pub fn render_text(&self, root_id: &str) -> String {
        let mut out = String::new();
        self.write_subtree(&mut out, root_id, 0);
        out
    }

    fn write_subtree(&self, out: &mut String, id: &str, depth: usize) {
        for child in self.children.get(id).into_iter().flatten() {
            let Some(node) = self.nodes.get(child) else {
                continue;
            };
            let indent = "  ".repeat(depth);
            let element = &node.element;
            let label = element.heading.as_deref().unwrap_or(element.id.as_str());
            let marker = if node.classes.contains("droppable") {
                " [droppable]"
            } else {
                ""
            };
            let _ = writeln!(out, "{indent}{label}{marker}");
            if let Some(subheading) = &element.subheading {
                let _ = writeln!(out, "{indent}  {subheading}");
            }
            if let Some(body) = &element.body {
                let _ = writeln!(out, "{indent}  {body}");
            }
            if element.kind == ElementKind::Card {
                let _ = writeln!(out, "{indent}  id: {}", element.id);
            }
            self.write_subtree(out, child, depth + 1);
        }
    }

    fn remove_subtree(&mut self, id: &str) {
        if let Some(children) = self.children.remove(id) {
            for child in children {
                self.remove_subtree(&child);
            }
        }
        self.nodes.remove(id);
    }
}

impl RenderSurface for MemorySurface {
    fn mount(&mut self, host_id: &str, element: Element, position: InsertPosition) {
        let id = element.id.clone();
        self.remove_subtree(&id);
        for siblings in self.children.values_mut() {
            siblings.retain(|existing| existing != &id);
        }
        self.nodes.insert(
            id.clone(),
            Node {
                element,
                classes: BTreeSet::new(),
            },
        );
        let siblings = self.children.entry(host_id.to_string()).or_default();
        match position {
            InsertPosition::AtStart => siblings.insert(0, id),
            InsertPosition::AtEnd => siblings.push(id),
        }
    }

    fn replace_children(&mut self, parent_id: &str, children: Vec<Element>) {
        if let Some(previous) = self.children.remove(parent_id) {
            for child in previous {
                self.remove_subtree(&child);
            }
        }
        for child in children {
            self.mount(parent_id, child, InsertPosition::AtEnd);
        }
    }

    fn set_class(&mut self, element_id: &str, class: &str, enabled: bool) {
        let Some(node) = self.nodes.get_mut(element_id) else {
            return;
        };
        if enabled {
            node.classes.insert(class.to_string());
        } else {
            node.classes.remove(class);
        }
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
