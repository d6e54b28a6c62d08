//! MemoryDom: in-memory document for native tests
//!
//! A flat arena of elements rooted at `<html><body>`. Queries walk from the
//! root in document order, so detached nodes never match. Geometry is
//! whatever the test sets; there is no layout.

use super::selector::{Matchable, Selector};
use super::Dom;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Builder for an element appended with [`MemoryDom::append`].
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: String,
    offset_top: f64,
    offset_height: f64,
}

impl ElementSpec {
    pub fn new(tag: &str) -> Self {
        Self { tag: tag.to_ascii_lowercase(), ..Default::default() }
    }
    pub fn id(self, id: &str) -> Self { self.attr("id", id) }
    pub fn class(mut self, class: &str) -> Self { self.classes.push(class.to_string()); self }
    pub fn attr(mut self, name: &str, value: &str) -> Self { self.attrs.insert(name.to_string(), value.to_string()); self }
    pub fn text(mut self, text: &str) -> Self { self.text = text.to_string(); self }
    pub fn offset(mut self, top: f64, height: f64) -> Self { self.offset_top = top; self.offset_height = height; self }
}

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: String,
    styles: BTreeMap<String, String>,
    disabled: bool,
    offset_top: f64,
    offset_height: f64,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Matchable for Element {
    fn tag(&self) -> &str { &self.tag }
    fn attr(&self, name: &str) -> Option<&str> { self.attrs.get(name).map(String::as_str) }
    fn has_class(&self, class: &str) -> bool { self.classes.iter().any(|c| c == class) }
}

#[derive(Debug, Clone)]
pub struct MemoryDom {
    elements: Vec<Element>,
    root: NodeId,
    body: NodeId,
    focused: Option<NodeId>,
    scroll_y: f64,
    scroll_requests: Vec<f64>,
    intersection_observer: bool,
}

impl Default for MemoryDom {
    fn default() -> Self { Self::new() }
}

impl MemoryDom {
    pub fn new() -> Self {
        let mut dom = Self {
            elements: Vec::new(),
            root: NodeId(0),
            body: NodeId(0),
            focused: None,
            scroll_y: 0.0,
            scroll_requests: Vec::new(),
            intersection_observer: true,
        };
        dom.root = dom.insert(None, ElementSpec::new("html"));
        dom.body = dom.insert(Some(dom.root), ElementSpec::new("body"));
        dom
    }

    pub fn body(&self) -> NodeId { self.body }

    /// Append a child element and return its handle.
    pub fn append(&mut self, parent: NodeId, spec: ElementSpec) -> NodeId {
        self.insert(Some(parent), spec)
    }

    fn insert(&mut self, parent: Option<NodeId>, spec: ElementSpec) -> NodeId {
        let id = NodeId(self.elements.len());
        self.elements.push(Element {
            tag: spec.tag,
            classes: spec.classes,
            attrs: spec.attrs,
            text: spec.text,
            styles: BTreeMap::new(),
            disabled: false,
            offset_top: spec.offset_top,
            offset_height: spec.offset_height,
            parent,
            children: Vec::new(),
        });
        if let Some(p) = parent {
            self.elements[p.0].children.push(id);
        }
        id
    }

    fn el(&self, node: &NodeId) -> &Element { &self.elements[node.0] }
    fn el_mut(&mut self, node: &NodeId) -> &mut Element { &mut self.elements[node.0] }

    // Inspection helpers for tests

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.el(&node).styles.get(property).map(String::as_str)
    }
    pub fn is_disabled(&self, node: NodeId) -> bool { self.el(&node).disabled }
    pub fn focused(&self) -> Option<NodeId> { self.focused }
    pub fn classes(&self, node: NodeId) -> &[String] { &self.el(&node).classes }
    pub fn scroll_requests(&self) -> &[f64] { &self.scroll_requests }
    pub fn set_scroll_y(&mut self, y: f64) { self.scroll_y = y; }
    pub fn set_intersection_observer_support(&mut self, supported: bool) { self.intersection_observer = supported; }

    /// Document-order walk from the root.
    fn walk(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.el(&id).children.iter().rev().copied());
        }
        out
    }

    fn ancestors(&self, node: NodeId) -> Vec<&Element> {
        let mut out = Vec::new();
        let mut cur = self.el(&node).parent;
        while let Some(p) = cur {
            out.push(self.el(&p));
            cur = self.el(&p).parent;
        }
        out
    }

    fn matching(&self, selector: &str) -> Vec<NodeId> {
        let sel = match Selector::parse(selector) {
            Ok(sel) => sel,
            Err(e) => {
                tracing::warn!(selector, error = %e, "unsupported selector");
                return Vec::new();
            }
        };
        self.walk()
            .into_iter()
            .filter(|id| sel.matches(self.el(id), self.ancestors(*id)))
            .collect()
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.matching(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.matching(selector)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.walk().into_iter().find(|n| self.el(n).attr("id") == Some(id))
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let mut cur = Some(*node);
        while let Some(n) = cur {
            if n == *ancestor {
                return true;
            }
            cur = self.el(&n).parent;
        }
        false
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.el(node).attrs.get(name).cloned()
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        self.el_mut(node).attrs.insert(name.to_string(), value.to_string());
    }

    fn text(&self, node: &NodeId) -> String {
        let el = self.el(node);
        let mut out = el.text.clone();
        for child in &el.children {
            out.push_str(&self.text(child));
        }
        out
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        let children = std::mem::take(&mut self.el_mut(node).children);
        for child in children {
            self.el_mut(&child).parent = None;
        }
        self.el_mut(node).text = text.to_string();
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        Matchable::has_class(self.el(node), class)
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.el_mut(node).classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        self.el_mut(node).classes.retain(|c| c != class);
    }

    fn toggle_class(&mut self, node: &NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        self.el_mut(node).styles.insert(property.to_string(), value.to_string());
    }

    fn set_disabled(&mut self, node: &NodeId, disabled: bool) {
        self.el_mut(node).disabled = disabled;
    }

    fn focus(&mut self, node: &NodeId) {
        self.focused = Some(*node);
    }

    fn offset_top(&self, node: &NodeId) -> f64 { self.el(node).offset_top }
    fn offset_height(&self, node: &NodeId) -> f64 { self.el(node).offset_height }
    fn scroll_y(&self) -> f64 { self.scroll_y }

    fn smooth_scroll_to(&mut self, top: f64) {
        self.scroll_requests.push(top);
        self.scroll_y = top.max(0.0);
    }

    fn supports_intersection_observer(&self) -> bool { self.intersection_observer }
}
