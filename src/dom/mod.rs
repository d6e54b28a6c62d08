//! Dom: the host document as seen by the behaviors
//!
//! The behaviors never talk to a browser directly. They read and write
//! through this trait, which has two implementations:
//! - `MemoryDom` (feature `native`): in-memory document for tests
//! - `WebDom` (feature `wasm`): `web-sys` over the live page
//!
//! Nodes are opaque handles. Equality must mean "same element".

#[cfg(any(test, feature = "native"))]
mod memory;
#[cfg(any(test, feature = "native"))]
mod selector;

#[cfg(any(test, feature = "native"))]
pub use memory::{ElementSpec, MemoryDom, NodeId};
#[cfg(any(test, feature = "native"))]
pub use selector::{Selector, SelectorError};

use std::fmt::Debug;

pub trait Dom {
    type Node: Clone + PartialEq + Debug;

    // Lookup
    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    /// True if `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    // Attributes and text
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
    fn text(&self, node: &Self::Node) -> String;
    fn set_text(&mut self, node: &Self::Node, text: &str);

    // Classes
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&mut self, node: &Self::Node, class: &str);
    fn remove_class(&mut self, node: &Self::Node, class: &str);
    /// Flip `class` and return whether it is now present.
    fn toggle_class(&mut self, node: &Self::Node, class: &str) -> bool;

    // Presentation and input state
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);
    fn set_disabled(&mut self, node: &Self::Node, disabled: bool);
    fn focus(&mut self, node: &Self::Node);

    // Geometry and scrolling
    fn offset_top(&self, node: &Self::Node) -> f64;
    fn offset_height(&self, node: &Self::Node) -> f64;
    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&mut self, top: f64);

    /// Whether the host can deliver viewport intersection callbacks.
    fn supports_intersection_observer(&self) -> bool;
}

/// Keys the behaviors react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}
