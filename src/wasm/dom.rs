//! WebDom: the live page through `web-sys`
//!
//! DOM calls that can throw are logged to the console and otherwise
//! ignored. The behaviors are presentational and must never take the page
//! down with them.

use super::log;
use crate::dom::Dom;
use crate::error::{FolioError, FolioResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, Node, ScrollBehavior,
    ScrollToOptions, Window,
};

/// Attribute on `<html>` that may carry a JSON [`SiteConfig`](crate::SiteConfig).
pub const CONFIG_ATTRIBUTE: &str = "data-folio-config";

#[derive(Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    pub fn from_window() -> FolioResult<Self> {
        let window = web_sys::window().ok_or(FolioError::NoWindow)?;
        let document = window.document().ok_or(FolioError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window { &self.window }
    pub fn document(&self) -> &Document { &self.document }

    /// Config JSON embedded in the page, if any.
    pub fn page_config(&self) -> Option<String> {
        self.page_attribute(CONFIG_ATTRIBUTE)
    }

    /// Non-blank attribute of `<html>`.
    pub fn page_attribute(&self, name: &str) -> Option<String> {
        self.document
            .document_element()?
            .get_attribute(name)
            .filter(|raw| !raw.trim().is_empty())
    }
}

fn report(op: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log!("[folio] {} failed: {:?}", op, e);
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(e) => {
                log!("[folio] bad selector {}: {:?}", selector, e);
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                log!("[folio] bad selector {}: {:?}", selector, e);
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &Node = node;
        ancestor.contains(Some(node))
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        report("setAttribute", node.set_attribute(name, value));
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        report("classList.add", node.class_list().add_1(class));
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        report("classList.remove", node.class_list().remove_1(class));
    }

    fn toggle_class(&mut self, node: &Element, class: &str) -> bool {
        match node.class_list().toggle(class) {
            Ok(present) => present,
            Err(e) => {
                log!("[folio] classList.toggle failed: {:?}", e);
                self.has_class(node, class)
            }
        }
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            report("style.setProperty", el.style().set_property(property, value));
        }
    }

    fn set_disabled(&mut self, node: &Element, disabled: bool) {
        if let Some(button) = node.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(disabled);
        } else if disabled {
            report("setAttribute", node.set_attribute("aria-disabled", "true"));
        } else {
            report("removeAttribute", node.remove_attribute("aria-disabled"));
        }
    }

    fn focus(&mut self, node: &Element) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            report("focus", el.focus());
        }
    }

    fn offset_top(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_top()))
    }

    fn offset_height(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_height()))
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn supports_intersection_observer(&self) -> bool {
        js_sys::Reflect::has(&self.window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    }
}
