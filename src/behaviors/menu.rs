//! Mobile navigation toggle.

use crate::dom::Dom;
use crate::page::MenuParts;

const EXPANDED: &str = "aria-expanded";

#[derive(Debug, Clone)]
pub struct MobileMenu {
    class: String,
}

impl MobileMenu {
    pub fn new(active_class: &str) -> Self {
        Self { class: active_class.to_string() }
    }

    /// Flip the menu and mirror the new state into `aria-expanded`.
    pub fn toggle<D: Dom>(&self, dom: &mut D, parts: &MenuParts<D::Node>) -> bool {
        let open = dom.toggle_class(&parts.nav_links, &self.class);
        dom.set_attribute(&parts.toggle, EXPANDED, if open { "true" } else { "false" });
        tracing::debug!(open, "menu toggled");
        open
    }

    pub fn close<D: Dom>(&self, dom: &mut D, parts: &MenuParts<D::Node>) {
        dom.remove_class(&parts.nav_links, &self.class);
        dom.set_attribute(&parts.toggle, EXPANDED, "false");
    }

    /// Document-level click: close unless it landed in the menu or the toggle.
    pub fn outside_click<D: Dom>(&self, dom: &mut D, parts: &MenuParts<D::Node>, target: &D::Node) {
        if dom.contains(&parts.nav_links, target) || dom.contains(&parts.toggle, target) {
            return;
        }
        self.close(dom, parts);
    }
}
