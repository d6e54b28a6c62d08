//! Header background and shadow that follow the scroll position.

use crate::config::HeaderStyle;
use crate::dom::Dom;

#[derive(Debug, Clone)]
pub struct HeaderStyler {
    style: HeaderStyle,
}

impl HeaderStyler {
    pub fn new(style: HeaderStyle) -> Self {
        Self { style }
    }

    /// Strictly past the threshold counts as scrolled.
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.style.threshold_px
    }

    /// Re-evaluate on a scroll tick. Returns whether the active style applies.
    pub fn apply<D: Dom>(&self, dom: &mut D, header: &D::Node) -> bool {
        let scrolled = self.is_scrolled(dom.scroll_y());
        let (background, shadow) = if scrolled {
            (&self.style.active_background, &self.style.active_shadow)
        } else {
            (&self.style.default_background, &self.style.default_shadow)
        };
        dom.set_style(header, "background", background);
        dom.set_style(header, "box-shadow", shadow);
        scrolled
    }
}
