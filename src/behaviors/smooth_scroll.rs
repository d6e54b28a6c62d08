//! In-page anchor navigation with a header-aware smooth scroll.

use crate::dom::Dom;

#[derive(Debug, Clone)]
pub struct SmoothScroll {
    margin_px: f64,
}

impl SmoothScroll {
    pub fn new(margin_px: f64) -> Self {
        Self { margin_px }
    }

    /// Scroll destination for a target at `offset_top` under a header of
    /// `header_height`.
    pub fn destination(&self, offset_top: f64, header_height: f64) -> f64 {
        offset_top - header_height - self.margin_px
    }

    /// Handle a click on an in-page `anchor`. Returns the scroll
    /// destination, if any.
    pub fn on_click<D: Dom>(&self, dom: &mut D, anchor: &D::Node, header: Option<&D::Node>) -> Option<f64> {
        let href = dom.attribute(anchor, "href")?;
        let id = fragment_id(&href)?;
        let Some(target) = dom.element_by_id(id) else {
            tracing::debug!(id, "anchor target missing");
            return None;
        };
        let header_height = header.map(|h| dom.offset_height(h)).unwrap_or(0.0);
        let top = self.destination(dom.offset_top(&target), header_height);
        dom.smooth_scroll_to(top);
        tracing::debug!(id, top, "smooth scroll");
        Some(top)
    }
}

/// `"#about"` → `Some("about")`; bare `"#"` and non-fragments → `None`.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments() {
        assert_eq!(fragment_id("#about"), Some("about"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/about"), None);
    }

    #[test]
    fn destination_subtracts_header_and_margin() {
        let router = SmoothScroll::new(20.0);
        assert_eq!(router.destination(900.0, 80.0), 800.0);
        assert_eq!(router.destination(50.0, 80.0), -50.0);
    }
}
