//! Deferred image loading.

use crate::dom::Dom;
use crate::schedule::Observation;

const DEFERRED_SRC: &str = "data-src";

#[derive(Debug, Clone)]
pub struct LazyImages {
    loaded: Vec<bool>,
    lazy_class: String,
}

impl LazyImages {
    pub fn new(lazy_class: &str, images: usize) -> Self {
        Self { loaded: vec![false; images], lazy_class: lazy_class.to_string() }
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.loaded.get(index).copied().unwrap_or(false)
    }

    pub fn on_intersect<D: Dom>(&mut self, dom: &mut D, images: &[D::Node], index: usize, intersecting: bool) -> Observation {
        if self.is_loaded(index) || index >= images.len() {
            return Observation::Unobserve;
        }
        if !intersecting {
            return Observation::Keep;
        }
        self.load(dom, images, index);
        Observation::Unobserve
    }

    /// Eager path for hosts without intersection observation.
    pub fn load_all<D: Dom>(&mut self, dom: &mut D, images: &[D::Node]) {
        for index in 0..images.len() {
            self.load(dom, images, index);
        }
        tracing::debug!(count = images.len(), "images loaded eagerly");
    }

    fn load<D: Dom>(&mut self, dom: &mut D, images: &[D::Node], index: usize) {
        let (Some(img), Some(loaded)) = (images.get(index), self.loaded.get_mut(index)) else {
            return;
        };
        if *loaded {
            return;
        }
        if let Some(src) = dom.attribute(img, DEFERRED_SRC) {
            dom.set_attribute(img, "src", &src);
        }
        dom.remove_class(img, &self.lazy_class);
        *loaded = true;
    }
}
