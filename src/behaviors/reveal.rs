//! One-shot fade-in for elements entering the viewport.

use crate::config::SiteConfig;
use crate::dom::Dom;
use crate::schedule::Observation;

#[derive(Debug, Clone)]
pub struct ScrollReveal {
    revealed: Vec<bool>,
    class: String,
}

impl ScrollReveal {
    pub fn new(config: &SiteConfig, targets: usize) -> Self {
        Self { revealed: vec![false; targets], class: config.classes.revealed.clone() }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Intersection callback for `targets[index]`.
    pub fn on_intersect<D: Dom>(
        &mut self,
        dom: &mut D,
        targets: &[D::Node],
        index: usize,
        intersecting: bool,
    ) -> Observation {
        let Some(node) = targets.get(index) else {
            return Observation::Unobserve;
        };
        if self.is_revealed(index) {
            return Observation::Unobserve;
        }
        if !intersecting {
            return Observation::Keep;
        }
        dom.add_class(node, &self.class);
        if let Some(flag) = self.revealed.get_mut(index) {
            *flag = true;
        }
        tracing::debug!(index, "revealed");
        Observation::Unobserve
    }
}
