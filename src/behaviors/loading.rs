//! Cosmetic loading state for buttons without a real destination.
//!
//! Each button keeps a generation counter. A click bumps it and schedules a
//! restoration tagged with the new value; restorations carrying an older
//! value are dropped, so only the latest click ends the loading state.

use crate::dom::Dom;
use crate::schedule::{Deferred, Schedule};

#[derive(Debug, Clone, Default)]
struct ButtonState {
    original: Option<String>,
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct ButtonLoading {
    label: String,
    delay_ms: u32,
    states: Vec<ButtonState>,
}

/// Whether a click on a control with this `href`/`type` gets the loading
/// treatment.
pub fn wants_loading(href: Option<&str>, type_attr: Option<&str>) -> bool {
    let href = href.map(str::trim).filter(|h| !h.is_empty());
    if href.is_some_and(|h| h.contains("mailto:")) {
        return false;
    }
    matches!(href, None | Some("#")) || type_attr == Some("button")
}

impl ButtonLoading {
    pub fn new(label: &str, delay_ms: u32, buttons: usize) -> Self {
        Self {
            label: label.to_string(),
            delay_ms,
            states: vec![ButtonState::default(); buttons],
        }
    }

    pub fn is_loading(&self, index: usize) -> bool {
        self.states.get(index).is_some_and(|s| s.original.is_some())
    }

    pub fn on_click<D: Dom>(&mut self, dom: &mut D, buttons: &[D::Node], index: usize) -> Option<Schedule> {
        let button = buttons.get(index)?;
        let state = self.states.get_mut(index)?;
        let href = dom.attribute(button, "href");
        let type_attr = dom.attribute(button, "type");
        if !wants_loading(href.as_deref(), type_attr.as_deref()) {
            return None;
        }

        if state.original.is_none() {
            state.original = Some(dom.text(button));
        }
        state.generation += 1;
        dom.set_text(button, &self.label);
        dom.set_disabled(button, true);
        tracing::debug!(index, generation = state.generation, "button loading");

        Some(Schedule {
            delay_ms: self.delay_ms,
            task: Deferred::RestoreButton { button: index, generation: state.generation },
        })
    }

    /// Returns whether the restoration applied.
    pub fn restore<D: Dom>(&mut self, dom: &mut D, buttons: &[D::Node], index: usize, generation: u64) -> bool {
        let (Some(button), Some(state)) = (buttons.get(index), self.states.get_mut(index)) else {
            return false;
        };
        if state.generation != generation {
            tracing::debug!(index, generation, current = state.generation, "stale restore dropped");
            return false;
        }
        let Some(original) = state.original.take() else {
            return false;
        };
        dom.set_text(button, &original);
        dom.set_disabled(button, false);
        true
    }

    /// Restore every button still loading, ignoring pending timers. Returns
    /// how many were restored.
    pub fn restore_all<D: Dom>(&mut self, dom: &mut D, buttons: &[D::Node]) -> usize {
        let pending: Vec<(usize, u64)> = self
            .states
            .iter()
            .enumerate()
            .filter(|(_, s)| s.original.is_some())
            .map(|(index, s)| (index, s.generation))
            .collect();
        pending
            .into_iter()
            .filter(|&(index, generation)| self.restore(dom, buttons, index, generation))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligibility() {
        assert!(wants_loading(None, None));
        assert!(wants_loading(Some("#"), None));
        assert!(wants_loading(Some(""), None));
        assert!(wants_loading(Some("/work"), Some("button")));
        assert!(!wants_loading(Some("/work"), None));
        assert!(!wants_loading(Some("mailto:me@example.com"), None));
        assert!(!wants_loading(Some("mailto:me@example.com"), Some("button")));
    }
}
