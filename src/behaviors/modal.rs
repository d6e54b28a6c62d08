//! Project detail modal.
//!
//! Opening copies a card's `data-title`, `data-desc` and `data-link` into the
//! modal, shows it and locks page scroll. Closing reverses that and schedules
//! focus back onto the first card.

use crate::config::SiteConfig;
use crate::dom::Dom;
use crate::page::{ModalParts, Page};
use crate::schedule::{Deferred, Schedule};

const PLACEHOLDER_LINK: &str = "#";

/// Card content as read from its data attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub link: Option<String>,
}

impl ProjectCard {
    pub fn read<D: Dom>(dom: &D, card: &D::Node) -> Self {
        Self {
            title: dom.attribute(card, "data-title").unwrap_or_default(),
            description: dom.attribute(card, "data-desc").unwrap_or_default(),
            link: dom.attribute(card, "data-link"),
        }
    }

    /// The link, unless it is absent, empty or the `#` placeholder.
    pub fn live_link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .filter(|l| !l.trim().is_empty() && *l != PLACEHOLDER_LINK)
    }
}

#[derive(Debug, Clone)]
pub struct ModalController {
    open: bool,
    active: Option<usize>,
    active_class: String,
    focus_delay_ms: u32,
}

impl ModalController {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            open: false,
            active: None,
            active_class: config.classes.active.clone(),
            focus_delay_ms: config.timing.focus_restore_ms,
        }
    }

    pub fn is_open(&self) -> bool { self.open }

    /// Index of the card currently shown, if the modal is open.
    pub fn active(&self) -> Option<usize> {
        if self.open { self.active } else { None }
    }

    /// Show card `index`. Also used for arrow-key navigation while open.
    pub fn open<D: Dom>(&mut self, dom: &mut D, page: &Page<D::Node>, index: usize) {
        let (Some(parts), Some(card)) = (&page.modal, page.cards.get(index)) else {
            return;
        };
        let project = ProjectCard::read(dom, card);
        fill(dom, parts, &project);

        dom.add_class(&parts.root, &self.active_class);
        if let Some(body) = &page.body {
            dom.set_style(body, "overflow", "hidden");
        }
        self.open = true;
        self.active = Some(index);
        tracing::debug!(index, title = %project.title, "modal opened");
    }

    /// Hide the modal. Returns the focus-restore task, or `None` if there
    /// was nothing to close.
    pub fn close<D: Dom>(&mut self, dom: &mut D, page: &Page<D::Node>) -> Option<Schedule> {
        let parts = page.modal.as_ref()?;
        if !self.open {
            return None;
        }
        dom.remove_class(&parts.root, &self.active_class);
        if let Some(body) = &page.body {
            dom.set_style(body, "overflow", "auto");
        }
        self.open = false;
        tracing::debug!(index = ?self.active, "modal closed");
        Some(Schedule { delay_ms: self.focus_delay_ms, task: Deferred::FocusFirstCard })
    }

    /// Clicks inside the modal close it only when they land on the backdrop
    /// itself, not on its content.
    pub fn backdrop_click<D: Dom>(
        &mut self,
        dom: &mut D,
        page: &Page<D::Node>,
        target: &D::Node,
    ) -> Option<Schedule> {
        match &page.modal {
            Some(parts) if parts.root == *target => self.close(dom, page),
            _ => None,
        }
    }

    pub fn focus_first_card<D: Dom>(dom: &mut D, page: &Page<D::Node>) {
        if let Some(first) = page.cards.first() {
            dom.focus(first);
        }
    }
}

fn fill<D: Dom>(dom: &mut D, parts: &ModalParts<D::Node>, project: &ProjectCard) {
    dom.set_text(&parts.title, &project.title);
    dom.set_text(&parts.desc, &project.description);
    dom.set_attribute(
        &parts.link,
        "href",
        project.link.as_deref().filter(|l| !l.is_empty()).unwrap_or(PLACEHOLDER_LINK),
    );
    let display = if project.live_link().is_some() { "inline-block" } else { "none" };
    dom.set_style(&parts.link, "display", display);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(link: Option<&str>) -> ProjectCard {
        ProjectCard { title: "T".into(), description: "D".into(), link: link.map(String::from) }
    }

    #[test]
    fn live_link_excludes_placeholders() {
        assert_eq!(card(None).live_link(), None);
        assert_eq!(card(Some("#")).live_link(), None);
        assert_eq!(card(Some("")).live_link(), None);
        assert_eq!(card(Some("https://example.com")).live_link(), Some("https://example.com"));
    }
}
