//! Site configuration - selectors, class names, styles and timing.
//!
//! Every literal the behaviors depend on lives here with a default matching
//! the stock portfolio markup. A page can override any subset through JSON:
//!
//! ```json
//! { "timing": { "loading_reset_ms": 800 }, "classes": { "revealed": "fade-in" } }
//! ```

use crate::error::{FolioError, FolioResult};
use serde::{Deserialize, Serialize};

/// Selectors and ids used to resolve the page once at start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub modal_id: String,
    pub modal_title_id: String,
    pub modal_desc_id: String,
    pub modal_link_id: String,
    pub close_modal: String,
    pub project_card: String,
    pub header: String,
    pub body: String,
    pub menu_toggle: String,
    pub nav_links: String,
    pub nav_link: String,
    pub reveal: String,
    pub anchor: String,
    pub button: String,
    pub lazy_image: String,
    pub copyright: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            modal_id: "projectModal".into(),
            modal_title_id: "modalTitle".into(),
            modal_desc_id: "modalDesc".into(),
            modal_link_id: "modalLink".into(),
            close_modal: ".close-modal".into(),
            project_card: ".project-card".into(),
            header: "header".into(),
            body: "body".into(),
            menu_toggle: ".mobile-menu-btn".into(),
            nav_links: ".nav-links".into(),
            nav_link: ".nav-links a".into(),
            reveal: ".fade-in".into(),
            anchor: "a[href^=\"#\"]".into(),
            button: ".btn".into(),
            lazy_image: "img[data-src]".into(),
            copyright: ".copyright".into(),
        }
    }
}

/// Class names toggled by the behaviors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Classes {
    /// On the modal while open and on the nav container while expanded.
    pub active: String,
    /// Added to a reveal target on first intersection.
    pub revealed: String,
    /// Removed from a deferred image once its source is assigned.
    pub lazy: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            active: "active".into(),
            revealed: "visible".into(),
            lazy: "lazy".into(),
        }
    }
}

/// Header background and shadow for both sides of the scroll threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderStyle {
    pub threshold_px: f64,
    pub active_background: String,
    pub active_shadow: String,
    pub default_background: String,
    pub default_shadow: String,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            threshold_px: 50.0,
            active_background: "rgba(15, 23, 42, 0.95)".into(),
            active_shadow: "0 5px 20px rgba(0, 0, 0, 0.1)".into(),
            default_background: "rgba(15, 23, 42, 0.9)".into(),
            default_shadow: "none".into(),
        }
    }
}

/// Observer options for scroll reveal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    pub threshold: f64,
    pub bottom_margin_px: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: 0.1, bottom_margin_px: -50.0 }
    }
}

impl RevealOptions {
    /// CSS `rootMargin` string for the intersection observer.
    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.bottom_margin_px)
    }
}

/// Fixed delays and offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub focus_restore_ms: u32,
    pub loading_reset_ms: u32,
    pub scroll_margin_px: f64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            focus_restore_ms: 100,
            loading_reset_ms: 1500,
            scroll_margin_px: 20.0,
        }
    }
}

/// Full configuration for a [`Site`](crate::Site).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub selectors: Selectors,
    pub classes: Classes,
    pub header: HeaderStyle,
    pub reveal: RevealOptions,
    pub timing: Timing,
    pub loading_label: String,
    pub copyright_placeholder: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: Classes::default(),
            header: HeaderStyle::default(),
            reveal: RevealOptions::default(),
            timing: Timing::default(),
            loading_label: "Loading...".into(),
            copyright_placeholder: "2025".into(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_revealed_class(mut self, class: impl Into<String>) -> Self { self.classes.revealed = class.into(); self }
    pub fn with_loading_label(mut self, label: impl Into<String>) -> Self { self.loading_label = label.into(); self }
    pub fn with_header_threshold(mut self, px: f64) -> Self { self.header.threshold_px = px; self }

    pub fn validate(&self) -> FolioResult<()> {
        let s = &self.selectors;
        let required = [
            ("modal_id", &s.modal_id),
            ("modal_title_id", &s.modal_title_id),
            ("modal_desc_id", &s.modal_desc_id),
            ("modal_link_id", &s.modal_link_id),
            ("close_modal", &s.close_modal),
            ("project_card", &s.project_card),
            ("header", &s.header),
            ("body", &s.body),
            ("menu_toggle", &s.menu_toggle),
            ("nav_links", &s.nav_links),
            ("nav_link", &s.nav_link),
            ("reveal", &s.reveal),
            ("anchor", &s.anchor),
            ("button", &s.button),
            ("lazy_image", &s.lazy_image),
            ("copyright", &s.copyright),
            ("classes.active", &self.classes.active),
            ("classes.revealed", &self.classes.revealed),
            ("classes.lazy", &self.classes.lazy),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(FolioError::Config(format!("{} must not be empty", name)));
            }
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(FolioError::Config(format!(
                "reveal.threshold must be within [0, 1], got {}",
                self.reveal.threshold
            )));
        }
        if self.header.threshold_px < 0.0 {
            return Err(FolioError::Config("header.threshold_px must not be negative".into()));
        }
        if self.timing.scroll_margin_px < 0.0 {
            return Err(FolioError::Config("timing.scroll_margin_px must not be negative".into()));
        }
        if self.copyright_placeholder.is_empty() {
            return Err(FolioError::Config("copyright_placeholder must not be empty".into()));
        }
        Ok(())
    }
}
