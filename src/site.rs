//! Site: every behavior wired to one document
//!
//! ```text
//! host event ──► Site::<event>() ──► behavior ──► Dom writes
//!                      │
//!                      └──► Outcome { prevent_default, schedule }
//!                                               │
//! host timer ◄──────────────────────────────────┘
//!     └──► Site::fire(task)
//! ```
//!
//! The host (browser bindings or a test) owns listeners, observers and
//! timers. `Site` owns the state.

use crate::behaviors::{
    copyright, keyboard, ButtonLoading, Direction, HeaderStyler, LazyImages, MobileMenu,
    ModalController, ScrollReveal, SmoothScroll,
};
use crate::config::SiteConfig;
use crate::dom::{Dom, Key};
use crate::error::FolioResult;
use crate::page::Page;
use crate::schedule::{Deferred, Observation, Outcome};
use chrono::Datelike;

/// What `start` did, for logging by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StartReport {
    pub copyright_stamped: bool,
    pub images_loaded_eagerly: usize,
    /// True when deferred images must be registered with an intersection
    /// observer by the host.
    pub observe_images: bool,
}

pub struct Site<D: Dom> {
    dom: D,
    config: SiteConfig,
    page: Page<D::Node>,
    modal: ModalController,
    reveal: ScrollReveal,
    menu: MobileMenu,
    header: HeaderStyler,
    scroll: SmoothScroll,
    loading: ButtonLoading,
    images: LazyImages,
}

impl<D: Dom> Site<D> {
    /// Validate `config` and resolve the page against `dom`.
    pub fn new(dom: D, config: SiteConfig) -> FolioResult<Self> {
        config.validate()?;
        let page = Page::resolve(&dom, &config.selectors);
        Ok(Self {
            modal: ModalController::new(&config),
            reveal: ScrollReveal::new(&config, page.reveal_targets.len()),
            menu: MobileMenu::new(&config.classes.active),
            header: HeaderStyler::new(config.header.clone()),
            scroll: SmoothScroll::new(config.timing.scroll_margin_px),
            loading: ButtonLoading::new(&config.loading_label, config.timing.loading_reset_ms, page.buttons.len()),
            images: LazyImages::new(&config.classes.lazy, page.lazy_images.len()),
            dom,
            config,
            page,
        })
    }

    pub fn dom(&self) -> &D { &self.dom }
    pub fn dom_mut(&mut self) -> &mut D { &mut self.dom }
    pub fn page(&self) -> &Page<D::Node> { &self.page }
    pub fn config(&self) -> &SiteConfig { &self.config }
    pub fn modal(&self) -> &ModalController { &self.modal }
    pub fn loading(&self) -> &ButtonLoading { &self.loading }
    pub fn reveal(&self) -> &ScrollReveal { &self.reveal }
    pub fn images(&self) -> &LazyImages { &self.images }

    /// Page-ready work: stamp the copyright year and, when the host cannot
    /// observe intersections, load every deferred image now.
    pub fn start(&mut self, year: i32) -> StartReport {
        let mut report = StartReport::default();
        if let Some(node) = &self.page.copyright {
            report.copyright_stamped =
                copyright::update(&mut self.dom, node, &self.config.copyright_placeholder, year);
        }
        if self.dom.supports_intersection_observer() {
            report.observe_images = !self.page.lazy_images.is_empty();
        } else {
            self.images.load_all(&mut self.dom, &self.page.lazy_images);
            report.images_loaded_eagerly = self.page.lazy_images.len();
        }
        tracing::info!(?report, "site started");
        report
    }

    /// [`start`](Self::start) with the local calendar year.
    pub fn start_now(&mut self) -> StartReport {
        self.start(chrono::Local::now().year())
    }

    // =========================================================================
    // Modal
    // =========================================================================

    pub fn card_click(&mut self, index: usize) -> Outcome {
        self.modal.open(&mut self.dom, &self.page, index);
        Outcome::none()
    }

    pub fn close_click(&mut self) -> Outcome {
        Outcome::none().with_schedule(self.modal.close(&mut self.dom, &self.page))
    }

    /// Click delivered to the modal element; `target` is the event target.
    pub fn modal_click(&mut self, target: &D::Node) -> Outcome {
        Outcome::none().with_schedule(self.modal.backdrop_click(&mut self.dom, &self.page, target))
    }

    /// Document keydown. Escape closes an open modal; arrows move between
    /// cards while it is open.
    pub fn keydown(&mut self, key: Key) -> Outcome {
        if !self.modal.is_open() {
            return Outcome::none();
        }
        let dir = match key {
            Key::Escape => return Outcome::none().with_schedule(self.modal.close(&mut self.dom, &self.page)),
            Key::ArrowRight => Direction::Next,
            Key::ArrowLeft => Direction::Previous,
            Key::Other => return Outcome::none(),
        };
        if let Some(next) = keyboard::step(self.modal.active(), self.page.cards.len(), dir) {
            self.modal.open(&mut self.dom, &self.page, next);
        }
        Outcome::prevented()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn menu_toggle_click(&mut self) -> Outcome {
        if let Some(parts) = &self.page.menu {
            self.menu.toggle(&mut self.dom, parts);
        }
        Outcome::none()
    }

    pub fn nav_link_click(&mut self) -> Outcome {
        if let Some(parts) = &self.page.menu {
            self.menu.close(&mut self.dom, parts);
        }
        Outcome::none()
    }

    /// Any click on the document, for closing the menu from outside.
    pub fn document_click(&mut self, target: &D::Node) -> Outcome {
        if let Some(parts) = &self.page.menu {
            self.menu.outside_click(&mut self.dom, parts, target);
        }
        Outcome::none()
    }

    pub fn scroll(&mut self) -> Outcome {
        if let Some(header) = &self.page.header {
            self.header.apply(&mut self.dom, header);
        }
        Outcome::none()
    }

    /// Anchor click. Default navigation is suppressed while the anchor's
    /// current `href` is an in-page fragment; anything else (e.g. the modal
    /// link after a card filled it) navigates normally.
    pub fn anchor_click(&mut self, index: usize) -> Outcome {
        let Some(anchor) = self.page.anchors.get(index) else {
            return Outcome::none();
        };
        let in_page = self.dom.attribute(anchor, "href").is_some_and(|href| href.starts_with('#'));
        if !in_page {
            return Outcome::none();
        }
        self.scroll.on_click(&mut self.dom, anchor, self.page.header.as_ref());
        Outcome::prevented()
    }

    // =========================================================================
    // Buttons, observers, timers
    // =========================================================================

    pub fn button_click(&mut self, index: usize) -> Outcome {
        Outcome::none().with_schedule(self.loading.on_click(&mut self.dom, &self.page.buttons, index))
    }

    pub fn reveal_intersect(&mut self, index: usize, intersecting: bool) -> Observation {
        self.reveal.on_intersect(&mut self.dom, &self.page.reveal_targets, index, intersecting)
    }

    pub fn image_intersect(&mut self, index: usize, intersecting: bool) -> Observation {
        self.images.on_intersect(&mut self.dom, &self.page.lazy_images, index, intersecting)
    }

    /// Put the page back in a resting state before this site is discarded:
    /// buttons still showing the loading label get their text back. Pending
    /// restore tasks become no-ops.
    pub fn settle(&mut self) -> usize {
        let restored = self.loading.restore_all(&mut self.dom, &self.page.buttons);
        if restored > 0 {
            tracing::debug!(restored, "loading buttons settled");
        }
        restored
    }

    /// Run a task previously returned in an [`Outcome`].
    pub fn fire(&mut self, task: Deferred) {
        match task {
            Deferred::FocusFirstCard => ModalController::focus_first_card(&mut self.dom, &self.page),
            Deferred::RestoreButton { button, generation } => {
                self.loading.restore(&mut self.dom, &self.page.buttons, button, generation);
            }
        }
    }
}
