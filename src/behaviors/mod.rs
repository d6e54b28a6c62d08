//! Behaviors: one module per page feature
//!
//! | Module | Feature |
//! |--------|---------|
//! | [`modal`] | Project detail overlay |
//! | [`reveal`] | One-shot fade-in on intersection |
//! | [`menu`] | Mobile navigation toggle |
//! | [`header`] | Header style past the scroll threshold |
//! | [`smooth_scroll`] | Header-aware in-page anchor scrolling |
//! | [`loading`] | Cosmetic button loading state |
//! | [`keyboard`] | Arrow-key card navigation |
//! | [`lazy_images`] | Deferred `src` assignment |
//! | [`copyright`] | Current year stamp |
//!
//! None of them know about each other. [`Site`](crate::Site) routes events.

pub mod copyright;
pub mod header;
pub mod keyboard;
pub mod lazy_images;
pub mod loading;
pub mod menu;
pub mod modal;
pub mod reveal;
pub mod smooth_scroll;

pub use header::HeaderStyler;
pub use keyboard::Direction;
pub use lazy_images::LazyImages;
pub use loading::ButtonLoading;
pub use menu::MobileMenu;
pub use modal::{ModalController, ProjectCard};
pub use reveal::ScrollReveal;
pub use smooth_scroll::SmoothScroll;
