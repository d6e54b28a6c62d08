//! Folio: client-side behavior for a static portfolio site.
//!
//! # Architecture
//!
//! ```text
//! Host (browser bindings or test)
//!   │  events, intersection callbacks, timers
//!   ▼
//! Site<D: Dom>
//!   ├── Page (element handles resolved once at start)
//!   └── Behaviors
//!         ├── modal          project detail overlay + Escape
//!         ├── keyboard       arrow keys between cards
//!         ├── reveal         one-shot fade-in
//!         ├── menu           mobile navigation toggle
//!         ├── header         style past scroll threshold
//!         ├── smooth_scroll  header-aware anchor scrolling
//!         ├── loading        cosmetic button loading state
//!         ├── lazy_images    deferred src assignment
//!         └── copyright      current year stamp
//!   │
//!   ▼
//! Dom (trait) ── MemoryDom (native) / WebDom (wasm)
//! ```
//!
//! Handlers return an [`Outcome`]: whether to suppress the default action,
//! and optionally a [`Schedule`] the host runs later through [`Site::fire`].
//!
//! # Features
//!
//! - `native` - `MemoryDom` and stderr logging for tests and tooling
//! - `wasm` - browser bindings (web-sys, gloo) and console logging; starts on module load
//!
//! # Usage
//!
//! ```ignore
//! use folio::{ElementSpec, MemoryDom, Site, SiteConfig};
//!
//! let mut dom = MemoryDom::new();
//! let body = dom.body();
//! dom.append(body, ElementSpec::new("p").class("copyright").text("© 2025 Me"));
//!
//! let mut site = Site::new(dom, SiteConfig::default())?;
//! site.start(2026);
//! ```

// =============================================================================
// Shared modules (compile everywhere)
// =============================================================================
pub mod behaviors;
pub mod config;
pub mod dom;
pub mod error;
pub mod page;
pub mod schedule;
pub mod site;

// =============================================================================
// Native-only modules
// =============================================================================
#[cfg(feature = "native")]
pub mod logging;

// =============================================================================
// WASM-only modules (browser, wasm-bindgen)
// =============================================================================
#[cfg(feature = "wasm")]
pub mod wasm;

// =============================================================================
// Re-exports
// =============================================================================
pub use config::SiteConfig;
pub use dom::{Dom, Key};
pub use error::{FolioError, FolioResult};
pub use page::Page;
pub use schedule::{Deferred, Observation, Outcome, Schedule, TimerSlot};
pub use site::{Site, StartReport};

#[cfg(feature = "native")]
pub use dom::{ElementSpec, MemoryDom, NodeId};
#[cfg(feature = "native")]
pub use logging::init_logging;

#[cfg(feature = "wasm")]
pub use wasm::WebDom;
