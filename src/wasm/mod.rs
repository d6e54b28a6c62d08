//! WASM module: the behaviors on a live page
//!
//! Provides WebDom and the page bindings for browser environments:
//! - WebDom: `Dom` over `web-sys`
//! - Bindings: listeners (gloo), intersection observers, timers
//! - Console: `tracing` events in the devtools console
//! - Automatic start on module load, deferred to `DOMContentLoaded`
//!   while the document is still loading
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { startFolio } from './folio.js';
//!
//! await init();                  // wires the page with defaults or
//!                                // <html data-folio-config='{...}'>
//! startFolio('{"timing":{"loading_reset_ms":800}}'); // re-wire explicitly
//! ```

mod bindings;
mod console;
mod dom;

pub use console::{init_console_tracing, LOG_ATTRIBUTE};
pub use dom::{WebDom, CONFIG_ATTRIBUTE};

use crate::config::SiteConfig;
use crate::error::FolioResult;
use gloo::events::EventListener;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

/// Log to browser console
pub fn console_log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

macro_rules! log {
    ($($t:tt)*) => {
        crate::wasm::console_log(&format!($($t)*))
    }
}

pub(crate) use log;

thread_local! {
    static ACTIVE: RefCell<Option<bindings::Bindings>> = const { RefCell::new(None) };
}

/// Initialize WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let directive = WebDom::from_window().ok().and_then(|dom| dom.page_attribute(LOG_ATTRIBUTE));
    init_console_tracing(directive.as_deref());
    if let Err(e) = boot() {
        log!("[folio] start failed: {}", e);
    }
}

fn boot() -> FolioResult<()> {
    let dom = WebDom::from_window()?;
    if dom.document().ready_state() != "loading" {
        return start_with(None);
    }
    EventListener::once(dom.document(), "DOMContentLoaded", |_| {
        if let Err(e) = start_with(None) {
            log!("[folio] start failed: {}", e);
        }
    })
    .forget();
    Ok(())
}

/// Re-wire the page, replacing any earlier bindings. `config_json` takes
/// precedence over the page's `data-folio-config` attribute.
#[wasm_bindgen(js_name = "startFolio")]
pub fn start_folio(config_json: Option<String>) -> Result<(), JsValue> {
    start_with(config_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn start_with(config_json: Option<String>) -> FolioResult<()> {
    let dom = WebDom::from_window()?;
    let config = match config_json.or_else(|| dom.page_config()) {
        Some(json) => SiteConfig::from_json(&json)?,
        None => SiteConfig::default(),
    };
    ACTIVE.with(|slot| slot.borrow_mut().take());
    let bindings = bindings::bind(dom, config)?;
    ACTIVE.with(|slot| *slot.borrow_mut() = Some(bindings));
    Ok(())
}
