//! Bindings: page events, observers and timers routed into a [`Site`].
//!
//! Every listener borrows the shared site for the duration of one event.
//! Dropping [`Bindings`] removes the listeners, disconnects the observers and
//! cancels pending timers.

use super::dom::WebDom;
use super::log;
use crate::config::SiteConfig;
use crate::dom::Key;
use crate::error::{FolioError, FolioResult};
use crate::schedule::{Observation, Outcome, Schedule, TimerSlot};
use crate::site::Site;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent,
};

type Shared = Rc<RefCell<Site<WebDom>>>;
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;
type Timers = Rc<RefCell<HashMap<TimerSlot, Timeout>>>;

pub(crate) struct Bindings {
    site: Shared,
    listeners: Vec<EventListener>,
    observers: Vec<IntersectionObserver>,
    callbacks: Vec<ObserverCallback>,
    timers: Timers,
}

impl Drop for Bindings {
    fn drop(&mut self) {
        for observer in &self.observers {
            observer.disconnect();
        }
        // Dropping a Timeout clears it
        self.timers.borrow_mut().clear();
        if let Ok(mut site) = self.site.try_borrow_mut() {
            site.settle();
        }
    }
}

fn js_err(e: JsValue) -> FolioError {
    FolioError::Js(format!("{:?}", e))
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Schedule `schedule.task` on `site`, replacing any timer pending in the
/// same slot.
fn run_later(site: &Shared, timers: &Timers, schedule: Schedule) {
    let site = Rc::clone(site);
    let timeout = Timeout::new(schedule.delay_ms, move || match site.try_borrow_mut() {
        Ok(mut site) => site.fire(schedule.task),
        Err(_) => log!("[folio] timer skipped: site busy"),
    });
    timers.borrow_mut().insert(schedule.task.slot(), timeout);
}

/// Wire every behavior of `site` into the live page.
pub(crate) fn bind(dom: WebDom, config: SiteConfig) -> FolioResult<Bindings> {
    let window = dom.window().clone();
    let document = dom.document().clone();

    let mut site = Site::new(dom, config)?;
    let report = site.start_now();
    let page = site.page().clone();
    let reveal = site.config().reveal.clone();

    let mut b = Bindings {
        site: Rc::new(RefCell::new(site)),
        listeners: Vec::new(),
        observers: Vec::new(),
        callbacks: Vec::new(),
        timers: Rc::new(RefCell::new(HashMap::new())),
    };

    // Modal
    for (index, card) in page.cards.iter().enumerate() {
        b.listen(card, "click", move |site, _| site.card_click(index));
    }
    if let Some(modal) = &page.modal {
        for button in &modal.close_buttons {
            b.listen(button, "click", |site, _| site.close_click());
        }
        b.listen(&modal.root, "click", |site, event| match event_element(event) {
            Some(target) => site.modal_click(&target),
            None => Outcome::none(),
        });
    }
    b.listen(&document, "keydown", |site, event| match event.dyn_ref::<KeyboardEvent>() {
        Some(key_event) => site.keydown(Key::from_key_name(&key_event.key())),
        None => Outcome::none(),
    });

    // Navigation
    if let Some(menu) = &page.menu {
        b.listen(&menu.toggle, "click", |site, _| site.menu_toggle_click());
        for link in &menu.links {
            b.listen(link, "click", |site, _| site.nav_link_click());
        }
        b.listen(&document, "click", |site, event| match event_element(event) {
            Some(target) => site.document_click(&target),
            None => Outcome::none(),
        });
    }
    b.listen_passive(&window, "scroll", |site, _| site.scroll());
    for (index, anchor) in page.anchors.iter().enumerate() {
        b.listen(anchor, "click", move |site, _| site.anchor_click(index));
    }
    for (index, button) in page.buttons.iter().enumerate() {
        b.listen(button, "click", move |site, _| site.button_click(index));
    }

    // Observers
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(reveal.threshold));
    init.set_root_margin(&reveal.root_margin());
    b.observe(&page.reveal_targets, Some(&init), |site, index, hit| site.reveal_intersect(index, hit))?;
    if report.observe_images {
        b.observe(&page.lazy_images, None, |site, index, hit| site.image_intersect(index, hit))?;
    }

    log!(
        "[folio] started: {} cards, {} listeners, {} observers, copyright stamped: {}, eager images: {}",
        page.cards.len(),
        b.listeners.len(),
        b.observers.len(),
        report.copyright_stamped,
        report.images_loaded_eagerly
    );
    Ok(b)
}

impl Bindings {
    fn listen<F>(&mut self, target: &EventTarget, event_type: &'static str, handler: F)
    where
        F: Fn(&mut Site<WebDom>, &Event) -> Outcome + 'static,
    {
        self.add_listener(target, event_type, EventListenerOptions::enable_prevent_default(), handler);
    }

    fn listen_passive<F>(&mut self, target: &EventTarget, event_type: &'static str, handler: F)
    where
        F: Fn(&mut Site<WebDom>, &Event) -> Outcome + 'static,
    {
        self.add_listener(target, event_type, EventListenerOptions::default(), handler);
    }

    fn add_listener<F>(
        &mut self,
        target: &EventTarget,
        event_type: &'static str,
        options: EventListenerOptions,
        handler: F,
    ) where
        F: Fn(&mut Site<WebDom>, &Event) -> Outcome + 'static,
    {
        let site = Rc::clone(&self.site);
        let timers = Rc::clone(&self.timers);
        let listener = EventListener::new_with_options(target, event_type, options, move |event| {
            let outcome = match site.try_borrow_mut() {
                Ok(mut s) => handler(&mut s, event),
                Err(_) => {
                    log!("[folio] {} skipped: site busy", event_type);
                    return;
                }
            };
            if outcome.prevent_default {
                event.prevent_default();
            }
            if let Some(schedule) = outcome.schedule {
                run_later(&site, &timers, schedule);
            }
        });
        self.listeners.push(listener);
    }

    fn observe<F>(
        &mut self,
        targets: &[Element],
        init: Option<&IntersectionObserverInit>,
        on_entry: F,
    ) -> FolioResult<()>
    where
        F: Fn(&mut Site<WebDom>, usize, bool) -> Observation + 'static,
    {
        if targets.is_empty() {
            return Ok(());
        }
        let site = Rc::clone(&self.site);
        let nodes = targets.to_vec();
        let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = nodes.iter().position(|n| *n == target) else {
                    continue;
                };
                let Ok(mut site) = site.try_borrow_mut() else {
                    continue;
                };
                if on_entry(&mut site, index, entry.is_intersecting()) == Observation::Unobserve {
                    observer.unobserve(&target);
                }
            }
        });

        let function: &js_sys::Function = callback.as_ref().unchecked_ref();
        let observer = match init {
            Some(init) => IntersectionObserver::new_with_options(function, init),
            None => IntersectionObserver::new(function),
        }
        .map_err(js_err)?;
        for target in targets {
            observer.observe(target);
        }
        self.observers.push(observer);
        self.callbacks.push(callback);
        Ok(())
    }
}
