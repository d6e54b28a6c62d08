//! Navigation Tests: mobile menu, header style, smooth scrolling
//!
//! These tests verify:
//! 1. Menu toggle mirrors its state into aria-expanded
//! 2. Nav link clicks and outside clicks close the menu
//! 3. Header style flips strictly past the 50px threshold
//! 4. Anchor clicks scroll to target minus header height and margin
//! 5. Bare "#" and missing targets are suppressed without scrolling
//! 6. Anchors whose href no longer starts with "#" navigate normally

mod common;

use common::Portfolio;
use folio::{ElementSpec, MemoryDom, Site, SiteConfig};

/// Test: toggle flips the menu and aria-expanded together
#[test]
fn toggle_mirrors_aria_expanded() {
    let mut p = Portfolio::new();

    p.site.menu_toggle_click();
    assert!(p.has_class(p.nav, "active"));
    assert_eq!(p.attr(p.toggle, "aria-expanded").as_deref(), Some("true"));

    p.site.menu_toggle_click();
    assert!(!p.has_class(p.nav, "active"));
    assert_eq!(p.attr(p.toggle, "aria-expanded").as_deref(), Some("false"));
}

/// Test: clicking a nav link closes an open menu
#[test]
fn nav_link_closes_menu() {
    let mut p = Portfolio::new();
    p.site.menu_toggle_click();

    p.site.nav_link_click();
    assert!(!p.has_class(p.nav, "active"));
    assert_eq!(p.attr(p.toggle, "aria-expanded").as_deref(), Some("false"));
}

/// Test: document clicks inside the menu or on the toggle keep it open
#[test]
fn inside_clicks_keep_menu_open() {
    let mut p = Portfolio::new();
    p.site.menu_toggle_click();

    let (toggle, link) = (p.toggle, p.nav_links[0]);
    p.site.document_click(&toggle);
    p.site.document_click(&link);
    assert!(p.has_class(p.nav, "active"));
}

/// Test: a click anywhere else closes the menu
#[test]
fn outside_click_closes_menu() {
    let mut p = Portfolio::new();
    p.site.menu_toggle_click();

    let elsewhere = p.about;
    p.site.document_click(&elsewhere);
    assert!(!p.has_class(p.nav, "active"));
    assert_eq!(p.attr(p.toggle, "aria-expanded").as_deref(), Some("false"));
}

/// Test: a page without a toggle ignores menu events
#[test]
fn missing_toggle_is_inert() {
    let mut dom = MemoryDom::new();
    let body = dom.body();
    let nav = dom.append(body, ElementSpec::new("ul").class("nav-links"));

    let mut site = Site::new(dom, SiteConfig::default()).unwrap();
    assert!(site.page().menu.is_none());
    site.menu_toggle_click();
    site.document_click(&nav);
    assert!(site.dom().classes(nav).iter().all(|c| c != "active"));
}

/// Test: header style at 49, 50 and 51 pixels
#[test]
fn header_style_threshold() {
    let mut p = Portfolio::new();
    let header = p.header;

    for (y, background, shadow) in [
        (49.0, "rgba(15, 23, 42, 0.9)", "none"),
        (50.0, "rgba(15, 23, 42, 0.9)", "none"),
        (51.0, "rgba(15, 23, 42, 0.95)", "0 5px 20px rgba(0, 0, 0, 0.1)"),
        (0.0, "rgba(15, 23, 42, 0.9)", "none"),
    ] {
        p.site.dom_mut().set_scroll_y(y);
        p.site.scroll();
        assert_eq!(p.dom().style(header, "background"), Some(background), "at {}px", y);
        assert_eq!(p.dom().style(header, "box-shadow"), Some(shadow), "at {}px", y);
    }
}

/// Test: header threshold follows config
#[test]
fn header_threshold_configurable() {
    let mut p = Portfolio::with_config(SiteConfig::default().with_header_threshold(200.0));
    p.site.dom_mut().set_scroll_y(150.0);
    p.site.scroll();
    assert_eq!(p.dom().style(p.header, "box-shadow"), Some("none"));
}

/// Test: anchor click scrolls to offsetTop - header height - 20
#[test]
fn anchor_scrolls_past_header() {
    let mut p = Portfolio::new();
    let index = p.anchor_index(p.nav_links[1]);

    let outcome = p.site.anchor_click(index);
    assert!(outcome.prevent_default);
    // about at 1400, header 80 tall, 20px margin
    assert_eq!(p.dom().scroll_requests(), &[1300.0]);
}

/// Test: bare "#" is suppressed and goes nowhere
#[test]
fn bare_hash_is_suppressed() {
    let mut p = Portfolio::new();
    let index = p.anchor_index(p.logo);

    let outcome = p.site.anchor_click(index);
    assert!(outcome.prevent_default);
    assert!(p.dom().scroll_requests().is_empty());
}

/// Test: missing target is suppressed silently
#[test]
fn missing_target_is_silent() {
    let mut p = Portfolio::new();
    let index = p.anchor_index(p.broken_anchor);

    let outcome = p.site.anchor_click(index);
    assert!(outcome.prevent_default);
    assert!(p.dom().scroll_requests().is_empty());
}

/// Test: without a header the destination only subtracts the margin
#[test]
fn no_header_counts_as_zero_height() {
    let mut dom = MemoryDom::new();
    let body = dom.body();
    dom.append(body, ElementSpec::new("a").attr("href", "#contact"));
    dom.append(body, ElementSpec::new("section").id("contact").offset(900.0, 300.0));

    let mut site = Site::new(dom, SiteConfig::default()).unwrap();
    site.anchor_click(0);
    assert_eq!(site.dom().scroll_requests(), &[880.0]);
}

/// Test: the modal link navigates once a card gave it a real destination
#[test]
fn filled_modal_link_is_not_suppressed() {
    let mut dom = MemoryDom::new();
    let body = dom.body();
    dom.append(
        body,
        ElementSpec::new("div")
            .class("project-card")
            .attr("data-title", "Alpha")
            .attr("data-desc", "First")
            .attr("data-link", "https://alpha.example"),
    );
    dom.append(body, ElementSpec::new("div").class("project-card").attr("data-title", "Beta"));
    let modal = dom.append(body, ElementSpec::new("div").id("projectModal"));
    dom.append(modal, ElementSpec::new("h2").id("modalTitle"));
    dom.append(modal, ElementSpec::new("p").id("modalDesc"));
    let link = dom.append(modal, ElementSpec::new("a").id("modalLink").class("btn").attr("href", "#"));

    let mut site = Site::new(dom, SiteConfig::default()).unwrap();
    let index = site.page().anchors.iter().position(|n| *n == link).expect("anchor");

    site.card_click(0);
    let outcome = site.anchor_click(index);
    assert!(!outcome.prevent_default);
    assert!(site.dom().scroll_requests().is_empty());

    // Back to "#" for a card without a link: suppressed again
    site.card_click(1);
    assert!(site.anchor_click(index).prevent_default);
}
