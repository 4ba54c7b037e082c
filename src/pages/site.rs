//! Shared chrome present on every page: navigation, scrolling, counters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs on every document before the page-specific controllers. Each piece
//! guards on its own anchor element, so pages without a hero section or a
//! mobile menu simply skip those parts.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, Node, ScrollLogicalPosition};

use crate::util::chrome::{
    MOBILE_BREAKPOINT, NavbarState, anchor_scroll_top, nav_link_is_active, scroll_hint_visible, scroll_progress,
};
use crate::util::dom::{self, Listener};
use crate::util::easing::{CounterAnimation, ease_in_out_quad, format_grouped, parse_counter_target};
use crate::util::keyboard::{RovingAxis, alt_shortcut_target, is_activation_key, roving_target};
use crate::util::reveal::{self, RevealMode, RevealSpec};
use crate::util::timers::{CancelToken, Debouncer, Teardown, Throttle};

const NAVBAR_THROTTLE_MS: u32 = 10;
const RESIZE_DEBOUNCE_MS: u32 = 250;
const MENU_FOCUS_DELAY_MS: u32 = 100;
const ANCHOR_FOCUS_DELAY_MS: u32 = 500;
const OVERVIEW_STAGGER_MS: usize = 100;
const SMOOTH_SCROLL_OFFSET: f64 = 100.0;
const SMOOTH_SCROLL_DEFAULT_MS: f64 = 1000.0;

const COUNTER_SELECTOR: &str = ".stat-number[data-target]";
const OVERVIEW_CARD_SELECTOR: &str = ".overview-card";

const SECTION_SPEC: RevealSpec = RevealSpec {
    threshold: 0.3,
    root_margin: "-20% 0px -20% 0px",
    stagger_ms: 0,
    mode: RevealMode::Presence,
};

pub fn init(teardown: &Teardown) {
    init_mobile_menu(teardown);
    init_navbar(teardown);
    init_scroll_indicator(teardown);
    init_smooth_anchors(teardown);
    init_overview_cards(teardown);
    init_section_tracking(teardown);
    init_skip_link(teardown);
    init_shortcuts(teardown);
    init_counters(teardown);
    init_lazy_images(teardown);
    apply_reduced_motion();
}

/// Run `teardown` when the page unloads.
pub fn run_on_unload(teardown: Rc<Teardown>) {
    let Some(win) = dom::window() else {
        return;
    };
    let callback = Closure::<dyn FnMut(Event)>::new(move |_| teardown.run());
    let _ = win.add_event_listener_with_callback("beforeunload", callback.as_ref().unchecked_ref());
    callback.forget();
}

fn scroll_y() -> f64 {
    dom::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn inner_width() -> f64 {
    dom::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

fn inner_height() -> f64 {
    dom::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

fn event_target_node(ev: &Event) -> Option<Node> {
    ev.target().and_then(|t| t.dyn_into::<Node>().ok())
}

fn set_body_overflow(value: &str) {
    if let Some(body) = dom::document().and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

// =============================================================
// Mobile menu
// =============================================================

fn init_mobile_menu(teardown: &Teardown) {
    let (Some(hamburger), Some(menu)) = (dom::by_id("hamburger"), dom::by_id("nav-menu")) else {
        return;
    };

    let (h, m) = (hamburger.clone(), menu.clone());
    if let Some(listener) = Listener::new(&hamburger, "click", move |_| toggle_menu(&h, &m)) {
        teardown.hold(listener);
    }

    for link in dom::query_all_in(&menu, ".nav-link") {
        let (h, m) = (hamburger.clone(), menu.clone());
        if let Some(listener) = Listener::new(&link, "click", move |_| close_menu(&h, &m)) {
            teardown.hold(listener);
        }
    }

    let Some(doc) = dom::document() else {
        return;
    };
    let (h, m) = (hamburger.clone(), menu.clone());
    if let Some(listener) = Listener::new(&doc, "click", move |ev| {
        if !dom::has_class(&m, "active") {
            return;
        }
        let target = event_target_node(&ev);
        if !m.contains(target.as_ref()) && !h.contains(target.as_ref()) {
            toggle_menu(&h, &m);
        }
    }) {
        teardown.hold(listener);
    }

    let (h, m) = (hamburger, menu);
    if let Some(listener) = Listener::new(&doc, "keydown", move |ev| {
        let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if key_ev.key() == "Escape" && dom::has_class(&m, "active") {
            toggle_menu(&h, &m);
            dom::focus(&h);
        }
    }) {
        teardown.hold(listener);
    }
}

fn toggle_menu(hamburger: &Element, menu: &Element) {
    let was_open = dom::has_class(hamburger, "active");
    let _ = hamburger.class_list().toggle("active");
    let _ = menu.class_list().toggle("active");
    let _ = hamburger.set_attribute("aria-expanded", if was_open { "false" } else { "true" });
    set_body_overflow(if was_open { "auto" } else { "hidden" });

    if !was_open {
        if let Some(first) = dom::query_in(menu, ".nav-link") {
            dom::after(MENU_FOCUS_DELAY_MS, move || dom::focus(&first));
        }
    }
}

fn close_menu(hamburger: &Element, menu: &Element) {
    dom::remove_class(hamburger, "active");
    dom::remove_class(menu, "active");
    let _ = hamburger.set_attribute("aria-expanded", "false");
    set_body_overflow("auto");
}

// =============================================================
// Navbar and scroll hint
// =============================================================

fn init_navbar(teardown: &Teardown) {
    let (Some(navbar), Some(win)) = (dom::by_id("navbar"), dom::window()) else {
        return;
    };
    let state = Rc::new(RefCell::new(NavbarState::new(scroll_y())));
    let throttle = Throttle::new(NAVBAR_THROTTLE_MS);

    let bar = navbar.clone();
    if let Some(listener) = Listener::new(&win, "scroll", move |_| {
        let (state, bar) = (Rc::clone(&state), bar.clone());
        throttle.trigger(move || {
            let frame = state.borrow_mut().update(scroll_y(), inner_width());
            if frame.scrolled {
                dom::add_class(&bar, "scrolled");
            } else {
                dom::remove_class(&bar, "scrolled");
            }
            match frame.hidden {
                Some(true) => dom::set_style(&bar, "transform", "translateY(-100%)"),
                Some(false) => dom::set_style(&bar, "transform", "translateY(0)"),
                None => {}
            }
        });
    }) {
        teardown.hold(listener);
    }

    let debouncer = Debouncer::new(RESIZE_DEBOUNCE_MS);
    teardown.defer({
        let debouncer = debouncer.clone();
        move || debouncer.cancel()
    });
    if let Some(listener) = Listener::new(&win, "resize", move |_| {
        let bar = navbar.clone();
        debouncer.schedule(move || {
            if inner_width() <= MOBILE_BREAKPOINT {
                dom::set_style(&bar, "transform", "translateY(0)");
            }
        });
    }) {
        teardown.hold(listener);
    }
}

fn init_scroll_indicator(teardown: &Teardown) {
    let (Some(indicator), Some(win)) = (dom::query(".scroll-indicator"), dom::window()) else {
        return;
    };

    if let Some(listener) = Listener::new(&indicator, "click", |_| {
        if let Some(section) = dom::query(".overview-section") {
            dom::scroll_into_view(&section, ScrollLogicalPosition::Start);
        }
    }) {
        teardown.hold(listener);
    }

    if let Some(listener) = Listener::new(&win, "scroll", move |_| {
        let visible = scroll_hint_visible(scroll_y());
        dom::set_style(&indicator, "opacity", if visible { "1" } else { "0" });
        dom::set_style(&indicator, "pointer-events", if visible { "auto" } else { "none" });
    }) {
        teardown.hold(listener);
    }
}

// =============================================================
// Anchors and sections
// =============================================================

fn init_smooth_anchors(teardown: &Teardown) {
    for anchor in dom::query_all("a[href^=\"#\"]") {
        let link = anchor.clone();
        if let Some(listener) = Listener::new(&anchor, "click", move |ev| {
            ev.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = dom::query(&href) else {
                return;
            };
            let Some(win) = dom::window() else {
                return;
            };

            let top = anchor_scroll_top(target.get_bounding_client_rect().top(), scroll_y());
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);

            if let Ok(history) = win.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
            }

            dom::after(ANCHOR_FOCUS_DELAY_MS, move || {
                if let Some(html) = target.dyn_ref::<HtmlElement>() {
                    let options = web_sys::FocusOptions::new();
                    options.set_prevent_scroll(true);
                    let _ = html.focus_with_options(&options);
                }
            });
        }) {
            teardown.hold(listener);
        }
    }
}

fn init_skip_link(teardown: &Teardown) {
    let Some(skip) = dom::query(".skip-link") else {
        return;
    };
    let link = skip.clone();
    if let Some(listener) = Listener::new(&skip, "click", move |ev| {
        ev.prevent_default();
        let Some(target) = link.get_attribute("href").and_then(|href| dom::query(&href)) else {
            return;
        };
        dom::focus(&target);
        dom::scroll_into_view(&target, ScrollLogicalPosition::Start);
    }) {
        teardown.hold(listener);
    }
}

fn init_section_tracking(teardown: &Teardown) {
    for id in ["hero", "overview"] {
        let section = dom::by_id(id).or_else(|| dom::query(&format!(".{id}-section")));
        if let Some(section) = section {
            if section.id().is_empty() {
                section.set_id(id);
            }
        }
    }
    let handle = reveal::observe("#hero, #overview", SECTION_SPEC, |section, visible| {
        if visible {
            update_active_nav_link(&section.id());
        }
    });
    if let Some(handle) = handle {
        teardown.hold(handle);
    }
}

fn update_active_nav_link(section_id: &str) {
    for link in dom::query_all(".nav-link") {
        let href = link.get_attribute("href").unwrap_or_default();
        if nav_link_is_active(&href, section_id) {
            dom::add_class(&link, "active");
            let _ = link.set_attribute("aria-current", "page");
        } else {
            dom::remove_class(&link, "active");
            let _ = link.remove_attribute("aria-current");
        }
    }
}

// =============================================================
// Overview cards and keyboard
// =============================================================

fn init_overview_cards(teardown: &Teardown) {
    let cards = Rc::new(dom::query_all(OVERVIEW_CARD_SELECTOR));
    if cards.is_empty() {
        return;
    }

    for (index, card) in cards.iter().enumerate() {
        dom::add_class(card, "fade-in-hidden");
        dom::set_style(card, "--animation-delay", &format!("{}ms", index * OVERVIEW_STAGGER_MS));
        let _ = card.set_attribute("tabindex", "0");

        let group = Rc::clone(&cards);
        let this = card.clone();
        if let Some(listener) = Listener::new(card, "keydown", move |ev| {
            let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = key_ev.key();
            if is_activation_key(&key) {
                ev.prevent_default();
                if let Some(link) = dom::query_in(&this, ".card-link").and_then(|l| l.dyn_into::<HtmlElement>().ok()) {
                    link.click();
                }
                return;
            }
            if let Some(next) = roving_target(RovingAxis::Grid, &key, index, group.len()) {
                ev.prevent_default();
                dom::focus(&group[next]);
            }
        }) {
            teardown.hold(listener);
        }
    }

    let spec = RevealSpec::FADE.with_threshold(0.1);
    if let Some(handle) = reveal::reveal_class(OVERVIEW_CARD_SELECTOR, spec, "fade-in-visible") {
        teardown.hold(handle);
    }
}

fn init_shortcuts(teardown: &Teardown) {
    let Some(doc) = dom::document() else {
        return;
    };
    if let Some(listener) = Listener::new(&doc, "keydown", |ev| {
        let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if !key_ev.alt_key() {
            return;
        }
        if let Some(page) = alt_shortcut_target(&key_ev.key()) {
            ev.prevent_default();
            if let Some(win) = dom::window() {
                let _ = win.location().set_href(page);
            }
        }
    }) {
        teardown.hold(listener);
    }
}

// =============================================================
// Counters, images, motion
// =============================================================

fn init_counters(teardown: &Teardown) {
    let counters = dom::query_all(COUNTER_SELECTOR);
    if counters.is_empty() {
        return;
    }
    for counter in &counters {
        counter.set_text_content(Some("0"));
    }

    let token = teardown.token();
    let handle = reveal::observe(COUNTER_SELECTOR, RevealSpec::COUNTER, move |el, _| {
        let Some(target) = dom::data(el, "target").and_then(|raw| parse_counter_target(&raw)) else {
            return;
        };
        run_counter(el.clone(), CounterAnimation::new(target), token.clone());
    });
    if let Some(handle) = handle {
        teardown.hold(handle);
    }
}

fn run_counter(el: Element, animation: CounterAnimation, token: CancelToken) {
    let start = dom::now_ms();
    dom::animate_frames(token, move |now| {
        let elapsed = now - start;
        el.set_text_content(Some(&format_grouped(animation.value_at(elapsed))));
        !animation.is_done(elapsed)
    });
}

fn init_lazy_images(teardown: &Teardown) {
    let handle = reveal::observe("img[data-src]", RevealSpec::LAZY_IMAGE, |img, _| {
        if let Some(src) = dom::data(img, "src") {
            let _ = img.set_attribute("src", &src);
            let _ = img.remove_attribute("data-src");
        }
    });
    if let Some(handle) = handle {
        teardown.hold(handle);
    }
}

fn apply_reduced_motion() {
    let reduced = dom::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .is_some_and(|mq| mq.matches());
    if !reduced {
        return;
    }
    for shape in dom::query_all(".shape") {
        dom::set_style(&shape, "animation", "none");
    }
    if let Some(root) = dom::document().and_then(|d| d.document_element()) {
        for var in ["--transition-fast", "--transition-normal", "--transition-slow"] {
            dom::set_style(&root, var, "0.01s");
        }
    }
}

// =============================================================
// JS exports
// =============================================================

/// Fraction of the page scrolled so far.
#[wasm_bindgen(js_name = getScrollProgress)]
pub fn get_scroll_progress() -> f64 {
    let height = dom::document()
        .and_then(|d| d.document_element())
        .map_or(0.0, |root| f64::from(root.scroll_height()));
    scroll_progress(scroll_y(), height, inner_height())
}

/// Ease the page to `selector`, leaving room for the navbar.
#[wasm_bindgen(js_name = smoothScrollTo)]
pub fn smooth_scroll_to(selector: &str, duration_ms: Option<f64>) {
    let Some(target) = dom::query(selector).and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
        return;
    };
    let start = scroll_y();
    let distance = f64::from(target.offset_top()) - SMOOTH_SCROLL_OFFSET - start;
    let duration = duration_ms.unwrap_or(SMOOTH_SCROLL_DEFAULT_MS);
    let mut started_at = None;

    dom::animate_frames(CancelToken::new(), move |now| {
        let first = *started_at.get_or_insert(now);
        let elapsed = now - first;
        if let Some(win) = dom::window() {
            win.scroll_to_with_x_and_y(0.0, ease_in_out_quad(elapsed, start, distance, duration));
        }
        elapsed < duration
    });
}
