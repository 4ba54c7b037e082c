//! Projects page: category filter, search, and URL-mirrored catalog state.
//!
//! ARCHITECTURE
//! ============
//! Cards are read once into [`Card`] values. Every change updates the shared
//! [`CatalogQuery`], then `recompute` applies the resulting visibility to the
//! DOM and rewrites the URL with `history.replaceState`.
//!
//! Fade timers from an earlier recompute check a generation counter, so a
//! fast sequence of filter changes cannot leave a card in a stale state.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlInputElement, KeyboardEvent};

use crate::state::catalog::{CatalogQuery, CategoryFilter, Card, filter_for_tag};
use crate::util::dom::{self, Listener};
use crate::util::keyboard::{RovingAxis, roving_target};
use crate::util::reveal::{self, RevealSpec, reveal_delay_ms};
use crate::util::timers::{Debouncer, Teardown};

const SHOW_STAGGER_MS: u32 = 50;
const HIDE_AFTER_MS: u32 = 300;
const FILTER_ANIMATION_MS: u32 = 300;
const FILTER_LOADING_MS: u32 = 200;
const SEARCH_DEBOUNCE_MS: u32 = 300;
const SEARCH_LOADING_MS: u32 = 150;
const INITIAL_RECOMPUTE_MS: u32 = 100;
const CARD_SPEC: RevealSpec = RevealSpec::FADE.with_threshold(0.1).staggered(100);

struct Catalog {
    cards: Vec<Element>,
    data: Vec<Card>,
    buttons: Vec<Element>,
    search: Option<HtmlInputElement>,
    grid: Option<Element>,
    no_results: Option<Element>,
    query: RefCell<CatalogQuery>,
    generation: Cell<u64>,
    search_debounce: Debouncer,
}

fn harvest(el: &Element) -> Card {
    Card {
        category: dom::data(el, "category").unwrap_or_default(),
        title: dom::data(el, "title").unwrap_or_default(),
        description: dom::query_in(el, ".project-description")
            .map(|d| dom::text(&d))
            .unwrap_or_default(),
        tags: dom::query_all_in(el, ".tech-tag").iter().map(dom::text).collect(),
    }
}

fn button_filter(button: &Element) -> String {
    dom::data(button, "filter").unwrap_or_default()
}

pub fn init(teardown: &Teardown) {
    let cards = dom::query_all(".project-card");
    if cards.is_empty() {
        return;
    }
    let data = cards.iter().map(harvest).collect();
    let catalog = Rc::new(Catalog {
        data,
        cards,
        buttons: dom::query_all(".filter-btn"),
        search: dom::by_id("project-search").and_then(|el| el.dyn_into::<HtmlInputElement>().ok()),
        grid: dom::by_id("projects-grid"),
        no_results: dom::by_id("no-results"),
        query: RefCell::new(CatalogQuery::default()),
        generation: Cell::new(0),
        search_debounce: Debouncer::new(SEARCH_DEBOUNCE_MS),
    });

    if let Some(handle) = reveal::reveal_class(".project-card", CARD_SPEC, "animate") {
        teardown.hold(handle);
    }
    init_filter_buttons(&catalog, teardown);
    init_search(&catalog, teardown);
    init_tag_clicks(&catalog, teardown);
    initialize_from_url(&catalog);

    let debounce = catalog.search_debounce.clone();
    teardown.defer(move || debounce.cancel());
    CATALOG.with(|slot| *slot.borrow_mut() = Some(catalog));
    teardown.defer(|| {
        CATALOG.with(|slot| slot.borrow_mut().take());
    });
}

// =============================================================
// Recompute
// =============================================================

fn recompute(catalog: &Rc<Catalog>) {
    let generation = catalog.generation.get().wrapping_add(1);
    catalog.generation.set(generation);

    let visibility = catalog.query.borrow().compute_visibility(&catalog.data);
    for (index, (card, shown)) in catalog.cards.iter().zip(visibility.shown.iter().copied()).enumerate() {
        let (card, owner) = (card.clone(), Rc::clone(catalog));
        if shown {
            dom::remove_class(&card, "hidden");
            dom::set_style(&card, "display", "block");
            dom::after(reveal_delay_ms(index, SHOW_STAGGER_MS), move || {
                if owner.generation.get() == generation {
                    dom::add_class(&card, "fade-in");
                    dom::remove_class(&card, "fade-out");
                }
            });
        } else {
            dom::add_class(&card, "fade-out");
            dom::remove_class(&card, "fade-in");
            dom::after(HIDE_AFTER_MS, move || {
                if owner.generation.get() == generation {
                    dom::add_class(&card, "hidden");
                    dom::set_style(&card, "display", "none");
                }
            });
        }
    }

    if let Some(no_results) = &catalog.no_results {
        dom::set_style(no_results, "display", if visibility.is_empty() { "block" } else { "none" });
    }
    write_url(&catalog.query.borrow());
}

fn write_url(query: &CatalogQuery) {
    let Some(win) = dom::window() else {
        return;
    };
    let location = win.location();
    let (Ok(path), Ok(search), Ok(hash)) = (location.pathname(), location.search(), location.hash()) else {
        return;
    };
    let rewritten = query.to_query_string(&search);
    let url = if rewritten.is_empty() {
        format!("{path}{hash}")
    } else {
        format!("{path}?{rewritten}{hash}")
    };
    if let Ok(history) = win.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
    }
}

/// Run `recompute` with the grid in its loading state for `delay_ms`.
fn recompute_after(catalog: &Rc<Catalog>, delay_ms: u32) {
    if let Some(grid) = &catalog.grid {
        dom::add_class(grid, "loading");
    }
    let catalog = Rc::clone(catalog);
    dom::after(delay_ms, move || {
        recompute(&catalog);
        if let Some(grid) = &catalog.grid {
            dom::remove_class(grid, "loading");
        }
    });
}

// =============================================================
// Filter buttons
// =============================================================

fn select_filter(catalog: &Rc<Catalog>, button: &Element) {
    for other in &catalog.buttons {
        dom::remove_class(other, "active");
    }
    dom::add_class(button, "active");
    dom::add_class(button, "filter-animation");
    let animated = button.clone();
    dom::after(FILTER_ANIMATION_MS, move || dom::remove_class(&animated, "filter-animation"));

    catalog.query.borrow_mut().set_filter(&button_filter(button));
    recompute_after(catalog, FILTER_LOADING_MS);
}

fn init_filter_buttons(catalog: &Rc<Catalog>, teardown: &Teardown) {
    for (index, button) in catalog.buttons.iter().enumerate() {
        let (owner, this) = (Rc::clone(catalog), button.clone());
        if let Some(listener) = Listener::new(button, "click", move |_| select_filter(&owner, &this)) {
            teardown.hold(listener);
        }

        let owner = Rc::clone(catalog);
        if let Some(listener) = Listener::new(button, "keydown", move |ev| {
            let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if let Some(next) = roving_target(RovingAxis::Horizontal, &key_ev.key(), index, owner.buttons.len()) {
                ev.prevent_default();
                dom::focus(&owner.buttons[next]);
            }
        }) {
            teardown.hold(listener);
        }
    }
}

// =============================================================
// Search
// =============================================================

fn schedule_search(catalog: &Rc<Catalog>, raw: &str) {
    catalog.query.borrow_mut().set_search(raw);
    let owner = Rc::clone(catalog);
    catalog
        .search_debounce
        .schedule(move || recompute_after(&owner, SEARCH_LOADING_MS));
}

fn init_search(catalog: &Rc<Catalog>, teardown: &Teardown) {
    let Some(input) = catalog.search.clone() else {
        return;
    };

    let (owner, source) = (Rc::clone(catalog), input.clone());
    if let Some(listener) = Listener::new(&input, "input", move |_| schedule_search(&owner, &source.value())) {
        teardown.hold(listener);
    }

    let (owner, source) = (Rc::clone(catalog), input.clone());
    if let Some(listener) = Listener::new(&input, "keydown", move |ev| {
        let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if key_ev.key() == "Escape" {
            source.set_value("");
            owner.search_debounce.cancel();
            owner.query.borrow_mut().clear_search();
            recompute(&owner);
        }
    }) {
        teardown.hold(listener);
    }
}

// =============================================================
// Tags and URL
// =============================================================

fn init_tag_clicks(catalog: &Rc<Catalog>, teardown: &Teardown) {
    let filters: Rc<Vec<String>> = Rc::new(catalog.buttons.iter().map(button_filter).collect());
    for card in &catalog.cards {
        for tag in dom::query_all_in(card, ".tech-tag") {
            let (owner, filters, this) = (Rc::clone(catalog), Rc::clone(&filters), tag.clone());
            if let Some(listener) = Listener::new(&tag, "click", move |ev| {
                ev.stop_propagation();
                let text = dom::text(&this).to_lowercase();
                if let Some(filter) = filter_for_tag(&text, &filters) {
                    if let Some(button) = owner.buttons.iter().find(|b| button_filter(b) == filter) {
                        select_filter(&owner, button);
                    }
                    return;
                }
                if let Some(input) = &owner.search {
                    input.set_value(&text);
                    schedule_search(&owner, &text);
                    let _ = input.focus();
                }
            }) {
                teardown.hold(listener);
            }
        }
    }
}

fn initialize_from_url(catalog: &Rc<Catalog>) {
    let search = dom::window().and_then(|w| w.location().search().ok()).unwrap_or_default();
    let mut from_url = CatalogQuery::from_query_string(&search);

    if let CategoryFilter::Named(name) = from_url.filter().clone() {
        let matching = catalog.buttons.iter().find(|b| button_filter(b).to_lowercase() == name);
        match matching {
            Some(button) => {
                for other in &catalog.buttons {
                    dom::remove_class(other, "active");
                }
                dom::add_class(button, "active");
            }
            None => from_url.set_filter(""),
        }
    }
    if let Some(input) = &catalog.search {
        if !from_url.search().is_empty() {
            input.set_value(from_url.search());
        }
    }
    *catalog.query.borrow_mut() = from_url;

    let catalog = Rc::clone(catalog);
    dom::after(INITIAL_RECOMPUTE_MS, move || recompute(&catalog));
}

// =============================================================
// JS exports
// =============================================================

thread_local! {
    static CATALOG: RefCell<Option<Rc<Catalog>>> = const { RefCell::new(None) };
}

fn with_catalog(f: impl FnOnce(&Rc<Catalog>)) {
    let catalog = CATALOG.with(|slot| slot.borrow().clone());
    if let Some(catalog) = catalog {
        f(&catalog);
    }
}

/// Activate the filter button whose `data-filter` is `filter`.
#[wasm_bindgen(js_name = setProjectFilter)]
pub fn set_project_filter(filter: &str) {
    with_catalog(|catalog| {
        if let Some(button) = catalog.buttons.iter().find(|b| button_filter(b) == filter) {
            select_filter(catalog, button);
        }
    });
}

/// Fill the search box and run the debounced search.
#[wasm_bindgen(js_name = setProjectSearch)]
pub fn set_project_search(query: &str) {
    with_catalog(|catalog| {
        if let Some(input) = &catalog.search {
            input.set_value(query);
        }
        schedule_search(catalog, query);
    });
}

/// Active category filter, `"all"` when none is selected.
#[wasm_bindgen(js_name = getProjectFilter)]
pub fn get_project_filter() -> String {
    CATALOG
        .with(|slot| slot.borrow().as_ref().map(|c| c.query.borrow().filter().as_str().to_owned()))
        .unwrap_or_else(|| CategoryFilter::All.as_str().to_owned())
}

/// Current search text, already trimmed and lowercased.
#[wasm_bindgen(js_name = getProjectSearch)]
pub fn get_project_search() -> String {
    CATALOG
        .with(|slot| slot.borrow().as_ref().map(|c| c.query.borrow().search().to_owned()))
        .unwrap_or_default()
}

/// Scroll to the projects grid.
#[wasm_bindgen(js_name = scrollToProjects)]
pub fn scroll_to_projects() {
    if let Some(section) = dom::query(".projects-grid-section") {
        dom::scroll_into_view(&section, web_sys::ScrollLogicalPosition::Start);
    }
}
