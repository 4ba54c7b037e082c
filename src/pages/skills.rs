//! Skills page: staggered cards, proficiency meters, and the radar chart.

use std::cell::RefCell;
use std::rc::Rc;

use crate::components::radar_chart::{self, ChartSlot, MountedChart};
use wasm_bindgen::prelude::*;

use crate::util::chrome::{level_width, progress_gradient, skill_in_category};
use crate::util::dark_mode::THEME_CHANGED_EVENT;
use crate::util::dom::{self, Listener};
use crate::util::radar::{RadarLayout, SKILLS};
use crate::util::reveal::{self, RevealSpec};
use crate::util::timers::Teardown;

const SKILL_CARD_SPEC: RevealSpec = RevealSpec::FADE.staggered(150);
const DATABASE_CARD_SPEC: RevealSpec = RevealSpec::FADE.staggered(200);
const TOOL_CATEGORY_SPEC: RevealSpec = RevealSpec::FADE.staggered(200);
const RADAR_SPEC: RevealSpec = RevealSpec::FADE.with_threshold(0.3).with_root_margin("0px");

const LEVEL_FILL_DELAY_MS: u32 = 300;
const PROGRESS_DELAY_MS: u32 = 500;
const RADAR_DELAY_MS: u32 = 500;
const RADAR_RETHEME_DELAY_MS: u32 = 100;
const RADAR_SELECTOR: &str = ".radar-chart";
const DIMMED_OPACITY: &str = "0.3";

pub fn init(teardown: &Teardown) {
    let skill_cards = reveal::observe(".skill-card", SKILL_CARD_SPEC, |card, _| {
        dom::add_class(card, "animate");
        let Some(fill) = dom::query_in(card, ".level-fill") else {
            return;
        };
        let Some(width) = dom::data(&fill, "level").and_then(|raw| level_width(&raw)) else {
            return;
        };
        dom::after(LEVEL_FILL_DELAY_MS, move || dom::set_style(&fill, "width", &width));
    });
    if let Some(handle) = skill_cards {
        teardown.hold(handle);
    }

    let database_cards = reveal::observe(".database-card", DATABASE_CARD_SPEC, |card, _| {
        dom::add_class(card, "animate");
        let Some(ring) = dom::query_in(card, ".progress-circle") else {
            return;
        };
        let Some(background) = dom::data(&ring, "progress").and_then(|raw| progress_gradient(&raw)) else {
            return;
        };
        dom::after(PROGRESS_DELAY_MS, move || dom::set_style(&ring, "background", &background));
    });
    if let Some(handle) = database_cards {
        teardown.hold(handle);
    }

    if let Some(handle) = reveal::reveal_class(".tool-category", TOOL_CATEGORY_SPEC, "animate") {
        teardown.hold(handle);
    }

    init_radar(teardown);
}

fn init_radar(teardown: &Teardown) {
    if dom::query(RADAR_SELECTOR).is_none() {
        return;
    }
    let mounted: Rc<RefCell<ChartSlot<MountedChart>>> = Rc::new(RefCell::new(ChartSlot::default()));

    let slot = Rc::clone(&mounted);
    let handle = reveal::observe(RADAR_SELECTOR, RADAR_SPEC, move |_, _| {
        let slot = Rc::clone(&slot);
        dom::after(RADAR_DELAY_MS, move || render_radar(&slot));
    });
    if let Some(handle) = handle {
        teardown.hold(handle);
    }

    if let Some(win) = dom::window() {
        let slot = Rc::clone(&mounted);
        if let Some(listener) = Listener::new(&win, THEME_CHANGED_EVENT, move |_| {
            if !slot.borrow().is_mounted() {
                return;
            }
            let slot = Rc::clone(&slot);
            dom::after(RADAR_RETHEME_DELAY_MS, move || {
                if slot.borrow().is_mounted() {
                    render_radar(&slot);
                }
            });
        }) {
            teardown.hold(listener);
        }
    }

    teardown.defer(move || mounted.borrow_mut().clear());
}

fn render_radar(slot: &RefCell<ChartSlot<MountedChart>>) {
    let Some(container) = dom::query(RADAR_SELECTOR) else {
        return;
    };
    let drawing = RadarLayout::default().drawing(&SKILLS);

    for (label, position) in dom::query_all(".radar-label").iter().zip(&drawing.labels) {
        dom::set_style(label, "left", &format!("{}%", position.left_pct));
        dom::set_style(label, "top", &format!("{}%", position.top_pct));
    }

    slot.borrow_mut().replace(|| radar_chart::mount(&container, drawing));
}

/// Dim every skill card outside `category` (`"all"` restores them all).
#[wasm_bindgen(js_name = filterSkills)]
pub fn filter_skills(category: &str) {
    for card in dom::query_all(".skill-card") {
        if skill_in_category(category, dom::data(&card, "skill").as_deref()) {
            dom::set_style(&card, "display", "block");
            dom::set_style(&card, "opacity", "1");
        } else {
            dom::set_style(&card, "opacity", DIMMED_OPACITY);
        }
    }
}
