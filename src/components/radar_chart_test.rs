use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::util::radar::{RadarLayout, SKILLS};

#[test]
fn view_box_spans_twice_the_center() {
    let drawing = RadarLayout::default().drawing(&SKILLS);
    assert_eq!(view_box(&drawing), "0 0 400 400");
}

#[test]
fn view_box_follows_custom_layout() {
    let layout = RadarLayout {
        center: crate::util::radar::Point { x: 120.5, y: 100.0 },
        ..RadarLayout::default()
    };
    let drawing = layout.drawing(&SKILLS[..3]);
    assert_eq!(view_box(&drawing), "0 0 241 200");
}

struct Tracked {
    id: u32,
    log: Rc<RefCell<Vec<String>>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.borrow_mut().push(format!("drop {}", self.id));
    }
}

#[test]
fn chart_slot_starts_empty_so_theme_changes_skip_redraw() {
    let slot: ChartSlot<Tracked> = ChartSlot::default();
    assert!(!slot.is_mounted());
}

#[test]
fn chart_slot_drops_previous_chart_before_mounting_next() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slot = ChartSlot::default();

    let first = Rc::clone(&log);
    slot.replace(|| Some(Tracked { id: 1, log: first }));
    assert!(slot.is_mounted());

    let second = Rc::clone(&log);
    slot.replace(|| {
        second.borrow_mut().push("mount 2".to_owned());
        Some(Tracked { id: 2, log: Rc::clone(&second) })
    });
    assert_eq!(*log.borrow(), vec!["drop 1", "mount 2"]);

    slot.clear();
    assert!(!slot.is_mounted());
    assert_eq!(log.borrow().last().map(String::as_str), Some("drop 2"));
}

#[test]
fn chart_slot_is_empty_after_failed_mount() {
    let mut slot: ChartSlot<Tracked> = ChartSlot::default();
    slot.replace(|| None);
    assert!(!slot.is_mounted());
}
