//! Small DOM helpers for page controllers (browser only).
//!
//! Every lookup returns `Option`/empty collections instead of failing so a
//! page with different markup simply skips the behavior.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

pub fn query(selector: &str) -> Option<Element> {
    document().and_then(|d| d.query_selector(selector).ok().flatten())
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    match doc.query_selector_all(selector) {
        Ok(nodes) => collect_elements(&nodes),
        Err(_) => Vec::new(),
    }
}

pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(nodes) => collect_elements(&nodes),
        Err(_) => Vec::new(),
    }
}

fn collect_elements(nodes: &web_sys::NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Set an inline style property; no-op for non-HTML elements.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn text(el: &Element) -> String {
    el.text_content().unwrap_or_default()
}

pub fn data(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{name}"))
}

pub fn focus(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
}

/// Smoothly scroll `el` into view with the given block alignment.
pub fn scroll_into_view(el: &Element, block: web_sys::ScrollLogicalPosition) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(block);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Run `action` once after `delay_ms`.
pub fn after(delay_ms: u32, action: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(delay_ms, action).forget();
}

/// Registered event listener; removed from its target when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Drive `step(timestamp_ms)` once per animation frame until it returns
/// `false` or `token` is cancelled.
pub fn animate_frames<F>(token: crate::util::timers::CancelToken, step: F)
where
    F: FnMut(f64) -> bool + 'static,
{
    use std::cell::RefCell;
    use std::rc::Rc;

    let Some(win) = window() else {
        return;
    };
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let mut step = step;
    let cb = Closure::wrap(Box::new(move |ts: f64| {
        let keep_going = !token.is_cancelled() && step(ts);
        let scheduled = keep_going
            && web_sys::window().is_some_and(|w| {
                holder_for_cb
                    .borrow()
                    .as_ref()
                    .is_some_and(|cb| w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok())
            });
        if !scheduled {
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    if win.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    }
}

/// Milliseconds since navigation start.
pub fn now_ms() -> f64 {
    window().and_then(|w| w.performance()).map_or(0.0, |p| p.now())
}
