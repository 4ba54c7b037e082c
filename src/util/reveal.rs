//! Reveal-on-visibility: one reusable `IntersectionObserver` wrapper.
//!
//! ARCHITECTURE
//! ============
//! Each page describes an element group with a [`RevealSpec`] and a handler.
//! `Once` groups fire a single time per element after an index-proportional
//! delay and are then unobserved; `Presence` groups report every enter/leave.
//! The returned [`ObserverHandle`] disconnects the observer when dropped.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Whether an element is revealed once or tracked while visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    Once,
    Presence,
}

/// Observer settings for an element group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub stagger_ms: u32,
    pub mode: RevealMode,
}

impl RevealSpec {
    /// Cards and sections fading in as they scroll into view.
    pub const FADE: Self = Self {
        threshold: 0.2,
        root_margin: "0px 0px -50px 0px",
        stagger_ms: 0,
        mode: RevealMode::Once,
    };

    /// Numeric counters start when half visible.
    pub const COUNTER: Self = Self {
        threshold: 0.5,
        root_margin: "0px 0px -100px 0px",
        stagger_ms: 0,
        mode: RevealMode::Once,
    };

    /// Timeline markers stay active only while their item is on screen.
    pub const TIMELINE_MARKER: Self = Self {
        threshold: 0.5,
        root_margin: "0px 0px -200px 0px",
        stagger_ms: 0,
        mode: RevealMode::Presence,
    };

    /// Images load slightly before they scroll into view.
    pub const LAZY_IMAGE: Self = Self {
        threshold: 0.0,
        root_margin: "50px 0px",
        stagger_ms: 0,
        mode: RevealMode::Once,
    };

    #[must_use]
    pub const fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub const fn with_root_margin(mut self, root_margin: &'static str) -> Self {
        self.root_margin = root_margin;
        self
    }

    #[must_use]
    pub const fn staggered(mut self, stagger_ms: u32) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    /// Delay before the `index`-th element of a batch is revealed.
    pub fn delay_ms(&self, index: usize) -> u32 {
        reveal_delay_ms(index, self.stagger_ms)
    }
}

/// `index * stagger_ms`, saturating.
pub fn reveal_delay_ms(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(stagger_ms)
}

#[cfg(feature = "csr")]
pub use browser::{ObserverHandle, observe, reveal_class};

#[cfg(feature = "csr")]
mod browser {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{RevealMode, RevealSpec};
    use crate::util::dom;

    type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// Live observer; disconnects on drop.
    pub struct ObserverHandle {
        observer: IntersectionObserver,
        _callback: EntriesCallback,
    }

    impl Drop for ObserverHandle {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    /// Observe every element matching `selector`.
    ///
    /// `handler(element, visible)` runs once per element (after the staggered
    /// delay) for `Once` specs, and on every transition for `Presence` specs.
    /// Returns `None` when nothing matches or the browser lacks the API.
    pub fn observe<F>(selector: &str, spec: RevealSpec, handler: F) -> Option<ObserverHandle>
    where
        F: Fn(&Element, bool) + 'static,
    {
        let targets = dom::query_all(selector);
        if targets.is_empty() {
            return None;
        }
        let handler = Rc::new(handler);

        let callback: EntriesCallback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let mut batch_index = 0usize;
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let visible = entry.is_intersecting();
                match spec.mode {
                    RevealMode::Presence => handler(&target, visible),
                    RevealMode::Once => {
                        if !visible {
                            continue;
                        }
                        observer.unobserve(&target);
                        let delay = spec.delay_ms(batch_index);
                        batch_index += 1;
                        if delay == 0 {
                            handler(&target, true);
                        } else {
                            let handler = Rc::clone(&handler);
                            gloo_timers::callback::Timeout::new(delay, move || handler(&target, true)).forget();
                        }
                    }
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(spec.threshold));
        options.set_root_margin(spec.root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        for target in &targets {
            observer.observe(target);
        }
        Some(ObserverHandle {
            observer,
            _callback: callback,
        })
    }

    /// Add `class` to each matching element the first time it is revealed.
    pub fn reveal_class(selector: &str, spec: RevealSpec, class: &'static str) -> Option<ObserverHandle> {
        observe(selector, spec, move |el, _| {
            let _ = el.class_list().add_1(class);
        })
    }
}
