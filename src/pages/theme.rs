//! Theme controller: toggle button, shortcuts, cross-tab sync, JS exports.
//!
//! SYSTEM CONTEXT
//! ==============
//! The [`ThemeManager`] is created once per document and kept in a
//! thread-local slot so the exported `toggleDarkMode`/`setTheme`/... functions
//! reach the same instance as the page listeners.
//!
//! TRADE-OFFS
//! ==========
//! `themeChanged` is dispatched while the manager is borrowed. Exports called
//! from a `themeChanged` listener therefore cannot borrow it again; reads fall
//! back to the document's `data-theme` attribute and writes are dropped with
//! a warning.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{KeyboardEvent, MediaQueryListEvent, StorageEvent};

use crate::state::theme::{ManagerAccess, Theme, ThemeManager};
use crate::util::dark_mode::{BrowserThemeBackend, TOGGLE_SELECTOR, sync_toggle_labels};
use crate::util::dom::{self, Listener};
use crate::util::keyboard::{is_activation_key, is_theme_shortcut};
use crate::util::timers::Teardown;

const TOGGLE_CLASS: &str = "dark-mode-toggle";
const PRESS_FEEDBACK_MS: u32 = 150;

thread_local! {
    static MANAGER: RefCell<Option<ThemeManager<BrowserThemeBackend>>> = const { RefCell::new(None) };
}

fn report_busy(access: ManagerAccess) {
    match access {
        ManagerAccess::Read => log::log!(access.busy_level(), "theme manager busy; reading data-theme instead"),
        ManagerAccess::Write => log::log!(access.busy_level(), "theme manager busy; ignoring re-entrant call"),
    }
}

/// Run a theme change against the shared manager.
fn with_manager<R>(f: impl FnOnce(&mut ThemeManager<BrowserThemeBackend>) -> R) -> Option<R> {
    MANAGER.with(|slot| match slot.try_borrow_mut() {
        Ok(mut guard) => guard.as_mut().map(f),
        Err(_) => {
            report_busy(ManagerAccess::Write);
            None
        }
    })
}

fn read_manager<R>(f: impl FnOnce(&ThemeManager<BrowserThemeBackend>) -> R) -> Option<R> {
    MANAGER.with(|slot| match slot.try_borrow() {
        Ok(guard) => guard.as_ref().map(f),
        Err(_) => {
            report_busy(ManagerAccess::Read);
            None
        }
    })
}

/// Resolve and apply the initial theme, then wire every theme listener.
pub fn init(teardown: &Teardown) {
    let manager = ThemeManager::new(BrowserThemeBackend);
    let theme = manager.current_theme();
    MANAGER.with(|slot| *slot.borrow_mut() = Some(manager));

    setup_toggle(teardown, theme);
    watch_shortcut(teardown);
    watch_system_theme(teardown);
    watch_other_tabs(teardown);
}

fn setup_toggle(teardown: &Teardown, theme: Theme) {
    if dom::query(TOGGLE_SELECTOR).is_none() {
        create_toggle_button();
    }
    let Some(toggle) = dom::query(TOGGLE_SELECTOR) else {
        return;
    };
    sync_toggle_labels(theme);

    let button = toggle.clone();
    if let Some(listener) = Listener::new(&toggle, "click", move |_| toggle_with_feedback(&button)) {
        teardown.hold(listener);
    }

    let button = toggle.clone();
    if let Some(listener) = Listener::new(&toggle, "keydown", move |ev| {
        let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if is_activation_key(&key_ev.key()) {
            ev.prevent_default();
            toggle_with_feedback(&button);
        }
    }) {
        teardown.hold(listener);
    }
}

fn create_toggle_button() {
    let (Some(doc), Some(body)) = (dom::document(), dom::document().and_then(|d| d.body())) else {
        return;
    };
    let Ok(button) = doc.create_element("button") else {
        return;
    };
    button.set_class_name(TOGGLE_CLASS);
    let _ = button.set_attribute("aria-label", "Toggle dark mode");
    let _ = button.set_attribute("title", "Toggle dark mode");
    button.set_inner_html(
        "<span class=\"toggle-icon sun-icon\">\u{2600}\u{fe0f}</span>\
         <span class=\"toggle-icon moon-icon\">\u{1f319}</span>",
    );
    let _ = body.append_child(&button);
}

fn toggle_with_feedback(button: &web_sys::Element) {
    with_manager(ThemeManager::toggle_theme);
    dom::set_style(button, "transform", "scale(0.95)");
    let button = button.clone();
    dom::after(PRESS_FEEDBACK_MS, move || dom::set_style(&button, "transform", "scale(1)"));
}

fn watch_shortcut(teardown: &Teardown) {
    let Some(doc) = dom::document() else {
        return;
    };
    if let Some(listener) = Listener::new(&doc, "keydown", |ev| {
        let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if is_theme_shortcut(key_ev.ctrl_key() || key_ev.meta_key(), key_ev.shift_key(), &key_ev.key()) {
            ev.prevent_default();
            with_manager(ThemeManager::toggle_theme);
        }
    }) {
        teardown.hold(listener);
    }
}

fn watch_system_theme(teardown: &Teardown) {
    let Some(query) = dom::window().and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
    else {
        return;
    };
    if let Some(listener) = Listener::new(&query, "change", |ev| {
        let Some(change) = ev.dyn_ref::<MediaQueryListEvent>() else {
            return;
        };
        let system = if change.matches() { Theme::Dark } else { Theme::Light };
        with_manager(|m| m.on_system_change(system));
    }) {
        teardown.hold(listener);
    }
}

fn watch_other_tabs(teardown: &Teardown) {
    if let Some(doc) = dom::document() {
        let doc_for_cb = doc.clone();
        if let Some(listener) = Listener::new(&doc, "visibilitychange", move |_| {
            if !doc_for_cb.hidden() {
                with_manager(ThemeManager::reconcile_with_storage);
            }
        }) {
            teardown.hold(listener);
        }
    }

    if let Some(win) = dom::window() {
        if let Some(listener) = Listener::new(&win, "storage", |ev| {
            let Some(storage_ev) = ev.dyn_ref::<StorageEvent>() else {
                return;
            };
            let key = storage_ev.key();
            let value = storage_ev.new_value();
            with_manager(|m| m.on_storage_event(key.as_deref(), value.as_deref()));
        }) {
            teardown.hold(listener);
        }
    }
}

fn document_theme() -> Theme {
    dom::document()
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute("data-theme"))
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default()
}

#[wasm_bindgen(js_name = toggleDarkMode)]
pub fn toggle_dark_mode() {
    with_manager(ThemeManager::toggle_theme);
}

/// Apply `theme` (`"light"` or `"dark"`); anything else is ignored.
#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(theme: &str) {
    if let Some(Err(e)) = with_manager(|m| m.set_theme_str(theme)) {
        log::debug!("setTheme ignored: {e}");
    }
}

#[wasm_bindgen(js_name = getCurrentTheme)]
pub fn get_current_theme() -> String {
    read_manager(ThemeManager::current_theme)
        .unwrap_or_else(document_theme)
        .as_str()
        .to_owned()
}

#[wasm_bindgen(js_name = isDarkMode)]
pub fn is_dark_mode() -> bool {
    read_manager(ThemeManager::is_dark).unwrap_or_else(|| document_theme() == Theme::Dark)
}

#[wasm_bindgen(js_name = resetToSystemTheme)]
pub fn reset_to_system_theme() {
    with_manager(ThemeManager::reset_to_system_theme);
}
