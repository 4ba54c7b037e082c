//! Browser side of the theme manager.
//!
//! Persists the preference under the `theme` key in `localStorage`, applies a
//! `data-theme` attribute to the `<html>` element, and broadcasts a
//! `themeChanged` event on `window`. Requires a browser environment; native
//! builds no-op so the theme rules stay testable.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort: storage errors are returned to the
//! manager, which logs them and keeps the in-memory theme.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::error::StorageError;
use crate::state::theme::{STORAGE_KEY, Theme, ThemeBackend};
use crate::util::storage;

/// Custom event fired on `window` after every theme change.
pub const THEME_CHANGED_EVENT: &str = "themeChanged";
/// Class of the toggle button (created when the page lacks one).
pub const TOGGLE_SELECTOR: &str = ".dark-mode-toggle";
/// Class that suppresses CSS transitions while the theme swaps.
pub const TRANSITION_GUARD_CLASS: &str = "theme-transition-disable";
pub const TRANSITION_GUARD_MS: u32 = 50;

const SYSTEM_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `[data-theme-element="x"]` elements carry `x-dark` or `x-light`.
///
/// Returns `(class to add, class to remove)`.
pub fn theme_element_classes(base: &str, theme: Theme) -> (String, String) {
    (
        format!("{base}-{}", theme.as_str()),
        format!("{base}-{}", theme.flipped().as_str()),
    )
}

/// [`ThemeBackend`] over the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeBackend;

impl ThemeBackend for BrowserThemeBackend {
    fn load_preference(&self) -> Result<Option<String>, StorageError> {
        storage::get_item(STORAGE_KEY)
    }

    fn store_preference(&self, theme: Theme) -> Result<(), StorageError> {
        storage::set_item(STORAGE_KEY, theme.as_str())
    }

    fn clear_preference(&self) -> Result<(), StorageError> {
        storage::remove_item(STORAGE_KEY)
    }

    fn system_theme(&self) -> Theme {
        read_system_theme()
    }

    fn apply(&self, theme: Theme) {
        apply(theme);
    }
}

/// Theme reported by `prefers-color-scheme`, light outside the browser.
pub fn read_system_theme() -> Theme {
    #[cfg(feature = "csr")]
    {
        let dark = web_sys::window()
            .and_then(|w| w.match_media(SYSTEM_DARK_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches());
        if dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = SYSTEM_DARK_QUERY;
        Theme::Light
    }
}

/// Reflect `theme` in the document and announce it.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(doc) = window.document() else {
            return;
        };

        if let Some(root) = doc.document_element() {
            let _ = root.class_list().add_1(TRANSITION_GUARD_CLASS);
            let _ = root.set_attribute("data-theme", theme.as_str());
            let root_for_timer = root.clone();
            gloo_timers::callback::Timeout::new(TRANSITION_GUARD_MS, move || {
                let _ = root_for_timer.class_list().remove_1(TRANSITION_GUARD_CLASS);
            })
            .forget();
        }

        if let Ok(Some(meta)) = doc.query_selector("meta[name=\"theme-color\"]") {
            let _ = meta.set_attribute("content", theme.meta_color());
        }

        if let Ok(nodes) = doc.query_selector_all("[data-theme-element]") {
            for idx in 0..nodes.length() {
                let Some(el) = nodes.item(idx).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
                    continue;
                };
                let Some(base) = el.get_attribute("data-theme-element") else {
                    continue;
                };
                let (add, remove) = theme_element_classes(&base, theme);
                let _ = el.class_list().remove_1(&remove);
                let _ = el.class_list().add_1(&add);
            }
        }

        sync_toggle_labels(theme);
        dispatch_theme_changed(&window, theme);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Keep the toggle control's accessible name in step with the theme.
pub fn sync_toggle_labels(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(toggle) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(TOGGLE_SELECTOR).ok().flatten())
        else {
            return;
        };
        let _ = toggle.set_attribute("aria-label", theme.toggle_label());
        let _ = toggle.set_attribute("title", theme.toggle_label());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

#[cfg(feature = "csr")]
fn dispatch_theme_changed(window: &web_sys::Window, theme: Theme) {
    use wasm_bindgen::JsValue;

    let detail = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&detail, &JsValue::from_str("theme"), &JsValue::from_str(theme.as_str()));
    let init = web_sys::CustomEventInit::new();
    init.set_detail(&detail);
    if let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict(THEME_CHANGED_EVENT, &init) {
        let _ = window.dispatch_event(&event);
    }
}

/// Theme carried by a `themeChanged` event's `detail.theme`.
#[cfg(feature = "csr")]
pub fn theme_from_event(event: &web_sys::Event) -> Option<Theme> {
    use wasm_bindgen::{JsCast, JsValue};

    let custom = event.dyn_ref::<web_sys::CustomEvent>()?;
    let raw = js_sys::Reflect::get(&custom.detail(), &JsValue::from_str("theme")).ok()?;
    raw.as_string()?.parse().ok()
}
