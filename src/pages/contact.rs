//! Contact page: inline validation, submission, and contact-method helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation rules and the submit decision live in `state::contact`; this
//! controller renders their results onto `#<field>` / `#<field>-error` pairs
//! and drives the button's loading state around the async send.
//!
//! ERROR HANDLING
//! ==============
//! Delivery failures surface as a blocking alert; the button is always
//! restored afterwards. Clipboard failures are only logged.

use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::config::SiteConfig;
use crate::net::api::{ContactTransport, SUBMIT_FAILED_ALERT, transport_for};
use crate::state::contact::{CounterLevel, FieldValidation, RuleTable, SubmitOutcome, submit_contact};
use crate::util::dom::{self, Listener};
use crate::util::reveal::{self, RevealSpec};
use crate::util::timers::{Debouncer, Teardown};

const LIVE_FIELDS: [&str; 2] = ["email", "message"];
const LIVE_DEBOUNCE_MS: u32 = 500;
const SHAKE_MS: u32 = 500;
const COPIED_MS: u32 = 2000;
const COPIED_TEXT: &str = "Copied!";

pub fn init(config: &SiteConfig, teardown: &Teardown) {
    if let Some(handle) = reveal::reveal_class(
        ".contact-form-container, .contact-info-container",
        RevealSpec::FADE,
        "animate",
    ) {
        teardown.hold(handle);
    }
    init_char_counter(teardown);
    init_floating_labels(teardown);
    init_copy_methods(teardown);

    let Some(form) = dom::by_id("contact-form") else {
        return;
    };
    let rules = Rc::new(RuleTable::contact());
    init_live_validation(&rules, teardown);
    init_submit(&form, rules, Rc::from(transport_for(config)), teardown);
}

// =============================================================
// Field rendering
// =============================================================

fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }
    String::new()
}

fn field_pair(field: &str) -> Option<(Element, Element)> {
    Some((dom::by_id(field)?, dom::by_id(&format!("{field}-error"))?))
}

fn render_validation(field: &str, result: &FieldValidation) {
    let Some((input, error)) = field_pair(field) else {
        return;
    };
    if result.is_valid {
        dom::remove_class(&input, "error");
        dom::add_class(&input, "success");
        dom::remove_class(&error, "show");
        return;
    }
    dom::add_class(&input, "error");
    dom::remove_class(&input, "success");
    error.set_text_content(Some(result.first_error().unwrap_or_default()));
    dom::add_class(&error, "show");

    dom::add_class(&input, "shake");
    dom::after(SHAKE_MS, move || dom::remove_class(&input, "shake"));
}

fn clear_validation(field: &str) {
    let Some((input, error)) = field_pair(field) else {
        return;
    };
    dom::remove_class(&input, "error");
    dom::remove_class(&input, "success");
    dom::remove_class(&error, "show");
}

fn init_live_validation(rules: &Rc<RuleTable>, teardown: &Teardown) {
    for field in rules.fields() {
        let Some(input) = dom::by_id(field) else {
            continue;
        };

        let (table, el) = (Rc::clone(rules), input.clone());
        if let Some(listener) = Listener::new(&input, "blur", move |_| {
            render_validation(field, &table.validate_field(field, &field_value(&el)));
        }) {
            teardown.hold(listener);
        }

        if let Some(listener) = Listener::new(&input, "focus", move |_| clear_validation(field)) {
            teardown.hold(listener);
        }

        if !LIVE_FIELDS.contains(&field) {
            continue;
        }
        let debouncer = Debouncer::new(LIVE_DEBOUNCE_MS);
        let (table, el) = (Rc::clone(rules), input.clone());
        teardown.defer({
            let debouncer = debouncer.clone();
            move || debouncer.cancel()
        });
        if let Some(listener) = Listener::new(&input, "input", move |_| {
            let (table, el) = (Rc::clone(&table), el.clone());
            debouncer.schedule(move || {
                let value = field_value(&el);
                if !value.is_empty() {
                    render_validation(field, &table.validate_field(field, &value));
                }
            });
        }) {
            teardown.hold(listener);
        }
    }
}

// =============================================================
// Submission
// =============================================================

fn collect_values(form: &Element) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for el in dom::query_all_in(form, "[name]") {
        let Some(name) = el.get_attribute("name") else {
            continue;
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            let kind = input.type_();
            if (kind == "checkbox" || kind == "radio") && !input.checked() {
                continue;
            }
        }
        values.insert(name, field_value(&el));
    }
    values
}

fn set_loading(loading: bool) {
    let Some(button) = dom::by_id("submit-btn") else {
        return;
    };
    if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(loading);
    }
    if let Some(text) = dom::query_in(&button, ".submit-text") {
        dom::set_style(&text, "opacity", if loading { "0" } else { "1" });
    }
    if let Some(loader) = dom::query_in(&button, ".submit-loader") {
        dom::set_style(&loader, "display", if loading { "block" } else { "none" });
    }
}

fn focus_field(field: &str) {
    if let Some(input) = dom::by_id(field) {
        dom::scroll_into_view(&input, web_sys::ScrollLogicalPosition::Center);
        dom::focus(&input);
    }
}

fn show_success(form: &Element) {
    dom::set_style(form, "display", "none");
    if let Some(success) = dom::by_id("form-success") {
        dom::set_style(&success, "display", "block");
        dom::scroll_into_view(&success, web_sys::ScrollLogicalPosition::Center);
    }
}

fn init_submit(form: &Element, rules: Rc<RuleTable>, transport: Rc<dyn ContactTransport>, teardown: &Teardown) {
    let form_el = form.clone();
    let listener = Listener::new(form, "submit", move |ev| {
        ev.prevent_default();

        let values = collect_values(&form_el);
        let report = rules.validate_form(&values);
        for (field, result) in &report.fields {
            render_validation(field, result);
        }
        if let Some(first) = report.first_invalid() {
            focus_field(first);
            return;
        }

        set_loading(true);
        let (rules, transport, form) = (Rc::clone(&rules), Rc::clone(&transport), form_el.clone());
        leptos::task::spawn_local(async move {
            match submit_contact(&rules, values, &*transport).await {
                SubmitOutcome::Sent(_) => show_success(&form),
                SubmitOutcome::Failed(_) => {
                    if let Some(win) = dom::window() {
                        let _ = win.alert_with_message(SUBMIT_FAILED_ALERT);
                    }
                }
                SubmitOutcome::Invalid { first_field, .. } => focus_field(first_field),
            }
            set_loading(false);
        });
    });
    if let Some(listener) = listener {
        teardown.hold(listener);
    }
}

// =============================================================
// Counter, labels, copy
// =============================================================

fn init_char_counter(teardown: &Teardown) {
    let (Some(message), Some(count)) = (dom::by_id("message"), dom::by_id("char-count")) else {
        return;
    };
    let source = message.clone();
    if let Some(listener) = Listener::new(&message, "input", move |_| {
        let length = field_value(&source).chars().count();
        count.set_text_content(Some(&length.to_string()));
        let Some(container) = count.parent_element() else {
            return;
        };
        dom::remove_class(&container, "warning");
        dom::remove_class(&container, "error");
        for class in CounterLevel::for_length(length).classes() {
            dom::add_class(&container, class);
        }
    }) {
        teardown.hold(listener);
    }
}

fn init_floating_labels(teardown: &Teardown) {
    for input in dom::query_all(".form-input, .form-select, .form-textarea") {
        let Some(parent) = input.parent_element() else {
            continue;
        };
        if !field_value(&input).is_empty() {
            dom::add_class(&parent, "focused");
        }

        let target = parent.clone();
        if let Some(listener) = Listener::new(&input, "focus", move |_| dom::add_class(&target, "focused")) {
            teardown.hold(listener);
        }

        let source = input.clone();
        if let Some(listener) = Listener::new(&input, "blur", move |_| {
            if field_value(&source).is_empty() {
                dom::remove_class(&parent, "focused");
            }
        }) {
            teardown.hold(listener);
        }
    }
}

fn init_copy_methods(teardown: &Teardown) {
    for method in dom::query_all(".contact-method") {
        let entry = method.clone();
        if let Some(listener) = Listener::new(&method, "click", move |_| copy_method(&entry)) {
            teardown.hold(listener);
        }
    }
}

fn copy_method(method: &Element) {
    if dom::has_class(method, "copied") {
        return;
    }
    let (Some(title), Some(text_el)) = (dom::query_in(method, ".method-title"), dom::query_in(method, ".method-text"))
    else {
        return;
    };
    let kind = dom::text(&title);
    let value = dom::text(&text_el);
    log::debug!("contact method clicked: {kind}");
    if kind != "Email" && kind != "Phone" {
        return;
    }
    let Some(clipboard) = dom::window().and_then(|w| w.navigator().clipboard()) else {
        return;
    };

    let promise = clipboard.write_text(&value);
    let method = method.clone();
    leptos::task::spawn_local(async move {
        if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
            log::error!("failed to copy to clipboard: {e:?}");
            return;
        }
        text_el.set_text_content(Some(COPIED_TEXT));
        dom::add_class(&method, "copied");
        dom::after(COPIED_MS, move || {
            text_el.set_text_content(Some(&value));
            dom::remove_class(&method, "copied");
        });
    });
}
