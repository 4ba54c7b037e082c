//! About page: timeline, value cards, and the typed code snippet.

use gloo_timers::future::TimeoutFuture;
use web_sys::Element;

use crate::util::dom;
use crate::util::reveal::{self, RevealSpec};
use crate::util::timers::{CancelToken, Teardown};
use crate::util::typing::{PLAIN_CHAR_DELAY_MS, START_DELAY_MS};

const TIMELINE_SPEC: RevealSpec = RevealSpec::FADE.staggered(200);
const VALUE_CARD_SPEC: RevealSpec = RevealSpec::FADE.staggered(150);
const SNIPPET_SPEC: RevealSpec = RevealSpec::FADE.with_threshold(0.5).with_root_margin("0px");

pub fn init(teardown: &Teardown) {
    if let Some(handle) = reveal::reveal_class(".timeline-item", TIMELINE_SPEC, "animate") {
        teardown.hold(handle);
    }
    if let Some(handle) = reveal::reveal_class(".value-card", VALUE_CARD_SPEC, "animate") {
        teardown.hold(handle);
    }

    let markers = reveal::observe(".timeline-item", RevealSpec::TIMELINE_MARKER, |item, visible| {
        let Some(marker) = dom::query_in(item, ".timeline-marker") else {
            return;
        };
        if visible {
            dom::add_class(&marker, "active");
        } else {
            dom::remove_class(&marker, "active");
        }
    });
    if let Some(handle) = markers {
        teardown.hold(handle);
    }

    init_snippet(teardown);
}

fn init_snippet(teardown: &Teardown) {
    let Some(code) = dom::query(".code-snippet .code-content code") else {
        return;
    };
    let text = dom::text(&code);
    code.set_text_content(Some(""));

    let token = teardown.token();
    let handle = reveal::observe(".code-snippet", SNIPPET_SPEC, move |_, _| {
        let (code, text, token) = (code.clone(), text.clone(), token.clone());
        dom::after(START_DELAY_MS, move || {
            leptos::task::spawn_local(type_text(code, text, token));
        });
    });
    if let Some(handle) = handle {
        teardown.hold(handle);
    }
}

async fn type_text(code: Element, text: String, token: CancelToken) {
    let mut typed = String::with_capacity(text.len());
    for ch in text.chars() {
        if token.is_cancelled() {
            return;
        }
        typed.push(ch);
        code.set_text_content(Some(&typed));
        TimeoutFuture::new(PLAIN_CHAR_DELAY_MS).await;
    }
}
