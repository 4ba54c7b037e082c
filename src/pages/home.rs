//! Home page code window: types a source listing line by line, then restarts.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use web_sys::Element;

use crate::util::dom;
use crate::util::reveal::{self, RevealSpec};
use crate::util::timers::{CancelToken, Teardown};
use crate::util::typing::{RESTART_DELAY_MS, START_DELAY_MS, TypeEvent, TypingScript};

const CODE_SELECTOR: &str = "#code-animation code";
const WINDOW_SPEC: RevealSpec = RevealSpec::FADE.with_threshold(0.3).with_root_margin("0px");

pub fn init(teardown: &Teardown) {
    let Some(code) = dom::query(CODE_SELECTOR) else {
        return;
    };
    let script = Rc::new(TypingScript::for_code_window(&dom::text(&code)));
    code.set_text_content(Some(""));

    let gutter = dom::query(".line-numbers");
    let token = teardown.token();
    let handle = reveal::observe(".code-window", WINDOW_SPEC, move |_, _| {
        let (code, gutter, script, token) = (code.clone(), gutter.clone(), Rc::clone(&script), token.clone());
        dom::after(START_DELAY_MS, move || {
            leptos::task::spawn_local(type_forever(code, gutter, script, token));
        });
    });
    if let Some(handle) = handle {
        teardown.hold(handle);
    }
}

async fn type_forever(code: Element, gutter: Option<Element>, script: Rc<TypingScript>, token: CancelToken) {
    while !token.is_cancelled() {
        if let Some(gutter) = &gutter {
            gutter.set_text_content(Some(&script.line_numbers()));
        }
        let mut typed = String::new();
        for event in script.events() {
            if token.is_cancelled() {
                return;
            }
            match event {
                TypeEvent::Char { ch, .. } => typed.push(ch),
                TypeEvent::LineEnd => typed.push('\n'),
            }
            code.set_text_content(Some(&typed));
            TimeoutFuture::new(event.delay_ms(js_sys::Math::random())).await;
        }
        TimeoutFuture::new(RESTART_DELAY_MS).await;
    }
}
