//! Dashboard counters driven by `requestAnimationFrame`.

use crate::dom;
use ecosmart_core::{CounterAnimator, CounterTarget, SiteConfig};
use log::{debug, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

type FrameCallback = Closure<dyn FnMut(f64)>;

pub fn install(document: &Document, config: &SiteConfig) {
    let elements = dom::query_all(document, &config.selectors.counter);
    if elements.is_empty() {
        debug!("event=feature_install module=counters status=skipped");
        return;
    }

    let counters = &config.counters;
    let now = dom::now_ms();
    let mut animator = CounterAnimator::new(counters.duration_ms, counters.thousands_separator);
    for (index, element) in elements.iter().enumerate() {
        let raw = element.get_attribute(&config.selectors.counter_target_attr);
        let target = CounterTarget::parse(raw.as_deref()).resolve(
            counters.random_min,
            counters.random_max,
            js_sys::Math::random(),
        );
        animator.start(index, target, now);
    }
    debug!(
        "event=feature_install module=counters status=ok counters={}",
        elements.len()
    );
    run(animator, elements);
}

/// Ticks `animator` once per frame until every counter has finished.
fn run(animator: CounterAnimator<usize>, elements: Vec<Element>) {
    let Some(window) = dom::window() else {
        return;
    };
    let animator = Rc::new(RefCell::new(animator));
    let frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();
    let frame_window = window.clone();

    *frame.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
        let frames = animator.borrow_mut().tick(timestamp);
        for (index, frame) in frames {
            if let Some(element) = elements.get(index) {
                element.set_text_content(Some(&frame.text));
            }
        }
        if animator.borrow().is_idle() {
            // Drops this closure once the callback returns.
            let _ = next.borrow_mut().take();
            return;
        }
        if let Some(callback) = next.borrow().as_ref() {
            request_frame(&frame_window, callback);
        }
    }));

    if let Some(callback) = frame.borrow().as_ref() {
        request_frame(&window, callback);
    };
}

fn request_frame(window: &Window, callback: &FrameCallback) {
    if let Err(err) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        warn!(
            "event=animation_frame module=counters status=error error={}",
            dom::describe(&err)
        );
    }
}
