//! Scroll-triggered reveal via `IntersectionObserver`.

use crate::dom;
use ecosmart_core::{RevealTransition, RevealWatchList, SiteConfig};
use log::{debug, info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

pub fn install(document: &Document, config: &SiteConfig) {
    install_with_support(document, config, supports_intersection_observer());
}

/// Wires reveal elements; without observer support all of them are shown now.
pub fn install_with_support(document: &Document, config: &SiteConfig, observer_supported: bool) {
    let elements = dom::query_all(document, &config.selectors.reveal);
    if elements.is_empty() {
        debug!("event=feature_install module=reveal status=skipped");
        return;
    }

    let mut watch = RevealWatchList::new(config.reveal_threshold);
    for index in 0..elements.len() {
        watch.observe(index);
    }
    let visible_class = config.selectors.visible_class.clone();

    if !observer_supported {
        info!("event=feature_install module=reveal status=fallback reason=no_observer");
        reveal_all(&mut watch, &elements, &visible_class);
        return;
    }

    let elements = Rc::new(elements);
    let watch = Rc::new(RefCell::new(watch));
    let callback = {
        let elements = elements.clone();
        let watch = watch.clone();
        let visible_class = visible_class.clone();
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = elements
                        .iter()
                        .position(|element| js_sys::Object::is(element, &target))
                    else {
                        continue;
                    };
                    let transition = watch.borrow_mut().on_intersection(
                        &index,
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    );
                    if transition == RevealTransition::Reveal {
                        dom::set_class(&target, &visible_class, true);
                        observer.unobserve(&target);
                    }
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for element in elements.iter() {
                observer.observe(element);
            }
            debug!(
                "event=feature_install module=reveal status=ok watched={}",
                elements.len()
            );
        }
        Err(err) => {
            warn!(
                "event=feature_install module=reveal status=fallback error={}",
                dom::describe(&err)
            );
            reveal_all(&mut watch.borrow_mut(), &elements, &visible_class);
        }
    }
    callback.forget();
}

fn reveal_all(watch: &mut RevealWatchList<usize>, elements: &[Element], visible_class: &str) {
    for index in watch.reveal_all() {
        if let Some(element) = elements.get(index) {
            dom::set_class(element, visible_class, true);
        }
    }
}

pub fn supports_intersection_observer() -> bool {
    dom::window()
        .and_then(|window| {
            js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).ok()
        })
        .unwrap_or(false)
}
