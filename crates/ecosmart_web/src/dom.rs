//! Thin DOM helpers shared by feature wiring.

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

/// Looks up an element by id and casts it; absence is logged, not fatal.
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let Some(element) = document.get_element_by_id(id) else {
        debug!("event=element_lookup module=dom status=missing id={id}");
        return None;
    };
    match element.dyn_into::<T>() {
        Ok(typed) => Some(typed),
        Err(_) => {
            warn!("event=element_lookup module=dom status=wrong_type id={id}");
            None
        }
    }
}

/// Collects every element matching `selector`; invalid selectors match nothing.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            warn!(
                "event=query module=dom status=error selector={selector} error={}",
                describe(&err)
            );
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Attaches a listener that lives as long as the page; the closure is leaked.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
    {
        warn!(
            "event=listen module=dom status=error event_name={event} error={}",
            describe(&err)
        );
        return;
    }
    callback.forget();
}

/// Adds or removes one class, logging host failures.
pub fn set_class(element: &Element, class: &str, enabled: bool) {
    let list = element.class_list();
    let result = if enabled {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(err) = result {
        warn!(
            "event=class_update module=dom status=error class={class} error={}",
            describe(&err)
        );
    }
}

/// High-resolution timestamp on the same timeline as animation frames.
pub fn now_ms() -> f64 {
    window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Best-effort text for a thrown JS value.
pub fn describe(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
