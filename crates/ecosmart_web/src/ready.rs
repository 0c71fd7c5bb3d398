//! DOM ready gate.

use crate::dom;
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event};

/// Runs `wire` once the document structure is parsed, exactly once.
pub fn when_ready(wire: impl FnOnce() + 'static) {
    let Some(document) = dom::document() else {
        warn!("event=dom_ready module=web status=error reason=no_document");
        return;
    };
    if document.ready_state() != "loading" {
        wire();
        return;
    }

    let mut wire = Some(wire);
    let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Some(wire) = wire.take() {
            wire();
        }
    });
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    if let Err(err) = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        warn!(
            "event=dom_ready module=web status=error error={}",
            dom::describe(&err)
        );
    }
    callback.forget();
}
