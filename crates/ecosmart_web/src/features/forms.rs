//! Schedule lookup and complaint form wiring.

use crate::dom;
use ecosmart_core::{ComplaintResponder, ScheduleResponder, SiteConfig};
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

/// The area name field; pages may use a single-line input or a textarea.
enum AreaField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl AreaField {
    fn find(document: &Document, id: &str) -> Option<Self> {
        let element = dom::element_by_id::<Element>(document, id)?;
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Self::Input(input)),
            Err(element) => match element.dyn_into::<HtmlTextAreaElement>() {
                Ok(text_area) => Some(Self::TextArea(text_area)),
                Err(_) => {
                    warn!("event=element_lookup module=schedule status=wrong_type id={id}");
                    None
                }
            },
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::TextArea(text_area) => text_area.value(),
        }
    }
}

pub fn install(document: &Document, config: &SiteConfig) {
    install_schedule(document, config);
    install_complaint_with(document, config, alert);
}

/// Wires the schedule form; skipped unless form, input and result all exist.
pub fn install_schedule(document: &Document, config: &SiteConfig) {
    let ids = &config.ids;
    let (Some(form), Some(input), Some(result)) = (
        dom::element_by_id::<HtmlFormElement>(document, &ids.schedule_form),
        AreaField::find(document, &ids.area_input),
        dom::element_by_id::<Element>(document, &ids.schedule_result),
    ) else {
        debug!("event=feature_install module=schedule status=skipped");
        return;
    };

    let responder = ScheduleResponder::new(config.replies.pickup_slot.clone());
    let visible_class = config.selectors.visible_class.clone();
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        let Some(reply) = responder.respond(&input.value()) else {
            return;
        };
        result.set_text_content(Some(&reply.message));
        dom::set_class(&result, &visible_class, true);
    });
}

/// Wires the complaint form with a custom acknowledgement sink.
pub fn install_complaint_with(
    document: &Document,
    config: &SiteConfig,
    acknowledge: impl Fn(&str) + 'static,
) {
    let Some(form) = dom::element_by_id::<HtmlFormElement>(document, &config.ids.complaint_form)
    else {
        debug!("event=feature_install module=complaint status=skipped");
        return;
    };

    let responder = ComplaintResponder::new(config.replies.complaint_acknowledgement.clone());
    let target = form.clone();
    dom::listen(&target, "submit", move |event| {
        event.prevent_default();
        let receipt = responder.submit();
        acknowledge(&receipt.acknowledgement);
        form.reset();
    });
}

fn alert(message: &str) {
    let Some(window) = dom::window() else {
        return;
    };
    if let Err(err) = window.alert_with_message(message) {
        warn!(
            "event=complaint_ack module=web status=error error={}",
            dom::describe(&err)
        );
    }
}
