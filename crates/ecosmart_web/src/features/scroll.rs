//! Smooth scrolling for scroll-target triggers and same-page nav links.

use crate::dom;
use ecosmart_core::service::scroll::{handle, plan};
use ecosmart_core::{AnchorHost, ScrollTrigger, SiteConfig};
use log::debug;
use web_sys::{Document, ScrollBehavior, ScrollIntoViewOptions};

/// Resolves selectors against the live document.
#[derive(Clone)]
pub struct DocumentAnchors(Document);

impl DocumentAnchors {
    pub fn new(document: Document) -> Self {
        Self(document)
    }
}

impl AnchorHost for DocumentAnchors {
    fn scroll_into_view(&self, selector: &str) -> bool {
        match self.0.query_selector(selector) {
            Ok(Some(target)) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            Ok(None) => false,
            Err(err) => {
                debug!(
                    "event=smooth_scroll module=web status=skipped selector={selector} error={}",
                    dom::describe(&err)
                );
                false
            }
        }
    }
}

pub fn install(document: &Document, config: &SiteConfig) {
    let anchors = DocumentAnchors::new(document.clone());
    let attr = config.selectors.scroll_target_attr.clone();

    let triggers = dom::query_all(document, &format!("[{attr}]"));
    for trigger in &triggers {
        let element = trigger.clone();
        let anchors = anchors.clone();
        let attr = attr.clone();
        dom::listen(trigger, "click", move |_event| {
            let selector = element.get_attribute(&attr);
            handle(ScrollTrigger::Marker(selector.as_deref()), &anchors);
        });
    }

    let links = dom::query_all(document, &config.selectors.nav_link);
    for link in &links {
        let element = link.clone();
        let anchors = anchors.clone();
        dom::listen(link, "click", move |event| {
            let href = element.get_attribute("href");
            let trigger = ScrollTrigger::NavLink(href.as_deref());
            if plan(trigger).prevent_default {
                event.prevent_default();
            }
            handle(trigger, &anchors);
        });
    }

    debug!(
        "event=feature_install module=scroll status=ok triggers={} nav_links={}",
        triggers.len(),
        links.len()
    );
}
