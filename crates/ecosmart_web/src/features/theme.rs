//! Dark-mode toggle persisted to `localStorage`.

use crate::dom;
use crate::storage::LocalStorage;
use ecosmart_core::{SiteConfig, Theme, ThemeController};
use log::debug;
use web_sys::{Document, Element, HtmlElement};

pub fn install(document: &Document, config: &SiteConfig) {
    let store = LocalStorage::open();
    if !store.is_available() {
        debug!("event=theme_storage module=theme status=unavailable");
    }
    let mut controller = ThemeController::load(store, config.theme_storage_key.clone());
    let dark_class = config.selectors.dark_mode_class.clone();
    let body = document.body();
    let toggle = dom::element_by_id::<Element>(document, &config.ids.theme_toggle);

    apply(body.as_ref(), toggle.as_ref(), &dark_class, controller.current());

    let Some(toggle) = toggle else {
        debug!("event=feature_install module=theme status=skipped");
        return;
    };
    let target = toggle.clone();
    dom::listen(&target, "click", move |_event| {
        let theme = controller.toggle();
        apply(body.as_ref(), Some(&toggle), &dark_class, theme);
    });
}

fn apply(body: Option<&HtmlElement>, toggle: Option<&Element>, dark_class: &str, theme: Theme) {
    if let Some(body) = body {
        dom::set_class(body, dark_class, theme.is_dark());
    }
    if let Some(toggle) = toggle {
        toggle.set_text_content(Some(theme.toggle_glyph()));
    }
}
