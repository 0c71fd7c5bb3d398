//! Footer year stamp.

use crate::dom;
use ecosmart_core::{year_stamp, SiteConfig};
use web_sys::{Document, Element};

pub fn install(document: &Document, config: &SiteConfig) {
    let Some(placeholder) = dom::element_by_id::<Element>(document, &config.ids.year) else {
        return;
    };
    let year = js_sys::Date::new_0().get_full_year();
    placeholder.set_text_content(Some(&year_stamp(year as i32)));
}
