//! Per-feature page wiring.
//!
//! Each `install` looks up its own elements and returns quietly when they
//! are absent, so features never depend on each other.

pub mod counters;
pub mod footer;
pub mod forms;
pub mod reveal;
pub mod scroll;
pub mod theme;

use crate::dom;
use ecosmart_core::SiteConfig;
use log::{info, warn};

/// Wires every feature against the current document.
pub fn install_all(config: &SiteConfig) {
    let Some(document) = dom::document() else {
        warn!("event=page_wire module=web status=error reason=no_document");
        return;
    };
    scroll::install(&document, config);
    forms::install(&document, config);
    counters::install(&document, config);
    reveal::install(&document, config);
    theme::install(&document, config);
    footer::install(&document, config);
    info!("event=page_wire module=web status=ok");
}
