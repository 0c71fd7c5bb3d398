//! Core page behaviour for the EcoSmart site.
//! This crate decides every interaction; host crates only bind it to a page.

pub mod animation;
pub mod config;
pub mod footer;
pub mod logging;
pub mod model;
pub mod reveal;
pub mod service;
pub mod store;

pub use animation::counter::{CounterAnimator, CounterFrame, CounterTask};
pub use animation::format::group_thousands;
pub use config::{ConfigError, SiteConfig};
pub use footer::year_stamp;
#[cfg(not(target_arch = "wasm32"))]
pub use logging::{init_logging, logging_status};
pub use logging::{default_log_level, normalize_level};
pub use model::counter_target::{CounterTarget, RANDOM_COMPLAINTS_MARKER};
pub use model::theme::Theme;
pub use reveal::{RevealTransition, RevealWatchList, WatchState};
pub use service::forms::{ComplaintReceipt, ComplaintResponder, ScheduleReply, ScheduleResponder};
pub use service::scroll::{AnchorHost, ScrollOutcome, ScrollPlan, ScrollTrigger};
pub use service::theme_service::ThemeController;
#[cfg(not(target_arch = "wasm32"))]
pub use store::JsonFilePreferenceStore;
pub use store::{MemoryPreferenceStore, PreferenceStore, StoreError, StoreResult};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
