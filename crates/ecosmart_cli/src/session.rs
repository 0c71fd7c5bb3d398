//! Headless page session for smoke runs.
//!
//! # Responsibility
//! - Replay the page's startup against core services without a browser.
//! - Drive counters with synthetic frame times instead of wall-clock waits.

use ecosmart_core::{
    year_stamp, CounterAnimator, CounterTarget, PreferenceStore, ScheduleResponder, SiteConfig,
    Theme, ThemeController,
};
use log::info;

/// Synthetic frame spacing (~60 fps).
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// One `.counter` element as it would appear in markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSpec {
    pub label: String,
    pub raw_target: Option<String>,
}

impl CounterSpec {
    pub fn new(label: impl Into<String>, raw_target: Option<&str>) -> Self {
        Self {
            label: label.into(),
            raw_target: raw_target.map(str::to_string),
        }
    }
}

/// Final state of one counter after the animation completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterResult {
    pub label: String,
    pub target: i64,
    pub text: String,
    pub frames: usize,
}

/// Counters shown on the shipped dashboard.
pub fn dashboard_counters() -> Vec<CounterSpec> {
    vec![
        CounterSpec::new("Households served", Some("5000")),
        CounterSpec::new("Collection routes", Some("48")),
        CounterSpec::new("Complaints logged", Some("random-complaints")),
    ]
}

/// Animates every counter to completion with synthetic time.
pub fn run_counters(
    config: &SiteConfig,
    specs: &[CounterSpec],
    mut unit_sample: impl FnMut() -> f64,
) -> Vec<CounterResult> {
    let counters = &config.counters;
    let mut animator = CounterAnimator::new(counters.duration_ms, counters.thousands_separator);
    let mut results = specs
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            let target = CounterTarget::parse(spec.raw_target.as_deref()).resolve(
                counters.random_min,
                counters.random_max,
                unit_sample(),
            );
            animator.start(index, target, 0.0);
            CounterResult {
                label: spec.label.clone(),
                target,
                text: String::new(),
                frames: 0,
            }
        })
        .collect::<Vec<_>>();

    let mut now = 0.0;
    while !animator.is_idle() {
        now += FRAME_INTERVAL_MS;
        for (index, frame) in animator.tick(now) {
            let result = &mut results[index];
            result.text = frame.text;
            result.frames += 1;
        }
    }
    info!(
        "event=counters_done module=cli status=ok counters={} elapsed_ms={now:.0}",
        results.len()
    );
    results
}

/// Applies an optional area lookup; blank input yields `None`.
pub fn lookup_schedule(config: &SiteConfig, area: Option<&str>) -> Option<String> {
    let responder = ScheduleResponder::new(config.replies.pickup_slot.clone());
    responder.respond(area?).map(|reply| reply.message)
}

/// Loads the theme preference and toggles it `toggles` times.
pub fn cycle_theme<S: PreferenceStore>(config: &SiteConfig, store: S, toggles: u32) -> Theme {
    let mut controller = ThemeController::load(store, config.theme_storage_key.clone());
    for _ in 0..toggles {
        controller.toggle();
    }
    controller.current()
}

pub fn footer_text(year: i32) -> String {
    year_stamp(year)
}

#[cfg(test)]
mod tests {
    use super::{cycle_theme, dashboard_counters, lookup_schedule, run_counters, CounterSpec};
    use ecosmart_core::{MemoryPreferenceStore, PreferenceStore, SiteConfig, Theme};

    #[test]
    fn counters_finish_on_their_targets() {
        let config = SiteConfig::default();
        let results = run_counters(&config, &dashboard_counters(), || 0.5);
        assert_eq!(results[0].text, "5,000");
        assert_eq!(results[1].text, "48");
        assert_eq!(results[2].target, 260);
        assert_eq!(results[2].text, "260");
        assert!(results.iter().all(|result| result.frames > 1));
    }

    #[test]
    fn negative_counter_ends_below_zero() {
        let config = SiteConfig::default();
        let specs = [CounterSpec::new("Backlog", Some("-5"))];
        let results = run_counters(&config, &specs, || 0.5);
        assert_eq!(results[0].target, -5);
        assert_eq!(results[0].text, "-5");
    }

    #[test]
    fn blank_area_yields_no_reply() {
        let config = SiteConfig::default();
        assert_eq!(lookup_schedule(&config, None), None);
        assert_eq!(lookup_schedule(&config, Some("  ")), None);
        assert_eq!(
            lookup_schedule(&config, Some("Downtown")).as_deref(),
            Some("Next Pickup Date for \"Downtown\": Monday, 10 AM")
        );
    }

    #[test]
    fn theme_cycles_persist_through_store() {
        let config = SiteConfig::default();
        let store = MemoryPreferenceStore::new();
        assert_eq!(cycle_theme(&config, &store, 1), Theme::Dark);
        assert_eq!(cycle_theme(&config, &store, 0), Theme::Dark);
        assert_eq!(cycle_theme(&config, &store, 2), Theme::Dark);
        assert_eq!(
            store
                .get_item(&config.theme_storage_key)
                .unwrap()
                .as_deref(),
            Some("dark")
        );
    }
}
