//! Smooth scroll resolution for triggers and same-page nav links.
//!
//! # Invariants
//! - Nav links only intercept navigation when `href` starts with `#`.
//! - A target that does not resolve is a silent no-op.
//! - Nothing is remembered between clicks.

use log::debug;

/// A click source, carrying the attribute read at click time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTrigger<'a> {
    /// Element carrying a scroll-target attribute with a selector.
    Marker(Option<&'a str>),
    /// Navigation link with its raw `href`.
    NavLink(Option<&'a str>),
}

/// What a click should do before any lookup happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollPlan<'a> {
    pub prevent_default: bool,
    pub target: Option<&'a str>,
}

/// Result of handling one click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    Scrolled,
    TargetMissing,
    /// The click is not ours to handle (e.g. an off-page link).
    Ignored,
}

/// Host capable of smooth-scrolling to a selector.
pub trait AnchorHost {
    /// Scrolls to the first match; returns `false` when nothing matches
    /// or the selector is invalid.
    fn scroll_into_view(&self, selector: &str) -> bool;
}

/// Decides interception and target for a trigger.
pub fn plan(trigger: ScrollTrigger<'_>) -> ScrollPlan<'_> {
    match trigger {
        ScrollTrigger::Marker(selector) => ScrollPlan {
            prevent_default: false,
            target: selector.filter(|value| !value.trim().is_empty()),
        },
        ScrollTrigger::NavLink(Some(href)) if href.starts_with('#') => ScrollPlan {
            prevent_default: true,
            target: Some(href).filter(|value| value.len() > 1),
        },
        ScrollTrigger::NavLink(_) => ScrollPlan {
            prevent_default: false,
            target: None,
        },
    }
}

/// Resolves a click against `host`.
pub fn handle(trigger: ScrollTrigger<'_>, host: &impl AnchorHost) -> ScrollOutcome {
    let plan = plan(trigger);
    match plan.target {
        Some(selector) if host.scroll_into_view(selector) => ScrollOutcome::Scrolled,
        Some(selector) => {
            debug!("event=smooth_scroll module=scroll status=skipped reason=target_missing selector={selector}");
            ScrollOutcome::TargetMissing
        }
        None if plan.prevent_default || matches!(trigger, ScrollTrigger::Marker(_)) => {
            ScrollOutcome::TargetMissing
        }
        None => ScrollOutcome::Ignored,
    }
}
