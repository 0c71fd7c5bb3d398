//! Schedule lookup and complaint form responders.
//!
//! # Invariants
//! - Both responders are stateless and synchronous.
//! - Nothing entered into either form leaves the page.

use log::debug;

/// Reply rendered into the schedule result region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleReply {
    pub area: String,
    pub message: String,
}

/// Answers pickup schedule lookups with a fixed slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleResponder {
    pickup_slot: String,
}

impl ScheduleResponder {
    pub fn new(pickup_slot: impl Into<String>) -> Self {
        Self {
            pickup_slot: pickup_slot.into(),
        }
    }

    /// Builds the reply for a raw area name.
    ///
    /// Returns `None` for blank input; the result region must stay untouched.
    pub fn respond(&self, raw_area: &str) -> Option<ScheduleReply> {
        let area = raw_area.trim();
        if area.is_empty() {
            debug!("event=schedule_lookup module=forms status=skipped reason=blank_area");
            return None;
        }
        debug!(
            "event=schedule_lookup module=forms status=ok area_chars={}",
            area.chars().count()
        );
        Some(ScheduleReply {
            area: area.to_string(),
            message: format!("Next Pickup Date for \"{area}\": {}", self.pickup_slot),
        })
    }
}

/// Acknowledgement for a complaint submission.
///
/// Hosts show it in a blocking alert and then always clear the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintReceipt {
    pub acknowledgement: String,
}

/// Acknowledges every complaint unconditionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintResponder {
    acknowledgement: String,
}

impl ComplaintResponder {
    pub fn new(acknowledgement: impl Into<String>) -> Self {
        Self {
            acknowledgement: acknowledgement.into(),
        }
    }

    pub fn submit(&self) -> ComplaintReceipt {
        debug!("event=complaint_submit module=forms status=ok");
        ComplaintReceipt {
            acknowledgement: self.acknowledgement.clone(),
        }
    }
}
