use ecosmart_core::{ComplaintResponder, ScheduleResponder, SiteConfig};

fn schedule() -> ScheduleResponder {
    ScheduleResponder::new(SiteConfig::default().replies.pickup_slot)
}

#[test]
fn downtown_gets_exact_reply() {
    let reply = schedule().respond("Downtown").expect("reply expected");
    assert_eq!(
        reply.message,
        "Next Pickup Date for \"Downtown\": Monday, 10 AM"
    );
}

#[test]
fn blank_or_whitespace_area_is_ignored() {
    for raw in ["", "   ", "\t\n"] {
        assert!(schedule().respond(raw).is_none(), "{raw:?} should be ignored");
    }
}

#[test]
fn complaint_is_acknowledged_unconditionally() {
    let responder =
        ComplaintResponder::new(SiteConfig::default().replies.complaint_acknowledgement);
    for _ in 0..3 {
        let receipt = responder.submit();
        assert_eq!(receipt.acknowledgement, "Complaint Registered Successfully!");
    }
}
