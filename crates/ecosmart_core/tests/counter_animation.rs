use ecosmart_core::{CounterAnimator, CounterTarget, CounterTask};

const DURATION_MS: f64 = 1600.0;

fn run_to_end(target: i64) -> String {
    let mut task = CounterTask::new(target, 0.0, DURATION_MS);
    let mut now = 0.0;
    let mut last = task.tick(now, ',');
    while !last.finished {
        now += 16.0;
        last = task.tick(now, ',');
    }
    last.text
}

#[test]
fn fixed_target_ends_exactly_on_target() {
    let target = CounterTarget::parse(Some("500")).resolve(120, 400, 0.5);
    assert_eq!(run_to_end(target), "500");
}

#[test]
fn large_targets_are_grouped() {
    assert_eq!(run_to_end(5000), "5,000");
}

#[test]
fn values_never_decrease_and_never_overshoot() {
    let mut task = CounterTask::new(1234, 100.0, DURATION_MS);
    let mut previous = 0;
    let mut now = 100.0;
    loop {
        let frame = task.tick(now, ',');
        assert!(frame.value >= previous);
        assert!(frame.value <= 1234);
        previous = frame.value;
        if frame.finished {
            break;
        }
        now += 7.0;
    }
    assert_eq!(previous, 1234);
}

#[test]
fn finishes_when_progress_reaches_one() {
    let mut task = CounterTask::new(10, 0.0, DURATION_MS);
    assert!(!task.tick(1599.0, ',').finished);
    let frame = task.tick(1600.0, ',');
    assert!(frame.finished);
    assert_eq!(frame.value, 10);
}

#[test]
fn random_target_lands_inside_range() {
    for step in 0..=100 {
        let unit = f64::from(step) / 100.0;
        let target = CounterTarget::parse(Some("random-complaints")).resolve(120, 400, unit);
        assert!((120..400).contains(&target), "target {target} out of range");
        assert_eq!(run_to_end(target), target.to_string());
    }
}

#[test]
fn malformed_target_animates_to_zero() {
    let target = CounterTarget::parse(Some("lots")).resolve(120, 400, 0.3);
    assert_eq!(target, 0);
    assert_eq!(run_to_end(target), "0");
}

#[test]
fn negative_target_counts_down_to_its_value() {
    let target = CounterTarget::parse(Some("-5")).resolve(120, 400, 0.3);
    assert_eq!(target, -5);
    assert_eq!(run_to_end(target), "-5");
    assert_eq!(run_to_end(-12_500), "-12,500");
}

#[test]
fn animator_keeps_independent_clocks() {
    let mut animator = CounterAnimator::new(DURATION_MS, ',');
    animator.start("early", 100, 0.0);
    animator.start("late", 100, 800.0);

    let frames = animator.tick(800.0);
    assert_eq!(frames[0].1.value, 50);
    assert_eq!(frames[1].1.value, 0);

    let frames = animator.tick(1600.0);
    assert!(frames[0].1.finished);
    assert_eq!(frames[1].1.value, 50);
    assert_eq!(animator.len(), 1);

    let frames = animator.tick(2400.0);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].0, "late");
    assert!(frames[0].1.finished);
    assert!(animator.is_idle());
}

#[test]
fn zero_target_completes_immediately_in_animator() {
    let mut animator = CounterAnimator::new(DURATION_MS, ',');
    animator.start(0usize, 0, 0.0);
    let frames = animator.tick(0.0);
    assert_eq!(frames[0].1.text, "0");
    assert!(animator.is_idle());
}
