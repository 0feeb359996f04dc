use moodchart_rs::interaction::OneShotHint;

#[test]
fn interaction_before_timeout_hides_only_after_timeout() {
    let mut hint = OneShotHint::new(0.0, 10.0);

    assert!(!hint.on_primary_interaction(2.0));
    assert!(hint.has_interacted());
    assert!(hint.is_visible(), "visible at 5 s");

    assert!(hint.on_timer_fired(10.0));
    assert!(!hint.is_visible(), "hidden after 10 s");
}

#[test]
fn interaction_after_timeout_hides_immediately() {
    let mut hint = OneShotHint::new(0.0, 10.0);

    assert!(!hint.on_timer_fired(10.0));
    assert!(hint.timeout_elapsed());
    assert!(hint.is_visible(), "timeout alone keeps the hint");

    assert!(hint.on_primary_interaction(15.0));
    assert!(!hint.is_visible());
}

#[test]
fn neither_condition_alone_dismisses() {
    let mut interacted = OneShotHint::new(0.0, 10.0);
    interacted.on_primary_interaction(1.0);
    interacted.on_primary_interaction(3.0);
    assert!(interacted.is_visible());

    let mut timed_out = OneShotHint::new(0.0, 10.0);
    timed_out.on_timer_fired(12.0);
    assert!(timed_out.is_visible());
}

#[test]
fn deadline_is_relative_to_draw_time() {
    let mut hint = OneShotHint::new(100.0, 10.0);
    hint.on_primary_interaction(101.0);

    assert_eq!(hint.deadline(), 110.0);
    assert!(!hint.on_timer_fired(105.0));
    assert!(hint.is_visible());
    assert!(hint.on_timer_fired(110.5));
}

#[test]
fn repeated_events_after_dismissal_report_no_change() {
    let mut hint = OneShotHint::new(0.0, 10.0);
    hint.on_primary_interaction(2.0);
    hint.on_timer_fired(10.0);

    assert!(!hint.on_primary_interaction(20.0));
    assert!(!hint.on_timer_fired(30.0));
    assert!(!hint.is_visible());
}
