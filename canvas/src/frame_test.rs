use super::*;

#[test]
fn new_slot_is_idle() {
    let slot = FrameSlot::new();
    assert!(!slot.is_pending());
}

#[test]
fn first_schedule_does_not_replace() {
    let mut slot = FrameSlot::new();
    assert!(!slot.schedule());
    assert!(slot.is_pending());
}

#[test]
fn repeated_schedule_replaces_outstanding_request() {
    let mut slot = FrameSlot::new();
    slot.schedule();
    assert!(slot.schedule());
    assert!(slot.schedule());
    assert!(slot.is_pending());
}

#[test]
fn take_runs_once_per_burst() {
    let mut slot = FrameSlot::new();
    for _ in 0..5 {
        slot.schedule();
    }
    assert!(slot.take());
    assert!(!slot.take());
    assert!(!slot.is_pending());
}

#[test]
fn schedule_after_take_starts_fresh() {
    let mut slot = FrameSlot::new();
    slot.schedule();
    slot.take();
    assert!(!slot.schedule());
    assert!(slot.take());
}
