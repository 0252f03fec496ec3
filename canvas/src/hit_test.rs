use super::*;

fn probe(note: Option<&str>, in_control: bool) -> TargetProbe {
    TargetProbe { note_id: note.map(str::to_owned), in_control }
}

#[test]
fn drawing_mode_routes_everything_to_overlay() {
    assert_eq!(resolve_target(true, probe(Some("1"), true)), PointerTarget::InkOverlay);
    assert_eq!(resolve_target(true, probe(None, false)), PointerTarget::InkOverlay);
}

#[test]
fn note_beats_control() {
    assert_eq!(resolve_target(false, probe(Some("n"), true)), PointerTarget::Note("n".to_owned()));
}

#[test]
fn control_beats_background() {
    assert_eq!(resolve_target(false, probe(None, true)), PointerTarget::Control);
}

#[test]
fn empty_probe_is_background() {
    assert_eq!(resolve_target(false, TargetProbe::default()), PointerTarget::Background);
}

#[test]
fn only_background_allows_pan() {
    assert!(PointerTarget::Background.allows_pan());
    assert!(!PointerTarget::Control.allows_pan());
    assert!(!PointerTarget::Note("1".to_owned()).allows_pan());
    assert!(!PointerTarget::InkOverlay.allows_pan());
}
