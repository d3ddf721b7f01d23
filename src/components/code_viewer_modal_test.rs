use super::*;

#[test]
fn escape_closes_dialog() {
    assert!(closes_dialog("Escape"));
    assert!(closes_dialog("Esc"));
}

#[test]
fn other_keys_leave_dialog_open() {
    for key in ["Enter", "Tab", " ", "e", "escape"] {
        assert!(!closes_dialog(key), "{key:?} should not close the viewer");
    }
}
