use super::*;

#[test]
fn default_title_is_normal() {
    let state = AttentionState::default();
    assert!(!state.is_signaled());
    assert_eq!(state.title("lobby"), "Meowww - lobby");
}

#[test]
fn content_while_focused_does_not_signal() {
    let mut state = AttentionState::default();
    assert!(!state.on_new_content(true));
    assert_eq!(state.title("lobby"), "Meowww - lobby");
}

#[test]
fn unfocused_burst_changes_title_exactly_once() {
    let mut state = AttentionState::default();
    let changes = (0..5).filter(|_| state.on_new_content(false)).count();

    assert_eq!(changes, 1);
    assert_eq!(state.title("lobby"), "Meowww !! - lobby");
}

#[test]
fn focus_restores_title_exactly_once() {
    let mut state = AttentionState::default();
    for _ in 0..3 {
        state.on_new_content(false);
    }

    let restores = (0..3).filter(|_| state.on_focus()).count();
    assert_eq!(restores, 1);
    assert_eq!(state.title("lobby"), "Meowww - lobby");
}

#[test]
fn focus_without_signal_is_noop() {
    let mut state = AttentionState::default();
    assert!(!state.on_focus());
}

#[test]
fn signal_rearms_after_focus_cycle() {
    let mut state = AttentionState::default();
    assert!(state.on_new_content(false));
    assert!(state.on_focus());
    assert!(state.on_new_content(false));
}
