use super::*;

#[test]
fn shell_state_default_menu_closed() {
    assert!(!ShellState::default().menu_open);
}

#[test]
fn toggle_menu_flips_visibility() {
    let mut state = ShellState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn close_menu_is_idempotent() {
    let mut state = ShellState { menu_open: true };
    state.close_menu();
    state.close_menu();
    assert!(!state.menu_open);
}
