//! Keyboard tracking and shortcut chord tests.

use crate::helpers::{pan_at, pannable_grid, small_grid, TestGridBuilder};
use pulseboard::{KeyEvent, ShortcutAction, Shortcuts};

#[test]
fn test_pressed_keys_are_tracked() {
    let mut grid = small_grid();

    grid.handle_key_down(KeyEvent::new(23));
    grid.handle_key_down(KeyEvent::new(54));
    assert!(grid.pressed_keys().contains(&23));
    assert!(grid.pressed_keys().contains(&54));

    grid.handle_key_up(KeyEvent::new(23));
    assert!(!grid.pressed_keys().contains(&23));
    assert!(grid.pressed_keys().contains(&54));
}

#[test]
fn test_default_chord_resolves_a_shortcut() {
    let mut grid = small_grid();

    grid.handle_key_down(KeyEvent::new(23));
    grid.handle_key_down(KeyEvent::new(54));
    assert_eq!(grid.active_shortcut(), None);

    grid.handle_key_down(KeyEvent::new(33));
    assert_eq!(
        grid.active_shortcut(),
        Some(ShortcutAction::MoveSelectionUp)
    );
}

#[test]
fn test_custom_chord_resolves_its_action() {
    let shortcuts = Shortcuts {
        delete_selection: vec![46],
        ..Shortcuts::default()
    };
    let mut grid = TestGridBuilder::new()
        .with_frequencies(2)
        .with_measure(2, 1)
        .with_shortcuts(shortcuts)
        .build();

    grid.handle_key_down(KeyEvent::new(46));
    assert_eq!(
        grid.active_shortcut(),
        Some(ShortcutAction::DeleteSelection)
    );

    grid.handle_key_up(KeyEvent::new(46));
    assert_eq!(grid.active_shortcut(), None);
}

#[test]
fn test_key_up_cancels_an_active_pan() {
    let mut grid = pannable_grid();

    grid.handle_pointer_down(pan_at(100.0, 30.0));
    grid.handle_key_down(KeyEvent::new(23));
    grid.handle_key_up(KeyEvent::new(23));

    assert!(grid.input().is_idle());

    grid.handle_pointer_move(pan_at(60.0, 30.0));
    assert_eq!(grid.view().offset_x, 0.0);
}
