//! Keyboard event handling - pressed-key tracking and shortcut chords.

use crate::canvas::Canvas;
use crate::config::ShortcutAction;
use crate::grid::PulseGrid;
use crate::types::KeyEvent;
use std::collections::HashSet;

impl<C: Canvas> PulseGrid<C> {
    /// A key went down: remember it for chord matching.
    pub fn handle_key_down(&mut self, event: KeyEvent) {
        self.pressed_keys.insert(event.code);
    }

    /// A key came up: forget it and cancel any active pointer gesture.
    pub fn handle_key_up(&mut self, event: KeyEvent) {
        self.pressed_keys.remove(&event.code);
        self.input.reset();
    }

    /// Key codes currently held down.
    pub fn pressed_keys(&self) -> &HashSet<u32> {
        &self.pressed_keys
    }

    /// The shortcut action whose chord is fully held, if any. The host is
    /// expected to poll this after `handle_key_down`; the operations
    /// themselves live outside this crate.
    pub fn active_shortcut(&self) -> Option<ShortcutAction> {
        self.config.shortcuts.action_for(&self.pressed_keys)
    }
}
