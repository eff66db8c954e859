//! Input state machine - unified state management for pointer interactions.
//!
//! A single explicit state machine instead of scattered per-gesture boolean
//! flags, making impossible states unrepresentable.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning          (pan button down on the surface)
//! Idle -> Selecting        (select button down on the surface)
//!
//! Any -> Idle              (pointer up / pointer out / key up)
//! ```

use crate::canvas::Rgba;
use crate::types::BlockKey;

/// Unified input state for all pointer interactions.
#[derive(Debug, Clone, PartialEq)]
pub enum InputState {
    /// No active input operation
    Idle,

    /// Horizontal panning (pan button held)
    Panning {
        /// Last pointer position for delta calculation
        last_pos: (f32, f32),
    },

    /// Sweep selection (select button held)
    Selecting {
        /// Pixel color sampled under the pointer at the previous move,
        /// used by the color-changed retest policy
        last_sample: Option<Rgba>,
        /// Cell the previous move resolved to, used by the always-retest
        /// policy so staying inside one cell toggles it once
        last_key: Option<BlockKey>,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InputState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if currently panning the grid
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Returns true if currently sweep-selecting
    pub fn is_selecting(&self) -> bool {
        matches!(self, Self::Selecting { .. })
    }

    /// Returns true if any gesture is active
    pub fn is_gesturing(&self) -> bool {
        !self.is_idle()
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Start panning from the given pointer position
    pub fn start_panning(&mut self, pos: (f32, f32)) {
        *self = Self::Panning { last_pos: pos };
    }

    /// Start sweep selection
    pub fn start_selecting(&mut self) {
        *self = Self::Selecting {
            last_sample: None,
            last_key: None,
        };
    }

    /// Get the last pointer position (for panning)
    pub fn last_pos(&self) -> Option<(f32, f32)> {
        match self {
            Self::Panning { last_pos } => Some(*last_pos),
            _ => None,
        }
    }

    /// Update the last pointer position (for panning)
    pub fn update_last_pos(&mut self, pos: (f32, f32)) {
        if let Self::Panning { last_pos } = self {
            *last_pos = pos;
        }
    }

    /// Get the last sampled pixel color (for selection retesting)
    pub fn last_sample(&self) -> Option<Rgba> {
        match self {
            Self::Selecting { last_sample, .. } => *last_sample,
            _ => None,
        }
    }

    /// Store the sampled pixel color (for selection retesting)
    pub fn set_last_sample(&mut self, sample: Rgba) {
        if let Self::Selecting { last_sample, .. } = self {
            *last_sample = Some(sample);
        }
    }

    /// Get the cell the previous selection sample resolved to
    pub fn last_key(&self) -> Option<BlockKey> {
        match self {
            Self::Selecting { last_key, .. } => *last_key,
            _ => None,
        }
    }

    /// Store the cell the current selection sample resolved to
    pub fn set_last_key(&mut self, key: Option<BlockKey>) {
        if let Self::Selecting { last_key, .. } = self {
            *last_key = key;
        }
    }
}
