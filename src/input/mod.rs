//! Pointer and keyboard input handling for the grid.
//!
//! This module implements the interaction controller's event surface:
//! gesture initiation, drag-to-pan, sweep selection, and key tracking.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current interaction mode, keeping transitions enumerable and
//! impossible states unrepresentable.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `pointer_down` - Gesture initiation and click-to-select
//! - `pointer_up` - Gesture finalization and pointer-out cancellation
//! - `drag` - Pointer move handling (pan and sweep-select operations)
//! - `keyboard` - Pressed-key tracking and shortcut chords

mod drag;
mod keyboard;
mod pointer_down;
mod pointer_up;
mod state;

pub use state::InputState;
