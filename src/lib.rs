//! pulseboard - a grid sequencer view over an abstract 2D drawing surface.
//!
//! A sequence of measures, each subdivided into pulse columns and frequency
//! rows, is laid out into pixel-positioned cells ("blocks"), painted through
//! a [`Canvas`] capability, panned horizontally by pointer drag, and toggled
//! cell-by-cell via pointer selection.
//!
//! The crate is split leaf-first:
//!
//! - [`layout`] - the pure layout engine (geometry in, blocks out)
//! - [`spatial_index`] - R-tree point queries over the block sequence
//! - [`grid`] - the controller owning configuration, measures, and state
//! - [`input`] - pointer/keyboard state machine and event handlers
//! - [`canvas`] - the drawing capability consumed by the controller
//!
//! All event handling is synchronous and single-threaded; the host event
//! loop serializes callbacks, so a layout + hit-test + repaint within one
//! handler is atomic with respect to other input.

pub mod canvas;
pub mod config;
pub mod constants;
pub mod error;
pub mod grid;
pub mod input;
pub mod layout;
pub mod perf;
mod render;
pub mod spatial_index;
pub mod types;

pub use canvas::{Canvas, Rgba};
pub use config::{GridConfig, RetestPolicy, ShortcutAction, Shortcuts};
pub use error::{ConfigError, ConfigResult};
pub use grid::{PulseGrid, ViewState};
pub use input::InputState;
pub use types::{Block, BlockKey, KeyEvent, Measure, PointerButton, PointerEvent};
