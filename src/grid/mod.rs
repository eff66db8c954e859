//! The grid controller.
//!
//! `PulseGrid` ties the pure layout engine to a concrete drawing surface and
//! the input state machine. Construction and the measure-mutation API live in
//! `lifecycle`; the struct definitions live in `state`; event handling is
//! implemented in [`crate::input`]; painting in the `render` module.

mod lifecycle;
mod state;

pub use state::{PulseGrid, ViewState};
