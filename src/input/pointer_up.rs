//! Pointer up / pointer out event handling - gesture finalization.

use crate::canvas::Canvas;
use crate::grid::PulseGrid;
use crate::types::PointerEvent;

impl<C: Canvas> PulseGrid<C> {
    /// A pointer button was released: the active gesture (if any) ends.
    /// The press already resolved any selection toggle, so nothing is
    /// finalized here beyond the state transition.
    pub fn handle_pointer_up(&mut self, _event: PointerEvent) {
        self.input.reset();
    }

    /// The pointer left the surface: cancel whatever gesture was active.
    pub fn handle_pointer_out(&mut self) {
        self.input.reset();
    }
}
