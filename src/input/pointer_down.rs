//! Pointer down event handling - gesture initiation and click-to-select.

use crate::canvas::Canvas;
use crate::config::RetestPolicy;
use crate::grid::PulseGrid;
use crate::profile_scope;
use crate::types::PointerEvent;

impl<C: Canvas> PulseGrid<C> {
    /// A pointer button was pressed on the surface.
    ///
    /// The pan button arms the panning gesture; the select button arms sweep
    /// selection and immediately resolves the press coordinate to a cell
    /// toggle. Any other button leaves the controller idle.
    pub fn handle_pointer_down(&mut self, event: PointerEvent) {
        profile_scope!("handle_pointer_down");

        if event.button == self.config.pan_button {
            self.input.start_panning((event.x, event.y));
            return;
        }

        if event.button == self.config.select_button {
            self.input.start_selecting();
            let key = self.toggle_at(event.x, event.y);
            self.input.set_last_key(key);

            if self.config.move_retest == RetestPolicy::ColorChanged {
                let sample = self.canvas.pixel_color(event.x, event.y);
                self.input.set_last_sample(sample);
            }
            return;
        }

        tracing::trace!(button = ?event.button, "unbound button ignored");
    }
}
