//! Pointer move handling - panning and sweep selection.
//!
//! ## Performance Notes
//!
//! Pointer move fires very frequently during gestures (potentially 60+
//! times per second). Key optimizations:
//! - Early exit when idle
//! - Color-changed retest policy avoids re-running layout for moves that
//!   stay inside the same cell
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::canvas::Canvas;
use crate::config::RetestPolicy;
use crate::grid::PulseGrid;
use crate::profile_scope;
use crate::types::PointerEvent;

impl<C: Canvas> PulseGrid<C> {
    /// The pointer moved across the surface.
    ///
    /// While panning, the horizontal delta since the last sample is damped
    /// by `drag_sensibility`, accumulated into the offset with the sign
    /// inverted (content follows the pointer: moving left advances through
    /// content to the right), clamped, and the whole grid is relaid out and
    /// repainted. Vertical panning is locked. While selecting, the move is
    /// resolved to a cell toggle according to the configured retest policy.
    pub fn handle_pointer_move(&mut self, event: PointerEvent) {
        profile_scope!("handle_pointer_move");

        if self.input.is_panning() {
            let Some((last_x, _)) = self.input.last_pos() else {
                return;
            };

            let delta = event.x - last_x;
            let effective = delta * (1.0 - self.config.drag_sensibility);

            self.view.offset_x -= effective;
            self.view.offset_y = 0.0;
            self.view
                .clamp_offset(self.config.margin, self.config.border);
            self.input.update_last_pos((event.x, event.y));

            tracing::debug!(offset_x = self.view.offset_x, "panned");

            self.relayout();
            self.draw();
        } else if self.input.is_selecting() {
            match self.config.move_retest {
                RetestPolicy::Always => {
                    self.relayout();
                    let hit = self.index.block_at(event.x, event.y);
                    let key = hit.map(|index| self.blocks[index].key);
                    if key == self.input.last_key() {
                        return;
                    }

                    if let Some(index) = hit {
                        self.toggle_block(index);
                    }
                    self.input.set_last_key(key);
                }
                RetestPolicy::ColorChanged => {
                    let sample = self.canvas.pixel_color(event.x, event.y);
                    if self.input.last_sample() == Some(sample) {
                        return;
                    }

                    self.toggle_at(event.x, event.y);
                    // Re-sample after the repaint so staying put does not
                    // read the fresh fill as another cell entry.
                    let settled = self.canvas.pixel_color(event.x, event.y);
                    self.input.set_last_sample(settled);
                }
            }
        }
        // Idle moves are reserved for future hover behavior.
    }
}
