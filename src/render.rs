//! Painting the grid onto the Canvas capability.
//!
//! One full repaint is: clear the viewport, stroke the border lattice around
//! every measure, then fill each visible cell with its selection color.
//! Cells more than one cell-size outside the viewport are culled.

use crate::canvas::Canvas;
use crate::constants::CULLING_SLACK_CELLS;
use crate::grid::PulseGrid;
use crate::profile_scope;

impl<C: Canvas> PulseGrid<C> {
    /// Idempotent full repaint of the current layout.
    pub fn draw(&mut self) {
        profile_scope!("draw");

        self.canvas.clear_rect(
            0.0,
            0.0,
            self.view.viewport_width,
            self.view.viewport_height,
        );
        self.stroke_lattice();
        self.fill_blocks();
    }

    /// Stroke the border lattice: for each measure, horizontal and vertical
    /// bands `border` pixels thick around its cells, drawn as 1px path lines.
    fn stroke_lattice(&mut self) {
        let frequencies = self.config.frequencies;
        let band = self.config.border as u32;
        let step_x = self.config.cell_width + self.config.border;
        let step_y = self.config.cell_height + self.config.border;
        let lattice_height = self.config.cell_height * frequencies as f32
            + self.config.border * (frequencies as f32 + 1.0);

        self.canvas.begin_path();

        let mut cursor = 0.0_f32;
        for measure in &self.measures {
            let columns = measure.column_count();
            if columns == 0 {
                continue;
            }

            let x0 = cursor + self.config.margin - self.view.offset_x;
            let y0 = self.config.margin - self.view.offset_y;
            let lattice_width = columns as f32 * step_x + self.config.border;

            for row_line in 0..=frequencies {
                let top = y0 + step_y * row_line as f32;
                for z in 0..=band {
                    let y = top + z as f32;
                    self.canvas.move_to(x0, y);
                    self.canvas.line_to(x0 + lattice_width, y);
                }
            }

            for column_line in 0..=columns {
                let left = x0 + step_x * column_line as f32;
                for z in 0..=band {
                    let x = left + z as f32;
                    self.canvas.move_to(x, y0);
                    self.canvas.line_to(x, y0 + lattice_height);
                }
            }

            cursor += columns as f32 * step_x + self.config.margin + self.config.separation;
        }

        self.canvas.set_stroke_style(&self.config.border_color);
        self.canvas.stroke();
    }

    /// Fill every cell within the culling window.
    fn fill_blocks(&mut self) {
        let slack_x = self.config.cell_width * CULLING_SLACK_CELLS;
        let slack_y = self.config.cell_height * CULLING_SLACK_CELLS;

        for block in &self.blocks {
            let out_x = block.x < -slack_x || block.x > self.view.viewport_width + slack_x;
            let out_y = block.y < -slack_y || block.y > self.view.viewport_height + slack_y;
            if out_x || out_y {
                continue;
            }

            let color = if block.selected {
                self.config.selected_color.as_str()
            } else {
                self.config.background_color.as_str()
            };
            self.canvas.set_fill_style(color);
            self.canvas
                .fill_rect(block.x, block.y, block.width, block.height);
        }
    }
}
