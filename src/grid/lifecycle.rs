//! Grid lifecycle - construction, relayout, resize, and the measure API.

use super::{PulseGrid, ViewState};
use crate::canvas::Canvas;
use crate::config::GridConfig;
use crate::constants::VIEWPORT_WIDTH_FACTOR;
use crate::error::ConfigResult;
use crate::input::InputState;
use crate::layout;
use crate::profile_scope;
use crate::spatial_index::SpatialIndex;
use crate::types::{Block, BlockKey, Measure};
use std::collections::HashSet;

impl<C: Canvas> PulseGrid<C> {
    /// Build a grid over the given drawing surface.
    ///
    /// `container_width` is the hosting container's width; the viewport takes
    /// it minus a small breathing-room factor, and the viewport height is
    /// derived from the configured row geometry. The configuration is
    /// validated here — the rest of the crate assumes it is well-formed.
    pub fn new(
        canvas: C,
        container_width: f32,
        config: GridConfig,
        measures: Vec<Measure>,
    ) -> ConfigResult<Self> {
        let config = config.validated()?;

        let mut grid = Self {
            canvas,
            config,
            measures,
            blocks: Vec::new(),
            index: SpatialIndex::new(),
            view: ViewState::default(),
            input: InputState::default(),
            pressed_keys: HashSet::new(),
        };

        grid.apply_container_width(container_width);
        grid.relayout();
        Ok(grid)
    }

    fn viewport_height(config: &GridConfig) -> f32 {
        let frequencies = config.frequencies as f32;
        config.cell_height * frequencies
            + config.border * (frequencies + 1.0)
            + config.margin * 2.0
    }

    fn apply_container_width(&mut self, container_width: f32) {
        self.view.viewport_width = container_width - container_width * VIEWPORT_WIDTH_FACTOR;
        self.view.viewport_height = Self::viewport_height(&self.config);
    }

    /// Recompute the block sequence and spatial index for the current
    /// offsets, carrying selection over from the previous pass.
    pub(crate) fn relayout(&mut self) {
        profile_scope!("relayout");

        let pass = layout::compute(
            &self.config,
            &self.measures,
            self.view.offset_x,
            self.view.offset_y,
            &self.blocks,
        );
        self.blocks = pass.blocks;
        self.view.content_width = pass.content_width;
        self.index.rebuild(&self.blocks);
    }

    /// The host container was resized: recompute the viewport, reset both
    /// offsets, relayout and repaint.
    pub fn handle_resize(&mut self, container_width: f32) {
        self.apply_container_width(container_width);
        self.view.offset_x = 0.0;
        self.view.offset_y = 0.0;
        self.relayout();
        self.draw();
        tracing::debug!(
            viewport_width = self.view.viewport_width,
            viewport_height = self.view.viewport_height,
            "resized"
        );
    }

    /// Toggle the cell under the given surface coordinate, if any, and
    /// repaint exactly that cell. A coordinate in a margin, border gutter,
    /// or beyond all content leaves selection untouched and returns `None`.
    pub fn toggle_at(&mut self, x: f32, y: f32) -> Option<BlockKey> {
        profile_scope!("toggle_at");

        self.relayout();
        let index = self.index.block_at(x, y)?;
        Some(self.toggle_block(index))
    }

    /// Flip one block's selection flag and repaint it in place.
    pub(crate) fn toggle_block(&mut self, index: usize) -> BlockKey {
        let block = &mut self.blocks[index];
        block.selected = !block.selected;
        let cell = *block;

        let color = if cell.selected {
            self.config.selected_color.as_str()
        } else {
            self.config.background_color.as_str()
        };
        self.canvas.set_fill_style(color);
        self.canvas.fill_rect(cell.x, cell.y, cell.width, cell.height);

        tracing::debug!(key = ?cell.key, selected = cell.selected, "toggled");
        cell.key
    }

    // ========================================================================
    // Measure API
    // ========================================================================

    /// Append a measure at the right edge of the sequence.
    pub fn push_measure(&mut self, measure: Measure) {
        self.measures.push(measure);
        self.relayout();
    }

    /// Remove the measure at `index`. Selection keyed to later measures is
    /// dropped rather than remapped.
    pub fn remove_measure(&mut self, index: usize) -> Option<Measure> {
        if index >= self.measures.len() {
            return None;
        }
        let removed = self.measures.remove(index);
        self.relayout();
        Some(removed)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Keys of all currently selected cells, in block order.
    pub fn selected_keys(&self) -> Vec<BlockKey> {
        self.blocks
            .iter()
            .filter(|block| block.selected)
            .map(|block| block.key)
            .collect()
    }
}
