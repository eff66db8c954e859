//! Grid state - the PulseGrid struct definition and view sub-struct.

use crate::canvas::Canvas;
use crate::config::GridConfig;
use crate::constants::ORIGIN_SNAP_THRESHOLD;
use crate::input::InputState;
use crate::spatial_index::SpatialIndex;
use crate::types::{Block, Measure};
use std::collections::HashSet;

/// Scroll and viewport state.
///
/// The horizontal offset is the only live scroll axis; the vertical offset
/// is carried through layout but locked to 0 by the interaction controller.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    /// Horizontal scroll offset, always ≥ 0
    pub offset_x: f32,
    /// Vertical scroll offset, locked to 0
    pub offset_y: f32,
    /// Visible surface width
    pub viewport_width: f32,
    /// Visible surface height
    pub viewport_height: f32,
    /// Authoritative content width from the last layout pass
    pub content_width: f32,
}

impl ViewState {
    /// Clamp the horizontal offset against the current content width.
    ///
    /// Content that fits the viewport anchors left (offset forced to 0);
    /// otherwise the offset stays within
    /// `[0, content_width - viewport_width + margin + border]`, with values
    /// below the snap threshold collapsing to exactly 0.
    pub fn clamp_offset(&mut self, margin: f32, border: f32) {
        if self.content_width <= self.viewport_width {
            self.offset_x = 0.0;
            return;
        }

        let max = self.content_width - self.viewport_width + margin + border;
        if self.offset_x > max {
            self.offset_x = max;
        } else if self.offset_x < ORIGIN_SNAP_THRESHOLD {
            self.offset_x = 0.0;
        }
    }
}

/// The grid controller.
///
/// Owns the drawing capability, the configuration and measure sequence, the
/// block sequence from the last layout pass, its spatial index, and the
/// pointer/keyboard interaction state. All mutation happens inside the
/// `handle_*` event methods or the explicit measure API.
pub struct PulseGrid<C: Canvas> {
    pub(crate) canvas: C,
    pub(crate) config: GridConfig,
    pub(crate) measures: Vec<Measure>,
    pub(crate) blocks: Vec<Block>,
    pub(crate) index: SpatialIndex,
    pub(crate) view: ViewState,
    pub(crate) input: InputState,
    pub(crate) pressed_keys: HashSet<u32>,
}
