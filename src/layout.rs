//! Layout engine: configuration + measures + scroll offset in, blocks out.
//!
//! This is the one pure, dependency-free piece of the crate. Blocks are
//! emitted in measure order, then column order, then row order; both
//! hit-testing and rendering rely on that ordering. The returned content
//! width is the authoritative value for offset clamping and panning
//! decisions.

use crate::config::GridConfig;
use crate::types::{Block, BlockKey, Measure};
use std::collections::HashSet;

/// Result of one layout pass.
#[derive(Clone, Debug)]
pub struct LayoutPass {
    /// All blocks, ordered measure-major, then column, then row
    pub blocks: Vec<Block>,
    /// Total content width, without the trailing separation
    pub content_width: f32,
}

/// Compute the block sequence for the given scroll offset.
///
/// Selection is carried over from `previous` by composite key, so a cell
/// stays selected across scroll- and resize-triggered relayouts, and across
/// measure appends that leave earlier measures untouched.
pub fn compute(
    config: &GridConfig,
    measures: &[Measure],
    offset_x: f32,
    offset_y: f32,
    previous: &[Block],
) -> LayoutPass {
    let frequencies = config.frequencies as usize;
    let total_columns: usize = measures.iter().map(|m| m.column_count() as usize).sum();

    let margin_and_border = config.margin + config.border;
    let width_and_border = config.cell_width + config.border;
    let height_and_border = config.cell_height + config.border;
    let margin_and_separation = config.margin + config.separation;

    let mut blocks = Vec::with_capacity(total_columns * frequencies);
    let mut width_measures = 0.0_f32;

    for (measure_index, measure) in measures.iter().enumerate() {
        let columns = measure.column_count() as usize;
        if columns == 0 {
            // Contributes no blocks and no width advance.
            continue;
        }

        let mut column_origin = width_measures + margin_and_border;
        for column in 0..columns {
            let mut row_cursor = margin_and_border;
            for row in 0..frequencies {
                blocks.push(Block {
                    x: column_origin - offset_x,
                    y: row_cursor - offset_y,
                    width: config.cell_width,
                    height: config.cell_height,
                    selected: false,
                    key: BlockKey::new(measure_index, column, row),
                });
                row_cursor += height_and_border;
            }
            column_origin += width_and_border;
        }

        width_measures += columns as f32 * width_and_border + margin_and_separation;
    }

    // No trailing gap after the last measure.
    let content_width = if width_measures > 0.0 {
        width_measures - config.separation
    } else {
        0.0
    };

    carry_selection(previous, &mut blocks);

    LayoutPass {
        blocks,
        content_width,
    }
}

/// Transplant `selected` flags from a previous block sequence by key.
/// Best-effort: keys absent from the new sequence are silently dropped.
fn carry_selection(previous: &[Block], blocks: &mut [Block]) {
    let selected: HashSet<BlockKey> = previous
        .iter()
        .filter(|block| block.selected)
        .map(|block| block.key)
        .collect();

    if selected.is_empty() {
        return;
    }

    for block in blocks {
        if selected.contains(&block.key) {
            block.selected = true;
        }
    }
}
