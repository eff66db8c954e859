//! Unit tests for the layout engine.

use pulseboard::layout;
use pulseboard::{BlockKey, GridConfig, Measure};

fn two_rows() -> GridConfig {
    GridConfig {
        frequencies: 2,
        ..GridConfig::default()
    }
}

#[test]
fn test_block_count_is_total_columns_times_frequencies() {
    let measures = [Measure::new(4, 1), Measure::new(3, 2), Measure::new(1, 5)];
    let pass = layout::compute(&two_rows(), &measures, 0.0, 0.0, &[]);
    assert_eq!(pass.blocks.len(), (4 + 6 + 5) * 2);
}

#[test]
fn test_every_block_has_the_configured_cell_size() {
    let config = GridConfig::default();
    let measures = [Measure::new(3, 2), Measure::new(2, 1)];
    let pass = layout::compute(&config, &measures, 12.0, 0.0, &[]);

    for block in &pass.blocks {
        assert_eq!(block.width, config.cell_width);
        assert_eq!(block.height, config.cell_height);
    }
}

#[test]
fn test_single_measure_content_width() {
    // 4 columns of (40 + 5) plus one margin: 185, with no trailing gap.
    let pass = layout::compute(&two_rows(), &[Measure::new(4, 1)], 0.0, 0.0, &[]);
    assert_eq!(pass.content_width, 185.0);
}

#[test]
fn test_trailing_separation_is_dropped() {
    // 195 for the first measure, 105 for the second, minus one separation.
    let measures = [Measure::new(4, 1), Measure::new(2, 1)];
    let pass = layout::compute(&two_rows(), &measures, 0.0, 0.0, &[]);
    assert_eq!(pass.content_width, 290.0);

    // The second measure starts after the first's full advance.
    let second = pass
        .blocks
        .iter()
        .find(|block| block.key.measure == 1)
        .unwrap();
    assert_eq!(second.x, 205.0);
}

#[test]
fn test_blocks_are_emitted_measure_column_row() {
    let measures = [Measure::new(2, 1), Measure::new(1, 1)];
    let pass = layout::compute(&two_rows(), &measures, 0.0, 0.0, &[]);

    let keys: Vec<BlockKey> = pass.blocks.iter().map(|block| block.key).collect();
    assert_eq!(
        keys,
        vec![
            BlockKey::new(0, 0, 0),
            BlockKey::new(0, 0, 1),
            BlockKey::new(0, 1, 0),
            BlockKey::new(0, 1, 1),
            BlockKey::new(1, 0, 0),
            BlockKey::new(1, 0, 1),
        ]
    );
}

#[test]
fn test_grid_positions_with_default_geometry() {
    // margin + border = 10, column step 45, row step 30.
    let pass = layout::compute(&two_rows(), &[Measure::new(2, 1)], 0.0, 0.0, &[]);

    let positions: Vec<(f32, f32)> = pass.blocks.iter().map(|b| (b.x, b.y)).collect();
    assert_eq!(
        positions,
        vec![(10.0, 10.0), (10.0, 40.0), (55.0, 10.0), (55.0, 40.0)]
    );
}

#[test]
fn test_offset_shifts_every_block() {
    let at_origin = layout::compute(&two_rows(), &[Measure::new(2, 1)], 0.0, 0.0, &[]);
    let scrolled = layout::compute(&two_rows(), &[Measure::new(2, 1)], 30.0, 0.0, &[]);

    for (before, after) in at_origin.blocks.iter().zip(&scrolled.blocks) {
        assert_eq!(after.x, before.x - 30.0);
        assert_eq!(after.y, before.y);
    }
    // Content width is offset-independent.
    assert_eq!(at_origin.content_width, scrolled.content_width);
}

#[test]
fn test_selection_survives_a_measure_append() {
    let mut pass = layout::compute(&two_rows(), &[Measure::new(2, 1)], 0.0, 0.0, &[]);
    pass.blocks[3].selected = true; // key (0, 1, 1)

    let grown = layout::compute(
        &two_rows(),
        &[Measure::new(2, 1), Measure::new(3, 1)],
        0.0,
        0.0,
        &pass.blocks,
    );

    let selected: Vec<BlockKey> = grown
        .blocks
        .iter()
        .filter(|block| block.selected)
        .map(|block| block.key)
        .collect();
    assert_eq!(selected, vec![BlockKey::new(0, 1, 1)]);
}
