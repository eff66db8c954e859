//! Lifecycle workflow tests: construction, resize, drawing, and the
//! measure-mutation API.

use crate::helpers::{pan_at, pannable_grid, select_at, small_grid, MockCanvas, TestGridBuilder};
use pulseboard::{BlockKey, ConfigError, GridConfig, Measure, PulseGrid, Rgba};

#[test]
fn test_construction_rejects_invalid_configuration() {
    let config = GridConfig {
        frequencies: 0,
        ..GridConfig::default()
    };
    let result = PulseGrid::new(MockCanvas::default(), 400.0, config, Vec::new());
    assert!(matches!(result, Err(ConfigError::ZeroFrequencies)));
}

#[test]
fn test_viewport_is_derived_from_container_and_rows() {
    let grid = TestGridBuilder::new().with_measure(4, 1).build();

    // 400 minus the 5% factor; 7 rows of 25 plus 8 borders plus 2 margins.
    assert_eq!(grid.view().viewport_width, 380.0);
    assert_eq!(grid.view().viewport_height, 225.0);
}

#[test]
fn test_resize_recomputes_the_viewport() {
    let mut grid = small_grid();
    grid.handle_resize(600.0);

    assert_eq!(grid.view().viewport_width, 570.0);
    assert_eq!(grid.view().viewport_height, 75.0);
}

#[test]
fn test_resize_resets_offsets_and_repaints() {
    let mut grid = pannable_grid();

    grid.handle_pointer_down(pan_at(100.0, 30.0));
    grid.handle_pointer_move(pan_at(60.0, 30.0));
    assert_eq!(grid.view().offset_x, 20.0);

    let clears = grid.canvas().clear_count;
    grid.handle_resize(200.0);

    assert_eq!(grid.view().offset_x, 0.0);
    assert_eq!(grid.view().offset_y, 0.0);
    assert_eq!(grid.canvas().clear_count, clears + 1);
}

#[test]
fn test_selection_survives_a_resize_relayout() {
    let mut grid = small_grid();

    grid.handle_pointer_down(select_at(15.0, 15.0));
    grid.handle_pointer_up(select_at(15.0, 15.0));
    grid.handle_resize(500.0);

    assert_eq!(grid.selected_keys(), vec![BlockKey::new(0, 0, 0)]);
}

// ============================================================================
// Drawing
// ============================================================================

#[test]
fn test_draw_clears_strokes_and_fills() {
    let mut grid = small_grid();
    grid.draw();

    let canvas = grid.canvas();
    assert_eq!(canvas.clear_count, 1);
    assert_eq!(canvas.stroke_count, 1);
    assert_eq!(canvas.fill_count(), 4);
    assert!(canvas.line_count > 0);
    assert_eq!(canvas.stroke_style, "#000000");

    // The clear covers the whole viewport.
    let clear = canvas.ops[0];
    assert_eq!((clear.width, clear.height), (380.0, 75.0));
}

#[test]
fn test_draw_uses_the_selection_colors() {
    let mut grid = small_grid();
    grid.handle_pointer_down(select_at(15.0, 15.0));
    grid.handle_pointer_up(select_at(15.0, 15.0));
    grid.draw();

    assert_eq!(
        grid.canvas().pixel_color(15.0, 15.0),
        Rgba::from_hex("#999999").unwrap()
    );
    assert_eq!(
        grid.canvas().pixel_color(60.0, 15.0),
        Rgba::from_hex("#EEEEEE").unwrap()
    );
}

#[test]
fn test_draw_is_idempotent() {
    let mut grid = small_grid();
    grid.draw();
    grid.draw();

    assert!(grid.selected_keys().is_empty());
    assert_eq!(grid.blocks().len(), 4);
    assert_eq!(grid.canvas().fill_count(), 8);
}

#[test]
fn test_draw_culls_blocks_outside_the_viewport() {
    let mut grid = pannable_grid();
    grid.draw();

    // Ten columns exist, but only five fall within the 190px viewport
    // plus one cell of slack.
    assert_eq!(grid.canvas().fill_count(), 10);
}

// ============================================================================
// Measure API
// ============================================================================

#[test]
fn test_push_measure_extends_the_content() {
    let mut grid = small_grid();
    assert_eq!(grid.view().content_width, 95.0);

    grid.push_measure(Measure::new(3, 1));

    assert_eq!(grid.blocks().len(), 10);
    assert_eq!(grid.view().content_width, 245.0);
}

#[test]
fn test_push_measure_keeps_existing_selection() {
    let mut grid = small_grid();
    grid.handle_pointer_down(select_at(15.0, 15.0));
    grid.handle_pointer_up(select_at(15.0, 15.0));

    grid.push_measure(Measure::default());

    assert_eq!(grid.selected_keys(), vec![BlockKey::new(0, 0, 0)]);
}

#[test]
fn test_remove_measure_drops_its_blocks() {
    let mut grid = TestGridBuilder::new()
        .with_frequencies(2)
        .with_measure(2, 1)
        .with_measure(3, 1)
        .build();
    assert_eq!(grid.blocks().len(), 10);

    let removed = grid.remove_measure(1);

    assert_eq!(removed, Some(Measure::new(3, 1)));
    assert_eq!(grid.blocks().len(), 4);
    assert_eq!(grid.view().content_width, 95.0);
}

#[test]
fn test_remove_measure_out_of_range_is_none() {
    let mut grid = small_grid();
    assert_eq!(grid.remove_measure(5), None);
    assert_eq!(grid.blocks().len(), 4);
}

#[test]
fn test_removing_a_later_measure_keeps_earlier_selection() {
    let mut grid = TestGridBuilder::new()
        .with_frequencies(2)
        .with_measure(2, 1)
        .with_measure(3, 1)
        .build();

    grid.handle_pointer_down(select_at(15.0, 15.0));
    grid.handle_pointer_up(select_at(15.0, 15.0));
    grid.remove_measure(1);

    assert_eq!(grid.selected_keys(), vec![BlockKey::new(0, 0, 0)]);
}
