//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Grid Geometry Defaults
// ============================================================================

/// Default number of frequency rows per measure
pub const DEFAULT_FREQUENCIES: u32 = 7;

/// Default outer margin around each measure in pixels
pub const DEFAULT_MARGIN: f32 = 5.0;

/// Default cell width in pixels
pub const DEFAULT_CELL_WIDTH: f32 = 40.0;

/// Default cell height in pixels
pub const DEFAULT_CELL_HEIGHT: f32 = 25.0;

/// Default border thickness between cells in pixels
pub const DEFAULT_BORDER: f32 = 5.0;

/// Default horizontal gap between consecutive measures in pixels
pub const DEFAULT_SEPARATION: f32 = 10.0;

// ============================================================================
// Measure Defaults
// ============================================================================

/// Default pulse count for a measure
pub const DEFAULT_PULSES: u32 = 4;

/// Default rhythm factor for a measure
pub const DEFAULT_RHYTHM: u32 = 1;

// ============================================================================
// Colors (default hex values)
// ============================================================================

/// Default fill for unselected cells
pub const DEFAULT_BACKGROUND_COLOR: &str = "#EEEEEE";

/// Default fill for selected cells
pub const DEFAULT_SELECTED_COLOR: &str = "#999999";

/// Default grid line color
pub const DEFAULT_BORDER_COLOR: &str = "#000000";

// ============================================================================
// Panning & Viewport
// ============================================================================

/// Default damping factor applied to drag deltas (0 = raw, 1 = frozen)
pub const DEFAULT_DRAG_SENSIBILITY: f32 = 0.4;

/// Offsets below this value snap to exactly 0 to avoid drift at the origin
pub const ORIGIN_SNAP_THRESHOLD: f32 = 1.0;

/// Fraction of the host container width reserved as horizontal breathing room
pub const VIEWPORT_WIDTH_FACTOR: f32 = 0.05;

// ============================================================================
// Rendering
// ============================================================================

/// Cells this many cell-sizes outside the viewport are skipped when painting
pub const CULLING_SLACK_CELLS: f32 = 1.0;

// ============================================================================
// Input Handling
// ============================================================================

/// Fallback key-code chord assigned to any shortcut binding left unset
pub const DEFAULT_SHORTCUT_CHORD: [u32; 3] = [23, 54, 33];
