//! Core types for the pulseboard grid system.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: measures, blocks, block identity keys, and the normalized input
//! events handed to the interaction controller by the hosting environment.

use crate::constants::{DEFAULT_PULSES, DEFAULT_RHYTHM};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sequence Types
// ============================================================================

/// One horizontal segment of the sequence.
///
/// A measure contributes `pulses * rhythm` columns to the grid; insertion
/// order is the display order left-to-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Measure {
    /// Number of pulses in this measure
    pub pulses: u32,
    /// Rhythm subdivision factor
    pub rhythm: u32,
}

impl Measure {
    pub fn new(pulses: u32, rhythm: u32) -> Self {
        Self { pulses, rhythm }
    }

    /// Effective column count of this measure.
    pub fn column_count(&self) -> u32 {
        self.pulses * self.rhythm
    }
}

impl Default for Measure {
    fn default() -> Self {
        Self {
            pulses: DEFAULT_PULSES,
            rhythm: DEFAULT_RHYTHM,
        }
    }
}

// ============================================================================
// Block Types
// ============================================================================

/// Stable identity of a cell across layout passes.
///
/// Blocks are rebuilt on every layout pass; this composite key is what makes
/// a cell "the same cell" between passes, independent of its position in the
/// generated sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockKey {
    /// Index of the owning measure in the sequence
    pub measure: usize,
    /// Column index within the measure
    pub column: usize,
    /// Frequency row index
    pub row: usize,
}

impl BlockKey {
    pub fn new(measure: usize, column: usize, row: usize) -> Self {
        Self {
            measure,
            column,
            row,
        }
    }
}

/// One rendered grid cell, the atomic selectable unit.
///
/// Positions are top-left in screen space, already adjusted by the current
/// scroll offset. Width and height always equal the configured cell size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub selected: bool,
    pub key: BlockKey,
}

impl Block {
    /// Half-open containment test: the left/top edges belong to the cell,
    /// the right/bottom edges belong to the adjacent gutter.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

// ============================================================================
// Normalized Input Events
// ============================================================================

/// Pointer button identity, normalized by the host adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

impl PointerButton {
    /// Map a raw DOM-style button number (1 = left, 2 = middle, 3 = right).
    /// Unknown values fall back to the primary button.
    pub fn from_code(code: u8) -> Self {
        match code {
            2 => Self::Middle,
            3 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// A pointer event in surface-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32, button: PointerButton) -> Self {
        Self { x, y, button }
    }
}

/// A keyboard event carrying the host's key code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: u32,
}

impl KeyEvent {
    pub fn new(code: u32) -> Self {
        Self { code }
    }
}
