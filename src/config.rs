//! Grid configuration and shortcut bindings.
//!
//! Every field is optional when deserialized; omitted fields take the
//! defaults from [`crate::constants`]. Validation happens once, at the
//! construction boundary — see [`GridConfig::validated`].

use crate::constants::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_BORDER, DEFAULT_BORDER_COLOR, DEFAULT_CELL_HEIGHT,
    DEFAULT_CELL_WIDTH, DEFAULT_DRAG_SENSIBILITY, DEFAULT_FREQUENCIES, DEFAULT_MARGIN,
    DEFAULT_SELECTED_COLOR, DEFAULT_SEPARATION, DEFAULT_SHORTCUT_CHORD,
};
use crate::error::{ConfigError, ConfigResult};
use crate::types::PointerButton;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// Configuration
// ============================================================================

/// Immutable value object describing the grid geometry and interaction
/// behavior. Supplied at construction; the core never mutates it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Frequency row count per measure
    pub frequencies: u32,
    /// Outer margin around each measure
    pub margin: f32,
    /// Cell width in pixels
    pub cell_width: f32,
    /// Cell height in pixels
    pub cell_height: f32,
    /// Border thickness between cells
    pub border: f32,
    /// Horizontal gap between consecutive measures
    pub separation: f32,
    /// Fill for selected cells
    pub selected_color: String,
    /// Fill for unselected cells
    pub background_color: String,
    /// Grid line color
    pub border_color: String,
    /// Damping factor applied to drag deltas (0 = raw, 1 = frozen)
    pub drag_sensibility: f32,
    /// Button that toggles cell selection
    pub select_button: PointerButton,
    /// Button that pans the grid horizontally
    pub pan_button: PointerButton,
    /// When move-driven selection re-runs hit-testing
    pub move_retest: RetestPolicy,
    /// Keyboard chord bindings
    pub shortcuts: Shortcuts,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            frequencies: DEFAULT_FREQUENCIES,
            margin: DEFAULT_MARGIN,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            border: DEFAULT_BORDER,
            separation: DEFAULT_SEPARATION,
            selected_color: DEFAULT_SELECTED_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            drag_sensibility: DEFAULT_DRAG_SENSIBILITY,
            select_button: PointerButton::Primary,
            pan_button: PointerButton::Secondary,
            move_retest: RetestPolicy::default(),
            shortcuts: Shortcuts::default(),
        }
    }
}

impl GridConfig {
    /// Parse a configuration from JSON. Any subset of fields may be present;
    /// the rest default. The result is validated before being returned.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Consume and return the configuration if every invariant holds:
    /// spatial fields non-negative, at least one frequency row, damping
    /// within [0, 1].
    pub fn validated(self) -> ConfigResult<Self> {
        for (field, value) in [
            ("margin", self.margin),
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
            ("border", self.border),
            ("separation", self.separation),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NegativeDimension { field, value });
            }
        }

        if self.frequencies == 0 {
            return Err(ConfigError::ZeroFrequencies);
        }

        if !(0.0..=1.0).contains(&self.drag_sensibility) {
            return Err(ConfigError::SensibilityOutOfRange(self.drag_sensibility));
        }

        Ok(self)
    }
}

/// Policy for re-running selection hit-testing on pointer-move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetestPolicy {
    /// Re-hit-test only when the sampled pixel color under the pointer
    /// changed since the last sample. Cheap "entered a new cell" detection.
    #[default]
    ColorChanged,
    /// Re-hit-test on every qualifying move event.
    Always,
}

// ============================================================================
// Shortcuts
// ============================================================================

/// Keyboard chord bindings. Each binding is the set of key codes that must
/// be held simultaneously; any binding left unset defaults to a fixed triple.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shortcuts {
    pub move_selection_up: Vec<u32>,
    pub move_selection_left: Vec<u32>,
    pub move_selection_right: Vec<u32>,
    pub move_selection_down: Vec<u32>,
    pub copy_selection: Vec<u32>,
    pub paste_selection: Vec<u32>,
    pub delete_selection: Vec<u32>,
}

impl Default for Shortcuts {
    fn default() -> Self {
        let chord = DEFAULT_SHORTCUT_CHORD.to_vec();
        Self {
            move_selection_up: chord.clone(),
            move_selection_left: chord.clone(),
            move_selection_right: chord.clone(),
            move_selection_down: chord.clone(),
            copy_selection: chord.clone(),
            paste_selection: chord.clone(),
            delete_selection: chord,
        }
    }
}

impl Shortcuts {
    /// Resolve the currently pressed key set to a shortcut action. Bindings
    /// are checked in declaration order; the first fully-held chord wins.
    pub fn action_for(&self, pressed: &HashSet<u32>) -> Option<ShortcutAction> {
        let bindings = [
            (&self.move_selection_up, ShortcutAction::MoveSelectionUp),
            (&self.move_selection_left, ShortcutAction::MoveSelectionLeft),
            (&self.move_selection_right, ShortcutAction::MoveSelectionRight),
            (&self.move_selection_down, ShortcutAction::MoveSelectionDown),
            (&self.copy_selection, ShortcutAction::CopySelection),
            (&self.paste_selection, ShortcutAction::PasteSelection),
            (&self.delete_selection, ShortcutAction::DeleteSelection),
        ];

        bindings
            .into_iter()
            .filter(|(chord, _)| !chord.is_empty())
            .find(|(chord, _)| chord.iter().all(|code| pressed.contains(code)))
            .map(|(_, action)| action)
    }
}

/// Actions a shortcut chord can resolve to. Recognized and surfaced to the
/// host; the operations themselves live outside this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutAction {
    MoveSelectionUp,
    MoveSelectionLeft,
    MoveSelectionRight,
    MoveSelectionDown,
    CopySelection,
    PasteSelection,
    DeleteSelection,
}
