//! A single grid cell: a counter plus a display color tag.
//!
//! Cells are created once when the grid is built and mutated in place
//! for the grid's whole lifetime. Only click resolution changes them.

use serde::{Deserialize, Serialize};

/// Largest value a cell may be given by a preset or `Grid::set_value`.
///
/// A click raises any cell by at most two before resolution, and
/// [`Cell::increment`] saturates, so values stay below `u32::MAX` for any
/// realistic game started under this limit.
pub const MAX_PRESET_VALUE: u32 = u32::MAX / 2;

/// Display color tag of a cell.
///
/// `Highlighted` is transient: the engine always flashes (highlight, then
/// neutral) within a single click, so every touched cell ends a click
/// `Neutral`. Renderers pick the actual hues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellColor {
    #[default]
    Neutral,
    Highlighted,
}

impl std::fmt::Display for CellColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellColor::Neutral => write!(f, "neutral"),
            CellColor::Highlighted => write!(f, "highlighted"),
        }
    }
}

/// Why a cell was flashed.
///
/// The core does not choose colors; it only records which kind of flash
/// happened so a renderer can tell propagation from a cleared match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flash {
    /// Incremented by a combo click sweep.
    Propagation,
    /// Part of a cleared Fibonacci run.
    Match,
}

/// Mutable grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    value: u32,
    color: CellColor,
}

impl Cell {
    /// Create an empty neutral cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: 0,
            color: CellColor::Neutral,
        }
    }

    /// Create a neutral cell holding `value`.
    #[must_use]
    pub const fn with_value(value: u32) -> Self {
        Self {
            value,
            color: CellColor::Neutral,
        }
    }

    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    #[must_use]
    pub const fn color(&self) -> CellColor {
        self.color
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Increase the value by one, saturating at `u32::MAX`.
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    /// Decrease the value by one.
    ///
    /// Callers must only decrement a nonzero cell. A zero cell stays at zero.
    pub fn decrement(&mut self) {
        debug_assert!(self.value > 0, "decrement on an empty cell");
        self.value = self.value.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }

    pub(crate) fn set_value(&mut self, value: u32) {
        self.value = value;
    }

    pub fn mark_highlighted(&mut self) {
        self.color = CellColor::Highlighted;
    }

    pub fn mark_neutral(&mut self) {
        self.color = CellColor::Neutral;
    }

    /// Highlight then immediately return to neutral.
    pub fn flash(&mut self) {
        self.mark_highlighted();
        self.mark_neutral();
    }

    /// Read-only copy for renderers.
    #[must_use]
    pub const fn view(&self) -> CellView {
        CellView {
            value: self.value,
            color: self.color,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.color)
    }
}

/// Snapshot of a cell returned by `Grid::cell_at`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellView {
    pub value: u32,
    pub color: CellColor,
}

impl std::fmt::Display for CellView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.color)
    }
}
