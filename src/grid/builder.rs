//! Builder for grids with preset cell values.

use super::board::Grid;
use crate::core::{Axis, GridConfig, GridError, Position, MAX_PRESET_VALUE};

/// Builder for creating a `Grid`.
///
/// ```
/// use fib_grid::GridBuilder;
///
/// let grid = GridBuilder::new()
///     .size(10)
///     .with_value(4, 0, 12)
///     .build()
///     .unwrap();
/// assert_eq!(grid.value_at(4, 0), Some(12));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GridBuilder {
    config: GridConfig,
    presets: Vec<(Position, u32)>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config.
    pub fn from_config(config: GridConfig) -> Self {
        Self {
            config,
            presets: Vec::new(),
        }
    }

    pub fn size(mut self, size: usize) -> Self {
        self.config.size = size;
        self
    }

    pub fn history_limit(mut self, limit: Option<usize>) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Preset one cell. Later presets for the same cell win.
    pub fn with_value(mut self, x: usize, y: usize, value: u32) -> Self {
        self.presets.push((Position::new(x, y), value));
        self
    }

    /// Preset consecutive cells along a line, starting at offset `start`.
    pub fn with_line(mut self, axis: Axis, line: usize, start: usize, values: &[u32]) -> Self {
        for (k, &value) in values.iter().enumerate() {
            self.presets.push((axis.at(line, start + k), value));
        }
        self
    }

    /// Build the grid.
    ///
    /// Presets are written as-is; no matches are resolved until the first click.
    /// Values above [`MAX_PRESET_VALUE`] are rejected.
    pub fn build(self) -> Result<Grid, GridError> {
        let size = self.config.size;
        let mut grid = Grid::from_config(self.config)?;

        for (pos, value) in self.presets {
            if !pos.in_bounds(size) {
                return Err(GridError::PresetOutOfRange { x: pos.x, y: pos.y, size });
            }
            if value > MAX_PRESET_VALUE {
                return Err(GridError::ValueTooLarge { x: pos.x, y: pos.y, value });
            }
            grid.cell_mut(pos).set_value(value);
        }

        Ok(grid)
    }
}
