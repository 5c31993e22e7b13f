//! Serializable grid state for renderers, replays and tests.
//!
//! Snapshots are in-memory values; encoding to bytes uses `bincode`.

use serde::{Deserialize, Serialize};

use super::board::Grid;
use crate::core::{Cell, GridConfig, GridError};

/// Full cell state of a grid.
///
/// `cells` uses the grid's flat layout: index `x * size + y`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub size: usize,
    pub cells: Vec<Cell>,
}

impl GridSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GridError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GridError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Cell values in flat layout.
    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        self.cells.iter().map(Cell::value).collect()
    }
}

impl Grid {
    /// Capture the current cell state.
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            size: self.size,
            cells: self.cells.clone(),
        }
    }

    /// Rebuild a grid from a snapshot with default settings otherwise.
    ///
    /// Click history starts empty. The size is validated before the cell
    /// count is checked, so a zero or overflowing size is reported as such.
    pub fn from_snapshot(snapshot: GridSnapshot) -> Result<Self, GridError> {
        let config = GridConfig::new(snapshot.size);
        config.validate()?;

        let expected = config.cell_count();
        if snapshot.cells.len() != expected {
            return Err(GridError::SnapshotMismatch {
                expected,
                actual: snapshot.cells.len(),
            });
        }

        let mut grid = Grid::from_config(config)?;
        grid.cells = snapshot.cells;
        Ok(grid)
    }
}
