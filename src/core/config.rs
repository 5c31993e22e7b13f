//! Grid configuration.

use serde::{Deserialize, Serialize};

use super::error::GridError;

/// Grid configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Side length of the square grid (must be non-zero).
    pub size: usize,

    /// Maximum click reports kept in history (`None` = unbounded).
    /// Oldest reports are dropped first.
    pub history_limit: Option<usize>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 10,
            history_limit: Some(256),
        }
    }
}

impl GridConfig {
    /// Create a config for a grid of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the grid size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the history limit.
    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }

    /// Check the config describes a buildable grid.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.size == 0 {
            return Err(GridError::ZeroSize);
        }
        if self.size.checked_mul(self.size).is_none() {
            return Err(GridError::TooLarge { size: self.size });
        }
        Ok(())
    }

    /// Total number of cells.
    ///
    /// Saturates for sizes that `validate` rejects.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size.saturating_mul(self.size)
    }
}
