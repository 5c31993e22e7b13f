//! Error types for grid construction and play.

use thiserror::Error;

/// Errors raised by the grid engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("cannot access grid element {x} {y} on a {size}x{size} grid")]
    OutOfRange { x: usize, y: usize, size: usize },

    #[error("grid size must be non-zero")]
    ZeroSize,

    #[error("grid size {size} overflows the cell count")]
    TooLarge { size: usize },

    #[error("value {value} at {x} {y} exceeds the preset limit")]
    ValueTooLarge { x: usize, y: usize, value: u32 },

    #[error("preset cell {x} {y} lies outside a {size}x{size} grid")]
    PresetOutOfRange { x: usize, y: usize, size: usize },

    #[error("snapshot holds {actual} cells, expected {expected}")]
    SnapshotMismatch { expected: usize, actual: usize },

    #[error("snapshot encoding error: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for GridError {
    fn from(e: bincode::Error) -> Self {
        GridError::Snapshot(e.to_string())
    }
}
