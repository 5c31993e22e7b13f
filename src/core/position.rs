//! Grid coordinates and line orientation.
//!
//! ## Position
//!
//! A cell address `(x, y)` on a square grid. Both coordinates are 0-based.
//!
//! ## Axis
//!
//! Which family of lines a scan walks:
//! - `Row`: cells sharing the same `x`, i.e. `(x, 0) .. (x, size-1)`
//! - `Column`: cells sharing the same `y`, i.e. `(0, y) .. (size-1, y)`

use serde::{Deserialize, Serialize};

/// Cell address on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Check whether this position lies on a grid of the given size.
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    /// Flat index into a `size * size` cell array.
    ///
    /// Cells of one row (same `x`) are contiguous.
    #[must_use]
    pub const fn index(self, size: usize) -> usize {
        self.x * size + self.y
    }

    /// Inverse of [`Position::index`].
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            x: index / size,
            y: index % size,
        }
    }

    /// Iterate over every position of a grid, row by row.
    ///
    /// ```
    /// use fib_grid::core::Position;
    ///
    /// let all: Vec<_> = Position::all(2).collect();
    /// assert_eq!(all.len(), 4);
    /// assert_eq!(all[1], Position::new(0, 1));
    /// ```
    pub fn all(size: usize) -> impl Iterator<Item = Position> {
        (0..size).flat_map(move |x| (0..size).map(move |y| Position::new(x, y)))
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Line orientation for sweeps and scans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Fixed `x`, varying `y`.
    Row,
    /// Fixed `y`, varying `x`.
    Column,
}

impl Axis {
    /// Position of the `offset`-th cell along line `line` of this axis.
    #[must_use]
    pub const fn at(self, line: usize, offset: usize) -> Position {
        match self {
            Axis::Row => Position::new(line, offset),
            Axis::Column => Position::new(offset, line),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}
