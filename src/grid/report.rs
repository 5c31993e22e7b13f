//! Per-click outcome records.
//!
//! A `ClickReport` tells a renderer what one click did: which cells the
//! propagation sweeps flashed and which Fibonacci runs were cleared.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Axis, Flash, Position};
use crate::fibonacci::RUN_LENGTH;

/// A cleared five-cell Fibonacci run.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRun {
    /// Orientation of the line the run was found on.
    pub axis: Axis,

    /// Line index (`x` for rows, `y` for columns).
    pub line: usize,

    /// Offset of the first cell along the line.
    pub start: usize,

    /// Values of the run before clearing.
    pub values: [u32; RUN_LENGTH],

    /// The cells that were cleared, in line order.
    pub cells: SmallVec<[Position; RUN_LENGTH]>,
}

impl MatchRun {
    /// Build a run record for `RUN_LENGTH` cells starting at `start`.
    #[must_use]
    pub fn new(axis: Axis, line: usize, start: usize, values: [u32; RUN_LENGTH]) -> Self {
        let cells = (start..start + RUN_LENGTH).map(|offset| axis.at(line, offset)).collect();
        Self {
            axis,
            line,
            start,
            values,
            cells,
        }
    }

    /// Check whether the run covers a position.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

impl std::fmt::Display for MatchRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} [{}..{}] {:?}", self.axis, self.line, self.start, self.start + RUN_LENGTH, self.values)
    }
}

/// Outcome of a single successful click.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickReport {
    /// The clicked cell.
    pub position: Position,

    /// True when the clicked cell was nonzero and the sweeps ran.
    pub combo: bool,

    /// Cells flashed by the propagation sweeps, in sweep order.
    /// The clicked cell appears once per sweep.
    pub propagated: Vec<Position>,

    /// Runs cleared by the row scan, then the column scan.
    pub matches: Vec<MatchRun>,

    /// 1-based sequence number of this click on its grid.
    pub sequence: u64,
}

impl ClickReport {
    /// Check whether this click cleared anything.
    #[must_use]
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Distinct positions cleared by this click.
    ///
    /// A cell covered by both a row run and a column run is listed once.
    #[must_use]
    pub fn cleared_cells(&self) -> Vec<Position> {
        let mut seen = FxHashSet::default();
        self.matches
            .iter()
            .flat_map(|run| run.cells.iter().copied())
            .filter(|pos| seen.insert(*pos))
            .collect()
    }

    /// Every flash this click produced, in the order it happened.
    pub fn flashes(&self) -> impl Iterator<Item = (Position, Flash)> + '_ {
        let propagated = self.propagated.iter().map(|&pos| (pos, Flash::Propagation));
        let matched = self
            .matches
            .iter()
            .flat_map(|run| run.cells.iter().map(|&pos| (pos, Flash::Match)));
        propagated.chain(matched)
    }
}
