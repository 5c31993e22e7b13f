//! Value propagation: the first step of a click.
//!
//! A click on an empty cell only gives it its first unit. A click on a
//! nonzero cell is a combo: every nonzero cell in the clicked row and then
//! in the clicked column is incremented and flashed.

use tracing::trace;

use super::board::Grid;
use crate::core::{Axis, Position};

impl Grid {
    /// Apply the increment step for a click at `clicked`.
    ///
    /// Returns whether the click was a combo and the flashed positions in
    /// sweep order. `clicked` must be in bounds.
    pub(super) fn increase_values(&mut self, clicked: Position) -> (bool, Vec<Position>) {
        if self.cell_mut(clicked).is_empty() {
            self.cell_mut(clicked).increment();
            return (false, Vec::new());
        }

        let mut propagated = Vec::new();
        self.sweep(Axis::Row, clicked.x, &mut propagated);
        self.sweep(Axis::Column, clicked.y, &mut propagated);

        // The clicked cell sits on both lines and was bumped twice.
        self.cell_mut(clicked).decrement();

        (true, propagated)
    }

    fn sweep(&mut self, axis: Axis, line: usize, propagated: &mut Vec<Position>) {
        for offset in 0..self.size {
            let pos = axis.at(line, offset);
            let cell = self.cell_mut(pos);
            if cell.is_empty() {
                continue;
            }
            cell.increment();
            cell.flash();
            trace!(position = %pos, value = cell.value(), "propagation flash");
            propagated.push(pos);
        }
    }
}
