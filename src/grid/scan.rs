//! Match detection: every row, then every column, is checked for
//! five-cell Fibonacci runs, and matched cells are cleared.

use tracing::info;

use super::board::Grid;
use super::report::MatchRun;
use crate::core::Axis;
use crate::fibonacci::{is_consecutive_fibonacci_series, RUN_LENGTH};

impl Grid {
    /// Scan the whole grid and clear every Fibonacci run found.
    ///
    /// Rows are scanned first and their clears are committed before the
    /// column scan reads any value. Within a line, windows are checked from
    /// the lowest start offset up, each seeing earlier clears.
    ///
    /// Returns the cleared runs in the order they were found.
    pub fn resolve_matches(&mut self) -> Vec<MatchRun> {
        let mut runs = self.scan_axis(Axis::Row);
        runs.extend(self.scan_axis(Axis::Column));
        runs
    }

    fn scan_axis(&mut self, axis: Axis) -> Vec<MatchRun> {
        let mut runs = Vec::new();
        let starts = (self.size + 1).saturating_sub(RUN_LENGTH);

        for line in 0..self.size {
            for start in 0..starts {
                let mut values = [0u32; RUN_LENGTH];
                for (k, value) in values.iter_mut().enumerate() {
                    *value = self.cell_mut(axis.at(line, start + k)).value();
                }

                if !is_consecutive_fibonacci_series(&values) {
                    continue;
                }

                let run = MatchRun::new(axis, line, start, values);
                for &pos in &run.cells {
                    let cell = self.cell_mut(pos);
                    cell.flash();
                    cell.reset();
                }
                info!(axis = %axis, line, start, values = ?values, "fibonacci run cleared");
                runs.push(run);
            }
        }

        runs
    }
}
