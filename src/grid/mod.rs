//! The grid aggregate and click resolution.
//!
//! A click runs three steps in order:
//! 1. `propagate`: increment the clicked cell, or on a combo click every
//!    nonzero cell in its row and column
//! 2. row scan for five-cell Fibonacci runs
//! 3. column scan, seeing the row scan's clears
//!
//! `report` records what each click did; `snapshot` captures cell state.

mod board;
mod builder;
mod propagate;
mod report;
mod scan;
mod snapshot;

pub use board::Grid;
pub use builder::GridBuilder;
pub use report::{ClickReport, MatchRun};
pub use snapshot::GridSnapshot;
