//! # fib-grid
//!
//! A match-five puzzle engine on a square grid of numeric cells.
//!
//! ## Rules
//!
//! 1. **Click**: clicking an empty cell gives it a value of 1. Clicking a
//!    nonzero cell is a combo: every nonzero cell in its row and column goes
//!    up by one, and the clicked cell itself nets exactly +1.
//!
//! 2. **Match**: after every click the whole grid is scanned, rows first,
//!    then columns. Five adjacent cells forming a Fibonacci run are cleared
//!    back to zero.
//!
//! ## Architecture
//!
//! - **Single owner**: `Grid` owns every cell in a flat `Vec`; cells never
//!   reference each other or the grid.
//!
//! - **Pure core**: no I/O. Renderers read `cell_at`, `snapshot` and the
//!   per-click `ClickReport`.
//!
//! - **Persistent history**: click reports are kept in an `im::Vector` so
//!   cloning a grid stays cheap.
//!
//! ## Modules
//!
//! - `core`: positions, cells, configuration, errors
//! - `fibonacci`: Fibonacci membership and run predicates
//! - `grid`: the grid aggregate, click resolution, reports, snapshots
//! - `sim`: seeded random play

pub mod core;
pub mod fibonacci;
pub mod grid;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Axis, Cell, CellColor, CellView, Flash, GridConfig, GridError, Position, MAX_PRESET_VALUE,
};

pub use crate::fibonacci::{is_consecutive_fibonacci_series, is_fibonacci, RUN_LENGTH};

pub use crate::grid::{ClickReport, Grid, GridBuilder, GridSnapshot, MatchRun};

pub use crate::sim::{Autoplay, AutoplayConfig, AutoplayStats, ClickRng, ClickRngState};
