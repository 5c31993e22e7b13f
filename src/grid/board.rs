//! The grid aggregate and its click entry point.

use im::Vector;
use tracing::{debug, warn};

use super::report::ClickReport;
use crate::core::{Axis, Cell, CellView, GridConfig, GridError, Position, MAX_PRESET_VALUE};
use crate::fibonacci;

/// Square grid of numeric cells.
///
/// The grid is the sole owner of its cells. Cells are stored flat, with the
/// cells of one row (same `x`) contiguous.
///
/// ## Example
///
/// ```
/// use fib_grid::Grid;
///
/// let mut grid = Grid::new(10);
/// grid.click(4, 3).unwrap();
/// assert_eq!(grid.cell_at(4, 3).unwrap().value, 1);
/// assert!(grid.click(10, 0).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    pub(super) size: usize,
    pub(super) cells: Vec<Cell>,
    config: GridConfig,
    history: Vector<ClickReport>,
    last_report: Option<ClickReport>,
    click_count: u64,
}

impl Grid {
    /// Create an all-zero grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or `size * size` overflows. Use
    /// [`Grid::from_config`] to get an error instead.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Grid size must be non-zero");
        assert!(size.checked_mul(size).is_some(), "Grid size overflows the cell count");
        Self::build(GridConfig::new(size))
    }

    /// Create an all-zero grid from a validated config.
    pub fn from_config(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GridConfig) -> Self {
        Self {
            size: config.size,
            cells: vec![Cell::new(); config.cell_count()],
            config,
            history: Vector::new(),
            last_report: None,
            click_count: 0,
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    // === Cell Access ===

    /// Read-only snapshot of the cell at `(x, y)`.
    #[must_use]
    pub fn cell_at(&self, x: usize, y: usize) -> Option<CellView> {
        self.cell(Position::new(x, y)).map(Cell::view)
    }

    /// Value of the cell at `(x, y)`.
    #[must_use]
    pub fn value_at(&self, x: usize, y: usize) -> Option<u32> {
        self.cell(Position::new(x, y)).map(Cell::value)
    }

    pub(crate) fn cell(&self, pos: Position) -> Option<&Cell> {
        if !pos.in_bounds(self.size) {
            return None;
        }
        self.cells.get(pos.index(self.size))
    }

    pub(super) fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        let index = pos.index(self.size);
        &mut self.cells[index]
    }

    /// Values along one line, in line order.
    #[must_use]
    pub fn line_values(&self, axis: Axis, line: usize) -> Vec<u32> {
        if line >= self.size {
            return Vec::new();
        }
        (0..self.size)
            .map(|offset| self.cells[axis.at(line, offset).index(self.size)].value())
            .collect()
    }

    /// Iterate over every cell with its position.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellView)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Position::from_index(i, size), cell.view()))
    }

    /// Overwrite the value at `(x, y)` without resolving matches.
    ///
    /// Values above [`MAX_PRESET_VALUE`] are rejected.
    pub fn set_value(&mut self, x: usize, y: usize, value: u32) -> Result<(), GridError> {
        let pos = Position::new(x, y);
        if !pos.in_bounds(self.size) {
            return Err(GridError::OutOfRange { x, y, size: self.size });
        }
        if value > MAX_PRESET_VALUE {
            return Err(GridError::ValueTooLarge { x, y, value });
        }
        self.cell_mut(pos).set_value(value);
        Ok(())
    }

    // === Click ===

    /// Click the cell at `(x, y)`.
    ///
    /// Runs value propagation, then the row scan, then the column scan.
    /// Coordinates outside the grid are rejected before anything changes.
    pub fn click(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let position = Position::new(x, y);
        if !position.in_bounds(self.size) {
            warn!(x, y, size = self.size, "click outside grid");
            return Err(GridError::OutOfRange { x, y, size: self.size });
        }

        let (combo, propagated) = self.increase_values(position);
        let matches = self.resolve_matches();

        self.click_count += 1;
        debug!(
            position = %position,
            combo,
            propagated = propagated.len(),
            matches = matches.len(),
            sequence = self.click_count,
            "click resolved"
        );

        self.record(ClickReport {
            position,
            combo,
            propagated,
            matches,
            sequence: self.click_count,
        });
        Ok(())
    }

    fn record(&mut self, report: ClickReport) {
        if self.config.history_limit != Some(0) {
            self.history.push_back(report.clone());
            if let Some(limit) = self.config.history_limit {
                while self.history.len() > limit {
                    self.history.pop_front();
                }
            }
        }
        self.last_report = Some(report);
    }

    // === History ===

    /// Report of the most recent successful click.
    #[must_use]
    pub fn last_report(&self) -> Option<&ClickReport> {
        self.last_report.as_ref()
    }

    /// Recent click reports, oldest first, bounded by the history limit.
    #[must_use]
    pub fn history(&self) -> &Vector<ClickReport> {
        &self.history
    }

    /// Number of successful clicks since construction.
    #[must_use]
    pub fn click_count(&self) -> u64 {
        self.click_count
    }

    /// Check whether every cell is zero.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// Five-term run predicate used by the scans.
    #[must_use]
    pub fn is_consecutive_fibonacci_series(values: &[u32]) -> bool {
        fibonacci::is_consecutive_fibonacci_series(values)
    }
}

impl std::fmt::Display for Grid {
    /// One text line per row (fixed `x`), values ordered by `y`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: Vec<String> = row.iter().map(|cell| cell.value().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
