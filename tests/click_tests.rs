//! Click resolution integration tests.
//!
//! These tests drive whole games through `Grid::click` and check the
//! resulting cell values, reports and history.

use fib_grid::{Axis, CellColor, Flash, Grid, GridBuilder, GridError, Position};

// =============================================================================
// Fresh Clicks
// =============================================================================

/// A single click on an empty cell sets only that cell to 1.
#[test]
fn test_single_click_on_fresh_grid() {
    let mut grid = Grid::new(10);

    grid.click(3, 6).unwrap();

    for (pos, cell) in grid.cells() {
        if pos == Position::new(3, 6) {
            assert_eq!(cell.value, 1);
        } else {
            assert_eq!(cell.value, 0, "cell {} should be untouched", pos);
        }
    }
}

/// Independent fresh clicks never interact.
#[test]
fn test_fresh_clicks_are_independent() {
    let mut grid = Grid::new(10);

    for y in 0..5 {
        grid.click(0, y).unwrap();
    }

    assert_eq!(grid.line_values(Axis::Row, 0)[..5], [1, 1, 1, 1, 1]);
    assert!(grid.history().iter().all(|report| !report.combo));
}

// =============================================================================
// Scenarios
// =============================================================================

/// 2, 3, 5, 8, 12 becomes 2, 3, 5, 8, 13 after a combo click and is cleared.
#[test]
fn test_preset_grid() {
    let mut grid = GridBuilder::new()
        .size(10)
        .with_value(0, 0, 2)
        .with_value(1, 0, 3)
        .with_value(2, 0, 5)
        .with_value(3, 0, 8)
        .with_value(4, 0, 12)
        .build()
        .unwrap();

    grid.click(4, 3).unwrap();
    assert_eq!(grid.value_at(4, 3), Some(1));
    assert_eq!(grid.value_at(4, 0), Some(12));

    grid.click(4, 3).unwrap();

    for x in 0..5 {
        assert_eq!(grid.value_at(x, 0), Some(0), "cell ({}, 0) should be cleared", x);
    }
    assert_eq!(grid.value_at(4, 3), Some(2));

    let report = grid.last_report().unwrap();
    assert!(report.combo);
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].axis, Axis::Column);
    assert_eq!(report.matches[0].values, [2, 3, 5, 8, 13]);
}

/// Sustained combo clicks drive (0, 0..5) into a 1, 1, 2, 3, 5 run.
#[test]
fn test_actual_clicks() {
    let mut grid = Grid::new(10);

    for y in 0..5 {
        grid.click(0, y).unwrap();
    }

    for _ in 0..2 {
        grid.click(1, 2).unwrap();
    }
    for _ in 0..3 {
        grid.click(1, 3).unwrap();
    }
    for _ in 0..4 {
        grid.click(1, 4).unwrap();
    }

    // One click short of the run.
    assert_eq!(grid.line_values(Axis::Row, 0)[..5], [1, 1, 2, 3, 4]);
    assert!(grid.history().iter().all(|report| report.matches.is_empty()));

    grid.click(1, 4).unwrap();

    for y in 0..5 {
        assert_eq!(grid.value_at(0, y), Some(0), "cell (0, {}) should be cleared", y);
    }

    let report = grid.last_report().unwrap();
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].axis, Axis::Row);
    assert_eq!(report.matches[0].line, 0);
    assert_eq!(report.matches[0].values, [1, 1, 2, 3, 5]);

    // Row 1 keeps the values pumped up by the combo clicks.
    assert_eq!(grid.line_values(Axis::Row, 1)[..5], [0, 0, 8, 7, 5]);
}

/// Scanning a resolved grid again changes nothing.
#[test]
fn test_rescan_after_click_is_idempotent() {
    let mut grid = GridBuilder::new()
        .with_line(Axis::Column, 0, 0, &[2, 3, 5, 8, 12])
        .with_value(7, 7, 4)
        .build()
        .unwrap();

    grid.click(4, 3).unwrap();
    grid.click(4, 3).unwrap();

    let before = grid.snapshot();
    assert!(grid.resolve_matches().is_empty());
    assert_eq!(grid.snapshot(), before);
}

// =============================================================================
// Combo Propagation
// =============================================================================

/// Combo clicks bump every nonzero cell on both lines exactly once.
#[test]
fn test_combo_click_propagation() {
    let mut grid = GridBuilder::new()
        .size(6)
        .with_value(2, 2, 4)
        .with_value(2, 0, 7)
        .with_value(5, 2, 9)
        .with_value(0, 0, 6)
        .build()
        .unwrap();

    grid.click(2, 2).unwrap();

    assert_eq!(grid.value_at(2, 2), Some(5));
    assert_eq!(grid.value_at(2, 0), Some(8));
    assert_eq!(grid.value_at(5, 2), Some(10));
    assert_eq!(grid.value_at(0, 0), Some(6));

    let report = grid.last_report().unwrap();
    let propagation_flashes = report
        .flashes()
        .filter(|(_, flash)| *flash == Flash::Propagation)
        .count();
    assert_eq!(propagation_flashes, 4);
}

/// Every cell is neutral once a click returns.
#[test]
fn test_colors_settle_to_neutral() {
    let mut grid = GridBuilder::new()
        .with_line(Axis::Row, 0, 0, &[2, 3, 5, 8, 12])
        .build()
        .unwrap();

    grid.click(0, 4).unwrap();

    assert!(grid.cells().all(|(_, cell)| cell.color == CellColor::Neutral));
}

// =============================================================================
// Errors and History
// =============================================================================

#[test]
fn test_out_of_range_click_reports_coordinates() {
    let mut grid = Grid::new(10);

    let err = grid.click(4, 10).unwrap_err();

    assert_eq!(err, GridError::OutOfRange { x: 4, y: 10, size: 10 });
    assert!(err.to_string().contains("4 10"));
    assert!(grid.history().is_empty());
}

#[test]
fn test_history_records_every_click() {
    let mut grid = Grid::new(10);
    grid.click(0, 0).unwrap();
    grid.click(0, 0).unwrap();
    let _ = grid.click(99, 0);

    assert_eq!(grid.click_count(), 2);
    let sequences: Vec<_> = grid.history().iter().map(|r| r.sequence).collect();
    assert_eq!(sequences, vec![1, 2]);
    assert!(!grid.history()[0].combo);
    assert!(grid.history()[1].combo);
}

#[test]
fn test_cloned_grid_is_independent() {
    let mut grid = Grid::new(10);
    grid.click(5, 5).unwrap();

    let before = grid.clone();
    grid.click(5, 5).unwrap();

    assert_eq!(before.value_at(5, 5), Some(1));
    assert_eq!(grid.value_at(5, 5), Some(2));
    assert_eq!(before.history().len(), 1);
}
