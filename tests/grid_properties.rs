//! Property tests for click resolution and seeded autoplay.

use fib_grid::{Autoplay, AutoplayConfig, Grid, GridSnapshot, Position};
use proptest::prelude::*;

fn value(snapshot: &GridSnapshot, pos: Position) -> u32 {
    snapshot.cells[pos.index(snapshot.size)].value()
}

proptest! {
    /// Each cell either gains exactly its propagation increments or is
    /// cleared by a match.
    #[test]
    fn prop_click_changes_are_local(
        clicks in prop::collection::vec((0usize..7, 0usize..7), 1..60),
    ) {
        let mut grid = Grid::new(7);

        for (x, y) in clicks {
            let before = grid.snapshot();
            let clicked = Position::new(x, y);
            let was_zero = value(&before, clicked) == 0;

            grid.click(x, y).unwrap();
            let after = grid.snapshot();
            let cleared = grid.last_report().unwrap().cleared_cells();

            for pos in Position::all(7) {
                let old = value(&before, pos);
                let new = value(&after, pos);
                let on_lines = pos.x == x || pos.y == y;

                let expected = if pos == clicked {
                    old + 1
                } else if !was_zero && on_lines && old != 0 {
                    old + 1
                } else {
                    old
                };

                if cleared.contains(&pos) {
                    prop_assert_eq!(new, 0);
                } else {
                    prop_assert_eq!(new, expected, "cell {} after click {}", pos, clicked);
                }
            }
        }
    }

    /// Out-of-range clicks are rejected and leave the grid untouched.
    #[test]
    fn prop_out_of_range_is_rejected(x in 0usize..20, y in 0usize..20) {
        prop_assume!(x >= 8 || y >= 8);
        let mut grid = Grid::new(8);
        grid.click(0, 0).unwrap();
        let before = grid.snapshot();

        prop_assert!(grid.click(x, y).is_err());
        prop_assert_eq!(grid.snapshot(), before);
        prop_assert_eq!(grid.click_count(), 1);
    }

    /// Autoplay is fully determined by its seed.
    #[test]
    fn prop_autoplay_is_deterministic(seed in any::<u64>()) {
        let config = AutoplayConfig::default().with_clicks(120).with_seed(seed);

        let mut grid1 = Grid::new(6);
        let mut grid2 = Grid::new(6);
        let stats1 = Autoplay::new(config.clone()).run(&mut grid1).unwrap();
        let stats2 = Autoplay::new(config).run(&mut grid2).unwrap();

        prop_assert_eq!(stats1, stats2);
        prop_assert_eq!(grid1.snapshot(), grid2.snapshot());
    }
}

#[test]
fn test_long_autoplay_clears_runs() {
    let mut grid = Grid::new(10);
    let stats = Autoplay::new(AutoplayConfig::default().with_clicks(5_000).with_seed(1))
        .run(&mut grid)
        .unwrap();

    assert_eq!(stats.clicks, 5_000);
    assert!(stats.combo_clicks > 0);
    assert!(stats.cells_cleared >= stats.runs_cleared);
}
