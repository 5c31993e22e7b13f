//! Seeded random play for soak tests and tuning.
//!
//! `Autoplay` clicks a grid repeatedly, biased towards nonzero cells so that
//! combo clicks (and therefore matches) actually happen. A run can be
//! checkpointed with [`Autoplay::checkpoint`] and a grid snapshot, then
//! continued later with [`Autoplay::resume`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rng::{ClickRng, ClickRngState};
use crate::core::{GridError, Position};
use crate::grid::Grid;

/// Autoplay parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AutoplayConfig {
    /// Number of clicks to perform.
    pub clicks: u32,

    /// Random seed. Same seed on the same grid gives the same game.
    pub seed: u64,

    /// Probability of clicking an already nonzero cell (0.0 - 1.0).
    pub combo_bias: f64,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            clicks: 1_000,
            seed: 42,
            combo_bias: 0.7,
        }
    }
}

impl AutoplayConfig {
    pub fn with_clicks(mut self, clicks: u32) -> Self {
        self.clicks = clicks;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_combo_bias(mut self, bias: f64) -> Self {
        self.combo_bias = bias.clamp(0.0, 1.0);
        self
    }
}

/// Statistics collected during an autoplay run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoplayStats {
    /// Clicks performed.
    pub clicks: u32,

    /// Clicks on a nonzero cell.
    pub combo_clicks: u32,

    /// Fibonacci runs cleared.
    pub runs_cleared: u64,

    /// Distinct cells cleared, summed per click.
    pub cells_cleared: u64,

    /// Largest cell value seen after any click.
    pub max_value: u32,
}

impl AutoplayStats {
    /// Cleared runs per click.
    #[must_use]
    pub fn runs_per_click(&self) -> f64 {
        if self.clicks == 0 {
            0.0
        } else {
            self.runs_cleared as f64 / f64::from(self.clicks)
        }
    }
}

/// Random click driver.
pub struct Autoplay {
    config: AutoplayConfig,
    rng: ClickRng,
}

impl Autoplay {
    pub fn new(config: AutoplayConfig) -> Self {
        let rng = ClickRng::new(config.seed);
        Self { config, rng }
    }

    /// Continue a click stream captured by [`Autoplay::checkpoint`].
    ///
    /// `config.seed` is ignored in favour of the checkpoint's seed.
    pub fn resume(config: AutoplayConfig, checkpoint: &ClickRngState) -> Self {
        let rng = ClickRng::from_state(checkpoint);
        Self {
            config: AutoplayConfig {
                seed: checkpoint.seed,
                ..config
            },
            rng,
        }
    }

    /// Current position in the click stream.
    ///
    /// Pair it with `Grid::snapshot` to save a run in progress.
    #[must_use]
    pub fn checkpoint(&self) -> ClickRngState {
        self.rng.state()
    }

    /// Play `config.clicks` clicks on `grid`.
    pub fn run(&mut self, grid: &mut Grid) -> Result<AutoplayStats, GridError> {
        let mut stats = AutoplayStats::default();

        for _ in 0..self.config.clicks {
            let nonzero: Vec<Position> = grid
                .cells()
                .filter(|(_, cell)| cell.value != 0)
                .map(|(pos, _)| pos)
                .collect();
            let pos = self.rng.position_biased(grid.size(), &nonzero, self.config.combo_bias);

            grid.click(pos.x, pos.y)?;

            stats.clicks += 1;
            if let Some(report) = grid.last_report() {
                if report.combo {
                    stats.combo_clicks += 1;
                }
                stats.runs_cleared += u64::try_from(report.matches.len()).unwrap_or(u64::MAX);
                stats.cells_cleared += u64::try_from(report.cleared_cells().len()).unwrap_or(u64::MAX);
            }
            let max = grid.cells().map(|(_, cell)| cell.value).max().unwrap_or(0);
            stats.max_value = stats.max_value.max(max);
        }

        debug!(
            clicks = stats.clicks,
            combos = stats.combo_clicks,
            runs = stats.runs_cleared,
            "autoplay finished"
        );
        Ok(stats)
    }
}
