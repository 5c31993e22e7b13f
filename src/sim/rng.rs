//! Deterministic click source for simulations.
//!
//! A `ClickRng` is a ChaCha8 stream keyed by a `u64` seed. Its position in
//! the stream can be captured as a [`ClickRngState`] and restored later,
//! which is how autoplay runs are checkpointed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Seeded RNG producing grid positions.
#[derive(Clone, Debug)]
pub struct ClickRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ClickRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Pick a uniformly random position on a grid of `size`.
    pub fn position(&mut self, size: usize) -> Position {
        Position::new(self.inner.gen_range(0..size), self.inner.gen_range(0..size))
    }

    /// Pick a position, preferring one from `candidates` with `probability`.
    ///
    /// Falls back to a uniform position when `candidates` is empty.
    pub fn position_biased(&mut self, size: usize, candidates: &[Position], probability: f64) -> Position {
        if !candidates.is_empty() && self.inner.gen_bool(probability.clamp(0.0, 1.0)) {
            return candidates[self.inner.gen_range(0..candidates.len())];
        }
        self.position(size)
    }

    /// Where this stream currently is.
    #[must_use]
    pub fn state(&self) -> ClickRngState {
        ClickRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Continue a stream from a captured state.
    #[must_use]
    pub fn from_state(state: &ClickRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Resumable position in a click stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickRngState {
    pub seed: u64,
    /// ChaCha8 word offset into the stream.
    pub word_pos: u128,
}
