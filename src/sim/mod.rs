//! Seeded simulation of play.
//!
//! - `ClickRng`: seeded, resumable position source
//! - `Autoplay`: drives random clicks on a grid and collects statistics

pub mod rng;
pub mod autoplay;

pub use rng::{ClickRng, ClickRngState};
pub use autoplay::{Autoplay, AutoplayConfig, AutoplayStats};
