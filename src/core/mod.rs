//! Core engine types: positions, cells, configuration, errors.
//!
//! These are the building blocks the grid is made of. They carry no
//! click logic of their own.

pub mod position;
pub mod cell;
pub mod config;
pub mod error;

pub use position::{Axis, Position};
pub use cell::{Cell, CellColor, CellView, Flash, MAX_PRESET_VALUE};
pub use config::GridConfig;
pub use error::GridError;
