//! Core types: colors, grid positions, the grid, bomb facts, RNG, configuration.
//!
//! Everything here is plain data. Rule evaluation lives in `crate::rules`
//! and press handling in `crate::puzzle`.

pub mod color;
pub mod grid;
pub mod facts;
pub mod rng;
pub mod config;

pub use color::Color;
pub use grid::{ColorGrid, GridError, Position, PositionError, COLUMNS, GRID_SIZE, PER_COLOR, ROWS};
pub use facts::ExternalFacts;
pub use rng::ModuleRng;
pub use config::{ModuleConfig, GROUP_SIZE};
