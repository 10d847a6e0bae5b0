//! # button-grid
//!
//! Rule evaluation and press validation for the Button Grid puzzle module.
//!
//! A 4×5 grid holds five buttons of each of four colors. Five rule stages
//! read the grid and the bomb's facts to produce a fixed 20-color expected
//! sequence. The player presses buttons in groups of four; each group must
//! match the next four expected colors without reusing a button.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: The grid comes from a seeded RNG and the rules are
//!    pure functions, so a seed and a set of bomb facts fix the whole puzzle.
//!
//! 2. **Rules as Data**: Each stage is an ordered table of conditions with a
//!    mandatory default, evaluated top to bottom.
//!
//! 3. **Host at the Edge**: Rendering, sounds, strikes and passes go through
//!    the `ModuleHost` trait. The core only returns outcomes.
//!
//! ## Modules
//!
//! - `core`: Colors, positions, the grid, bomb facts, RNG, configuration
//! - `rules`: Stage conditions, stage tables, the `RuleEngine`
//! - `puzzle`: The press state machine
//! - `solver`: Forced-solve planning
//! - `command`: Text command parsing
//! - `module`: Host trait and the full `ButtonGridModule`

pub mod core;
pub mod rules;
pub mod puzzle;
pub mod solver;
pub mod command;
pub mod module;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorGrid, ExternalFacts, GridError, ModuleConfig, ModuleRng, Position,
    PositionError,
};

pub use crate::rules::{ExpectedSequence, RuleEngine, Stage, StageCondition, StageReport};

pub use crate::puzzle::{PressOutcome, PressStateMachine, PuzzleStatus, ResetOutcome, SolveRoute};

pub use crate::solver::{ForcedSolvePlanner, SolvePlan};

pub use crate::command::{Command, CommandError};

pub use crate::module::{ButtonGridModule, CommandResponse, ModuleHost, NullHost, RecordingHost, Swatch};
