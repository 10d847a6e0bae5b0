//! The press state machine.
//!
//! Owns the grid and expected sequence for a module and judges presses in
//! groups of four. Host notifications (strike, pass, rendering) are driven
//! from the returned outcomes by `crate::module`.

pub mod machine;

pub use machine::{
    Group, PressOutcome, PressStateMachine, PuzzleStatus, ResetOutcome, SolveRoute,
    ALTERNATE_PATTERN,
};
