//! Forced solves for automation.

pub mod planner;

pub use planner::{ForcedSolvePlanner, SolvePlan};
