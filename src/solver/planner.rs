//! Forced-solve planning.
//!
//! For each expected color in order, take the lowest-numbered button of
//! that color not already taken. Since the grid holds five of each color
//! and the sequence asks for five of each, every lookup succeeds and the
//! twenty chosen buttons are all different.

use crate::core::grid::GRID_SIZE;
use crate::core::{Color, ColorGrid, Position};
use crate::rules::ExpectedSequence;

/// Presses that replay as an all-correct solve from a fresh state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolvePlan {
    presses: Vec<Position>,
}

impl SolvePlan {
    #[must_use]
    pub fn presses(&self) -> &[Position] {
        &self.presses
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.presses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }
}

impl IntoIterator for SolvePlan {
    type Item = Position;
    type IntoIter = std::vec::IntoIter<Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.presses.into_iter()
    }
}

/// Computes forced-solve press orders.
pub struct ForcedSolvePlanner;

impl ForcedSolvePlanner {
    /// Plan the twenty presses for `expected` on `grid`.
    pub fn plan(grid: &ColorGrid, expected: &ExpectedSequence) -> SolvePlan {
        // `None` marks a button already taken by this plan.
        let mut remaining: [Option<Color>; GRID_SIZE] = std::array::from_fn(|i| Some(grid.colors()[i]));
        let presses: Vec<Position> = expected
            .iter()
            .filter_map(|color| {
                let slot = remaining.iter().position(|&c| c == Some(color))?;
                remaining[slot] = None;
                Position::new(slot).ok()
            })
            .collect();
        debug_assert_eq!(presses.len(), GRID_SIZE);
        SolvePlan { presses }
    }
}
