//! Press accumulation and validation.
//!
//! Presses are buffered until four have arrived, then judged as a group:
//!
//! 1. Before any group has been accepted, an eligible module solves on
//!    four distinct buttons colored Blue, Red, Blue, Yellow.
//! 2. Otherwise the group is correct if its colors match the next four
//!    expected colors and none of its buttons were used by an earlier
//!    accepted group.
//!
//! A wrong group is one strike; the buffer is discarded either way.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::GROUP_SIZE;
use crate::core::grid::GRID_SIZE;
use crate::core::{Color, ColorGrid, Position};
use crate::rules::ExpectedSequence;

/// Colors that solve an eligible module outright, in press order.
pub const ALTERNATE_PATTERN: [Color; GROUP_SIZE] =
    [Color::Blue, Color::Red, Color::Blue, Color::Yellow];

/// Four presses judged together.
pub type Group = [Position; GROUP_SIZE];

/// Whether the puzzle can still be interacted with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PuzzleStatus {
    /// Accepting presses.
    #[default]
    Unsolved,
    /// Terminal.
    Solved,
}

/// How the puzzle was solved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveRoute {
    /// All twenty expected presses were made.
    Sequence,
    /// The alternate pattern was pressed first.
    Alternate,
}

/// Result of a single press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// The puzzle is already solved; nothing changed.
    Ignored,
    /// Waiting for more presses to complete a group.
    Buffered { pending: usize },
    /// The group was accepted. `accepted` counts accepted groups so far.
    Correct { group: Group, accepted: usize },
    /// The group was rejected.
    Strike { group: Group },
    /// The puzzle is now solved.
    Solved { group: Group, route: SolveRoute },
}

/// Result of pressing the reset button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Progress and buffer were cleared.
    Cleared,
    /// The puzzle is solved; state is untouched.
    AlreadySolved,
}

/// The press state machine for one module.
#[derive(Clone, Debug)]
pub struct PressStateMachine {
    grid: ColorGrid,
    expected: ExpectedSequence,
    alternate_eligible: bool,
    buffer: SmallVec<[Position; GROUP_SIZE]>,
    consumed: SmallVec<[Position; GRID_SIZE]>,
    status: PuzzleStatus,
}

impl PressStateMachine {
    /// Create a machine in its initial state.
    pub fn new(grid: ColorGrid, expected: ExpectedSequence, alternate_eligible: bool) -> Self {
        Self {
            grid,
            expected,
            alternate_eligible,
            buffer: SmallVec::new(),
            consumed: SmallVec::new(),
            status: PuzzleStatus::Unsolved,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &ColorGrid {
        &self.grid
    }

    #[must_use]
    pub fn expected(&self) -> &ExpectedSequence {
        &self.expected
    }

    #[must_use]
    pub fn alternate_eligible(&self) -> bool {
        self.alternate_eligible
    }

    #[must_use]
    pub fn status(&self) -> PuzzleStatus {
        self.status
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.status == PuzzleStatus::Solved
    }

    /// Presses waiting to be judged.
    #[must_use]
    pub fn buffered(&self) -> &[Position] {
        &self.buffer
    }

    /// Presses already accepted, in order.
    #[must_use]
    pub fn consumed(&self) -> &[Position] {
        &self.consumed
    }

    /// Number of accepted groups.
    #[must_use]
    pub fn accepted_groups(&self) -> usize {
        self.consumed.len() / GROUP_SIZE
    }

    /// Register a press.
    pub fn press(&mut self, position: Position) -> PressOutcome {
        if self.is_solved() {
            return PressOutcome::Ignored;
        }

        self.buffer.push(position);
        if self.buffer.len() < GROUP_SIZE {
            return PressOutcome::Buffered {
                pending: self.buffer.len(),
            };
        }

        let group: Group = [self.buffer[0], self.buffer[1], self.buffer[2], self.buffer[3]];
        self.buffer.clear();
        self.judge(group)
    }

    fn judge(&mut self, group: Group) -> PressOutcome {
        if self.consumed.is_empty() && self.alternate_eligible && self.matches_alternate(&group) {
            self.status = PuzzleStatus::Solved;
            return PressOutcome::Solved {
                group,
                route: SolveRoute::Alternate,
            };
        }

        let offset = self.consumed.len();
        let correct = group
            .iter()
            .enumerate()
            .all(|(j, &pos)| self.expected.get(offset + j) == Some(self.grid.get(pos)));
        let fresh = group.iter().all(|pos| !self.consumed.contains(pos));

        if !(correct && fresh) {
            return PressOutcome::Strike { group };
        }

        self.consumed.extend_from_slice(&group);
        if self.consumed.len() == GRID_SIZE {
            self.status = PuzzleStatus::Solved;
            PressOutcome::Solved {
                group,
                route: SolveRoute::Sequence,
            }
        } else {
            PressOutcome::Correct {
                group,
                accepted: self.accepted_groups(),
            }
        }
    }

    fn matches_alternate(&self, group: &Group) -> bool {
        let colors_match = group
            .iter()
            .zip(ALTERNATE_PATTERN)
            .all(|(&pos, color)| self.grid.get(pos) == color);
        let distinct = group
            .iter()
            .enumerate()
            .all(|(i, pos)| !group[..i].contains(pos));
        colors_match && distinct
    }

    /// Press the reset button.
    pub fn reset(&mut self) -> ResetOutcome {
        if self.is_solved() {
            return ResetOutcome::AlreadySolved;
        }
        self.buffer.clear();
        self.consumed.clear();
        ResetOutcome::Cleared
    }
}
