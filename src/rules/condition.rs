//! Stage conditions.
//!
//! Each stage is a priority list of conditions. A condition inspects the
//! grid, the bomb facts, or both; the evaluator answers whether it holds.

use crate::core::grid::{distinct, GRID_SIZE, PER_COLOR};
use crate::core::{Color, ColorGrid, ExternalFacts};

/// Positions `0..10`.
const TOP_HALF: std::ops::Range<usize> = 0..GRID_SIZE / 2;
/// Positions `10..20`.
const BOTTOM_HALF: std::ops::Range<usize> = GRID_SIZE / 2..GRID_SIZE;

/// Serial characters counted as vowels.
pub const VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U'];

/// A condition a stage rule can test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageCondition {
    // === Grid shape ===

    /// The four corners are four different colors.
    CornersDistinct,

    /// Some column contains all four colors.
    AnyColumnHasAllColors,

    /// Some row is missing at least one color.
    AnyRowMissingColor,

    // === Color distribution ===

    /// Every button of this color is in the top half.
    AllInTopHalf(Color),

    /// The bottom half holds at least `min` buttons of `color`.
    BottomHalfAtLeast { color: Color, min: usize },

    /// Two buttons of this color touch orthogonally.
    AdjacentPair(Color),

    // === Single buttons ===

    /// The first button has this color.
    FirstIs(Color),

    /// The last button has this color.
    LastIs(Color),

    // === Bomb facts ===

    /// The serial number contains any of these characters.
    SerialContainsAny(&'static [char]),
}

impl StageCondition {
    /// Log text for a condition that held.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::CornersDistinct => "The four corners are different colors.".into(),
            Self::AnyColumnHasAllColors => "A column contains all four colors.".into(),
            Self::AnyRowMissingColor => "A row is missing a color entirely.".into(),
            Self::AllInTopHalf(color) => format!(
                "The top half of the grid contains all of the {} buttons.",
                color.name().to_lowercase()
            ),
            Self::BottomHalfAtLeast { color, min } => format!(
                "The bottom half contains at least {min} {} buttons.",
                color.name().to_lowercase()
            ),
            Self::AdjacentPair(color) => {
                let c = color.name().to_lowercase();
                format!("There is a {c} button adjacent to another {c} button.")
            }
            Self::FirstIs(color) => {
                format!("The first button's color is {}.", color.name().to_lowercase())
            }
            Self::LastIs(color) => {
                format!("The last button's color is {}.", color.name().to_lowercase())
            }
            Self::SerialContainsAny(chars) if chars.iter().eq(VOWELS) => {
                "The bomb's serial number contains a vowel.".into()
            }
            Self::SerialContainsAny(chars) => {
                let list: Vec<String> = chars.iter().map(char::to_string).collect();
                match list.split_last() {
                    Some((last, rest)) if !rest.is_empty() => format!(
                        "The bomb's serial number contains {}, or {last}.",
                        rest.join(", ")
                    ),
                    _ => format!("The bomb's serial number contains {}.", list.join("")),
                }
            }
        }
    }
}

/// Context for evaluating stage conditions.
#[derive(Clone, Copy, Debug)]
pub struct ConditionContext<'a> {
    pub grid: &'a ColorGrid,
    pub facts: &'a ExternalFacts,
}

impl<'a> ConditionContext<'a> {
    /// Create a new context.
    pub fn new(grid: &'a ColorGrid, facts: &'a ExternalFacts) -> Self {
        Self { grid, facts }
    }
}

/// Evaluator for stage conditions.
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// Check if a condition is satisfied.
    pub fn evaluate(condition: &StageCondition, ctx: &ConditionContext) -> bool {
        let grid = ctx.grid;
        match *condition {
            StageCondition::CornersDistinct => distinct(&grid.corners()) == 4,

            StageCondition::AnyColumnHasAllColors => grid.columns().any(|col| distinct(&col) == 4),

            StageCondition::AnyRowMissingColor => grid.rows().any(|row| distinct(row) != 4),

            StageCondition::AllInTopHalf(color) => {
                grid.count_in(TOP_HALF, color) == PER_COLOR
            }

            StageCondition::BottomHalfAtLeast { color, min } => {
                grid.count_in(BOTTOM_HALF, color) >= min
            }

            StageCondition::AdjacentPair(color) => grid.has_adjacent_pair(color),

            StageCondition::FirstIs(color) => first(grid) == color,

            StageCondition::LastIs(color) => last(grid) == color,

            StageCondition::SerialContainsAny(chars) => ctx.facts.serial_contains_any(chars),
        }
    }
}

fn first(grid: &ColorGrid) -> Color {
    grid.colors()[0]
}

fn last(grid: &ColorGrid) -> Color {
    grid.colors()[GRID_SIZE - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::test_grids::banded;
    use Color::{Blue as B, Green as G, Red as R, Yellow as Y};

    fn holds(condition: StageCondition, grid: &ColorGrid, serial: &str) -> bool {
        let facts = ExternalFacts::new(serial);
        ConditionEvaluator::evaluate(&condition, &ConditionContext::new(grid, &facts))
    }

    fn checkerboard() -> ColorGrid {
        // No row is missing a color and no two greens touch.
        ColorGrid::from_colors([
            R, Y, G, B, R, //
            Y, B, R, G, Y, //
            G, R, B, Y, B, //
            B, G, Y, R, G, //
        ])
        .unwrap()
    }

    #[test]
    fn test_corners_distinct() {
        assert!(!holds(StageCondition::CornersDistinct, &banded(), ""));
        let grid = ColorGrid::from_colors([
            R, Y, Y, Y, B, //
            R, R, R, R, Y, //
            G, G, G, B, B, //
            Y, B, B, G, G, //
        ])
        .unwrap();
        assert_eq!(grid.corners(), [R, B, Y, G]);
        assert!(holds(StageCondition::CornersDistinct, &grid, ""));
    }

    #[test]
    fn test_columns_and_rows() {
        assert!(holds(StageCondition::AnyColumnHasAllColors, &banded(), ""));
        assert!(holds(StageCondition::AnyRowMissingColor, &banded(), ""));
        assert!(!holds(StageCondition::AnyRowMissingColor, &checkerboard(), ""));
    }

    #[test]
    fn test_halves() {
        assert!(holds(StageCondition::AllInTopHalf(R), &banded(), ""));
        assert!(!holds(StageCondition::AllInTopHalf(B), &banded(), ""));
        let at_least = |min| StageCondition::BottomHalfAtLeast { color: B, min };
        assert!(holds(at_least(5), &banded(), ""));
        assert!(!holds(StageCondition::BottomHalfAtLeast { color: R, min: 3 }, &banded(), ""));
    }

    #[test]
    fn test_adjacent_pair() {
        assert!(holds(StageCondition::AdjacentPair(G), &banded(), ""));
        assert!(!holds(StageCondition::AdjacentPair(G), &checkerboard(), ""));
    }

    #[test]
    fn test_first_last() {
        assert!(holds(StageCondition::FirstIs(R), &banded(), ""));
        assert!(holds(StageCondition::LastIs(B), &banded(), ""));
        assert!(!holds(StageCondition::LastIs(G), &banded(), ""));
    }

    #[test]
    fn test_serial() {
        let btn = StageCondition::SerialContainsAny(&['B', 'T', 'N']);
        assert!(holds(btn, &banded(), "XN4"));
        assert!(!holds(btn, &banded(), "AC123"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            StageCondition::SerialContainsAny(&['G', 'R', 'D']).describe(),
            "The bomb's serial number contains G, R, or D."
        );
        assert_eq!(
            StageCondition::SerialContainsAny(&['B', 'T', 'N']).describe(),
            "The bomb's serial number contains B, T, or N."
        );
        assert_eq!(
            StageCondition::SerialContainsAny(VOWELS).describe(),
            "The bomb's serial number contains a vowel."
        );
        assert_eq!(
            StageCondition::SerialContainsAny(&['Q']).describe(),
            "The bomb's serial number contains Q."
        );
        assert_eq!(
            StageCondition::BottomHalfAtLeast { color: R, min: 3 }.describe(),
            "The bottom half contains at least 3 red buttons."
        );
    }
}
