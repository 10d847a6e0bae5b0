//! The five-stage rule engine.
//!
//! Each stage is an ordered list of `(condition, quadruple)` rules plus a
//! default quadruple. The first rule whose condition holds wins; if none
//! holds the default is used. The expected sequence is the five stage
//! outputs concatenated.
//!
//! ```
//! use button_grid::core::{ColorGrid, ExternalFacts, ModuleRng};
//! use button_grid::rules::RuleEngine;
//!
//! let grid = ColorGrid::generate(&mut ModuleRng::new(1));
//! let facts = ExternalFacts::new("AB1CD2");
//!
//! let expected = RuleEngine::evaluate(&grid, &facts);
//! assert_eq!(expected.len(), 20);
//! assert_eq!(expected, RuleEngine::evaluate(&grid, &facts));
//! ```

use serde::Serialize;

use crate::core::config::GROUP_SIZE;
use crate::core::grid::GRID_SIZE;
use crate::core::{Color, ColorGrid, ExternalFacts};

use super::condition::{ConditionContext, ConditionEvaluator, StageCondition, VOWELS};

use Color::{Blue as B, Green as G, Red as R, Yellow as Y};

/// Four colors contributed by one stage.
pub type Quadruple = [Color; GROUP_SIZE];

/// Number of stages.
pub const STAGE_COUNT: usize = GRID_SIZE / GROUP_SIZE;

/// One rule of a stage: if `condition` holds, the stage yields `quadruple`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageRule {
    pub condition: StageCondition,
    pub quadruple: Quadruple,
}

impl StageRule {
    const fn new(condition: StageCondition, quadruple: Quadruple) -> Self {
        Self { condition, quadruple }
    }
}

/// A stage: rules in priority order and the default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stage {
    /// 1-based stage number.
    pub number: usize,
    pub rules: &'static [StageRule],
    pub default: Quadruple,
}

/// Stage 1: grid shape.
const STAGE_1: Stage = Stage {
    number: 1,
    rules: &[
        StageRule::new(StageCondition::CornersDistinct, [R, B, Y, G]),
        StageRule::new(StageCondition::AnyColumnHasAllColors, [G, R, Y, B]),
        StageRule::new(StageCondition::AnyRowMissingColor, [R, Y, B, G]),
    ],
    default: [G, Y, B, R],
};

/// Stage 2: color distribution.
const STAGE_2: Stage = Stage {
    number: 2,
    rules: &[
        StageRule::new(StageCondition::AllInTopHalf(B), [B, R, Y, G]),
        StageRule::new(StageCondition::BottomHalfAtLeast { color: R, min: 3 }, [R, G, Y, B]),
        StageRule::new(StageCondition::AdjacentPair(G), [G, B, R, Y]),
    ],
    default: [Y, R, B, G],
};

/// Stage 3: serial number.
const STAGE_3: Stage = Stage {
    number: 3,
    rules: &[
        StageRule::new(StageCondition::SerialContainsAny(&['B', 'T', 'N']), [G, B, R, Y]),
        StageRule::new(StageCondition::SerialContainsAny(&['G', 'R', 'D']), [R, G, B, Y]),
        StageRule::new(StageCondition::SerialContainsAny(VOWELS), [B, G, R, Y]),
    ],
    default: [Y, R, G, B],
};

/// Stage 4: first button.
const STAGE_4: Stage = Stage {
    number: 4,
    rules: &[
        StageRule::new(StageCondition::FirstIs(R), [R, Y, G, B]),
        StageRule::new(StageCondition::FirstIs(G), [G, R, B, Y]),
        StageRule::new(StageCondition::FirstIs(Y), [Y, R, G, B]),
    ],
    default: [B, R, Y, G],
};

/// Stage 5: last button.
const STAGE_5: Stage = Stage {
    number: 5,
    rules: &[
        StageRule::new(StageCondition::LastIs(Y), [R, B, G, Y]),
        StageRule::new(StageCondition::LastIs(G), [B, Y, R, G]),
        StageRule::new(StageCondition::LastIs(B), [G, Y, R, B]),
    ],
    default: [Y, B, G, R],
};

impl Stage {
    /// All stages in evaluation order.
    pub const ALL: [Stage; STAGE_COUNT] = [STAGE_1, STAGE_2, STAGE_3, STAGE_4, STAGE_5];

    /// Every quadruple this stage can yield, rules first, default last.
    pub fn outcomes(&self) -> impl Iterator<Item = Quadruple> + '_ {
        self.rules
            .iter()
            .map(|r| r.quadruple)
            .chain(std::iter::once(self.default))
    }

    /// Evaluate this stage.
    pub fn evaluate(&self, ctx: &ConditionContext) -> StageReport {
        let fired = self
            .rules
            .iter()
            .position(|rule| ConditionEvaluator::evaluate(&rule.condition, ctx));
        let quadruple = fired.map_or(self.default, |i| self.rules[i].quadruple);
        StageReport {
            stage: self.number,
            rule: fired,
            quadruple,
        }
    }
}

/// Which rule of a stage applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageReport {
    /// 1-based stage number.
    pub stage: usize,
    /// Index of the rule that fired, or `None` for the default.
    pub rule: Option<usize>,
    pub quadruple: Quadruple,
}

impl StageReport {
    /// The condition that fired, if any.
    #[must_use]
    pub fn condition(&self) -> Option<StageCondition> {
        let stage = Stage::ALL.get(self.stage.checked_sub(1)?)?;
        stage.rules.get(self.rule?).map(|r| r.condition)
    }

    /// Log text for this stage's decision.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.condition() {
            Some(condition) => condition.describe(),
            None => "None of the rules for this stage applied.".to_string(),
        }
    }
}

/// The twenty colors the player must press, in order.
///
/// Every stage output is a permutation of the four colors, so the sequence
/// always asks for exactly five buttons of each color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ExpectedSequence {
    colors: [Color; GRID_SIZE],
}

impl ExpectedSequence {
    /// Color at a sequence index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Output of one stage (0-based).
    #[must_use]
    pub fn stage(&self, index: usize) -> Option<Quadruple> {
        let start = index * GROUP_SIZE;
        let slice = self.colors.get(start..start + GROUP_SIZE)?;
        slice.try_into().ok()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        GRID_SIZE
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }
}

/// Derives the expected sequence from the grid and bomb facts.
pub struct RuleEngine;

impl RuleEngine {
    /// Evaluate all five stages.
    pub fn evaluate(grid: &ColorGrid, facts: &ExternalFacts) -> ExpectedSequence {
        Self::evaluate_with_reports(grid, facts).0
    }

    /// Evaluate all five stages, also returning which rule fired in each.
    pub fn evaluate_with_reports(
        grid: &ColorGrid,
        facts: &ExternalFacts,
    ) -> (ExpectedSequence, [StageReport; STAGE_COUNT]) {
        let ctx = ConditionContext::new(grid, facts);
        let reports = Stage::ALL.map(|stage| stage.evaluate(&ctx));
        let colors = std::array::from_fn(|i| reports[i / GROUP_SIZE].quadruple[i % GROUP_SIZE]);
        (ExpectedSequence { colors }, reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::test_grids::banded;

    /// Every row has all four colors, no column does, and two corners match.
    fn no_shape_rule() -> ColorGrid {
        ColorGrid::from_colors([
            Y, G, Y, B, R, //
            Y, G, B, B, R, //
            R, R, Y, B, G, //
            R, G, Y, B, G, //
        ])
        .unwrap()
    }

    /// No two greens touch, two reds below the middle, blue in both halves.
    fn scattered() -> ColorGrid {
        ColorGrid::from_colors([
            G, R, G, R, G, //
            B, Y, B, R, B, //
            R, G, R, G, Y, //
            Y, B, Y, B, Y, //
        ])
        .unwrap()
    }

    fn blue_first() -> ColorGrid {
        ColorGrid::from_colors([
            B, B, B, B, B, //
            Y, Y, Y, Y, Y, //
            G, G, G, G, G, //
            R, R, R, R, R, //
        ])
        .unwrap()
    }

    fn report(stage: usize, grid: &ColorGrid, serial: &str) -> StageReport {
        let facts = ExternalFacts::new(serial);
        Stage::ALL[stage - 1].evaluate(&ConditionContext::new(grid, &facts))
    }

    #[test]
    fn test_every_outcome_is_a_permutation() {
        for stage in Stage::ALL {
            assert_eq!(stage.outcomes().count(), 4);
            for quad in stage.outcomes() {
                assert_eq!(crate::core::grid::distinct(&quad), 4);
            }
        }
    }

    #[test]
    fn test_stage_numbers() {
        let numbers: Vec<_> = Stage::ALL.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_stage_1_priority() {
        // Corners not distinct, every column holds all four colors.
        let r = report(1, &banded(), "");
        assert_eq!(r.rule, Some(1));
        assert_eq!(r.quadruple, [G, R, Y, B]);
    }

    #[test]
    fn test_stage_1_row_missing() {
        // No column has all four, but rows do repeat.
        let grid = ColorGrid::from_colors([
            R, R, Y, Y, G, //
            R, R, Y, Y, G, //
            B, B, G, G, Y, //
            B, B, G, B, R, //
        ])
        .unwrap();
        let r = report(1, &grid, "");
        assert_eq!(r.rule, Some(2));
        assert_eq!(r.quadruple, [R, Y, B, G]);
    }

    #[test]
    fn test_stage_2_blue_in_top_half() {
        let grid = ColorGrid::from_colors([
            B, B, B, B, B, //
            R, R, R, R, R, //
            Y, Y, Y, Y, Y, //
            G, G, G, G, G, //
        ])
        .unwrap();
        assert_eq!(report(2, &grid, "").quadruple, [B, R, Y, G]);
    }

    #[test]
    fn test_stage_1_default() {
        let r = report(1, &no_shape_rule(), "");
        assert_eq!(r.rule, None);
        assert_eq!(r.quadruple, [G, Y, B, R]);
    }

    #[test]
    fn test_stage_2_red_in_bottom_half() {
        // Three reds below the middle; blue is split across both halves.
        let r = report(2, &no_shape_rule(), "");
        assert_eq!(r.rule, Some(1));
        assert_eq!(r.quadruple, [R, G, Y, B]);
    }

    #[test]
    fn test_stage_2_default() {
        let r = report(2, &scattered(), "");
        assert_eq!(r.rule, None);
        assert_eq!(r.quadruple, [Y, R, B, G]);
    }

    #[test]
    fn test_stage_2_adjacent_green() {
        // Banded: blue at the bottom, no red below the middle, greens touch.
        let r = report(2, &banded(), "");
        assert_eq!(r.rule, Some(2));
        assert_eq!(r.quadruple, [G, B, R, Y]);
    }

    #[test]
    fn test_stage_3_serial_priority() {
        assert_eq!(report(3, &banded(), "TGA").quadruple, [G, B, R, Y]);
        assert_eq!(report(3, &banded(), "DA").quadruple, [R, G, B, Y]);
        assert_eq!(report(3, &banded(), "ABC123").quadruple, [G, B, R, Y]);
        assert_eq!(report(3, &banded(), "AXC123").quadruple, [B, G, R, Y]);
        assert_eq!(report(3, &banded(), "XYZ999").quadruple, [Y, R, G, B]);
    }

    #[test]
    fn test_stage_4_every_first_color() {
        assert_eq!(report(4, &banded(), "").quadruple, [R, Y, G, B]);
        assert_eq!(report(4, &no_shape_rule(), "").quadruple, [Y, R, G, B]);
        assert_eq!(report(4, &scattered(), "").quadruple, [G, R, B, Y]);

        let r = report(4, &blue_first(), "");
        assert_eq!(r.rule, None);
        assert_eq!(r.quadruple, [B, R, Y, G]);
    }

    #[test]
    fn test_stage_5_every_last_color() {
        assert_eq!(report(5, &scattered(), "").quadruple, [R, B, G, Y]);
        assert_eq!(report(5, &no_shape_rule(), "").quadruple, [B, Y, R, G]);
        assert_eq!(report(5, &banded(), "").quadruple, [G, Y, R, B]);

        let r = report(5, &blue_first(), "");
        assert_eq!(r.rule, None);
        assert_eq!(r.quadruple, [Y, B, G, R]);
    }

    #[test]
    fn test_default_report() {
        let r = report(3, &banded(), "XYZ999");
        assert_eq!(r.rule, None);
        assert_eq!(r.condition(), None);
        assert_eq!(r.describe(), "None of the rules for this stage applied.");
    }

    #[test]
    fn test_evaluate_concatenates_stages() {
        let facts = ExternalFacts::new("XYZ999");
        let (expected, reports) = RuleEngine::evaluate_with_reports(&banded(), &facts);
        for (i, r) in reports.iter().enumerate() {
            assert_eq!(expected.stage(i), Some(r.quadruple));
        }
        assert_eq!(expected.stage(5), None);
        assert_eq!(expected.get(20), None);
    }

    #[test]
    fn test_condition_lookup_out_of_range() {
        let r = StageReport {
            stage: 1,
            rule: Some(7),
            quadruple: [R, Y, G, B],
        };
        assert_eq!(r.condition(), None);
        assert_eq!(r.describe(), "None of the rules for this stage applied.");

        let r = StageReport { stage: 0, ..r };
        assert_eq!(r.condition(), None);
    }
}
