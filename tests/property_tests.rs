//! Property-based tests.
//!
//! Uses proptest to generate seeds, grids and bomb facts, then verifies the
//! structural invariants of generation, rule evaluation and planning.

use button_grid::core::{Color, ColorGrid, ExternalFacts, ModuleRng, GRID_SIZE, PER_COLOR};
use button_grid::puzzle::{PressOutcome, PressStateMachine};
use button_grid::rules::{RuleEngine, Stage};
use button_grid::solver::ForcedSolvePlanner;
use proptest::prelude::*;

// ===========================================================================
// Generators
// ===========================================================================

fn arb_grid() -> impl Strategy<Value = ColorGrid> {
    any::<u64>().prop_map(|seed| ColorGrid::generate(&mut ModuleRng::new(seed)))
}

fn arb_facts() -> impl Strategy<Value = ExternalFacts> {
    (
        "[A-Z0-9]{6}",
        prop::bool::ANY,
        prop::bool::ANY,
        0u32..4,
    )
        .prop_map(|(serial, bob, dvi, batteries)| {
            let mut facts = ExternalFacts::new(serial).with_batteries(batteries);
            if bob {
                facts = facts.with_on_indicator("BOB");
            }
            if dvi {
                facts = facts.with_port("DVI");
            }
            facts
        })
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #[test]
    fn grid_has_five_of_each_color(grid in arb_grid()) {
        for color in Color::ALL {
            prop_assert_eq!(grid.count_in(0..GRID_SIZE, color), PER_COLOR);
        }
    }

    #[test]
    fn evaluation_is_deterministic(grid in arb_grid(), facts in arb_facts()) {
        let a = RuleEngine::evaluate(&grid, &facts);
        let b = RuleEngine::evaluate(&grid, &facts);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.len(), GRID_SIZE);
    }

    #[test]
    fn stages_come_from_tables(grid in arb_grid(), facts in arb_facts()) {
        let expected = RuleEngine::evaluate(&grid, &facts);
        for (i, stage) in Stage::ALL.iter().enumerate() {
            let quad = expected.stage(i).unwrap();
            prop_assert!(stage.outcomes().any(|q| q == quad));
        }
    }

    #[test]
    fn forced_solve_never_strikes(grid in arb_grid(), facts in arb_facts()) {
        let expected = RuleEngine::evaluate(&grid, &facts);
        let plan = ForcedSolvePlanner::plan(&grid, &expected);
        prop_assert_eq!(plan.len(), GRID_SIZE);

        let mut machine = PressStateMachine::new(grid, expected, facts.alternate_rule_eligible());
        for pos in plan {
            let outcome = machine.press(pos);
            let struck = matches!(outcome, PressOutcome::Strike { .. });
            prop_assert!(!struck, "planned press {} struck", pos);
        }
        prop_assert!(machine.is_solved());
        prop_assert_eq!(machine.consumed().len(), GRID_SIZE);
    }

    #[test]
    fn repeated_group_always_strikes(grid in arb_grid(), facts in arb_facts()) {
        let expected = RuleEngine::evaluate(&grid, &facts);
        let plan = ForcedSolvePlanner::plan(&grid, &expected);
        let first: Vec<_> = plan.presses()[..4].to_vec();

        // Never eligible, so the first group can only be the normal one.
        let mut machine = PressStateMachine::new(grid, expected, false);
        for &pos in &first {
            machine.press(pos);
        }
        let mut last = None;
        for &pos in &first {
            last = Some(machine.press(pos));
        }
        let struck = matches!(last, Some(PressOutcome::Strike { .. }));
        prop_assert!(struck, "repeated group was not struck: {:?}", last);
        prop_assert_eq!(machine.accepted_groups(), 1);
    }
}
