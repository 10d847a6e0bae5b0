//! Stage rules and the expected-sequence engine.

pub mod condition;
pub mod engine;

pub use condition::{ConditionContext, ConditionEvaluator, StageCondition};
pub use engine::{ExpectedSequence, Quadruple, RuleEngine, Stage, StageReport, StageRule, STAGE_COUNT};
