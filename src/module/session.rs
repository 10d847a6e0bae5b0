//! A complete Button Grid module.
//!
//! `ButtonGridModule` ties the pieces together for one bomb:
//! - generates the grid and derives the expected sequence at startup
//! - judges presses through the `PressStateMachine`
//! - turns outcomes into host notifications and rendering
//! - executes text commands and forced solves
//!
//! ```
//! use button_grid::core::{ExternalFacts, ModuleConfig, ModuleRng};
//! use button_grid::module::{ButtonGridModule, RecordingHost};
//!
//! let facts = ExternalFacts::new("AB1CD2");
//! let rng = ModuleRng::new(42);
//! let mut module = ButtonGridModule::new(ModuleConfig::new(), &facts, &rng, RecordingHost::new());
//!
//! module.force_solve();
//! assert!(module.is_solved());
//! assert_eq!(module.host().strikes(), 0);
//! ```

use tracing::{debug, info, warn};

use crate::command::{Command, CommandError};
use crate::core::{Color, ColorGrid, ExternalFacts, ModuleConfig, ModuleRng, Position};
use crate::puzzle::{PressOutcome, PressStateMachine, ResetOutcome, SolveRoute};
use crate::rules::{ExpectedSequence, RuleEngine};
use crate::solver::ForcedSolvePlanner;

use super::host::{ModuleHost, Swatch, SUSPICIOUS_PATTERN};

/// RNG context the grid is shuffled from.
pub const GRID_STREAM: &str = "grid";

/// Reply sent when the suspicious command is used.
pub const SUSPICIOUS_REPLY: &str = "Suspicious command.";

/// What a text command did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandResponse {
    /// Buttons were pressed; one outcome per press.
    Pressed(Vec<PressOutcome>),
    /// The reset button was pressed.
    Reset(ResetOutcome),
    /// The suspicious pattern is armed.
    Suspicious,
}

/// One Button Grid module on a bomb.
pub struct ButtonGridModule<H: ModuleHost> {
    config: ModuleConfig,
    machine: PressStateMachine,
    easter_egg_armed: bool,
    host: H,
}

impl<H: ModuleHost> ButtonGridModule<H> {
    /// Start a module with a grid shuffled from the bomb's `grid` stream.
    pub fn new(config: ModuleConfig, facts: &ExternalFacts, rng: &ModuleRng, host: H) -> Self {
        let grid = ColorGrid::generate(&mut rng.for_context(GRID_STREAM));
        debug!(module = config.module_id, seed = rng.seed(), "Generated grid");
        Self::with_grid(config, grid, facts, host)
    }

    /// Start a module on a known grid.
    pub fn with_grid(config: ModuleConfig, grid: ColorGrid, facts: &ExternalFacts, host: H) -> Self {
        let id = config.module_id;
        let (expected, reports) = RuleEngine::evaluate_with_reports(&grid, facts);
        for report in &reports {
            info!(
                module = id,
                stage = report.stage,
                "{} Adding: {}.",
                report.describe(),
                crate::core::color::join(&report.quadruple)
            );
        }

        let eligible = facts.alternate_rule_eligible();
        if eligible {
            info!(module = id, "The alternate rule applies.");
        }

        let mut module = Self {
            config,
            machine: PressStateMachine::new(grid, expected, eligible),
            easter_egg_armed: false,
            host,
        };
        module.render_grid();
        module
    }

    #[must_use]
    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &ColorGrid {
        self.machine.grid()
    }

    #[must_use]
    pub fn expected(&self) -> &ExpectedSequence {
        self.machine.expected()
    }

    #[must_use]
    pub fn machine(&self) -> &PressStateMachine {
        &self.machine
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.machine.is_solved()
    }

    #[must_use]
    pub fn easter_egg_armed(&self) -> bool {
        self.easter_egg_armed
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Press a button.
    pub fn press(&mut self, position: Position) -> PressOutcome {
        let id = self.config.module_id;
        let outcome = self.machine.press(position);
        match outcome {
            PressOutcome::Ignored => {}
            PressOutcome::Buffered { pending } => {
                debug!(module = id, button = position.label(), pending, "Buffered press");
            }
            PressOutcome::Correct { group, accepted } => {
                info!(module = id, "Correctly pressed {}.", self.describe(&group));
                self.host.render_progress(accepted);
            }
            PressOutcome::Strike { group } => {
                warn!(module = id, "Incorrectly pressed {}. Strike.", self.describe(&group));
                self.host.on_strike();
            }
            PressOutcome::Solved { group, route } => {
                match route {
                    SolveRoute::Sequence => {
                        info!(module = id, "Correctly pressed {}.", self.describe(&group));
                        self.host.render_progress(self.machine.accepted_groups());
                        info!(module = id, "Module solved.");
                    }
                    SolveRoute::Alternate => {
                        info!(module = id, "The alternate rule applied. Module solved!");
                    }
                }
                self.on_solved();
            }
        }
        outcome
    }

    /// Press the reset button.
    pub fn reset(&mut self) -> ResetOutcome {
        let outcome = self.machine.reset();
        match outcome {
            ResetOutcome::Cleared => {
                debug!(module = self.config.module_id, "Progress reset");
                self.host.render_progress(0);
            }
            ResetOutcome::AlreadySolved => self.paint_suspicious(),
        }
        outcome
    }

    /// Arm the suspicious pattern for when the module is solved.
    pub fn arm_easter_egg(&mut self) {
        info!(module = self.config.module_id, "Suspicious command received");
        self.easter_egg_armed = true;
    }

    /// Parse and execute a text command.
    ///
    /// A command that fails to parse does nothing.
    pub fn handle_command(&mut self, input: &str) -> Result<CommandResponse, CommandError> {
        let command = Command::parse(input)?;
        Ok(match command {
            Command::Press(positions) => CommandResponse::Pressed(self.replay(positions)),
            Command::Reset => CommandResponse::Reset(self.reset()),
            Command::Suspicious => {
                self.host.send_chat_error(SUSPICIOUS_REPLY);
                self.arm_easter_egg();
                CommandResponse::Suspicious
            }
        })
    }

    /// Reset, then press the planned solution.
    pub fn force_solve(&mut self) -> Vec<PressOutcome> {
        info!(module = self.config.module_id, "Force solving");
        self.reset();
        self.host.pause(self.config.press_interval);
        let plan = ForcedSolvePlanner::plan(self.machine.grid(), self.machine.expected());
        self.replay(plan)
    }

    fn replay(&mut self, positions: impl IntoIterator<Item = Position>) -> Vec<PressOutcome> {
        positions
            .into_iter()
            .map(|pos| {
                let outcome = self.press(pos);
                self.host.pause(self.config.press_interval);
                outcome
            })
            .collect()
    }

    fn on_solved(&mut self) {
        self.host.on_pass();
        for pos in Position::all() {
            self.host.render_label(pos, None);
            self.host.render_button(pos, Swatch::Lit(Color::Green));
        }
        if self.easter_egg_armed {
            self.paint_suspicious();
        }
    }

    fn render_grid(&mut self) {
        let colorblind = self.config.colorblind;
        for pos in Position::all() {
            let color = self.machine.grid().get(pos);
            self.host.render_button(pos, Swatch::Lit(color));
            self.host.render_label(pos, colorblind.then(|| color.initial()));
        }
    }

    fn paint_suspicious(&mut self) {
        for (pos, swatch) in Position::all().zip(SUSPICIOUS_PATTERN) {
            self.host.render_button(pos, swatch);
        }
    }

    fn describe(&self, group: &[Position]) -> String {
        group
            .iter()
            .map(|&p| format!("{} ({})", self.machine.grid().get(p), p.label()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<H: ModuleHost> std::fmt::Debug for ButtonGridModule<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonGridModule")
            .field("config", &self.config)
            .field("machine", &self.machine)
            .field("easter_egg_armed", &self.easter_egg_armed)
            .finish_non_exhaustive()
    }
}
