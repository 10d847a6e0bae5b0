//! Module configuration.
//!
//! Hosts configure a module at startup by providing a `ModuleConfig`.
//! Everything about the puzzle itself (grid size, group size, rule tables)
//! is fixed; only host-facing behavior is configurable.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Presses evaluated together as one group.
pub const GROUP_SIZE: usize = 4;

/// Default pause between replayed presses.
pub const DEFAULT_PRESS_INTERVAL: Duration = Duration::from_millis(100);

/// Host-facing configuration for one module instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Identifier used to correlate log lines from this module.
    pub module_id: u32,

    /// Pause after each press replayed from a command or forced solve.
    pub press_interval: Duration,

    /// Render colorblind letters on the buttons.
    pub colorblind: bool,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            module_id: 1,
            press_interval: DEFAULT_PRESS_INTERVAL,
            colorblind: false,
        }
    }
}

impl ModuleConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the module id.
    #[must_use]
    pub fn with_module_id(mut self, id: u32) -> Self {
        self.module_id = id;
        self
    }

    /// Set the pause between replayed presses.
    #[must_use]
    pub fn with_press_interval(mut self, interval: Duration) -> Self {
        self.press_interval = interval;
        self
    }

    /// Enable colorblind letters.
    #[must_use]
    pub fn colorblind(mut self) -> Self {
        self.colorblind = true;
        self
    }
}
