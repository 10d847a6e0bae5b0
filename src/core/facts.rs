//! Bomb facts read once at module start.

use serde::{Deserialize, Serialize};

/// Snapshot of the bomb state the rules consult.
///
/// Captured when the module starts; later changes on the bomb are not seen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalFacts {
    /// Serial number, as printed on the bomb.
    pub serial: String,
    /// Labels of lit indicators.
    pub on_indicators: Vec<String>,
    /// Port type labels present on the bomb.
    pub ports: Vec<String>,
    /// Total battery count.
    pub batteries: u32,
}

impl ExternalFacts {
    /// Create facts with the given serial number and nothing else.
    pub fn new(serial: impl Into<String>) -> Self {
        Self {
            serial: serial.into(),
            ..Self::default()
        }
    }

    /// Add a lit indicator.
    #[must_use]
    pub fn with_on_indicator(mut self, label: impl Into<String>) -> Self {
        self.on_indicators.push(label.into());
        self
    }

    /// Add a port.
    #[must_use]
    pub fn with_port(mut self, label: impl Into<String>) -> Self {
        self.ports.push(label.into());
        self
    }

    /// Set the battery count.
    #[must_use]
    pub fn with_batteries(mut self, count: u32) -> Self {
        self.batteries = count;
        self
    }

    /// Does the serial number contain any of `chars`?
    #[must_use]
    pub fn serial_contains_any(&self, chars: &[char]) -> bool {
        self.serial.chars().any(|c| chars.contains(&c))
    }

    #[must_use]
    pub fn has_on_indicator(&self, label: &str) -> bool {
        self.on_indicators.iter().any(|i| i == label)
    }

    #[must_use]
    pub fn has_port(&self, label: &str) -> bool {
        self.ports.iter().any(|p| p == label)
    }

    /// Whether the alternate [Blue, Red, Blue, Yellow] solve is available.
    ///
    /// Requires a lit BOB, a DVI port, exactly one battery, and one of
    /// C, H, R, I, S in the serial number.
    #[must_use]
    pub fn alternate_rule_eligible(&self) -> bool {
        self.has_on_indicator("BOB")
            && self.has_port("DVI")
            && self.batteries == 1
            && self.serial_contains_any(&['C', 'H', 'R', 'I', 'S'])
    }
}
