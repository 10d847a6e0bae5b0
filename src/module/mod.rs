//! Module wiring and the host seam.
//!
//! - `host`: the `ModuleHost` trait hosts implement, plus `NullHost` and
//!   `RecordingHost`
//! - `session`: `ButtonGridModule`, one puzzle instance on one bomb

pub mod host;
pub mod session;

pub use host::{HostEvent, ModuleHost, NullHost, RecordingHost, Swatch, SUSPICIOUS_PATTERN};
pub use session::{ButtonGridModule, CommandResponse, GRID_STREAM, SUSPICIOUS_REPLY};
