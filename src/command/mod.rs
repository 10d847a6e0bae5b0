//! Automation command surface.

pub mod parser;

pub use parser::{parse_coordinates, parse_numbered, Command, CommandError, HELP};
