//! Text command parsing.
//!
//! Commands are trimmed and matched case-insensitively:
//!
//! - `press 1 2 3 4`: buttons by 1-based reading-order number
//! - `press a1 b1 c2`: buttons by column letter `a`-`e` and row `1`-`4`
//! - `reset`
//! - `sus`, `susy`, `sussy`, `suspicious`
//!
//! A press command is read as numbers first; only if that fails is it read
//! as coordinates. Either way a single bad token rejects the whole command.

use std::str::FromStr;

use thiserror::Error;

use crate::core::grid::GRID_SIZE;
use crate::core::Position;

/// Help text for the command surface.
pub const HELP: &str = "press 1 2 3 4 [Press buttons 1, 2, 3, 4.] | Buttons are labeled in \
    reading order, or by coordinate a1-e4. | reset [Press the reset button.]";

const PRESS_PREFIX: &str = "press ";
const COLUMN_LETTERS: &str = "abcde";
const ROW_DIGITS: &str = "1234";

/// Errors from parsing a command. A rejected command does nothing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unrecognized command '{0}'")]
    Unknown(String),

    #[error("'{token}' is not a button number 1-20")]
    InvalidNumber { token: String },

    #[error("'{token}' is not a coordinate a1-e4")]
    InvalidCoordinate { token: String },
}

/// A parsed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Press these buttons in order.
    Press(Vec<Position>),
    /// Press the reset button.
    Reset,
    /// Arm the suspicious pattern.
    Suspicious,
}

impl Command {
    /// Parse a command.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let command = input.trim().to_lowercase();
        if command.is_empty() {
            return Err(CommandError::Empty);
        }

        match command.as_str() {
            "sus" | "susy" | "sussy" | "suspicious" => return Ok(Command::Suspicious),
            "reset" => return Ok(Command::Reset),
            _ => {}
        }

        let Some(rest) = command.strip_prefix(PRESS_PREFIX) else {
            return Err(CommandError::Unknown(command));
        };
        let tokens: Vec<&str> = rest.split(' ').collect();

        parse_numbered(&tokens)
            .or_else(|_| parse_coordinates(&tokens))
            .map(Command::Press)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Read every token as a 1-based button number.
pub fn parse_numbered(tokens: &[&str]) -> Result<Vec<Position>, CommandError> {
    tokens
        .iter()
        .map(|&token| {
            token
                .parse::<i32>()
                .ok()
                .filter(|n| (1..=GRID_SIZE as i32).contains(n))
                .and_then(|n| Position::new(n as usize - 1).ok())
                .ok_or_else(|| CommandError::InvalidNumber {
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Read every token as a two-character coordinate like `c3`.
pub fn parse_coordinates(tokens: &[&str]) -> Result<Vec<Position>, CommandError> {
    tokens
        .iter()
        .map(|&token| {
            coordinate(token).ok_or_else(|| CommandError::InvalidCoordinate {
                token: token.to_string(),
            })
        })
        .collect()
}

fn coordinate(token: &str) -> Option<Position> {
    let mut chars = token.chars();
    let (c, r) = (chars.next()?, chars.next()?);
    if chars.next().is_some() {
        return None;
    }
    let col = COLUMN_LETTERS.find(c)?;
    let row = ROW_DIGITS.find(r)?;
    Position::from_row_col(row, col)
}
