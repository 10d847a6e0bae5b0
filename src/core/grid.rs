//! The 4×5 button grid.
//!
//! ## Layout
//!
//! Positions are numbered row-major, `0..20`:
//!
//! ```text
//!       a   b   c   d   e
//!   1   0   1   2   3   4
//!   2   5   6   7   8   9
//!   3  10  11  12  13  14
//!   4  15  16  17  18  19
//! ```
//!
//! A grid holds exactly five buttons of each color. The invariant is
//! established at construction and the colors never change afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::color::Color;
use super::rng::ModuleRng;

/// Number of rows.
pub const ROWS: usize = 4;
/// Number of columns.
pub const COLUMNS: usize = 5;
/// Number of buttons.
pub const GRID_SIZE: usize = ROWS * COLUMNS;
/// Buttons of each color.
pub const PER_COLOR: usize = GRID_SIZE / Color::ALL.len();

/// Position index out of range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("position {0} is outside the grid (0..20)")]
    OutOfRange(usize),
}

/// Rejected color assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has {count} {color} buttons, expected 5")]
    Unbalanced { color: Color, count: usize },
}

/// A button position, `0..20`, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// Create a position from a 0-based index.
    pub fn new(index: usize) -> Result<Self, PositionError> {
        if index < GRID_SIZE {
            Ok(Self(index as u8))
        } else {
            Err(PositionError::OutOfRange(index))
        }
    }

    /// Create a position from a 0-based row and column.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        (row < ROWS && col < COLUMNS).then(|| Self((row * COLUMNS + col) as u8))
    }

    /// All positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..GRID_SIZE as u8).map(Position)
    }

    /// 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 0-based row.
    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / COLUMNS
    }

    /// 0-based column.
    #[must_use]
    pub const fn col(self) -> usize {
        self.index() % COLUMNS
    }

    /// 1-based label used in logs and commands.
    #[must_use]
    pub const fn label(self) -> usize {
        self.index() + 1
    }

    /// Orthogonal neighbors that lie on the grid.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        let (row, col) = (self.row(), self.col());
        let up = row.checked_sub(1).map(|r| (r, col));
        let down = Some((row + 1, col));
        let left = col.checked_sub(1).map(|c| (row, c));
        let right = Some((row, col + 1));
        [up, down, left, right]
            .into_iter()
            .flatten()
            .filter_map(|(r, c)| Position::from_row_col(r, c))
    }
}

impl TryFrom<u8> for Position {
    type Error = PositionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as usize)
    }
}

impl From<Position> for u8 {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Color assignment for all twenty buttons.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Color; GRID_SIZE]", into = "[Color; GRID_SIZE]")]
pub struct ColorGrid {
    colors: [Color; GRID_SIZE],
}

impl ColorGrid {
    /// Deal five buttons of each color and shuffle them uniformly.
    pub fn generate(rng: &mut ModuleRng) -> Self {
        let mut colors: [Color; GRID_SIZE] =
            std::array::from_fn(|i| Color::ALL[i / PER_COLOR]);
        rng.shuffle(&mut colors);
        Self { colors }
    }

    /// Build a grid from a fixed assignment.
    ///
    /// Fails unless every color appears exactly five times.
    pub fn from_colors(colors: [Color; GRID_SIZE]) -> Result<Self, GridError> {
        for color in Color::ALL {
            let count = colors.iter().filter(|&&c| c == color).count();
            if count != PER_COLOR {
                return Err(GridError::Unbalanced { color, count });
            }
        }
        Ok(Self { colors })
    }

    /// Color at a position.
    #[must_use]
    pub fn get(&self, pos: Position) -> Color {
        self.colors[pos.index()]
    }

    /// All colors, row-major.
    #[must_use]
    pub fn colors(&self) -> &[Color; GRID_SIZE] {
        &self.colors
    }

    /// Number of buttons of `color` in the given positions.
    pub fn count_in(&self, positions: std::ops::Range<usize>, color: Color) -> usize {
        self.colors[positions].iter().filter(|&&c| c == color).count()
    }

    /// Colors of the four corner buttons: top-left, top-right, bottom-left, bottom-right.
    #[must_use]
    pub fn corners(&self) -> [Color; 4] {
        [
            self.colors[0],
            self.colors[COLUMNS - 1],
            self.colors[GRID_SIZE - COLUMNS],
            self.colors[GRID_SIZE - 1],
        ]
    }

    /// Each row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.colors.chunks(COLUMNS)
    }

    /// Each column, left to right.
    pub fn columns(&self) -> impl Iterator<Item = [Color; ROWS]> + '_ {
        (0..COLUMNS).map(move |c| std::array::from_fn(|r| self.colors[r * COLUMNS + c]))
    }

    /// Is there a pair of orthogonally adjacent `color` buttons?
    #[must_use]
    pub fn has_adjacent_pair(&self, color: Color) -> bool {
        Position::all()
            .filter(|&p| self.get(p) == color)
            .any(|p| p.neighbors().any(|n| self.get(n) == color))
    }
}

impl TryFrom<[Color; GRID_SIZE]> for ColorGrid {
    type Error = GridError;

    fn try_from(colors: [Color; GRID_SIZE]) -> Result<Self, Self::Error> {
        Self::from_colors(colors)
    }
}

impl From<ColorGrid> for [Color; GRID_SIZE] {
    fn from(grid: ColorGrid) -> Self {
        grid.colors
    }
}

/// Number of distinct colors in a slice.
pub(crate) fn distinct(colors: &[Color]) -> usize {
    Color::ALL.iter().filter(|c| colors.contains(c)).count()
}
