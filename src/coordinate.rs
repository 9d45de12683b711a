//! Board coordinates and ship facings.
//!
//! Internally a coordinate is a zero-based `(row, col)` pair. Humans see the
//! same square as a row letter and a one-based column number, e.g. `C 4`.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::board::Board;
use crate::common::{CoordinateError, DirectionError};
use crate::config::{BOARD_SIZE, ROW_LETTERS};

/// A square on a 10×10 board. Both components are always in `0..10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Build a coordinate from signed components, or `None` when it would
    /// fall off the board.
    pub fn new(row: i32, col: i32) -> Option<Self> {
        if Board::is_valid_position(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Components are reduced modulo the board size, so the result is always
    /// on the board.
    pub(crate) fn wrapping(row: u8, col: u8) -> Self {
        Self {
            row: row % BOARD_SIZE,
            col: col % BOARD_SIZE,
        }
    }

    /// Every square on the board, row by row.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coordinate { row, col }))
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// Human label: row letter and one-based column number.
    pub fn to_label(&self) -> (char, u8) {
        (ROW_LETTERS[self.row as usize], self.col + 1)
    }

    /// Parse a human label. Letters are matched case-insensitively.
    pub fn from_label(letter: char, number: i64) -> Result<Self, CoordinateError> {
        if number < 1 || number > BOARD_SIZE as i64 {
            return Err(CoordinateError::BadNumber(number));
        }
        let upper = letter.to_ascii_uppercase();
        let row = ROW_LETTERS
            .iter()
            .position(|&l| l == upper)
            .ok_or(CoordinateError::BadLetter(letter))?;
        Ok(Self {
            row: row as u8,
            col: (number - 1) as u8,
        })
    }

    /// The square `steps` moves away along `facing`, if it is still on the board.
    pub fn step(&self, facing: Facing, steps: usize) -> Option<Self> {
        let (dr, dc) = facing.step_vector();
        let n = steps as i32;
        Self::new(self.row as i32 + dr * n, self.col as i32 + dc * n)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (letter, number) = self.to_label();
        write!(f, "{}{}", letter, number)
    }
}

/// Direction a ship extends from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Facing {
    North,
    South,
    East,
    West,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::North, Facing::South, Facing::East, Facing::West];

    /// Unit step as `(row_delta, col_delta)`. North/south move along rows,
    /// east/west along columns.
    pub fn step_vector(self) -> (i32, i32) {
        match self {
            Facing::North => (-1, 0),
            Facing::South => (1, 0),
            Facing::East => (0, 1),
            Facing::West => (0, -1),
        }
    }
}

impl FromStr for Facing {
    type Err = DirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        match token.as_str() {
            "n" | "north" => Ok(Facing::North),
            "s" | "south" => Ok(Facing::South),
            "e" | "east" => Ok(Facing::East),
            "w" | "west" => Ok(Facing::West),
            _ => Err(DirectionError::Unrecognized(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Facing::North => "north",
            Facing::South => "south",
            Facing::East => "east",
            Facing::West => "west",
        };
        f.write_str(name)
    }
}
