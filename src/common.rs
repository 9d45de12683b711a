//! Error types shared by the board, players and game loop.

use alloc::string::String;
use core::fmt;

use crate::config::{BOARD_SIZE, ROW_LETTERS};
use crate::coordinate::Coordinate;
use crate::game::Seat;

/// Why a human board label could not be turned into a [`Coordinate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// Row letter is not one of `A`..=`J`.
    BadLetter(char),
    /// Column number is outside `1..=10`, or not a number at all.
    BadNumber(i64),
    /// Input did not split into exactly a letter and a number.
    WrongArgumentCount(usize),
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::BadLetter(c) => write!(
                f,
                "Invalid row '{}'! Only rows from {} to {}.",
                c,
                ROW_LETTERS[0],
                ROW_LETTERS[BOARD_SIZE as usize - 1]
            ),
            CoordinateError::BadNumber(n) => write!(
                f,
                "Invalid column {}! Only columns from 1 to {}.",
                n, BOARD_SIZE
            ),
            CoordinateError::WrongArgumentCount(n) => {
                write!(f, "Invalid argument count! Expected 2, got {}", n)
            }
        }
    }
}

/// A facing token that is not one of the four compass directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectionError {
    Unrecognized(String),
}

impl fmt::Display for DirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionError::Unrecognized(token) => {
                write!(f, "Invalid direction '{}'! Use n, s, e or w.", token)
            }
        }
    }
}

/// Failure of a single decision-source query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    Coordinate(CoordinateError),
    Direction(DirectionError),
    /// The source has no more answers (end of input).
    Closed,
}

impl From<CoordinateError> for QueryError {
    fn from(err: CoordinateError) -> Self {
        QueryError::Coordinate(err)
    }
}

impl From<DirectionError> for QueryError {
    fn from(err: DirectionError) -> Self {
        QueryError::Direction(err)
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Coordinate(e) => write!(f, "{}", e),
            QueryError::Direction(e) => write!(f, "{}", e),
            QueryError::Closed => write!(f, "Input closed"),
        }
    }
}

/// Errors raised while resolving a missile against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    /// The target cell was already hit or missed.
    AlreadyTargeted(Coordinate),
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::AlreadyTargeted(c) => {
                write!(f, "{} was already targeted", c)
            }
        }
    }
}

/// Errors that stop the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The decision source behind this seat ran out of input.
    InputClosed(Seat),
    /// `run_game` was called before `setup_players`.
    NotSetUp,
    /// The game already has a winner.
    AlreadyOver,
    /// This seat tried to act while it is the other seat's turn.
    NotYourTurn(Seat),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InputClosed(seat) => write!(f, "Input closed for {:?} player", seat),
            GameError::NotSetUp => write!(f, "Players have not been set up"),
            GameError::AlreadyOver => write!(f, "Game is already over"),
            GameError::NotYourTurn(seat) => write!(f, "It is not the {:?} player's turn", seat),
        }
    }
}

/// Signals that a decision source has no further answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input closed")
    }
}
