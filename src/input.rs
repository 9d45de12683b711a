//! Decision sources: where a human player's answers come from.
//!
//! The core never reads text itself. It hands a [`Prompt`] to a
//! [`DecisionSource`] and gets back a parsed coordinate or facing.
//! [`parse_coordinate`] and [`parse_direction`] turn raw lines into those
//! answers and are shared by the console and scripted sources.

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::board::Board;
use crate::common::{CoordinateError, QueryError};
use crate::coordinate::{Coordinate, Facing};
use crate::player::Notice;
use crate::ship::ShipKind;

/// What the player is being asked for, with the boards needed to answer.
#[derive(Debug, Clone, Copy)]
pub enum Prompt<'a> {
    /// Anchor for `kind`, shown over the player's own board.
    PlaceShip { kind: ShipKind, own: &'a Board },
    /// Facing for `kind`.
    Facing { kind: ShipKind },
    /// Target square, shown over both boards.
    Target { own: &'a Board, observed: &'a Board },
}

pub trait DecisionSource {
    fn query_coordinate(&mut self, prompt: &Prompt<'_>) -> Result<Coordinate, QueryError>;

    fn query_direction(&mut self, prompt: &Prompt<'_>) -> Result<Facing, QueryError>;

    /// Report an event back to whoever is answering.
    fn notify(&mut self, _notice: &Notice) {}
}

/// Parse a `"<letter> <number>"` label such as `c 4`.
pub fn parse_coordinate(line: &str) -> Result<Coordinate, CoordinateError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(CoordinateError::WrongArgumentCount(parts.len()));
    }
    let mut letters = parts[0].chars();
    let letter = match (letters.next(), letters.next()) {
        (Some(c), None) => c,
        (Some(c), Some(_)) => return Err(CoordinateError::BadLetter(c)),
        (None, _) => return Err(CoordinateError::WrongArgumentCount(0)),
    };
    let number: i64 = parts[1]
        .parse()
        .map_err(|_| CoordinateError::BadNumber(0))?;
    Coordinate::from_label(letter, number)
}

/// Parse a facing token (`n`, `south`, ...).
pub fn parse_direction(line: &str) -> Result<Facing, QueryError> {
    Ok(line.parse::<Facing>()?)
}

/// Answers queries from a fixed list of lines. Once the lines run out every
/// query reports [`QueryError::Closed`]. Notices are kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    notices: Vec<Notice>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            lines: lines.into_iter().map(|l| l.as_ref().to_string()).collect(),
            notices: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    fn next_line(&mut self) -> Result<String, QueryError> {
        self.lines.pop_front().ok_or(QueryError::Closed)
    }
}

impl DecisionSource for ScriptedInput {
    fn query_coordinate(&mut self, _prompt: &Prompt<'_>) -> Result<Coordinate, QueryError> {
        let line = self.next_line()?;
        Ok(parse_coordinate(&line)?)
    }

    fn query_direction(&mut self, _prompt: &Prompt<'_>) -> Result<Facing, QueryError> {
        let line = self.next_line()?;
        parse_direction(&line)
    }

    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}
