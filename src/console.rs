#![cfg(feature = "std")]

//! Text console decision source: prints prompts and boards, reads answers
//! one line at a time.

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::common::QueryError;
use crate::coordinate::{Coordinate, Facing};
use crate::input::{parse_coordinate, parse_direction, DecisionSource, Prompt};
use crate::player::{Forfeit, Notice};

pub struct ConsoleInput<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn ask(&mut self, question: &str) -> Result<String, QueryError> {
        write!(self.writer, "{}: ", question).map_err(|_| QueryError::Closed)?;
        self.writer.flush().map_err(|_| QueryError::Closed)?;
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => Err(QueryError::Closed),
            Ok(_) => Ok(line.trim().to_string()),
        }
    }

    fn say(&mut self, text: std::fmt::Arguments<'_>) {
        // Output failures surface as a closed input on the next query.
        let _ = writeln!(self.writer, "{}", text);
    }
}

impl<R: BufRead, W: Write> DecisionSource for ConsoleInput<R, W> {
    fn query_coordinate(&mut self, prompt: &Prompt<'_>) -> Result<Coordinate, QueryError> {
        let question = match prompt {
            Prompt::PlaceShip { kind, own } => {
                self.say(format_args!("{}", own));
                let segments: String = std::iter::repeat(kind.marker()).take(kind.length()).collect();
                format!("{}    Place your {}", segments, kind)
            }
            Prompt::Target { own, observed } => {
                self.say(format_args!("{}", own.side_by_side(observed)));
                "Attempt to fire a missile".to_string()
            }
            Prompt::Facing { kind } => format!("Where will your {} go", kind),
        };
        let line = self.ask(&question)?;
        Ok(parse_coordinate(&line)?)
    }

    fn query_direction(&mut self, prompt: &Prompt<'_>) -> Result<Facing, QueryError> {
        let question = match prompt {
            Prompt::Facing { kind } | Prompt::PlaceShip { kind, .. } => {
                format!("Which way will your {} face? (n/s/e/w)", kind)
            }
            Prompt::Target { .. } => "Which way".to_string(),
        };
        let line = self.ask(&question)?;
        parse_direction(&line)
    }

    fn notify(&mut self, notice: &Notice) {
        match notice {
            Notice::InvalidInput(e) => self.say(format_args!("{}", e)),
            Notice::PlacementRejected(_) => self.say(format_args!("Cannot place a ship here!")),
            Notice::ShipPlaced(ship) => self.say(format_args!(
                "{} placed at {} facing {}",
                ship.kind(),
                ship.anchor(),
                ship.facing()
            )),
            Notice::SetupComplete => self.say(format_args!("Now lets begin battle!")),
            Notice::ShotResolved(strike) => {
                if strike.hit {
                    self.say(format_args!("Hit!"));
                } else {
                    self.say(format_args!("Miss!"));
                }
                if let Some(kind) = strike.sunk {
                    self.say(format_args!("You sank their {}!", kind));
                }
            }
            Notice::TurnForfeited(Forfeit::InvalidInput(e)) => {
                self.say(format_args!("{} Turn lost.", e))
            }
            Notice::TurnForfeited(Forfeit::Rejected(e)) => {
                self.say(format_args!("{}. Turn lost.", e))
            }
            Notice::IncomingMissile(strike) => {
                let result = if strike.hit { "hit" } else { "missed" };
                self.say(format_args!("Enemy fired at {} and {}.", strike.target, result));
                if let Some(kind) = strike.sunk {
                    self.say(format_args!("Your {} was sunk!", kind));
                }
            }
            Notice::Victory => self.say(format_args!("All enemy ships destroyed. You win!")),
            Notice::Defeat => self.say(format_args!("Your fleet is destroyed. You lose.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::common::CoordinateError;
    use crate::ship::ShipKind;
    use std::io::Cursor;

    #[test]
    fn reads_and_parses_one_line_per_query() {
        let mut console = ConsoleInput::new(Cursor::new("b 7\ne\n"), Vec::new());
        let own = Board::new();
        let c = console
            .query_coordinate(&Prompt::PlaceShip {
                kind: ShipKind::Cruiser,
                own: &own,
            })
            .unwrap();
        assert_eq!(c.to_label(), ('B', 7));
        let f = console
            .query_direction(&Prompt::Facing {
                kind: ShipKind::Cruiser,
            })
            .unwrap();
        assert_eq!(f, Facing::East);

        let out = String::from_utf8(console.into_writer()).unwrap();
        assert!(out.contains("CCC    Place your Cruiser: "));
        assert!(out.contains("Which way will your Cruiser face?"));
    }

    #[test]
    fn end_of_input_is_closed() {
        let mut console = ConsoleInput::new(Cursor::new(""), Vec::new());
        let own = Board::new();
        let observed = Board::new();
        let res = console.query_coordinate(&Prompt::Target {
            own: &own,
            observed: &observed,
        });
        assert_eq!(res, Err(QueryError::Closed));
    }

    #[test]
    fn bad_label_is_reported_not_fatal() {
        let mut console = ConsoleInput::new(Cursor::new("q 2\n"), Vec::new());
        let own = Board::new();
        let observed = Board::new();
        let res = console.query_coordinate(&Prompt::Target {
            own: &own,
            observed: &observed,
        });
        assert_eq!(
            res,
            Err(QueryError::Coordinate(CoordinateError::BadLetter('q')))
        );
    }
}
