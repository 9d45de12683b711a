use alloc::string::String;

use crate::common::QueryError;
use crate::coordinate::{Coordinate, Facing};
use crate::input::{DecisionSource, Prompt};
use crate::player::{Notice, Player, PlayerBoards};
use crate::ship::ShipKind;

/// Interactive player: every decision is delegated to a [`DecisionSource`].
pub struct Human<D: DecisionSource> {
    name: String,
    boards: PlayerBoards,
    input: D,
}

impl<D: DecisionSource> Human<D> {
    pub fn new(name: impl Into<String>, input: D) -> Self {
        Self {
            name: name.into(),
            boards: PlayerBoards::new(),
            input,
        }
    }

    pub fn input(&self) -> &D {
        &self.input
    }

    pub fn into_input(self) -> D {
        self.input
    }
}

impl<D: DecisionSource> Player for Human<D> {
    fn name(&self) -> &str {
        &self.name
    }

    fn boards(&self) -> &PlayerBoards {
        &self.boards
    }

    fn boards_mut(&mut self) -> &mut PlayerBoards {
        &mut self.boards
    }

    fn choose_anchor(&mut self, kind: ShipKind) -> Result<Coordinate, QueryError> {
        let prompt = Prompt::PlaceShip {
            kind,
            own: &self.boards.own,
        };
        self.input.query_coordinate(&prompt)
    }

    fn choose_facing(&mut self, kind: ShipKind) -> Result<Facing, QueryError> {
        self.input.query_direction(&Prompt::Facing { kind })
    }

    fn choose_target(&mut self) -> Result<Coordinate, QueryError> {
        let prompt = Prompt::Target {
            own: &self.boards.own,
            observed: &self.boards.observed,
        };
        self.input.query_coordinate(&prompt)
    }

    fn notify(&mut self, notice: &Notice) {
        self.input.notify(notice);
    }
}
