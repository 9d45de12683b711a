//! Player trait, shared board state, and the setup and turn protocols.
//!
//! A player only decides *where*: anchors and facings during setup, targets
//! during the game. Validation, retries and board updates live in the
//! provided methods of [`Player`] so the human and robot variants share them.

use crate::board::Board;
use crate::cell::{Cell, HIT_MARKER, MISS_MARKER};
use crate::common::{InputClosed, QueryError, TurnError};
use crate::config::FLEET;
use crate::coordinate::{Coordinate, Facing};
use crate::game;
use crate::ship::{Ship, ShipKind};

/// The two boards every player owns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerBoards {
    /// Own ships and incoming missile results.
    pub own: Board,
    /// Results of our own shots at the opponent. Never holds ships.
    pub observed: Board,
}

impl PlayerBoards {
    pub fn new() -> Self {
        Self::default()
    }

    /// Own board on the left, observation board on the right.
    pub fn render(&self) -> alloc::string::String {
        self.own.side_by_side(&self.observed)
    }
}

/// Result of a missile that actually resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Strike {
    pub target: Coordinate,
    pub hit: bool,
    /// Set when this hit removed the last segment of a ship.
    pub sunk: Option<ShipKind>,
    /// Set when the opponent has no ship segments left.
    pub fleet_destroyed: bool,
}

/// Why a turn ended without a missile resolving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Forfeit {
    InvalidInput(QueryError),
    Rejected(TurnError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Fired(Strike),
    Forfeited(Forfeit),
}

/// Events reported back to a player's decision source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    InvalidInput(QueryError),
    PlacementRejected(Ship),
    ShipPlaced(Ship),
    SetupComplete,
    ShotResolved(Strike),
    TurnForfeited(Forfeit),
    IncomingMissile(Strike),
    Victory,
    Defeat,
}

pub trait Player {
    fn name(&self) -> &str;

    fn boards(&self) -> &PlayerBoards;

    fn boards_mut(&mut self) -> &mut PlayerBoards;

    /// Anchor for the next placement attempt of `kind`.
    fn choose_anchor(&mut self, kind: ShipKind) -> Result<Coordinate, QueryError>;

    /// Facing for the next placement attempt of `kind`.
    fn choose_facing(&mut self, kind: ShipKind) -> Result<Facing, QueryError>;

    /// Square to fire at this turn.
    fn choose_target(&mut self) -> Result<Coordinate, QueryError>;

    fn notify(&mut self, _notice: &Notice) {}

    /// Place one of each archetype in canonical order, retrying each until a
    /// valid placement is found.
    fn setup(&mut self) -> Result<(), InputClosed> {
        for kind in FLEET {
            self.place(kind)?;
        }
        log::info!("{} finished placing ships", self.name());
        self.notify(&Notice::SetupComplete);
        Ok(())
    }

    /// Query anchor and facing until `kind` fits on the own board. There is
    /// no retry limit; only a closed input ends the loop early.
    fn place(&mut self, kind: ShipKind) -> Result<(), InputClosed> {
        loop {
            let anchor = self.choose_anchor(kind);
            if anchor == Err(QueryError::Closed) {
                return Err(InputClosed);
            }
            let facing = self.choose_facing(kind);
            if facing == Err(QueryError::Closed) {
                return Err(InputClosed);
            }
            let (anchor, facing) = match (anchor, facing) {
                (Ok(a), Ok(f)) => (a, f),
                (Err(e), _) | (_, Err(e)) => {
                    log::warn!("{}: {}", self.name(), e);
                    self.notify(&Notice::InvalidInput(e));
                    continue;
                }
            };
            let ship = Ship::new(kind, anchor, facing);
            if self.boards().own.spaces_are_free(anchor, facing, kind.length()) {
                self.boards_mut().own.place_ship(&ship);
                self.notify(&Notice::ShipPlaced(ship));
                return Ok(());
            }
            log::debug!("{}: cannot place {} at {} facing {}", self.name(), kind, anchor, facing);
            self.notify(&Notice::PlacementRejected(ship));
        }
    }

    /// Take one turn against `opponent`. Invalid input or a repeated target
    /// forfeits the turn; only a closed input is an error.
    fn run_turn(&mut self, opponent: &mut dyn Player) -> Result<TurnOutcome, InputClosed> {
        let target = match self.choose_target() {
            Ok(target) => target,
            Err(QueryError::Closed) => return Err(InputClosed),
            Err(e) => {
                log::warn!("{}: {}", self.name(), e);
                let forfeit = Forfeit::InvalidInput(e);
                self.notify(&Notice::TurnForfeited(forfeit.clone()));
                return Ok(TurnOutcome::Forfeited(forfeit));
            }
        };

        let strike = match game::fire_missile(opponent, target) {
            Ok(strike) => strike,
            Err(e) => {
                log::warn!("{}: {}", self.name(), e);
                let forfeit = Forfeit::Rejected(e);
                self.notify(&Notice::TurnForfeited(forfeit.clone()));
                return Ok(TurnOutcome::Forfeited(forfeit));
            }
        };

        let marker = if strike.hit { HIT_MARKER } else { MISS_MARKER };
        let recorded = self.boards_mut().observed.place_object(target, marker);
        debug_assert!(recorded);
        log::info!(
            "{} fired at {}: {}",
            self.name(),
            target,
            if strike.hit { "hit" } else { "miss" }
        );
        self.notify(&Notice::ShotResolved(strike));
        Ok(TurnOutcome::Fired(strike))
    }

    /// Resolve an incoming missile against the own board.
    fn receive_missile(&mut self, target: Coordinate) -> Result<Strike, TurnError> {
        let own = &mut self.boards_mut().own;
        if own.is_targeted(target) {
            return Err(TurnError::AlreadyTargeted(target));
        }
        let hit = own.detonate_missile(target);
        let sunk = match own.cell(target) {
            Cell::Hit(Some(kind)) if own.is_sunk(kind) => Some(kind),
            _ => None,
        };
        let strike = Strike {
            target,
            hit,
            sunk,
            fleet_destroyed: own.all_ships_sunk(),
        };
        self.notify(&Notice::IncomingMissile(strike));
        Ok(strike)
    }
}
