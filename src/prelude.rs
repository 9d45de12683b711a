//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Coordinate, DecisionSource, Facing, GameLogic, GameState, Human, Player, Robot,
    ScriptedInput, Seat, Ship, ShipKind, FLEET,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, ConsoleInput};
