//! Two-seat game orchestration: setup, alternating turns, and the win check.

use crate::common::{GameError, TurnError};
use crate::coordinate::Coordinate;
use crate::player::{Notice, Player, Strike, TurnOutcome};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    Human,
    Robot,
}

impl Seat {
    pub fn opponent(self) -> Seat {
        match self {
            Seat::Human => Seat::Robot,
            Seat::Robot => Seat::Human,
        }
    }
}

/// Turn-loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    NotStarted,
    HumanTurn,
    RobotTurn,
    GameOver { winner: Seat },
}

/// Resolve a missile at `target` against `player`'s own board.
pub fn fire_missile(player: &mut dyn Player, target: Coordinate) -> Result<Strike, TurnError> {
    player.receive_missile(target)
}

/// Holds both players and drives the game from setup to a winner.
pub struct GameLogic<H: Player, R: Player> {
    human: H,
    robot: R,
    state: GameState,
    turns: usize,
}

impl<H: Player, R: Player> GameLogic<H, R> {
    pub fn new(human: H, robot: R) -> Self {
        Self {
            human,
            robot,
            state: GameState::NotStarted,
            turns: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, GameState::GameOver { .. })
    }

    pub fn winner(&self) -> Option<Seat> {
        match self.state {
            GameState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Number of turns taken so far, forfeited ones included.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn human(&self) -> &H {
        &self.human
    }

    pub fn robot(&self) -> &R {
        &self.robot
    }

    pub fn player(&self, seat: Seat) -> &dyn Player {
        match seat {
            Seat::Human => &self.human,
            Seat::Robot => &self.robot,
        }
    }

    fn player_mut(&mut self, seat: Seat) -> &mut dyn Player {
        match seat {
            Seat::Human => &mut self.human,
            Seat::Robot => &mut self.robot,
        }
    }

    /// The seated player that is not `seat`.
    pub fn get_opponent(&self, seat: Seat) -> &dyn Player {
        self.player(seat.opponent())
    }

    /// Identity lookup: the other seated player, or `None` when `player` is
    /// neither of the two.
    pub fn opponent_of(&self, player: &dyn Player) -> Option<&dyn Player> {
        if core::ptr::addr_eq(player, &self.human) {
            Some(&self.robot as &dyn Player)
        } else if core::ptr::addr_eq(player, &self.robot) {
            Some(&self.human as &dyn Player)
        } else {
            None
        }
    }

    /// Run both setup protocols, human first.
    pub fn setup_players(&mut self) -> Result<(), GameError> {
        match self.state {
            GameState::NotStarted => {}
            GameState::GameOver { .. } => return Err(GameError::AlreadyOver),
            _ => return Ok(()),
        }
        self.human
            .setup()
            .map_err(|_| GameError::InputClosed(Seat::Human))?;
        self.robot
            .setup()
            .map_err(|_| GameError::InputClosed(Seat::Robot))?;
        self.state = GameState::HumanTurn;
        Ok(())
    }

    /// Let `seat` take one turn against the other seat and apply the win check.
    /// Only the seat whose turn it is may act.
    pub fn play_turn(&mut self, seat: Seat) -> Result<TurnOutcome, GameError> {
        match self.state {
            GameState::NotStarted => return Err(GameError::NotSetUp),
            GameState::GameOver { .. } => return Err(GameError::AlreadyOver),
            GameState::HumanTurn if seat != Seat::Human => return Err(GameError::NotYourTurn(seat)),
            GameState::RobotTurn if seat != Seat::Robot => return Err(GameError::NotYourTurn(seat)),
            _ => {}
        }
        let outcome = match seat {
            Seat::Human => self.human.run_turn(&mut self.robot),
            Seat::Robot => self.robot.run_turn(&mut self.human),
        }
        .map_err(|_| GameError::InputClosed(seat))?;
        self.turns += 1;

        if let TurnOutcome::Fired(strike) = &outcome {
            if strike.fleet_destroyed {
                log::info!("{} wins after {} turns", self.player(seat).name(), self.turns);
                self.player_mut(seat).notify(&Notice::Victory);
                self.player_mut(seat.opponent()).notify(&Notice::Defeat);
                self.state = GameState::GameOver { winner: seat };
                return Ok(outcome);
            }
        }
        self.state = match seat {
            Seat::Human => GameState::RobotTurn,
            Seat::Robot => GameState::HumanTurn,
        };
        Ok(outcome)
    }

    /// Alternate turns, human first, until one fleet is destroyed.
    pub fn run_game(&mut self) -> Result<Seat, GameError> {
        loop {
            match self.state {
                GameState::NotStarted => return Err(GameError::NotSetUp),
                GameState::HumanTurn => {
                    self.play_turn(Seat::Human)?;
                }
                GameState::RobotTurn => {
                    self.play_turn(Seat::Robot)?;
                }
                GameState::GameOver { winner } => return Ok(winner),
            }
        }
    }
}
