use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use alloc::vec::Vec;

use crate::common::QueryError;
use crate::config::{BOARD_SIZE, MAX_DIFFICULTY};
use crate::coordinate::{Coordinate, Facing};
use crate::player::{Player, PlayerBoards};
use crate::ship::ShipKind;

/// Autonomous player. Picks random anchors and facings during setup and
/// fires at random squares it has not targeted yet.
pub struct Robot {
    boards: PlayerBoards,
    difficulty: u8,
    rng: SmallRng,
}

impl Robot {
    /// Difficulty above [`MAX_DIFFICULTY`] is clamped.
    pub fn new(difficulty: u8, rng: SmallRng) -> Self {
        Self {
            boards: PlayerBoards::new(),
            difficulty: difficulty.min(MAX_DIFFICULTY),
            rng,
        }
    }

    pub fn from_seed(difficulty: u8, seed: u64) -> Self {
        Self::new(difficulty, SmallRng::seed_from_u64(seed))
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    fn random_square(&mut self) -> Coordinate {
        let row = self.rng.random_range(0..BOARD_SIZE);
        let col = self.rng.random_range(0..BOARD_SIZE);
        Coordinate::wrapping(row, col)
    }
}

impl Player for Robot {
    fn name(&self) -> &str {
        "Robot"
    }

    fn boards(&self) -> &PlayerBoards {
        &self.boards
    }

    fn boards_mut(&mut self) -> &mut PlayerBoards {
        &mut self.boards
    }

    fn choose_anchor(&mut self, _kind: ShipKind) -> Result<Coordinate, QueryError> {
        Ok(self.random_square())
    }

    fn choose_facing(&mut self, _kind: ShipKind) -> Result<Facing, QueryError> {
        Ok(Facing::ALL[self.rng.random_range(0..Facing::ALL.len())])
    }

    fn choose_target(&mut self) -> Result<Coordinate, QueryError> {
        let open: Vec<Coordinate> = Coordinate::all()
            .filter(|&c| !self.boards.observed.is_targeted(c))
            .collect();
        if open.is_empty() {
            return Ok(self.random_square());
        }
        Ok(open[self.rng.random_range(0..open.len())])
    }
}
