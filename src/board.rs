//! A 10×10 grid of cells: placement checks, ship stamping and missile
//! resolution.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};
use core::ops::Index;

use crate::cell::Cell;
use crate::config::{BOARD_SIZE, ROW_LETTERS};
use crate::coordinate::{Coordinate, Facing};
use crate::ship::{Ship, ShipKind};

const SIZE: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    grid: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create a board with every cell empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff both components lie on the board.
    pub fn is_valid_position(row: i32, col: i32) -> bool {
        (0..SIZE as i32).contains(&row) && (0..SIZE as i32).contains(&col)
    }

    pub fn cell(&self, coord: Coordinate) -> Cell {
        self.grid[coord.row()][coord.col()]
    }

    fn cell_mut(&mut self, coord: Coordinate) -> &mut Cell {
        &mut self.grid[coord.row()][coord.col()]
    }

    /// Coordinates reached by walking `count` steps of `(row_delta, col_delta)`
    /// from `start`, stopping at the first step that leaves the board.
    fn walk(start: Coordinate, step: (i32, i32), count: usize) -> impl Iterator<Item = Coordinate> {
        (0..count as i32).map_while(move |i| {
            Coordinate::new(
                start.row() as i32 + step.0 * i,
                start.col() as i32 + step.1 * i,
            )
        })
    }

    /// Cells along a run. The result is shorter than `count` when the run
    /// leaves the board.
    pub fn spaces_in_direction(&self, start: Coordinate, step: (i32, i32), count: usize) -> Vec<&Cell> {
        Self::walk(start, step, count)
            .map(|c| &self.grid[c.row()][c.col()])
            .collect()
    }

    /// True only if the whole run fits on the board and no cell of it holds a ship.
    pub fn spaces_are_free(&self, start: Coordinate, facing: Facing, length: usize) -> bool {
        let spaces = self.spaces_in_direction(start, facing.step_vector(), length);
        if spaces.len() < length {
            return false;
        }
        spaces.iter().all(|cell| !cell.is_occupied())
    }

    /// Stamp the ship's marker along its run.
    ///
    /// Performs no validation: check [`Board::spaces_are_free`] first, or
    /// existing cells are overwritten.
    pub fn place_ship(&mut self, ship: &Ship) {
        log::debug!(
            "placing {} at {} facing {}",
            ship.kind(),
            ship.anchor(),
            ship.facing()
        );
        for coord in Self::walk(ship.anchor(), ship.facing().step_vector(), ship.length()) {
            *self.cell_mut(coord) = Cell::Ship(ship.kind());
        }
    }

    /// Overwrite a single cell with the given marker. An unknown marker
    /// leaves the cell as it was and returns `false`.
    pub fn place_object(&mut self, coord: Coordinate, marker: char) -> bool {
        match Cell::from_marker(marker) {
            Some(cell) => {
                *self.cell_mut(coord) = cell;
                true
            }
            None => {
                log::warn!("ignoring unknown marker {:?} at {}", marker, coord);
                false
            }
        }
    }

    /// Resolve a missile at `coord`. Returns `true` on a hit.
    ///
    /// A cell that was already hit or missed is left untouched and reports
    /// `false`; use [`Board::is_targeted`] to tell that apart from a miss.
    pub fn detonate_missile(&mut self, coord: Coordinate) -> bool {
        let cell = self.cell_mut(coord);
        match *cell {
            Cell::Ship(kind) => {
                *cell = Cell::Hit(Some(kind));
                true
            }
            Cell::Empty => {
                *cell = Cell::Miss;
                false
            }
            Cell::Hit(_) | Cell::Miss => false,
        }
    }

    /// Whether a missile already resolved at `coord`.
    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        self.cell(coord).is_targeted()
    }

    fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter().flatten()
    }

    /// Number of ship segments not yet hit.
    pub fn remaining_ship_cells(&self) -> usize {
        self.cells().filter(|c| c.is_occupied()).count()
    }

    /// Number of cells marked as hits.
    pub fn hit_count(&self) -> usize {
        self.cells().filter(|c| matches!(c, Cell::Hit(_))).count()
    }

    /// True once `kind` has been struck and no segment of it is left.
    pub fn is_sunk(&self, kind: ShipKind) -> bool {
        let struck = self.cells().any(|c| *c == Cell::Hit(Some(kind)));
        struck && !self.cells().any(|c| *c == Cell::Ship(kind))
    }

    /// True when no unhit ship segment remains.
    pub fn all_ships_sunk(&self) -> bool {
        self.remaining_ship_cells() == 0
    }

    /// Render this board and `other` next to each other, this one on the left.
    pub fn side_by_side(&self, other: &Board) -> String {
        let own = alloc::format!("{}", self);
        let theirs = alloc::format!("{}", other);
        let mut out = String::new();
        for (i, (left, right)) in own.lines().zip(theirs.lines()).enumerate() {
            let sep = if i == 0 { "   " } else { "  | " };
            let _ = writeln!(out, "{}{}{}", left, sep, right);
        }
        out
    }
}

impl Index<Coordinate> for Board {
    type Output = Cell;

    fn index(&self, coord: Coordinate) -> &Cell {
        &self.grid[coord.row()][coord.col()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 1..=SIZE {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        for (letter, row) in ROW_LETTERS.iter().zip(self.grid.iter()) {
            write!(f, "{} ", letter)?;
            for cell in row {
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
