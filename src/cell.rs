use core::fmt;

use crate::ship::ShipKind;

pub const EMPTY_MARKER: char = '-';
pub const HIT_MARKER: char = 'X';
pub const MISS_MARKER: char = 'o';

/// A single board square.
///
/// Empty squares become `Ship` during setup. `Empty` and `Ship` squares
/// resolve to `Hit` or `Miss` once; resolved squares never change again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Ship(ShipKind),
    /// Remembers which ship was struck so sinkings can be reported.
    Hit(Option<ShipKind>),
    Miss,
}

impl Cell {
    pub fn marker(&self) -> char {
        match self {
            Cell::Empty => EMPTY_MARKER,
            Cell::Ship(kind) => kind.marker(),
            Cell::Hit(_) => HIT_MARKER,
            Cell::Miss => MISS_MARKER,
        }
    }

    /// Build a cell from a raw marker, or `None` for a character outside the
    /// board vocabulary.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            EMPTY_MARKER => Some(Cell::Empty),
            HIT_MARKER => Some(Cell::Hit(None)),
            MISS_MARKER => Some(Cell::Miss),
            m => ShipKind::from_marker(m).map(Cell::Ship),
        }
    }

    /// Holds an unhit ship segment.
    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Ship(_))
    }

    /// Already resolved by a missile.
    pub fn is_targeted(&self) -> bool {
        matches!(self, Cell::Hit(_) | Cell::Miss)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}
