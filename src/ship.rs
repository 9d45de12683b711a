//! Ship archetypes and the immutable ship descriptor.

use core::fmt;

use crate::coordinate::{Coordinate, Facing};

/// One of the five fixed ship archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipKind {
    /// Look up an archetype by its name, e.g. `"Cruiser"`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Carrier" => Some(ShipKind::Carrier),
            "Battleship" => Some(ShipKind::Battleship),
            "Cruiser" => Some(ShipKind::Cruiser),
            "Submarine" => Some(ShipKind::Submarine),
            "Destroyer" => Some(ShipKind::Destroyer),
            _ => None,
        }
    }

    /// Reverse lookup from a board marker.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'A' => Some(ShipKind::Carrier),
            'B' => Some(ShipKind::Battleship),
            'C' => Some(ShipKind::Cruiser),
            'S' => Some(ShipKind::Submarine),
            'D' => Some(ShipKind::Destroyer),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
        }
    }

    /// Single-character marker stamped on every cell the ship occupies.
    pub const fn marker(self) -> char {
        match self {
            ShipKind::Carrier => 'A',
            ShipKind::Battleship => 'B',
            ShipKind::Cruiser => 'C',
            ShipKind::Submarine => 'S',
            ShipKind::Destroyer => 'D',
        }
    }

    pub const fn length(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Cruiser | ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship anchored on the board, extending `length` cells along `facing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    kind: ShipKind,
    anchor: Coordinate,
    facing: Facing,
}

impl Ship {
    pub fn new(kind: ShipKind, anchor: Coordinate, facing: Facing) -> Self {
        Self {
            kind,
            anchor,
            facing,
        }
    }

    /// Factory keyed on the archetype name. Returns `None` for anything
    /// other than the five known names.
    pub fn make_by_name(name: &str, anchor: Coordinate, facing: Facing) -> Option<Self> {
        ShipKind::from_name(name).map(|kind| Self::new(kind, anchor, facing))
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn marker(&self) -> char {
        self.kind.marker()
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Squares of the run that lie on the board, starting at the anchor.
    /// Stops early at the edge, so a short result means the ship does not fit.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.length()).map_while(move |i| self.anchor.step(self.facing, i))
    }
}
