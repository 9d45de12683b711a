use crate::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;

/// Row labels, top to bottom.
pub const ROW_LETTERS: [char; BOARD_SIZE as usize] =
    ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

pub const NUM_SHIPS: usize = 5;

/// Canonical placement order used by the setup protocol.
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Carrier,
    ShipKind::Battleship,
    ShipKind::Cruiser,
    ShipKind::Submarine,
    ShipKind::Destroyer,
];

/// Total number of ship segments in a full fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Robot difficulty is clamped to this value.
pub const MAX_DIFFICULTY: u8 = 4;
