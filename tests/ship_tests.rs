use broadside::{Coordinate, Facing, Ship, ShipKind, FLEET, TOTAL_SHIP_CELLS};

#[test]
fn test_archetype_table() {
    let table: Vec<_> = FLEET
        .iter()
        .map(|k| (k.name(), k.marker(), k.length()))
        .collect();
    assert_eq!(
        table,
        vec![
            ("Carrier", 'A', 5),
            ("Battleship", 'B', 4),
            ("Cruiser", 'C', 3),
            ("Submarine", 'S', 3),
            ("Destroyer", 'D', 2),
        ]
    );
    assert_eq!(FLEET.iter().map(|k| k.length()).sum::<usize>(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_make_by_name() {
    let anchor = Coordinate::new(1, 2).unwrap();
    let ship = Ship::make_by_name("Submarine", anchor, Facing::West).unwrap();
    assert_eq!(ship.kind(), ShipKind::Submarine);
    assert_eq!(ship.marker(), 'S');
    assert_eq!(ship.length(), 3);
    assert_eq!(ship.anchor(), anchor);
    assert_eq!(ship.facing(), Facing::West);
}

#[test]
fn test_make_by_name_unknown() {
    let anchor = Coordinate::new(0, 0).unwrap();
    assert!(Ship::make_by_name("Rowboat", anchor, Facing::East).is_none());
    assert!(Ship::make_by_name("carrier", anchor, Facing::East).is_none());
}

#[test]
fn test_cells_follow_facing() {
    let ship = Ship::new(ShipKind::Cruiser, Coordinate::new(4, 4).unwrap(), Facing::North);
    let cells: Vec<_> = ship.cells().map(|c| (c.row(), c.col())).collect();
    assert_eq!(cells, vec![(4, 4), (3, 4), (2, 4)]);
}

#[test]
fn test_cells_stop_at_edge() {
    let ship = Ship::new(ShipKind::Carrier, Coordinate::new(0, 8).unwrap(), Facing::East);
    assert_eq!(ship.cells().count(), 2);
}

#[test]
fn test_marker_lookup() {
    for kind in FLEET {
        assert_eq!(ShipKind::from_marker(kind.marker()), Some(kind));
        assert_eq!(ShipKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(ShipKind::from_marker('X'), None);
}
