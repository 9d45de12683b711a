use broadside::{
    fire_missile, CoordinateError, DirectionError, Forfeit, Human, InputClosed, Notice, Player,
    QueryError, Robot, ScriptedInput, ShipKind, TurnError, TurnOutcome, FLEET, TOTAL_SHIP_CELLS,
};

/// Setup answers that stack the whole fleet in rows A..E, facing east.
fn stacked_fleet() -> Vec<&'static str> {
    vec!["a 1", "e", "b 1", "e", "c 1", "e", "d 1", "e", "e 1", "e"]
}

fn ready(name: &str, extra: &[&str]) -> Human<ScriptedInput> {
    let mut lines: Vec<&str> = stacked_fleet();
    lines.extend_from_slice(extra);
    let mut human = Human::new(name, ScriptedInput::new(lines));
    human.setup().unwrap();
    human
}

#[test]
fn test_setup_places_fleet_in_order() {
    let human = ready("alice", &[]);
    let own = &human.boards().own;
    assert_eq!(own.remaining_ship_cells(), TOTAL_SHIP_CELLS);
    assert_eq!(own.to_string().lines().nth(1).unwrap(), "A  A A A A A - - - - -");
    assert_eq!(own.to_string().lines().nth(5).unwrap(), "E  D D - - - - - - - -");

    let placed: Vec<ShipKind> = human
        .input()
        .notices()
        .iter()
        .filter_map(|n| match n {
            Notice::ShipPlaced(ship) => Some(ship.kind()),
            _ => None,
        })
        .collect();
    assert_eq!(placed, FLEET.to_vec());
    assert_eq!(human.input().notices().last(), Some(&Notice::SetupComplete));
}

#[test]
fn test_setup_retries_until_valid() {
    let script = [
        "a 8", "e", // carrier runs off the board
        "z 1", "s", // bad row letter
        "a 1", "x", // bad facing
        "a 1 2", "e", // too many tokens
        "a 1", "e", // carrier placed
        "a 1", "s", // battleship overlaps carrier
        "b 1", "e", "c 1", "e", "d 1", "e", "e 1", "e",
    ];
    let mut human = Human::new("alice", ScriptedInput::new(script));
    human.setup().unwrap();
    assert_eq!(human.input().remaining(), 0);

    let notices = human.input().notices();
    let rejected = notices
        .iter()
        .filter(|n| matches!(n, Notice::PlacementRejected(_)))
        .count();
    assert_eq!(rejected, 2);
    assert!(notices.contains(&Notice::InvalidInput(QueryError::Coordinate(
        CoordinateError::BadLetter('z')
    ))));
    assert!(notices.contains(&Notice::InvalidInput(QueryError::Direction(
        DirectionError::Unrecognized("x".to_string())
    ))));
    assert!(notices.contains(&Notice::InvalidInput(QueryError::Coordinate(
        CoordinateError::WrongArgumentCount(3)
    ))));
    assert_eq!(human.boards().own.remaining_ship_cells(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_setup_stops_when_input_closes() {
    let mut human = Human::new("alice", ScriptedInput::new(["a 1", "e", "b 1"]));
    assert_eq!(human.setup(), Err(InputClosed));
    assert_eq!(human.boards().own.remaining_ship_cells(), 5);
}

#[test]
fn test_turn_hit_marks_observation_board() {
    let mut alice = ready("alice", &["a 3", "j 10"]);
    let mut bob = ready("bob", &[]);

    let outcome = alice.run_turn(&mut bob).unwrap();
    let strike = match outcome {
        TurnOutcome::Fired(strike) => strike,
        other => panic!("unexpected outcome {:?}", other),
    };
    assert!(strike.hit);
    assert_eq!(strike.sunk, None);
    assert!(!strike.fleet_destroyed);
    assert_eq!(alice.boards().observed.to_string().lines().nth(1).unwrap(), "A  - - X - - - - - - -");
    assert_eq!(bob.boards().own.to_string().lines().nth(1).unwrap(), "A  A A X A A - - - - -");

    let outcome = alice.run_turn(&mut bob).unwrap();
    assert!(matches!(outcome, TurnOutcome::Fired(s) if !s.hit));
    let last = alice.boards().observed.to_string().lines().nth(10).unwrap().to_string();
    assert_eq!(last, "J  - - - - - - - - - o");
    assert!(bob
        .input()
        .notices()
        .iter()
        .any(|n| matches!(n, Notice::IncomingMissile(s) if s.hit)));
}

#[test]
fn test_invalid_target_forfeits_turn() {
    let mut alice = ready("alice", &["k 1"]);
    let mut bob = ready("bob", &[]);
    let before = bob.boards().clone();

    let outcome = alice.run_turn(&mut bob).unwrap();
    assert_eq!(
        outcome,
        TurnOutcome::Forfeited(Forfeit::InvalidInput(QueryError::Coordinate(
            CoordinateError::BadLetter('k')
        )))
    );
    assert_eq!(bob.boards(), &before);
}

#[test]
fn test_repeat_target_forfeits_turn() {
    let mut alice = ready("alice", &["e 2", "e 2"]);
    let mut bob = ready("bob", &[]);

    let first = alice.run_turn(&mut bob).unwrap();
    assert!(matches!(first, TurnOutcome::Fired(s) if s.hit && s.sunk.is_none()));
    let second = alice.run_turn(&mut bob).unwrap();
    let target = broadside::Coordinate::from_label('e', 2).unwrap();
    assert_eq!(
        second,
        TurnOutcome::Forfeited(Forfeit::Rejected(TurnError::AlreadyTargeted(target)))
    );
    assert_eq!(bob.boards().own.hit_count(), 1);
}

#[test]
fn test_sinking_is_reported() {
    let mut alice = ready("alice", &["e 1", "e 2"]);
    let mut bob = ready("bob", &[]);
    alice.run_turn(&mut bob).unwrap();
    let outcome = alice.run_turn(&mut bob).unwrap();
    assert!(matches!(outcome, TurnOutcome::Fired(s) if s.sunk == Some(ShipKind::Destroyer)));
}

#[test]
fn test_fire_missile_delegates_to_target_board() {
    let mut bob = ready("bob", &[]);
    let c = broadside::Coordinate::new(3, 0).unwrap();
    let strike = fire_missile(&mut bob, c).unwrap();
    assert!(strike.hit);
    assert_eq!(
        fire_missile(&mut bob, c),
        Err(TurnError::AlreadyTargeted(c))
    );
}

#[test]
fn test_robot_setup_and_targets() {
    let mut robot = Robot::from_seed(9, 7);
    assert_eq!(robot.difficulty(), 4);
    robot.setup().unwrap();
    assert_eq!(robot.boards().own.remaining_ship_cells(), TOTAL_SHIP_CELLS);

    // a robot never picks the same square twice
    let mut target = ready("target", &[]);
    for _ in 0..100 {
        let outcome = robot.run_turn(&mut target).unwrap();
        assert!(matches!(outcome, TurnOutcome::Fired(_)));
    }
    assert!(target.boards().own.all_ships_sunk());
    assert_eq!(target.boards().own.hit_count(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_robot_squares_stay_on_board() {
    let mut robot = Robot::from_seed(1, 42);
    for _ in 0..500 {
        let c = robot.choose_anchor(ShipKind::Carrier).unwrap();
        assert!(c.row() < 10 && c.col() < 10);
    }
}

#[test]
fn test_robot_keeps_firing_once_board_exhausted() {
    let mut robot = Robot::from_seed(0, 3);
    robot.setup().unwrap();
    let mut target = ready("target", &[]);
    for _ in 0..100 {
        robot.run_turn(&mut target).unwrap();
    }

    // every square is resolved, so the fallback pick is still a real square
    let c = robot.choose_target().unwrap();
    assert!(robot.boards().observed.is_targeted(c));
    let outcome = robot.run_turn(&mut target).unwrap();
    assert!(matches!(
        outcome,
        TurnOutcome::Forfeited(Forfeit::Rejected(TurnError::AlreadyTargeted(_)))
    ));
}
