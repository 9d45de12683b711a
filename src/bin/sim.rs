use broadside::{init_logging, GameLogic, Robot, Seat};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut logic = GameLogic::new(Robot::from_seed(1, seed1), Robot::from_seed(1, seed2));
    logic.setup_players().map_err(|e| anyhow::anyhow!(e))?;
    let winner = logic.run_game().map_err(|e| anyhow::anyhow!(e))?;

    let summary = |seat: Seat| {
        let observed = &logic.player(seat).boards().observed;
        let shots = broadside::Coordinate::all()
            .filter(|&c| observed.is_targeted(c))
            .count();
        json!({"shots": shots, "hits": observed.hit_count()})
    };

    let result = json!({
        "winner": winner,
        "turns": logic.turns(),
        "human": summary(Seat::Human),
        "robot": summary(Seat::Robot),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
