use broadside::{init_logging, ConsoleInput, GameLogic, Human, Player, Robot, Seat};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Sink the robot's fleet before it sinks yours", long_about = None)]
struct Cli {
    /// Name shown for the human player.
    #[arg(long, default_value = "Patrick")]
    name: String,
    /// Robot difficulty, clamped to the supported maximum.
    #[arg(long, default_value_t = 1)]
    difficulty: u8,
    #[arg(long, help = "Fix RNG seed for a reproducible robot (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (robot will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let human = Human::new(cli.name, ConsoleInput::stdio());
    let robot = Robot::new(cli.difficulty, rng);
    let mut logic = GameLogic::new(human, robot);

    logic.setup_players().map_err(|e| anyhow::anyhow!(e))?;
    let winner = logic.run_game().map_err(|e| anyhow::anyhow!(e))?;

    println!("{}", logic.human().boards().render());
    match winner {
        Seat::Human => println!("{} wins in {} turns.", logic.human().name(), logic.turns()),
        Seat::Robot => println!("The robot wins in {} turns.", logic.turns()),
    }
    Ok(())
}
