//! Computer against computer, printing a JSON summary of the result.

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{init_logging, AiPlayer, Game, SilentObserver};
use serde_json::json;

#[derive(Parser)]
#[command(about = "Simulate a game between two random shooters", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 10_000)]
    shot_limit: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let rng = SmallRng::seed_from_u64(args.seed);
    let mut game = Game::new(Box::new(AiPlayer::new()), Box::new(AiPlayer::new()), rng)
        .with_shot_limit(args.shot_limit);
    let winner = game.run(&mut SilentObserver)?;

    let result = json!({
        "seed": args.seed,
        "winner": winner,
        "shots": game.shots(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
