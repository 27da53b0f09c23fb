use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{init_logging, AiPlayer, CliPlayer, ConsoleObserver, Game};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(s) => {
            log::info!("using fixed seed {}", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut observer = ConsoleObserver::stdout();
    observer.greet();

    let mut game = Game::new(Box::new(CliPlayer::stdio()), Box::new(AiPlayer::new()), rng);
    game.run(&mut observer)?;
    Ok(())
}
