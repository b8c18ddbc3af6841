use std::time::Duration;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{init_logging, run_session, CliPlayer, DEFAULT_DELAY_MS};

#[derive(Parser)]
#[command(author, version, about = "Play tic-tac-toe against a computer that moves at random", long_about = None)]
struct Cli {
    /// Your display name. Asked for interactively when omitted.
    #[arg(long)]
    name: Option<String>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Pause after each board is drawn, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    delay_ms: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut console = CliPlayer::stdio().with_delay(Duration::from_millis(cli.delay_ms));
    let summary = run_session(&mut console, cli.name, &mut rng)?;
    log::info!("session over: {:?}", summary);
    Ok(())
}
