use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;
use tictactoe::{init_logging, Game, GameStatus, Player, RandomPlayer, Symbol, TurnDriver};

/// Play random-vs-random games and print the tally as JSON.
#[derive(Parser)]
struct Args {
    #[arg(long, default_value_t = 1000)]
    games: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Debug, Default, Serialize)]
struct Tally {
    games: usize,
    first_wins: usize,
    second_wins: usize,
    draws: usize,
    total_moves: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let players = [
        Player::new("first", Symbol::Cross),
        Player::new("second", Symbol::Nought),
    ];
    let driver = TurnDriver::new();

    let mut tally = Tally::default();
    for _ in 0..args.games {
        let mut game = Game::new(players.clone())?;
        let mut p1 = RandomPlayer::new();
        let mut p2 = RandomPlayer::new();
        match driver.play(&mut game, &mut p1, &mut p2, &mut rng)? {
            GameStatus::Won(Symbol::Cross) => tally.first_wins += 1,
            GameStatus::Won(Symbol::Nought) => tally.second_wins += 1,
            GameStatus::Draw => tally.draws += 1,
            GameStatus::InProgress => anyhow::bail!("game stopped before it was decided"),
        }
        tally.games += 1;
        tally.total_moves += game.moves_made();
    }

    println!("{}", serde_json::to_string(&tally)?);
    Ok(())
}
