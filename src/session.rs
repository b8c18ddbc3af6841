#![cfg(feature = "std")]

//! The outer loop: greet the player, play rounds until they decline another.

use std::io::{BufRead, Write};

use crate::{
    common::Symbol,
    config::COMPUTER_NAME,
    driver::TurnDriver,
    game::{Game, GameStatus},
    player::Player,
    player_ai::RandomPlayer,
    player_cli::CliPlayer,
    taunts::Taunts,
};
use rand::rngs::SmallRng;

/// Tally of finished rounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: usize,
    pub human_wins: usize,
    pub computer_wins: usize,
    pub draws: usize,
}

/// Play one round: a fresh game between `players`, human first.
pub fn play_round<R: BufRead, W: Write>(
    console: &mut CliPlayer<R, W>,
    players: &[Player; 2],
    rng: &mut SmallRng,
) -> anyhow::Result<(GameStatus, Option<String>)> {
    let mut computer = RandomPlayer::with_taunts(Taunts::shuffled(rng));
    let mut game = Game::new(players.clone())?;

    console.say(&game.render_board())?;
    console.say("I dare you to a Tic Tac Toe game!")?;
    console.say("You're playing against a computer, so you're gonna lose anyway!")?;

    let status = TurnDriver::new().play(&mut game, console, &mut computer, rng)?;

    console.say("Game over!")?;
    let winner = game.winner_name().map(str::to_string);
    match &winner {
        Some(name) => console.say(&format!("{} won!", name))?,
        None => console.say("It's a tie!")?,
    }
    Ok((status, winner))
}

/// Run rounds until the player answers anything but `y`. When `name` is
/// `None` the player is asked for it.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut CliPlayer<R, W>,
    name: Option<String>,
    rng: &mut SmallRng,
) -> anyhow::Result<SessionSummary> {
    let name = match name {
        Some(n) => n,
        None => console.prompt("What's your name? ")?,
    };
    console.say(&format!("Hello, {}!", name))?;

    let players = [
        Player::new(name, Symbol::Cross),
        Player::new(COMPUTER_NAME, Symbol::Nought),
    ];
    let mut summary = SessionSummary::default();
    loop {
        let (status, _) = play_round(console, &players, rng)?;
        summary.rounds += 1;
        match status {
            GameStatus::Won(s) if s == players[0].symbol => summary.human_wins += 1,
            GameStatus::Won(_) => summary.computer_wins += 1,
            GameStatus::Draw => summary.draws += 1,
            GameStatus::InProgress => anyhow::bail!("round ended without a result"),
        }
        log::info!("round {} finished: {:?}", summary.rounds, status);

        let again = console.prompt("Do you want to play again? [y/n] ")?;
        if !again.trim().eq_ignore_ascii_case("y") {
            break;
        }
    }
    console.say("See you later!")?;
    Ok(summary)
}
