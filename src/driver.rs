//! Turn sequencing: the two seats move in strict alternation, with a terminal
//! check after every accepted move.

use crate::{
    game::{Game, GameStatus},
    player::MoveSource,
};
use rand::rngs::SmallRng;

/// Which of the two players is moving. Seat `First` plays `players()[0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// Runs a single game to completion.
#[derive(Debug, Default, Clone, Copy)]
pub struct TurnDriver;

impl TurnDriver {
    pub fn new() -> Self {
        Self
    }

    /// Play `game` until it is terminal. `first` moves first. Returns the
    /// fixed outcome.
    pub fn play(
        &self,
        game: &mut Game,
        first: &mut dyn MoveSource,
        second: &mut dyn MoveSource,
        rng: &mut SmallRng,
    ) -> anyhow::Result<GameStatus> {
        while !game.is_terminal() {
            self.take_turn(game, Seat::First, first, second, rng)?;
            if game.is_terminal() {
                break;
            }
            self.take_turn(game, Seat::Second, second, first, rng)?;
        }
        log::info!(
            "game finished after {} moves: {:?}",
            game.moves_made(),
            game.status()
        );
        Ok(game.status())
    }

    /// Let `mover` place exactly one symbol, retrying while it accepts
    /// rejections. `watcher` is the other seat.
    pub fn take_turn(
        &self,
        game: &mut Game,
        seat: Seat,
        mover: &mut dyn MoveSource,
        watcher: &mut dyn MoveSource,
        rng: &mut SmallRng,
    ) -> anyhow::Result<()> {
        if game.status().is_over() {
            anyhow::bail!("{:?} seat asked to move in a finished game", seat);
        }
        if let Some(line) = mover.remark() {
            watcher.announce(&line)?;
        }
        let symbol = game.players()[seat.index()].symbol;
        loop {
            let index = mover.select_move(game, rng)?;
            match game.try_move(symbol, index) {
                Ok(()) => break,
                Err(e) => {
                    log::debug!("{:?} seat: {}", seat, e);
                    mover.move_rejected(index, e)?;
                }
            }
        }
        let rendered = game.render_board();
        mover.show_board(&rendered)?;
        watcher.show_board(&rendered)?;
        Ok(())
    }
}
