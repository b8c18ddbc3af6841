use crate::{game::Game, player::MoveSource, taunts::Taunts};
use alloc::string::String;
use rand::{rngs::SmallRng, seq::IteratorRandom};

/// Computer opponent that picks uniformly among the open cells.
#[derive(Debug, Clone, Default)]
pub struct RandomPlayer {
    taunts: Taunts,
}

impl RandomPlayer {
    /// A silent random player.
    pub fn new() -> Self {
        Self::default()
    }

    /// A random player that says one of `taunts` before each move.
    pub fn with_taunts(taunts: Taunts) -> Self {
        Self { taunts }
    }
}

impl MoveSource for RandomPlayer {
    fn select_move(&mut self, game: &Game, rng: &mut SmallRng) -> anyhow::Result<usize> {
        game.empty_cells()
            .choose(rng)
            .ok_or_else(|| anyhow::anyhow!("no open cells left to choose from"))
    }

    fn remark(&mut self) -> Option<String> {
        self.taunts.next_phrase()
    }
}
