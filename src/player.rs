use crate::{
    common::{MoveError, Symbol},
    game::Game,
};
use alloc::string::String;
use rand::rngs::SmallRng;

/// A named participant and the symbol they play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub symbol: Symbol,
}

impl Player {
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }
}

/// Interface implemented by anything that can pick moves for a seat.
///
/// Only `select_move` is required. The hooks let interactive sources show
/// the game to a person and retry after a rejected move.
pub trait MoveSource {
    /// Choose a 0-based cell index for the next move.
    fn select_move(&mut self, game: &Game, rng: &mut SmallRng) -> anyhow::Result<usize>;

    /// Called when the engine refuses the index returned by `select_move`.
    /// Returning `Ok` asks the driver to call `select_move` again.
    fn move_rejected(&mut self, index: usize, err: MoveError) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("move {} rejected: {}", index, err))
    }

    /// Something this source wants to say before its move.
    fn remark(&mut self) -> Option<String> {
        None
    }

    /// Inform the source of a remark made by its opponent.
    fn announce(&mut self, _line: &str) -> anyhow::Result<()> {
        Ok(())
    }

    /// Inform the source of the board after an accepted move.
    fn show_board(&mut self, _rendered: &str) -> anyhow::Result<()> {
        Ok(())
    }
}
