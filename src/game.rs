use crate::{
    board::Board,
    common::{GameError, MoveError, Symbol},
    player::Player,
};
use alloc::string::{String, ToString};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Symbol),
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// One round of play: a board, the two players, and the outcome once known.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    status: GameStatus,
    moves_made: usize,
}

impl Game {
    /// Create a game with an empty board. The players must hold different
    /// symbols.
    pub fn new(players: [Player; 2]) -> Result<Self, GameError> {
        if players[0].symbol == players[1].symbol {
            return Err(GameError::DuplicateSymbol(players[0].symbol));
        }
        Ok(Self {
            board: Board::new(),
            players,
            status: GameStatus::InProgress,
            moves_made: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player holding `symbol`.
    pub fn player(&self, symbol: Symbol) -> Option<&Player> {
        self.players.iter().find(|p| p.symbol == symbol)
    }

    /// Outcome as of the last `is_terminal` check.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of accepted moves.
    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    /// Place `symbol` at `index`, reporting why the move was refused.
    pub fn try_move(&mut self, symbol: Symbol, index: usize) -> Result<(), MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        self.board.place(symbol, index)?;
        self.moves_made += 1;
        log::debug!("{:?} took cell {}", symbol, index);
        Ok(())
    }

    /// Place `symbol` at `index`. Returns `false` and leaves the game
    /// untouched when the move is not legal.
    pub fn apply_move(&mut self, symbol: Symbol, index: usize) -> bool {
        match self.try_move(symbol, index) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("rejected {:?} at {}: {}", symbol, index, e);
                false
            }
        }
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.board.empty_cells()
    }

    /// Check for a finished game and fix the outcome the first time one is
    /// found. A winning line takes precedence over a full board.
    pub fn is_terminal(&mut self) -> bool {
        if self.status.is_over() {
            return true;
        }
        if let Some((symbol, line)) = self.board.winning_line() {
            log::info!("{:?} completed line {:?}", symbol, line);
            self.status = GameStatus::Won(symbol);
        } else if self.board.is_full() {
            log::info!("board full, game drawn");
            self.status = GameStatus::Draw;
        }
        self.status.is_over()
    }

    /// Symbol of the winner, if the game has been won.
    pub fn winner(&self) -> Option<Symbol> {
        match self.status {
            GameStatus::Won(s) => Some(s),
            _ => None,
        }
    }

    /// Name of the winning player. `None` for a draw or a game that is not
    /// yet decided.
    pub fn winner_name(&self) -> Option<&str> {
        self.winner()
            .and_then(|s| self.player(s))
            .map(|p| p.name.as_str())
    }

    /// Text drawing of the board.
    pub fn render_board(&self) -> String {
        self.board.to_string()
    }
}
