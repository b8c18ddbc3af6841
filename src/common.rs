//! Common types for tic-tac-toe: symbols, cells, and engine errors.

use core::fmt;

/// The mark a player puts on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    Cross,
    Nought,
}

impl Symbol {
    /// Glyph used when drawing the board.
    pub const fn glyph(self) -> &'static str {
        match self {
            Symbol::Cross => "❌",
            Symbol::Nought => "⭕",
        }
    }

    /// The symbol held by the other player.
    pub const fn other(self) -> Symbol {
        match self {
            Symbol::Cross => Symbol::Nought,
            Symbol::Nought => Symbol::Cross,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Contents of a single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Symbol),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Taken(s) => Some(s),
        }
    }
}

/// Reasons a move is refused. None of them change any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Index is outside 0..=8.
    OutOfRange(usize),
    /// Cell already holds a symbol.
    Occupied(usize),
    /// The game has already been decided.
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange(i) => write!(f, "Cell {} is off the board", i),
            MoveError::Occupied(i) => write!(f, "Cell {} is already taken", i),
            MoveError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}

/// Errors raised while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Both players were given the same symbol.
    DuplicateSymbol(Symbol),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::DuplicateSymbol(s) => {
                write!(f, "Both players cannot play with {}", s)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
