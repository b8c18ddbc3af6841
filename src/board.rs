//! The 3x3 grid, stored flat so the win check is a table of index triples.

use crate::common::{Cell, MoveError, Symbol};
use crate::config::{BOARD_WIDTH, EMPTY_PLACEHOLDER, LINES, NUM_CELLS, ROW_SEPARATOR};
use core::fmt;

/// Nine cells in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Board {
    /// Create a board with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; NUM_CELLS],
        }
    }

    /// Immutable view of all cells.
    pub fn cells(&self) -> &[Cell; NUM_CELLS] {
        &self.cells
    }

    /// Cell at `index`, or `None` when off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Put `symbol` on the empty cell at `index`.
    pub fn place(&mut self, symbol: Symbol, index: usize) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::OutOfRange(index))?;
        if !cell.is_empty() {
            return Err(MoveError::Occupied(index));
        }
        *cell = Cell::Taken(symbol);
        Ok(())
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }

    /// Number of cells holding a symbol.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// First line, in table order, whose three cells hold the same symbol.
    pub fn winning_line(&self) -> Option<(Symbol, [usize; BOARD_WIDTH])> {
        LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            match self.cells[a] {
                Cell::Taken(s) if self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a] => {
                    Some((s, line))
                }
                _ => None,
            }
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", ROW_SEPARATOR)?;
        for row in self.cells.chunks(BOARD_WIDTH) {
            let mut sep = " ";
            for cell in row {
                let glyph = cell.symbol().map_or(EMPTY_PLACEHOLDER, Symbol::glyph);
                write!(f, "{}{}", sep, glyph)?;
                sep = " | ";
            }
            writeln!(f)?;
            writeln!(f, "{}", ROW_SEPARATOR)?;
        }
        Ok(())
    }
}
