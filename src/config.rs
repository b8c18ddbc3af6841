/// Cells per row and per column.
pub const BOARD_WIDTH: usize = 3;
/// Total number of cells on the board.
pub const NUM_CELLS: usize = BOARD_WIDTH * BOARD_WIDTH;
/// Number of winning lines.
pub const NUM_LINES: usize = 8;

/// Every winning line as a triple of flat cell indices (`row * 3 + col`).
/// Scanned in this order: rows, then columns, then diagonals.
pub const LINES: [[usize; BOARD_WIDTH]; NUM_LINES] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Rendered in place of an empty cell. Two columns wide to line up with the
/// symbol glyphs.
pub const EMPTY_PLACEHOLDER: &str = "  ";

/// Horizontal rule between board rows.
pub const ROW_SEPARATOR: &str = "-------------";

/// Default pause after each board is shown on the console, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Name the computer opponent plays under.
pub const COMPUTER_NAME: &str = "I";
