/// Number of columns on every game board, the outer index of the wire layout
pub const BOARD_WIDTH: usize = 10;
/// Number of rows on every game board
pub const BOARD_HEIGHT: usize = 10;
pub const BOARD_CELL_COUNT: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Length of the type tag that prefixes every account buffer
pub const DISCRIMINATOR_BYTES: usize = 8;
