use std::fmt;

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};

/// Ledger-assigned action identifier. `0` marks an unused history slot.
pub type ActionId = u64;

/// A cell coordinate as the ledger addresses it, `x` is the outer index
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub fn is_on_board(&self) -> bool {
        usize::from(self.x) < BOARD_WIDTH && usize::from(self.y) < BOARD_HEIGHT
    }

    pub(crate) fn cell_index(&self) -> Option<usize> {
        if !self.is_on_board() {
            return None;
        }
        Some(usize::from(self.x) * BOARD_HEIGHT + usize::from(self.y))
    }

    pub(crate) fn from_cell_index(index: usize) -> Self {
        // callers iterate 0..BOARD_CELL_COUNT, both halves fit in a u8
        let x = u8::try_from(index / BOARD_HEIGHT).unwrap_or(u8::MAX);
        let y = u8::try_from(index % BOARD_HEIGHT).unwrap_or(u8::MAX);
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Which decoder a raw buffer from a subscribed address is meant for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountKind {
    Board,
    History,
    Player,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccountKind::Board => "board",
            AccountKind::History => "history",
            AccountKind::Player => "player",
        };
        f.write_str(name)
    }
}
