use tilesync_shared::{Board, Position, TileRecord};

use crate::error::PayloadProblem;

/// The client's copy of the board. Empty cells are `None`.
pub struct BoardMirror<T: TileRecord> {
    cells: Board<Option<T>>,
}

impl<T: TileRecord> Default for BoardMirror<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TileRecord> BoardMirror<T> {
    pub fn new() -> Self {
        Self {
            cells: Board::filled(None),
        }
    }

    /// Replaces every cell with the authoritative board's
    pub fn rebuild_from(&mut self, board: &Board<T>) {
        self.cells = board.map(|tile| tile.is_occupied().then(|| tile.clone()));
    }

    /// Overwrites one cell with a post-action tile. Applying the same tile
    /// twice leaves the mirror unchanged.
    pub fn patch(&mut self, position: Position, tile: &T) -> Result<(), PayloadProblem> {
        let value = tile.is_occupied().then(|| tile.clone());
        self.cells
            .replace(position, value)
            .map(|_| ())
            .map_err(|_| PayloadProblem::OffBoard {
                x: position.x,
                y: position.y,
            })
    }

    pub fn get(&self, position: Position) -> Option<&T> {
        self.cells.get(position).and_then(Option::as_ref)
    }

    /// Building type of an occupied cell, `None` for empty or off-board cells
    pub fn building_type_at(&self, position: Position) -> Option<u8> {
        self.get(position).map(TileRecord::building_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<&T>)> {
        self.cells.iter().map(|(position, cell)| (position, cell.as_ref()))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|(_, cell)| cell.is_some()).count()
    }

    pub fn clear(&mut self) {
        self.cells = Board::filled(None);
    }
}
