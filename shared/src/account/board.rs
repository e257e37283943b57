use tilesync_serde::{de_fixed, ser_fixed, ByteReader, ByteWrite, ConstByteLength, Serde, SerdeErr};

use crate::{constants::BOARD_CELL_COUNT, types::Position};

/// A fixed `BOARD_WIDTH x BOARD_HEIGHT` grid stored x-major, matching the
/// ledger's `[[Tile; HEIGHT]; WIDTH]` layout
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board<T> {
    cells: Vec<T>,
}

impl<T: Clone> Board<T> {
    pub fn filled(value: T) -> Self {
        Self {
            cells: vec![value; BOARD_CELL_COUNT],
        }
    }
}

impl<T: Clone + Default> Default for Board<T> {
    fn default() -> Self {
        Self::filled(T::default())
    }
}

impl<T> Board<T> {
    pub fn from_fn(mut init: impl FnMut(Position) -> T) -> Self {
        let cells = (0..BOARD_CELL_COUNT)
            .map(|index| init(Position::from_cell_index(index)))
            .collect();
        Self { cells }
    }

    /// Returns `None` for positions off the board
    pub fn get(&self, position: Position) -> Option<&T> {
        let index = position.cell_index()?;
        self.cells.get(index)
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        let index = position.cell_index()?;
        self.cells.get_mut(index)
    }

    /// Overwrites one cell, returning the previous value. Off-board positions
    /// leave the board untouched and hand `value` back as `Err`.
    pub fn replace(&mut self, position: Position, value: T) -> Result<T, T> {
        match self.get_mut(position) {
            Some(cell) => Ok(std::mem::replace(cell, value)),
            None => Err(value),
        }
    }

    /// All cells in wire order, x outer
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (Position::from_cell_index(index), cell))
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Board<U> {
        Board {
            cells: self.cells.iter().map(|cell| f(cell)).collect(),
        }
    }
}

impl<T: Serde> Serde for Board<T> {
    fn ser(&self, writer: &mut dyn ByteWrite) {
        ser_fixed(&self.cells, writer);
    }

    fn de(reader: &mut ByteReader) -> Result<Self, SerdeErr> {
        let cells = de_fixed(reader, BOARD_CELL_COUNT)?;
        Ok(Self { cells })
    }

    fn byte_length(&self) -> usize {
        self.cells.iter().map(Serde::byte_length).sum()
    }
}

impl<T: ConstByteLength> ConstByteLength for Board<T> {
    fn const_byte_length() -> usize {
        T::const_byte_length() * BOARD_CELL_COUNT
    }
}
