use tilesync_shared::{Board, Position, TileRecord};

use crate::mirror::BoardMirror;

/// One cell whose mirrored building type differs from the ledger's
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellMismatch {
    pub position: Position,
    /// Ledger building type, `None` for an empty cell
    pub expected: Option<u8>,
    /// Mirrored building type, `None` for an empty cell
    pub found: Option<u8>,
}

/// Every mismatched cell found by one check, in wire order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesyncReport {
    pub mismatches: Vec<CellMismatch>,
}

impl DesyncReport {
    pub fn len(&self) -> usize {
        self.mismatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compares the mirror against authoritative boards
#[derive(Debug, Default)]
pub struct DesyncDetector {
    checks: u64,
    desyncs: u64,
}

impl DesyncDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a report when any cell's building type differs
    pub fn check<T: TileRecord>(
        &mut self,
        mirror: &BoardMirror<T>,
        board: &Board<T>,
    ) -> Option<DesyncReport> {
        self.checks += 1;

        let mismatches: Vec<CellMismatch> = board
            .iter()
            .filter_map(|(position, tile)| {
                let expected = tile.is_occupied().then(|| tile.building_type());
                let found = mirror.building_type_at(position);
                (expected != found).then_some(CellMismatch {
                    position,
                    expected,
                    found,
                })
            })
            .collect();

        if mismatches.is_empty() {
            return None;
        }
        self.desyncs += 1;
        Some(DesyncReport { mismatches })
    }

    pub fn checks(&self) -> u64 {
        self.checks
    }

    /// Number of checks that found a mismatch
    pub fn desyncs(&self) -> u64 {
        self.desyncs
    }
}
