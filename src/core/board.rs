//! The 3×3 grid, stored as one occupancy `BitBoard` per marker.

use core::fmt;

use crate::core::bitboard::BitBoard;
use crate::core::common::{Cell, GameError, Marker, ValidationError};
use crate::core::config::BOARD_SIZE;

/// Occupancy mask of a single marker.
pub type Marks = BitBoard<u16, { BOARD_SIZE as usize }>;

/// Copyable view of every cell, handed to move providers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    pub cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl BoardSnapshot {
    /// Cell at (row, col), or `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| **cell == Cell::Empty)
                .map(move |(c, _)| (r, c))
        })
    }
}

/// Board state: where each marker has been placed.
///
/// The two masks never overlap, so the occupied count is derived from them
/// and cannot drift from the cell contents.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    crosses: Marks,
    noughts: Marks,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            crosses: Marks::new(),
            noughts: Marks::new(),
        }
    }

    fn check_bounds(row: usize, col: usize) -> Result<(), ValidationError> {
        if row >= BOARD_SIZE as usize || col >= BOARD_SIZE as usize {
            Err(ValidationError::OutOfRange { row, col })
        } else {
            Ok(())
        }
    }

    /// Returns `true` when (row, col) holds no marker.
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, GameError> {
        Ok(self.value_at(row, col)? == Cell::Empty)
    }

    /// Place `marker` at (row, col). Nothing changes unless the placement is
    /// accepted.
    pub fn place(&mut self, marker: Marker, row: usize, col: usize) -> Result<(), GameError> {
        if !self.is_empty(row, col)? {
            return Err(GameError::Occupied { row, col });
        }
        match marker {
            Marker::Cross => self.crosses.set(row, col)?,
            Marker::Nought => self.noughts.set(row, col)?,
        }
        Ok(())
    }

    /// Cell at (row, col).
    pub fn value_at(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        Self::check_bounds(row, col)?;
        if self.crosses.get(row, col)? {
            Ok(Cell::Cross)
        } else if self.noughts.get(row, col)? {
            Ok(Cell::Nought)
        } else {
            Ok(Cell::Empty)
        }
    }

    /// Number of cells holding a marker.
    pub fn occupied_count(&self) -> usize {
        self.crosses.count_ones() + self.noughts.count_ones()
    }

    /// Returns `true` once every cell holds a marker.
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.crosses.clear_all();
        self.noughts.clear_all();
    }

    /// Occupancy mask of one marker.
    pub fn marks(&self, marker: Marker) -> Marks {
        match marker {
            Marker::Cross => self.crosses,
            Marker::Nought => self.noughts,
        }
    }

    /// Mask of all occupied cells.
    pub fn occupied(&self) -> Marks {
        self.crosses | self.noughts
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> impl Iterator<Item = (usize, usize)> {
        (!self.occupied()).iter_set_bits()
    }

    /// Copy of every cell.
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snapshot = BoardSnapshot::default();
        for (r, c) in self.crosses.iter_set_bits() {
            snapshot.cells[r][c] = Cell::Cross;
        }
        for (r, c) in self.noughts.iter_set_bits() {
            snapshot.cells[r][c] = Cell::Nought;
        }
        snapshot
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("crosses", &self.crosses)
            .field("noughts", &self.noughts)
            .finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot();
        for (r, row) in snapshot.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let ch = match cell {
                    Cell::Cross => 'X',
                    Cell::Nought => 'O',
                    Cell::Empty => '.',
                };
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", ch)?;
            }
            if r + 1 < snapshot.cells.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
