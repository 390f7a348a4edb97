//! Line-completion detection through the last played cell.
//!
//! A move can only complete a line that passes through the square just
//! played, so only that row, that column and any diagonal through it are
//! examined. The order of the checks is the tie-break when one move completes
//! several lines at once: row, then column, then main diagonal, then
//! anti-diagonal.

use core::fmt;

use crate::core::board::{Board, Marks};
use crate::core::common::{GameError, Marker};
use crate::core::config::{BOARD_SIZE, LINE_LENGTH};

const N: usize = BOARD_SIZE as usize;

/// Which row, column or diagonal a line occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum LineKind {
    Row(usize),
    Column(usize),
    /// `(0,0), (1,1), (2,2)`
    MainDiagonal,
    /// `(0,2), (1,1), (2,0)`
    AntiDiagonal,
}

impl LineKind {
    /// The cells of the line, ordered by increasing row (then column).
    pub fn cells(self) -> [(usize, usize); LINE_LENGTH] {
        core::array::from_fn(|i| match self {
            LineKind::Row(r) => (r, i),
            LineKind::Column(c) => (i, c),
            LineKind::MainDiagonal => (i, i),
            LineKind::AntiDiagonal => (i, N - 1 - i),
        })
    }

    fn mask(self) -> Result<Marks, GameError> {
        Ok(Marks::from_cells(self.cells())?)
    }
}

/// Three cells of one marker forming a completed row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct WinningLine {
    kind: LineKind,
    cells: [(usize, usize); LINE_LENGTH],
}

impl WinningLine {
    fn new(kind: LineKind) -> Self {
        WinningLine {
            kind,
            cells: kind.cells(),
        }
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Coordinates of the line in order.
    pub fn cells(&self) -> &[(usize, usize); LINE_LENGTH] {
        &self.cells
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

impl fmt::Display for WinningLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (r, c)) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{}, {}]", r, c)?;
        }
        write!(f, "]")
    }
}

/// Lines through (row, col) in tie-break order. Diagonals are included only
/// when the cell lies on them; the centre lies on both.
fn candidate_lines(row: usize, col: usize) -> impl Iterator<Item = LineKind> {
    let main = (row == col).then_some(LineKind::MainDiagonal);
    let anti = (row + col == N - 1).then_some(LineKind::AntiDiagonal);
    [Some(LineKind::Row(row)), Some(LineKind::Column(col)), main, anti]
        .into_iter()
        .flatten()
}

/// Returns the line completed by `marker` through (last_row, last_col), if
/// any. Fails only for coordinates off the board.
pub fn detect(
    board: &Board,
    marker: Marker,
    last_row: usize,
    last_col: usize,
) -> Result<Option<WinningLine>, GameError> {
    // Range check via the board's own contract.
    board.value_at(last_row, last_col)?;
    let marks = board.marks(marker);
    for kind in candidate_lines(last_row, last_col) {
        if marks.contains(kind.mask()?) {
            return Ok(Some(WinningLine::new(kind)));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_candidates() {
        let lines: alloc::vec::Vec<_> = candidate_lines(0, 0).collect();
        assert_eq!(
            lines,
            [LineKind::Row(0), LineKind::Column(0), LineKind::MainDiagonal]
        );
    }

    #[test]
    fn centre_checks_both_diagonals_main_first() {
        let lines: alloc::vec::Vec<_> = candidate_lines(1, 1).collect();
        assert_eq!(
            lines,
            [
                LineKind::Row(1),
                LineKind::Column(1),
                LineKind::MainDiagonal,
                LineKind::AntiDiagonal
            ]
        );
    }

    #[test]
    fn edge_has_no_diagonal() {
        assert_eq!(candidate_lines(0, 1).count(), 2);
        assert_eq!(candidate_lines(1, 2).count(), 2);
    }

    #[test]
    fn anti_diagonal_cells() {
        assert_eq!(LineKind::AntiDiagonal.cells(), [(0, 2), (1, 1), (2, 0)]);
    }
}
