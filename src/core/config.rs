/// Side length of the square grid.
pub const BOARD_SIZE: u8 = 3;

/// Number of cells on the board; a round with this many placements and no
/// completed line is a tie.
pub const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Number of equal markers that form a winning line.
pub const LINE_LENGTH: usize = BOARD_SIZE as usize;

/// Converts a zero-based `(row, col)` pair into the `A1` style label used by
/// the terminal interface. Returns `None` for off-board coordinates.
pub fn coord_label(row: usize, col: usize) -> Option<(char, usize)> {
    if row >= BOARD_SIZE as usize || col >= BOARD_SIZE as usize {
        return None;
    }
    Some(((b'A' + col as u8) as char, row + 1))
}
