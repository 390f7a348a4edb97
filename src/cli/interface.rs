//! Terminal rendering and coordinate parsing.

use std::string::String;

use crate::core::{coord_label, BoardSnapshot, Cell, Tallies, WinningLine, BOARD_SIZE};

/// `A1` style label for a zero-based cell.
pub fn coord_to_string(r: usize, c: usize) -> String {
    match coord_label(r, c) {
        Some((col, row)) => format!("{}{}", col, row),
        None => format!("({}, {})", r, c),
    }
}

/// Parse `B3` style input (column letter, then row number) or zero-based
/// `row col` pairs such as `1 2` into zero-based `(row, col)`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.starts_with(|c: char| c.is_ascii_digit()) {
        return parse_row_col(input);
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., B2)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-C", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= BOARD_SIZE as usize {
        return Err(format!("Column '{}' out of bounds - must be A-C", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-3", row_str))?;
    if row == 0 || row > BOARD_SIZE as usize {
        return Err(format!("Row {} out of bounds - must be 1-3", row));
    }
    Ok((row - 1, col))
}

fn parse_row_col(input: &str) -> Result<(usize, usize), String> {
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty());
    let (row, col) = match (parts.next(), parts.next(), parts.next()) {
        (Some(r), Some(c), None) => (r, c),
        _ => return Err(format!("Expected '<row> <col>' (e.g., 1 2), got '{}'", input)),
    };
    let row: usize = row
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 0-2", row))?;
    let col: usize = col
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number 0-2", col))?;
    let size = BOARD_SIZE as usize;
    if row >= size || col >= size {
        return Err(format!(
            "Cell ({}, {}) out of bounds - row and column must be 0-2",
            row, col
        ));
    }
    Ok((row, col))
}

/// Render a snapshot with column letters and row numbers. Cells of
/// `highlight` are bracketed.
pub fn render_board(snapshot: &BoardSnapshot, highlight: Option<&WinningLine>) -> String {
    let mut out = String::from("    ");
    for c in 0..BOARD_SIZE as usize {
        out.push_str(&format!(" {} ", (b'A' + c as u8) as char));
    }
    out.push('\n');
    for (r, row) in snapshot.cells.iter().enumerate() {
        out.push_str(&format!("  {} ", r + 1));
        for (c, cell) in row.iter().enumerate() {
            let ch = match cell {
                Cell::Cross => 'X',
                Cell::Nought => 'O',
                Cell::Empty => '.',
            };
            if highlight.is_some_and(|line| line.contains(r, c)) {
                out.push_str(&format!("[{}]", ch));
            } else {
                out.push_str(&format!(" {} ", ch));
            }
        }
        out.push('\n');
    }
    out
}

pub fn print_tallies(x_name: &str, o_name: &str, tallies: &Tallies) {
    std::println!(
        "    {}: {}   Ties: {}   {}: {}",
        x_name,
        tallies.x_wins,
        tallies.ties,
        o_name,
        tallies.o_wins
    );
}

pub fn print_move_help() {
    std::println!("\n  Enter a cell as <COLUMN><ROW>, e.g. A1 (top left), B2 (centre), C3.");
    std::println!("  Columns: A-C, rows: 1-3. Occupied cells are rejected.");
    std::println!("  Zero-based <row> <col> also works, e.g. 1 1 for the centre.\n");
}
