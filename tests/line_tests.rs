use tictactoe::{
    detect, Board, Cell, GameError, LineKind, Marker, ValidationError,
};

fn board_with(cells: &[(Marker, usize, usize)]) -> Board {
    let mut board = Board::new();
    for &(m, r, c) in cells {
        board.place(m, r, c).unwrap();
    }
    board
}

use Marker::{Cross as X, Nought as O};

#[test]
fn test_row_completion() {
    let board = board_with(&[(X, 0, 0), (O, 1, 1), (X, 0, 1), (O, 2, 2), (X, 0, 2)]);
    let line = detect(&board, X, 0, 2).unwrap().unwrap();
    assert_eq!(line.kind(), LineKind::Row(0));
    assert_eq!(line.cells(), &[(0, 0), (0, 1), (0, 2)]);
    assert_eq!(line.to_string(), "[[0, 0], [0, 1], [0, 2]]");
}

#[test]
fn test_column_completion() {
    let board = board_with(&[(O, 0, 1), (O, 1, 1), (O, 2, 1), (X, 0, 0)]);
    let line = detect(&board, O, 1, 1).unwrap().unwrap();
    assert_eq!(line.kind(), LineKind::Column(1));
    assert_eq!(line.cells(), &[(0, 1), (1, 1), (2, 1)]);
}

#[test]
fn test_main_diagonal() {
    let board = board_with(&[(X, 0, 0), (X, 1, 1), (X, 2, 2)]);
    let line = detect(&board, X, 2, 2).unwrap().unwrap();
    assert_eq!(line.kind(), LineKind::MainDiagonal);
}

#[test]
fn test_anti_diagonal() {
    let board = board_with(&[(O, 0, 2), (O, 1, 1), (O, 2, 0)]);
    let line = detect(&board, O, 0, 2).unwrap().unwrap();
    assert_eq!(line.kind(), LineKind::AntiDiagonal);
    assert_eq!(line.cells(), &[(0, 2), (1, 1), (2, 0)]);
}

#[test]
fn test_only_lines_through_last_cell_are_examined() {
    // Row 0 is complete, but the last move at (2, 2) does not touch it.
    let board = board_with(&[(X, 0, 0), (X, 0, 1), (X, 0, 2), (X, 2, 2)]);
    assert_eq!(detect(&board, X, 2, 2).unwrap(), None);
    assert!(detect(&board, X, 0, 1).unwrap().is_some());
}

#[test]
fn test_other_marker_does_not_count() {
    let board = board_with(&[(X, 1, 0), (X, 1, 1), (O, 1, 2)]);
    assert_eq!(detect(&board, X, 1, 1).unwrap(), None);
    assert_eq!(detect(&board, O, 1, 2).unwrap(), None);
}

#[test]
fn test_row_reported_before_column() {
    let board = board_with(&[
        (X, 0, 0),
        (X, 0, 1),
        (X, 0, 2),
        (X, 1, 0),
        (X, 2, 0),
    ]);
    let line = detect(&board, X, 0, 0).unwrap().unwrap();
    assert_eq!(line.kind(), LineKind::Row(0));
}

#[test]
fn test_column_reported_before_diagonal() {
    let board = board_with(&[(O, 0, 0), (O, 1, 0), (O, 2, 0), (O, 1, 1), (O, 2, 2)]);
    let line = detect(&board, O, 0, 0).unwrap().unwrap();
    assert_eq!(line.kind(), LineKind::Column(0));
}

#[test]
fn test_centre_prefers_main_diagonal() {
    let board = board_with(&[
        (X, 0, 0),
        (X, 2, 2),
        (X, 0, 2),
        (X, 2, 0),
        (X, 1, 1),
    ]);
    let line = detect(&board, X, 1, 1).unwrap().unwrap();
    assert_eq!(line.kind(), LineKind::MainDiagonal);
}

#[test]
fn test_out_of_range_coordinates() {
    let board = Board::new();
    assert_eq!(
        detect(&board, X, 0, 3).unwrap_err(),
        GameError::Validation(ValidationError::OutOfRange { row: 0, col: 3 })
    );
}

#[test]
fn test_empty_cell_is_not_a_marker() {
    assert_eq!(Marker::try_from(Cell::Cross), Ok(Marker::Cross));
    assert_eq!(Marker::try_from(Cell::Nought), Ok(Marker::Nought));
    assert_eq!(Marker::try_from(Cell::Empty), Err(ValidationError::EmptyMarker));
}
