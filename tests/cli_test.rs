#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use tictactoe::cli::{coord_to_string, parse_coord, render_board};
    use tictactoe::{detect, Board, Marker};

    #[test]
    fn test_parse_valid_coordinates() {
        assert_eq!(parse_coord("A1"), Ok((0, 0)));
        assert_eq!(parse_coord("c3"), Ok((2, 2)));
        assert_eq!(parse_coord(" B2 "), Ok((1, 1)));
        assert_eq!(parse_coord("C1"), Ok((0, 2)));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_coord("").is_err());
        assert!(parse_coord("A").is_err());
        assert!(parse_coord("D1").is_err());
        assert!(parse_coord("A0").is_err());
        assert!(parse_coord("A4").is_err());
        assert!(parse_coord("1A").is_err());
        assert!(parse_coord("Ax").is_err());
    }

    #[test]
    fn test_parse_zero_based_row_col() {
        assert_eq!(parse_coord("1 1"), Ok((1, 1)));
        assert_eq!(parse_coord("0 2"), Ok((0, 2)));
        assert_eq!(parse_coord(" 2   0 "), Ok((2, 0)));
        assert_eq!(parse_coord("2,1"), Ok((2, 1)));
        assert!(parse_coord("3 0").is_err());
        assert!(parse_coord("0 3").is_err());
        assert!(parse_coord("1").is_err());
        assert!(parse_coord("1 1 1").is_err());
        assert!(parse_coord("1 B").is_err());
    }

    #[test]
    fn test_labels_round_trip_through_parser() {
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(parse_coord(&coord_to_string(r, c)), Ok((r, c)));
            }
        }
        assert_eq!(coord_to_string(5, 0), "(5, 0)");
    }

    #[test]
    fn test_render_highlights_winning_line() {
        let mut board = Board::new();
        for c in 0..3 {
            board.place(Marker::Nought, 1, c).unwrap();
        }
        board.place(Marker::Cross, 0, 0).unwrap();
        let line = detect(&board, Marker::Nought, 1, 2).unwrap().unwrap();

        let plain = render_board(&board.snapshot(), None);
        assert_eq!(plain, "     A  B  C \n  1  X  .  . \n  2  O  O  O \n  3  .  .  . \n");

        let marked = render_board(&board.snapshot(), Some(&line));
        assert!(marked.contains("  2 [O][O][O]\n"));
        assert!(marked.contains("  1  X  .  . \n"));
    }
}
