#[cfg(test)]
mod tests {
    use crate::core::{Board, Move, Outcome, Piece, Position};
    use crate::logic::{apply_move, evaluate, legal_moves, WIN_LINES};

    #[test]
    fn test_empty_board_is_in_progress() {
        let board = Board::new();
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn test_all_eight_win_lines_detected() {
        // Each of the 8 lines, filled with a single piece while the rest
        // of the board stays empty, must report the matching winner.
        for line in WIN_LINES.iter() {
            for piece in [Piece::X, Piece::O] {
                let mut board = Board::new();
                for &pos in line {
                    board.place_piece(pos, piece);
                }

                let expected = match piece {
                    Piece::X => Outcome::XWin,
                    Piece::O => Outcome::OWin,
                };
                assert_eq!(evaluate(&board), expected, "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_top_row_of_x_is_x_win() {
        let mut board = Board::new();
        board.place_piece(Position::new(0, 0), Piece::X);
        board.place_piece(Position::new(0, 1), Piece::X);
        board.place_piece(Position::new(0, 2), Piece::X);
        assert_eq!(evaluate(&board), Outcome::XWin);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        let mut board = Board::new();
        let layout = [
            (Piece::X, 0, 0),
            (Piece::O, 0, 1),
            (Piece::X, 0, 2),
            (Piece::X, 1, 0),
            (Piece::O, 1, 1),
            (Piece::O, 1, 2),
            (Piece::O, 2, 0),
            (Piece::X, 2, 1),
            (Piece::X, 2, 2),
        ];
        for (piece, row, col) in layout {
            board.place_piece(Position::new(row, col), piece);
        }
        assert!(board.is_full());
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_partial_board_without_line_is_in_progress() {
        let mut board = Board::new();
        board.place_piece(Position::new(0, 0), Piece::X);
        board.place_piece(Position::new(1, 1), Piece::O);
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn test_legal_moves_are_row_major_and_empty_only() {
        let mut board = Board::new();
        board.place_piece(Position::new(0, 1), Piece::X);
        board.place_piece(Position::new(2, 0), Piece::O);

        let moves = legal_moves(&board, Piece::X);
        assert_eq!(moves.len(), 7);

        let expected: Vec<Position> = [
            (0, 0),
            (0, 2),
            (1, 0),
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 2),
        ]
        .iter()
        .map(|&(row, col)| Position::new(row, col))
        .collect();

        for (mv, pos) in moves.iter().zip(expected.iter()) {
            assert_eq!(mv.pos, *pos);
            assert_eq!(mv.piece, Piece::X);
            assert_eq!(board.get_piece(mv.pos), None);
        }
    }

    #[test]
    fn test_apply_move_does_not_mutate_input() {
        let board = Board::new();
        let mv = Move::new(1, 1, Piece::X);
        let next = apply_move(&board, &mv);

        assert_eq!(board.get_piece(Position::new(1, 1)), None);
        assert_eq!(next.get_piece(Position::new(1, 1)), Some(Piece::X));
        assert_eq!(next.last_move, Some(mv));
    }

    #[test]
    fn test_outcome_scores() {
        assert_eq!(Outcome::XWin.score(), Some(1));
        assert_eq!(Outcome::OWin.score(), Some(-1));
        assert_eq!(Outcome::Draw.score(), Some(0));
        assert_eq!(Outcome::InProgress.score(), None);
    }
}
