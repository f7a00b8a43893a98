use crate::core::{Board, Move, Outcome, Piece, Position};

/// 勝利ライン (横3, 縦3, 斜め2)
pub const WIN_LINES: [[Position; 3]; 8] = [
    [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
    ],
    [
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
    ],
    [
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ],
    [
        Position { row: 0, col: 0 },
        Position { row: 1, col: 0 },
        Position { row: 2, col: 0 },
    ],
    [
        Position { row: 0, col: 1 },
        Position { row: 1, col: 1 },
        Position { row: 2, col: 1 },
    ],
    [
        Position { row: 0, col: 2 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 2 },
    ],
    [
        Position { row: 0, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 2, col: 2 },
    ],
    [
        Position { row: 0, col: 2 },
        Position { row: 1, col: 1 },
        Position { row: 2, col: 0 },
    ],
];

/// 局面評価
/// 空きマスは駒と一致しないので、空ラインが勝ちと判定されることはない
pub fn evaluate(board: &Board) -> Outcome {
    for line in WIN_LINES.iter() {
        let first = board.get_piece(line[0]);
        if first.is_some()
            && first == board.get_piece(line[1])
            && first == board.get_piece(line[2])
        {
            return match first {
                Some(Piece::X) => Outcome::XWin,
                Some(Piece::O) => Outcome::OWin,
                None => unreachable!(),
            };
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// 合法手生成 (行優先順)
pub fn legal_moves(board: &Board, piece: Piece) -> Vec<Move> {
    board
        .empty_positions()
        .into_iter()
        .map(|pos| Move { pos, piece })
        .collect()
}

/// 移動適用 (元の盤面は変更しない)
pub fn apply_move(board: &Board, mv: &Move) -> Board {
    let mut next = board.clone();
    next.place_piece(mv.pos, mv.piece);
    next.last_move = Some(*mv);
    next
}
