use crate::core::{Board, Move, Outcome, Piece};
use crate::logic::{apply_move, evaluate, legal_moves};
use crate::player::PlayerController;

/// 候補局面 (仮の盤面とそれを生んだ一手の組、1回の探索内でのみ使う)
struct Candidate {
    board: Board,
    mv: Move,
}

/// 全候補を生成 (行優先順: (0,0), (0,1), ... (2,2))
fn next_boards_with_move(board: &Board, side: Piece) -> Vec<Candidate> {
    legal_moves(board, side)
        .into_iter()
        .map(|mv| Candidate {
            board: apply_move(board, &mv),
            mv,
        })
        .collect()
}

/// ミニマックス探索 (枝刈りなし、全読み)
/// X はスコア最大化、O は最小化。同点なら行優先順で最初の候補を選ぶ。
///
/// 終局済みの盤面で呼ぶのは呼び出し側のバグ (panic する)。
pub fn generate_move(board: &Board, side: Piece) -> (Move, i32) {
    assert_eq!(
        evaluate(board),
        Outcome::InProgress,
        "generate_move called on a terminal board"
    );

    let candidates = next_boards_with_move(board, side);

    // 各候補のスコアを決める。終局ならその値、続行なら相手番で再帰
    // (再帰が返す手は捨てて、スコアだけ伝播させる)
    let mut scored: Vec<(Move, i32)> = Vec::with_capacity(candidates.len());
    for candidate in &candidates {
        let score = match evaluate(&candidate.board).score() {
            Some(score) => score,
            None => generate_move(&candidate.board, side.opponent()).1,
        };
        scored.push((candidate.mv, score));
    }

    let mut best = scored[0];
    for &(mv, score) in &scored[1..] {
        let better = match side {
            Piece::X => score > best.1,
            Piece::O => score < best.1,
        };
        if better {
            best = (mv, score);
        }
    }

    best
}

pub struct MinimaxAI {
    pub piece: Piece,
    pub name: String,
}

impl MinimaxAI {
    pub fn new(piece: Piece, name: &str) -> Self {
        Self {
            piece,
            name: name.to_string(),
        }
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board, moves: &[Move]) -> Option<Move> {
        if moves.is_empty() {
            return None;
        }

        let (mv, _score) = generate_move(board, self.piece);
        Some(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_local(&self) -> bool {
        true
    }
}
