use crate::core::{Board, Move};

/// プレイヤー操作のtrait
pub trait PlayerController {
    /// None = 投了 (人間が q を押した場合など)
    fn choose_move(&self, board: &Board, legal_moves: &[Move]) -> Option<Move>;
    fn name(&self) -> &str;
    fn is_local(&self) -> bool;
}
