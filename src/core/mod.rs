pub mod board;
pub mod r#move;
pub mod types;

pub use board::{Board, BOARD_SIZE};
pub use r#move::Move;
pub use types::{Outcome, Piece, Position};
