pub mod core;
pub mod display;
pub mod game;
pub mod logic;
pub mod player;

#[cfg(test)]
mod logic_tests;

pub use crate::core::{Board, Move, Outcome, Piece, Position};
pub use crate::logic::{apply_move, evaluate, legal_moves};
pub use crate::player::ai::generate_move;
