use super::types::{Piece, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 一手 (どの駒をどのマスに置いたか)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub pos: Position,
    pub piece: Piece,
}

impl Move {
    pub fn new(row: usize, col: usize, piece: Piece) -> Self {
        Move {
            pos: Position::new(row, col),
            piece,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at {}", self.piece, self.pos)
    }
}
