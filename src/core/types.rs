use serde::{Deserialize, Serialize};
use std::fmt;

/// 手番・駒 (Xが先手)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    X,
    O,
}

impl Default for Piece {
    fn default() -> Self {
        Piece::X
    }
}

impl Piece {
    pub fn opponent(self) -> Piece {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Piece::X => write!(f, "X"),
            Piece::O => write!(f, "O"),
        }
    }
}

/// 盤面座標 (0-indexed, 行・列とも 0..=2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 局面の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    XWin,
    OWin,
    Draw,
    InProgress,
}

impl Outcome {
    /// ミニマックス用スコア (X勝ち = +1, O勝ち = -1, 引き分け = 0)
    /// 終局していない局面にスコアはない
    pub fn score(self) -> Option<i32> {
        match self {
            Outcome::XWin => Some(1),
            Outcome::OWin => Some(-1),
            Outcome::Draw => Some(0),
            Outcome::InProgress => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::XWin => write!(f, "X wins!"),
            Outcome::OWin => write!(f, "O wins!"),
            Outcome::Draw => write!(f, "Draw!"),
            Outcome::InProgress => write!(f, "(in progress)"),
        }
    }
}
