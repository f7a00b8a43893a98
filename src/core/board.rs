use super::r#move::Move;
use super::types::{Piece, Position};
use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;

/// 盤面
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    /// マス目 (None = 空き)
    pub cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    pub last_move: Option<Move>,
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            last_move: None,
        }
    }

    pub fn get_piece(&self, pos: Position) -> Option<Piece> {
        self.cells[pos.row][pos.col]
    }

    /// 空きマスへの配置のみ (上書きは呼び出し側のバグ)
    pub fn place_piece(&mut self, pos: Position, piece: Piece) {
        debug_assert!(self.cells[pos.row][pos.col].is_none());
        self.cells[pos.row][pos.col] = Some(piece);
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// 空きマス一覧 (行優先順: (0,0), (0,1), ... (2,2))
    pub fn empty_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.cells[row][col].is_none() {
                    positions.push(Position::new(row, col));
                }
            }
        }
        positions
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
