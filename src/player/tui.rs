use crate::core::{Board, Move, Piece, BOARD_SIZE};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

pub struct TuiController {
    piece: Piece,
    name: String,
}

impl TuiController {
    pub fn new(piece: Piece, name: &str) -> Self {
        Self {
            piece,
            name: name.to_string(),
        }
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board, legal_moves_list: &[Move]) -> Option<Move> {
        let mut state = DisplayState::default();
        state.last_move = board.last_move;
        state.status_msg = Some(format!("{}'s turn ({})", self.name, self.piece));
        // 空きマスをハイライト
        state.highlights = board.empty_positions();

        loop {
            // 描画
            render_board(board, &state);
            print!("[Arrows]: Move | [Enter]: Place | [q]: Resign\r\n");

            if event::poll(Duration::from_millis(100)).unwrap() {
                if let Event::Key(KeyEvent { code, .. }) = event::read().unwrap() {
                    match code {
                        KeyCode::Char('q') => return None,
                        KeyCode::Up => {
                            if state.cursor.row > 0 {
                                state.cursor.row -= 1;
                            }
                        }
                        KeyCode::Down => {
                            if state.cursor.row < BOARD_SIZE - 1 {
                                state.cursor.row += 1;
                            }
                        }
                        KeyCode::Left => {
                            if state.cursor.col > 0 {
                                state.cursor.col -= 1;
                            }
                        }
                        KeyCode::Right => {
                            if state.cursor.col < BOARD_SIZE - 1 {
                                state.cursor.col += 1;
                            }
                        }
                        KeyCode::Enter | KeyCode::Char(' ') => {
                            let mv = Move {
                                pos: state.cursor,
                                piece: self.piece,
                            };
                            // 埋まっているマスは拒否して選び直し
                            if legal_moves_list.contains(&mv) {
                                return Some(mv);
                            }
                            state.status_msg =
                                Some(format!("{} is not empty, pick another cell", state.cursor));
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    fn is_local(&self) -> bool {
        true
    }
}
