use crate::core::{Board, Outcome, Piece};
use crate::logic::{apply_move, evaluate, legal_moves};
use crate::player::PlayerController;

pub struct Game {
    pub board: Board,
    /// 手番 (Xが先手)
    pub current_piece: Piece,
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            current_piece: Piece::X,
        }
    }

    /// 対局ループ。終局まで回して結果を返す
    /// (px がXを、po がOを担当する)
    pub fn play(&mut self, px: &dyn PlayerController, po: &dyn PlayerController) -> Outcome {
        loop {
            let controller = match self.current_piece {
                Piece::X => px,
                Piece::O => po,
            };

            let mut state = crate::display::DisplayState::default();
            state.last_move = self.board.last_move;
            state.status_msg = Some(format!(
                "{}'s turn ({})",
                controller.name(),
                self.current_piece
            ));
            crate::display::render_board(&self.board, &state);

            // 終局判定は必ず着手の前
            let result = evaluate(&self.board);
            if result.is_terminal() {
                state.show_cursor = false;
                state.status_msg = Some(format!("{}", result));
                crate::display::render_board(&self.board, &state);
                std::thread::sleep(std::time::Duration::from_secs(5));
                return result;
            }

            let moves = legal_moves(&self.board, self.current_piece);

            if controller.name().contains("AI") {
                state.status_msg = Some(format!(
                    "{} ({}) is thinking...",
                    controller.name(),
                    self.current_piece
                ));
                crate::display::render_board(&self.board, &state);

                // 思考ウェイト中に終了判定
                let timeout = std::time::Duration::from_millis(400);
                if crossterm::event::poll(timeout).unwrap_or(false) {
                    if let Ok(crossterm::event::Event::Key(key)) = crossterm::event::read() {
                        if key.code == crossterm::event::KeyCode::Char('q') {
                            println!("Interrupted by user.");
                            return Outcome::InProgress;
                        }
                    }
                }
            }

            if let Some(mv) = controller.choose_move(&self.board, &moves) {
                self.board = apply_move(&self.board, &mv);
                self.current_piece = self.current_piece.opponent();
            } else {
                // 投了
                let winner = match self.current_piece {
                    Piece::X => Outcome::OWin,
                    Piece::O => Outcome::XWin,
                };
                println!("{} resigned. {}\r", controller.name(), winner);
                return winner;
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
