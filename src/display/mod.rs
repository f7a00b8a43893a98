use crate::core::{Board, Move, Piece, Position, BOARD_SIZE};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::stdout;

pub struct DisplayState {
    pub cursor: Position,
    pub highlights: Vec<Position>,
    pub status_msg: Option<String>,
    pub last_move: Option<Move>,
    pub show_cursor: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: Position::default(),
            highlights: Vec::new(),
            status_msg: None,
            last_move: None,
            show_cursor: true,
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn render_board(board: &Board, state: &DisplayState) {
    let mut out = stdout();

    // 画面クリア（スクロール防止）
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .unwrap();

    print!("=== Tic Tac Toe (perfect play) ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    // 列ラベル (0-indexed)
    print!("    ");
    for col in 0..BOARD_SIZE {
        print!("  {} ", col);
    }
    print!("\r\n");

    print!("   +{}+\r\n", "----".repeat(BOARD_SIZE));

    for row in 0..BOARD_SIZE {
        print!("{:2} |", row);
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            let piece = board.get_piece(pos);

            let is_cursor = state.show_cursor && state.cursor == pos;
            let is_highlight = state.highlights.contains(&pos);
            let is_last_move = state.last_move.map(|mv| mv.pos == pos).unwrap_or(false);

            let char_str = match piece {
                Some(p) => p.to_string(),
                None => ".".to_string(),
            };

            let (prefix, suffix) = if is_cursor {
                ("[", "]")
            } else if is_last_move {
                ("{", "}")
            } else if is_highlight {
                ("(", ")")
            } else {
                (" ", " ")
            };

            let cell_text = format!("{} {}{}", prefix, char_str, suffix);

            if is_cursor {
                print!("{}", cell_text.yellow());
            } else if is_last_move {
                print!("{}", cell_text.red());
            } else if is_highlight {
                print!("{}", cell_text.green());
            } else if let Some(p) = piece {
                if p == Piece::X {
                    print!("{}", cell_text.cyan());
                } else {
                    print!("{}", cell_text.magenta());
                }
            } else {
                print!("{}", cell_text);
            }
        }
        print!("|\r\n");

        if row < BOARD_SIZE - 1 {
            print!("   |");
            for _ in 0..BOARD_SIZE {
                print!("    ");
            }
            print!("|\r\n");
        }
    }
    print!("   +{}+\r\n", "----".repeat(BOARD_SIZE));
}
