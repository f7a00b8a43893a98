use crossterm::{execute, terminal};
use std::io;
use tictactoe_ai::core::Piece;
use tictactoe_ai::game::Game;
use tictactoe_ai::player::ai::{AiKind, FirstPlayer, GameConfig, MinimaxAI, RandomAI};
use tictactoe_ai::player::{PlayerController, TuiController};

fn main() -> anyhow::Result<()> {
    // ターミナル初期化
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;

    let res = run();

    // ターミナル復帰
    execute!(io::stdout(), terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    res
}

fn run() -> anyhow::Result<()> {
    use crossterm::event::{self, Event, KeyCode};
    use std::time::Duration;

    let config = GameConfig::load_or_default();

    print!("=== Tic Tac Toe (perfect play) ===\r\n");

    print!("\r\nSelect mode (X always goes first):\r\n");
    print!("1. Human first (Human = X)\r\n");
    print!("2. Computer first (Computer = X)\r\n");
    print!("3. AI vs AI demo\r\n");
    print!("[Enter]: use game_config.json | [q]: Quit\r\n");

    let first_player = loop {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('1') => break Some(FirstPlayer::Human),
                    KeyCode::Char('2') => break Some(FirstPlayer::Computer),
                    KeyCode::Char('3') => break None,
                    KeyCode::Enter => break Some(config.first_player),
                    KeyCode::Char('q') => return Ok(()),
                    _ => {}
                }
            }
        }
    };

    let (px, po): (Box<dyn PlayerController>, Box<dyn PlayerController>) = match first_player {
        Some(FirstPlayer::Human) => (
            Box::new(TuiController::new(Piece::X, "Human")),
            computer_controller(Piece::O, &config),
        ),
        Some(FirstPlayer::Computer) => (
            computer_controller(Piece::X, &config),
            Box::new(TuiController::new(Piece::O, "Human")),
        ),
        None => (
            Box::new(MinimaxAI::new(Piece::X, "Minimax AI")),
            Box::new(RandomAI::new(Piece::O, "Random AI")),
        ),
    };

    let mut game = Game::new();
    let result = game.play(px.as_ref(), po.as_ref());
    print!("Game over: {}\r\n", result);

    Ok(())
}

fn computer_controller(piece: Piece, config: &GameConfig) -> Box<dyn PlayerController> {
    match config.ai {
        AiKind::Minimax => Box::new(MinimaxAI::new(piece, "Minimax AI")),
        AiKind::Random => Box::new(RandomAI::new(piece, "Random AI")),
    }
}
