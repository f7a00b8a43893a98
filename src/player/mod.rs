pub mod ai;
pub mod controller;
pub mod tui;

#[allow(unused_imports)]
pub use ai::{MinimaxAI, RandomAI};
pub use controller::PlayerController;
pub use tui::TuiController;
