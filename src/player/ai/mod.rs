pub mod config;
pub mod minimax;
pub mod random;

pub use config::{AiKind, FirstPlayer, GameConfig};
pub use minimax::{generate_move, MinimaxAI};
pub use random::RandomAI;
