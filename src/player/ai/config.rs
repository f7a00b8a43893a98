use serde::{Deserialize, Serialize};

/// 対局設定 (起動時に読み込む)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// 先手(X)を指すのは誰か
    pub first_player: FirstPlayer,
    /// コンピュータ側のAI
    pub ai: AiKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Human,
    Computer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiKind {
    Minimax,
    Random,
}

impl GameConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = "game_config.json";
        let config_str = std::fs::read_to_string(config_path)?;
        let config: GameConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| Self::default())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            first_player: FirstPlayer::Human,
            ai: AiKind::Minimax,
        }
    }
}
