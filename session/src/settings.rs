use serde::{Deserialize, Serialize};

use crate::game_state::GameMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameSettings {
    pub board_size: usize,
    pub mode: GameMode,
    pub ai_depth: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_size: 50,
            mode: GameMode::TwoPlayer,
            ai_depth: 2,
        }
    }
}
