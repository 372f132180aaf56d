use gomoku_engine::WIN_LENGTH;

use crate::settings::GameSettings;

const MAX_BOARD_SIZE: usize = 100;
const MAX_AI_DEPTH: usize = 8;

impl GameSettings {
    // Rejects anything the engine assumes away: the win length must fit on
    // the board and the opening candidate block needs at least 5 columns.
    pub fn validate(&self) -> Result<(), String> {
        if self.board_size < WIN_LENGTH || self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "Board size must be between {} and {}",
                WIN_LENGTH, MAX_BOARD_SIZE
            ));
        }
        if self.ai_depth < 1 || self.ai_depth > MAX_AI_DEPTH {
            return Err(format!("AI depth must be between 1 and {}", MAX_AI_DEPTH));
        }
        Ok(())
    }
}
