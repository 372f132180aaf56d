use gomoku_engine::{Mark, Position, SessionRng, bot_controller};

use crate::game_state::{GameMode, GomokuGameState};
use crate::identifiers::GameId;
use crate::settings::GameSettings;
use crate::snapshot::{BoardSnapshot, GameStateSnapshot, GameSummary};

// One game: a board, the bot that searches it, and the session's own
// seeded randomness. The engine only ever sees the board through short
// exclusive borrows, so two sessions can run side by side.
pub struct GameSession {
    game_id: GameId,
    state: GomokuGameState,
    mode: GameMode,
    ai_depth: usize,
    rng: SessionRng,
}

impl GameSession {
    pub fn create(game_id: GameId, settings: &GameSettings, seed: u64) -> Result<Self, String> {
        settings.validate()?;

        Ok(Self {
            game_id,
            state: GomokuGameState::new(settings.board_size),
            mode: settings.mode,
            ai_depth: settings.ai_depth,
            rng: SessionRng::new(seed),
        })
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn state(&self) -> &GomokuGameState {
        &self.state
    }

    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<(), String> {
        self.state.place_mark(row, col)
    }

    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::Ai
            && !self.state.is_over()
            && self.state.current_mark() == Mark::O
    }

    pub fn make_ai_move(&mut self, depth_override: Option<usize>) -> Result<Position, String> {
        if self.state.is_over() {
            return Err("Game is already over".to_string());
        }

        let depth = depth_override.unwrap_or(self.ai_depth);
        let player = self.state.current_mark();
        let Some(pos) =
            bot_controller::make_move(self.state.board_mut(), player, depth, &mut self.rng)
        else {
            return Err("AI could not make a move".to_string());
        };

        self.state.finish_turn(pos.row, pos.col);
        Ok(pos)
    }

    pub fn reset(&mut self, mode_override: Option<GameMode>) {
        self.state.reset();
        if let Some(mode) = mode_override {
            self.mode = mode;
        }
    }

    pub fn snapshot(&self) -> GameStateSnapshot {
        GameStateSnapshot {
            game_id: self.game_id.to_string(),
            board: BoardSnapshot::from_board(self.state.board()),
            current_player: self.state.current_mark().to_cell_value(),
            game_over: self.state.is_over(),
            winner: self.state.winner().map(Mark::to_cell_value),
        }
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            game_id: self.game_id.to_string(),
            mode: self.mode,
            game_over: self.state.is_over(),
            winner: self.state.winner().map(Mark::to_cell_value),
        }
    }
}
