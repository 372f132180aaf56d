use std::collections::HashMap;

use rand::Rng;

use crate::id_generator::generate_game_id;
use crate::identifiers::GameId;
use crate::session::GameSession;
use crate::settings::GameSettings;
use crate::snapshot::GameSummary;

// Explicit registry of live games. Callers own the store and serialize
// access to it; absent ids come back as None/false and the boundary maps
// them to its own "not found" signal.
#[derive(Default)]
pub struct GameStore {
    games: HashMap<GameId, GameSession>,
}

impl GameStore {
    pub fn new() -> Self {
        Self {
            games: HashMap::new(),
        }
    }

    pub fn create(&mut self, settings: &GameSettings) -> Result<GameId, String> {
        let seed: u64 = rand::rng().random();
        self.create_with_seed(settings, seed)
    }

    pub fn create_with_seed(
        &mut self,
        settings: &GameSettings,
        seed: u64,
    ) -> Result<GameId, String> {
        let game_id = GameId::new(generate_game_id());
        let session = GameSession::create(game_id.clone(), settings, seed)?;
        self.games.insert(game_id.clone(), session);
        crate::log!("Game session created: {} (seed {})", game_id, seed);
        Ok(game_id)
    }

    pub fn get(&self, game_id: &GameId) -> Option<&GameSession> {
        self.games.get(game_id)
    }

    pub fn get_mut(&mut self, game_id: &GameId) -> Option<&mut GameSession> {
        self.games.get_mut(game_id)
    }

    pub fn delete(&mut self, game_id: &GameId) -> bool {
        let removed = self.games.remove(game_id).is_some();
        if removed {
            crate::log!("Game session removed: {}", game_id);
        }
        removed
    }

    pub fn list(&self) -> Vec<GameSummary> {
        self.games.values().map(GameSession::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
