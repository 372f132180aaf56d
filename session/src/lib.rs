pub mod game_state;
pub mod id_generator;
pub mod identifiers;
pub mod logger;
pub mod session;
pub mod settings;
pub mod snapshot;
pub mod store;
mod validate;

pub use game_state::{GameMode, GameStatus, GomokuGameState};
pub use gomoku_engine::{Board, Mark, Position, SessionRng, WIN_LENGTH};
pub use identifiers::GameId;
pub use session::GameSession;
pub use settings::GameSettings;
pub use snapshot::{BoardSnapshot, GameStateSnapshot, GameSummary};
pub use store::GameStore;
