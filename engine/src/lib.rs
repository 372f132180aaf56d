pub mod board;
pub mod bot_controller;
pub mod session_rng;
pub mod types;

pub use board::{Board, WIN_LENGTH};
pub use bot_controller::{calculate_best_move, make_move};
pub use session_rng::SessionRng;
pub use types::{Mark, Position};
