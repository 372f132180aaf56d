use gomoku_engine::Board;
use serde::Serialize;

use crate::game_state::GameMode;

// Wire-facing views of the game. Cell values are 0 (empty), 1 (X) and
// 2 (O); the embedding application picks the actual encoding.

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub grid: Vec<Vec<u8>>,
    pub size: usize,
    pub last_move: Option<(usize, usize)>,
}

impl BoardSnapshot {
    pub fn from_board(board: &Board) -> Self {
        let grid = board
            .grid()
            .iter()
            .map(|row| row.iter().map(|mark| mark.to_cell_value()).collect())
            .collect();

        Self {
            grid,
            size: board.size(),
            last_move: board.last_move().map(|pos| (pos.row, pos.col)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateSnapshot {
    pub game_id: String,
    pub board: BoardSnapshot,
    pub current_player: u8,
    pub game_over: bool,
    pub winner: Option<u8>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub game_id: String,
    pub mode: GameMode,
    pub game_over: bool,
    pub winner: Option<u8>,
}
