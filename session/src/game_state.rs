use gomoku_engine::{Board, Mark};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    TwoPlayer,
    Ai,
}

#[derive(Debug)]
pub struct GomokuGameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
}

impl GomokuGameState {
    pub fn new(board_size: usize) -> Self {
        Self {
            board: Board::new(board_size),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if !self.board.place_mark(row, col, self.current_mark) {
            return Err("Invalid move".to_string());
        }

        self.finish_turn(row, col);
        Ok(())
    }

    // Win/draw/turn bookkeeping shared by human and bot moves; (row, col)
    // is the cell that was just committed.
    pub(crate) fn finish_turn(&mut self, row: usize, col: usize) {
        if self.board.check_win(row, col) {
            self.status = match self.current_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
            return;
        }

        self.switch_turn();
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
    }
}
