use crate::types::{Mark, Position};

pub const WIN_LENGTH: usize = 5;

const DIRECTION_PAIRS: [[(isize, isize); 2]; 4] = [
    [(0, 1), (0, -1)],
    [(1, 0), (-1, 0)],
    [(1, 1), (-1, -1)],
    [(1, -1), (-1, 1)],
];

#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    grid: Vec<Vec<Mark>>,
    last_move: Option<Position>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            grid: vec![vec![Mark::Empty; size]; size],
            last_move: None,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn grid(&self) -> &[Vec<Mark>] {
        &self.grid
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.grid[row][col])
    }

    pub fn place_mark(&mut self, row: usize, col: usize, player: Mark) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        if self.grid[row][col] != Mark::Empty {
            return false;
        }

        self.grid[row][col] = player;
        self.last_move = Some(Position::new(row, col));
        true
    }

    // Direct cell write used by the search to try moves without touching
    // last_move bookkeeping. Callers must restore the cell themselves.
    pub(crate) fn set_cell(&mut self, row: usize, col: usize, mark: Mark) {
        self.grid[row][col] = mark;
    }

    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let player = match self.get(row, col) {
            Some(mark) if mark != Mark::Empty => mark,
            _ => return false,
        };

        for dir_pair in DIRECTION_PAIRS {
            let mut count = 1;

            for (dr, dc) in dir_pair {
                let mut r = row as isize;
                let mut c = col as isize;
                for _ in 0..WIN_LENGTH - 1 {
                    r += dr;
                    c += dc;
                    if r < 0 || c < 0 || r >= self.size as isize || c >= self.size as isize {
                        break;
                    }
                    if self.grid[r as usize][c as usize] != player {
                        break;
                    }
                    count += 1;
                }
            }

            if count >= WIN_LENGTH {
                return true;
            }
        }

        false
    }

    pub fn is_full(&self) -> bool {
        self.grid
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn reset(&mut self) {
        for row in self.grid.iter_mut() {
            row.fill(Mark::Empty);
        }
        self.last_move = None;
    }

    pub fn get_empty_cells(&self) -> Vec<Position> {
        let mut cells = Vec::new();
        for (row, cells_row) in self.grid.iter().enumerate() {
            for (col, &cell) in cells_row.iter().enumerate() {
                if cell == Mark::Empty {
                    cells.push(Position::new(row, col));
                }
            }
        }
        cells
    }

    pub fn get_candidate_moves(&self) -> Vec<Position> {
        if !self.has_any_mark() {
            return self.center_block();
        }

        let mut candidates = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.grid[row][col] == Mark::Empty && self.near_occupied(row, col) {
                    candidates.push(Position::new(row, col));
                }
            }
        }

        if candidates.is_empty() {
            return self.get_empty_cells().into_iter().take(10).collect();
        }
        candidates
    }

    fn has_any_mark(&self) -> bool {
        self.grid
            .iter()
            .any(|row| row.iter().any(|&cell| cell != Mark::Empty))
    }

    // Opening moves only make sense near the middle of the board.
    fn center_block(&self) -> Vec<Position> {
        if self.size == 0 {
            return Vec::new();
        }
        let center = self.size / 2;
        let row_start = center.saturating_sub(2);
        let row_end = (center + 2).min(self.size.saturating_sub(1));

        let mut cells = Vec::new();
        for row in row_start..=row_end {
            for col in row_start..=row_end {
                cells.push(Position::new(row, col));
            }
        }
        cells
    }

    fn near_occupied(&self, row: usize, col: usize) -> bool {
        let row_lo = row.saturating_sub(2);
        let row_hi = (row + 2).min(self.size - 1);
        let col_lo = col.saturating_sub(2);
        let col_hi = (col + 2).min(self.size - 1);

        for r in row_lo..=row_hi {
            for c in col_lo..=col_hi {
                if (r, c) != (row, col) && self.grid[r][c] != Mark::Empty {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_run(board: &mut Board, cells: &[(usize, usize)], mark: Mark) {
        for &(row, col) in cells {
            assert!(board.place_mark(row, col, mark));
        }
    }

    #[test]
    fn test_place_mark_sets_cell_and_last_move() {
        let mut board = Board::new(7);
        assert!(board.place_mark(3, 4, Mark::X));
        assert_eq!(board.get(3, 4), Some(Mark::X));
        assert_eq!(board.last_move(), Some(Position::new(3, 4)));
    }

    #[test]
    fn test_place_mark_rejects_occupied_cell() {
        let mut board = Board::new(7);
        assert!(board.place_mark(2, 2, Mark::X));
        let grid_before = board.grid().to_vec();
        let last_before = board.last_move();

        assert!(!board.place_mark(2, 2, Mark::O));
        assert_eq!(board.grid(), &grid_before[..]);
        assert_eq!(board.last_move(), last_before);
    }

    #[test]
    fn test_place_mark_rejects_out_of_bounds() {
        let mut board = Board::new(7);
        assert!(!board.place_mark(7, 0, Mark::X));
        assert!(!board.place_mark(0, 7, Mark::X));
        assert!(board.last_move().is_none());
        assert!(board.get_empty_cells().len() == 49);
    }

    #[test]
    fn test_check_win_false_on_empty_board() {
        let board = Board::new(7);
        assert!(!board.check_win(0, 0));
        assert!(!board.check_win(3, 3));
        assert!(!board.check_win(10, 10));
    }

    #[test]
    fn test_check_win_horizontal() {
        let mut board = Board::new(10);
        let run = [(4, 2), (4, 3), (4, 4), (4, 5), (4, 6)];
        place_run(&mut board, &run, Mark::X);
        for (row, col) in run {
            assert!(board.check_win(row, col));
        }
        // An empty cell next to the run is not a win.
        assert!(!board.check_win(5, 4));
    }

    #[test]
    fn test_check_win_vertical() {
        let mut board = Board::new(10);
        let run = [(1, 7), (2, 7), (3, 7), (4, 7), (5, 7)];
        place_run(&mut board, &run, Mark::O);
        for (row, col) in run {
            assert!(board.check_win(row, col));
        }
    }

    #[test]
    fn test_check_win_diagonal_down_right() {
        let mut board = Board::new(10);
        let run = [(2, 2), (3, 3), (4, 4), (5, 5), (6, 6)];
        place_run(&mut board, &run, Mark::X);
        for (row, col) in run {
            assert!(board.check_win(row, col));
        }
    }

    #[test]
    fn test_check_win_diagonal_down_left() {
        let mut board = Board::new(10);
        let run = [(2, 6), (3, 5), (4, 4), (5, 3), (6, 2)];
        place_run(&mut board, &run, Mark::O);
        for (row, col) in run {
            assert!(board.check_win(row, col));
        }
    }

    #[test]
    fn test_check_win_needs_five() {
        let mut board = Board::new(10);
        place_run(&mut board, &[(4, 2), (4, 3), (4, 4), (4, 5)], Mark::X);
        assert!(!board.check_win(4, 2));
        assert!(!board.check_win(4, 5));
    }

    #[test]
    fn test_check_win_broken_by_opponent() {
        let mut board = Board::new(10);
        place_run(&mut board, &[(4, 2), (4, 3), (4, 5), (4, 6)], Mark::X);
        assert!(board.place_mark(4, 4, Mark::O));
        assert!(board.place_mark(4, 7, Mark::X));
        assert!(!board.check_win(4, 7));
    }

    #[test]
    fn test_check_win_full_row_on_minimal_board() {
        let mut board = Board::new(5);
        place_run(&mut board, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], Mark::X);
        assert!(board.check_win(0, 4));
    }

    #[test]
    fn test_full_board_without_winner_is_a_draw() {
        let mut board = Board::new(5);
        let even_row = [Mark::X, Mark::X, Mark::O, Mark::X, Mark::X];
        let odd_row = [Mark::O, Mark::O, Mark::X, Mark::O, Mark::O];
        for row in 0..5 {
            let pattern = if row % 2 == 0 { even_row } else { odd_row };
            for (col, &mark) in pattern.iter().enumerate() {
                assert!(board.place_mark(row, col, mark));
            }
        }

        assert!(board.is_full());
        let last = board.last_move().unwrap();
        assert!(!board.check_win(last.row, last.col));
        for row in 0..5 {
            for col in 0..5 {
                assert!(!board.check_win(row, col));
            }
        }
    }

    #[test]
    fn test_is_full_matches_empty_cells() {
        let mut board = Board::new(3);
        assert!(!board.is_full());
        assert_eq!(board.get_empty_cells().len(), 9);

        for row in 0..3 {
            for col in 0..3 {
                board.place_mark(row, col, Mark::X);
            }
        }
        assert!(board.is_full());
        assert!(board.get_empty_cells().is_empty());
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::new(7);
        board.place_mark(1, 1, Mark::X);
        board.place_mark(2, 2, Mark::O);

        board.reset();
        assert!(!board.is_full());
        assert_eq!(board.get_empty_cells().len(), 49);
        assert!(board.last_move().is_none());
        assert_eq!(board.size(), 7);

        board.reset();
        assert_eq!(board.get_empty_cells().len(), 49);
    }

    #[test]
    fn test_candidates_on_empty_board_are_the_center_block() {
        let board = Board::new(7);
        let candidates = board.get_candidate_moves();
        assert_eq!(candidates.len(), 25);
        for pos in &candidates {
            assert!((1..=5).contains(&pos.row));
            assert!((1..=5).contains(&pos.col));
        }
    }

    #[test]
    fn test_candidates_surround_a_single_mark() {
        let mut board = Board::new(10);
        board.place_mark(4, 4, Mark::X);

        let candidates = board.get_candidate_moves();
        let mut expected = Vec::new();
        for row in 2..=6 {
            for col in 2..=6 {
                if (row, col) != (4, 4) {
                    expected.push(Position::new(row, col));
                }
            }
        }
        assert_eq!(candidates, expected);
    }

    #[test]
    fn test_candidates_clip_at_the_edge() {
        let mut board = Board::new(9);
        board.place_mark(0, 0, Mark::O);

        let candidates = board.get_candidate_moves();
        assert_eq!(candidates.len(), 8);
        for pos in &candidates {
            assert!(pos.row <= 2 && pos.col <= 2);
        }
    }

    #[test]
    fn test_candidates_are_deduplicated() {
        let mut board = Board::new(10);
        board.place_mark(4, 4, Mark::X);
        board.place_mark(4, 5, Mark::O);

        let candidates = board.get_candidate_moves();
        let mut seen = std::collections::HashSet::new();
        for pos in &candidates {
            assert!(seen.insert(*pos));
            assert_eq!(board.get(pos.row, pos.col), Some(Mark::Empty));
        }
    }

    #[test]
    fn test_candidates_empty_on_full_board() {
        let mut board = Board::new(3);
        for row in 0..3 {
            for col in 0..3 {
                board.place_mark(row, col, if (row + col) % 2 == 0 { Mark::X } else { Mark::O });
            }
        }
        assert!(board.get_candidate_moves().is_empty());
    }
}
