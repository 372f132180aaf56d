use crate::board::{Board, WIN_LENGTH};
use crate::session_rng::SessionRng;
use crate::types::{Mark, Position};

const WIN_SCORE: f64 = 100.0;
// Hard caps on branching: shuffled candidates kept at the root, and
// candidates visited per recursive ply. Moves past the cap are never
// evaluated, even on 50x50 boards.
const TOP_CANDIDATE_LIMIT: usize = 15;
const PLY_CANDIDATE_LIMIT: usize = 10;
const EVAL_SAMPLE_LIMIT: usize = 50;
const OPPONENT_RUN_WEIGHT: f64 = 1.5;

const STEP_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

pub fn make_move(
    board: &mut Board,
    player: Mark,
    depth: usize,
    rng: &mut SessionRng,
) -> Option<Position> {
    let chosen = calculate_best_move(board, player, depth, rng)?;
    board.place_mark(chosen.row, chosen.col, player);
    Some(chosen)
}

pub fn calculate_best_move(
    board: &mut Board,
    player: Mark,
    depth: usize,
    rng: &mut SessionRng,
) -> Option<Position> {
    let opponent = player.opponent()?;
    let mut candidates = board.get_candidate_moves();
    if candidates.is_empty() {
        return None;
    }

    // Shuffling decides which of several equal-scoring moves wins.
    rng.shuffle(&mut candidates);
    candidates.truncate(TOP_CANDIDATE_LIMIT);

    let mut best_score = f64::NEG_INFINITY;
    let mut best_move = None;

    for pos in candidates {
        board.set_cell(pos.row, pos.col, player);
        let score = minimax(
            board,
            depth.saturating_sub(1),
            false,
            f64::NEG_INFINITY,
            f64::INFINITY,
            player,
            opponent,
            pos.row,
            pos.col,
            rng,
        );
        board.set_cell(pos.row, pos.col, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}

fn minimax(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    mut alpha: f64,
    mut beta: f64,
    max_player: Mark,
    min_player: Mark,
    row: usize,
    col: usize,
    rng: &mut SessionRng,
) -> f64 {
    // The sign of a terminal score follows the ply flag, not the owner of
    // the winning line.
    if board.check_win(row, col) {
        return if is_maximizing { -WIN_SCORE } else { WIN_SCORE };
    }

    if board.is_full() || depth == 0 {
        return evaluate_board(board, max_player, min_player, rng);
    }

    let mut candidates = board.get_candidate_moves();
    candidates.truncate(PLY_CANDIDATE_LIMIT);

    if is_maximizing {
        let mut max_eval = f64::NEG_INFINITY;
        for pos in candidates {
            if board.get(pos.row, pos.col) != Some(Mark::Empty) {
                continue;
            }
            board.set_cell(pos.row, pos.col, max_player);
            let eval = minimax(
                board,
                depth - 1,
                false,
                alpha,
                beta,
                max_player,
                min_player,
                pos.row,
                pos.col,
                rng,
            );
            board.set_cell(pos.row, pos.col, Mark::Empty);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = f64::INFINITY;
        for pos in candidates {
            if board.get(pos.row, pos.col) != Some(Mark::Empty) {
                continue;
            }
            board.set_cell(pos.row, pos.col, min_player);
            let eval = minimax(
                board,
                depth - 1,
                true,
                alpha,
                beta,
                max_player,
                min_player,
                pos.row,
                pos.col,
                rng,
            );
            board.set_cell(pos.row, pos.col, Mark::Empty);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

fn evaluate_board(board: &Board, player: Mark, opponent: Mark, rng: &mut SessionRng) -> f64 {
    let mut occupied: Vec<(Position, Mark)> = Vec::new();
    for (row, cells) in board.grid().iter().enumerate() {
        for (col, &mark) in cells.iter().enumerate() {
            if mark != Mark::Empty {
                occupied.push((Position::new(row, col), mark));
            }
        }
    }

    if occupied.len() > EVAL_SAMPLE_LIMIT {
        occupied = rng.sample(&occupied, EVAL_SAMPLE_LIMIT);
    }

    let size = board.size() as isize;
    let mut score = 0.0;

    for (pos, owner) in occupied {
        for (dr, dc) in STEP_DIRECTIONS {
            let mut run = 0usize;
            let mut open_end = false;

            for step in 0..WIN_LENGTH as isize {
                let r = pos.row as isize + dr * step;
                let c = pos.col as isize + dc * step;
                if r < 0 || c < 0 || r >= size || c >= size {
                    break;
                }
                let cell = board.grid()[r as usize][c as usize];
                if cell == owner {
                    run += 1;
                } else if cell == Mark::Empty {
                    open_end = true;
                    break;
                } else {
                    break;
                }
            }

            // Runs walled off by the opponent or the edge are worthless.
            if open_end && run > 0 {
                let value = (run * run) as f64;
                if owner == player {
                    score += value;
                } else if owner == opponent {
                    score -= value * OPPONENT_RUN_WEIGHT;
                }
            }
        }
    }

    score + rng.random_range(-0.5..=0.5)
}
