//! Minimax engine with alpha-beta pruning
//!
//! Exhaustively evaluates the game tree from the engine's perspective:
//! +1 for an engine win, -1 for an opponent win, 0 for a draw. The 3x3
//! tree is at most 9! ~ 362,880 nodes, so the search needs no depth limit;
//! alpha-beta pruning cuts most of it without changing the returned move.

use super::board::{GameBoard, GameStatus, Player};

/// Compute the optimal move for `engine` on the given board.
///
/// Tries every empty cell in increasing index order and keeps the first one
/// achieving the maximum minimax score, so the result is deterministic.
/// Returns `None` when the board is full or the position is already decided.
///
/// The board argument is never mutated: every trial placement works on a
/// copy, so sibling branches cannot observe each other's moves.
pub fn best_move(board: &GameBoard, engine: Player) -> Option<usize> {
    if board.status() != GameStatus::Ongoing {
        return None;
    }

    let mut best: Option<(usize, i32)> = None;
    let mut alpha = i32::MIN;

    for pos in board.empty_positions() {
        let mut trial = *board;
        trial.place(pos, engine);
        let score = minimax(trial, engine, false, alpha, i32::MAX);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
            alpha = alpha.max(score);
        }
    }

    best.map(|(pos, _)| pos)
}

fn minimax(board: GameBoard, engine: Player, maximizing: bool, alpha: i32, beta: i32) -> i32 {
    if board.has_won(engine) {
        return 1;
    }
    if board.has_won(engine.opponent()) {
        return -1;
    }
    if board.is_full() {
        return 0;
    }

    let to_move = if maximizing { engine } else { engine.opponent() };
    let mut alpha = alpha;
    let mut beta = beta;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in board.empty_positions() {
        let mut trial = board;
        trial.place(pos, to_move);
        let score = minimax(trial, engine, !maximizing, alpha, beta);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}
