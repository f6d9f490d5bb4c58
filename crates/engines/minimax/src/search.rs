//! Minimax search with alpha-beta pruning
//!
//! Evaluation is absolute (positive favors White), so the search is a
//! plain minimax with an explicit maximizing flag rather than negamax:
//! White maximizes the score and Black minimizes it, alternating each ply.

use chess_core::{evaluate, generate_moves, Board, Color, Move};

/// Score returned for a side with no pseudo-legal moves. Check is never
/// detected, so "no moves, for any reason" is scored as a loss for that
/// side. Large enough to dominate any material sum.
pub const MATED_SCORE: i32 = 1000;

/// Searches the position and returns the best move with its score.
///
/// `maximizing` is true when White is to move at the root. Ties keep the
/// earliest move in generation order (the comparison is strict).
///
/// Cost is deterministic and exponential in `depth` times the branching
/// factor (roughly 20-35 moves per ply), bounded only by the alpha-beta
/// prune rate; there is no time budget and no cancellation.
///
/// # Returns
/// `None` only if the side to move has zero pseudo-legal moves.
pub fn best_move(
    board: &Board,
    depth: u8,
    maximizing: bool,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let side = if maximizing {
        Color::White
    } else {
        Color::Black
    };
    let moves = generate_moves(board, side);
    if moves.is_empty() {
        return None;
    }

    let mut best = None;
    let mut best_value = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        let child = board.apply(mv);
        *nodes += 1;
        let value = search(
            &child,
            depth.saturating_sub(1),
            !maximizing,
            i32::MIN,
            i32::MAX,
            nodes,
        );
        let better = if maximizing {
            value > best_value
        } else {
            value < best_value
        };
        if better {
            best_value = value;
            best = Some(mv);
        }
    }

    let mv = best?;
    log::debug!(
        "search depth {} picked {} (score {}, {} nodes)",
        depth,
        mv,
        best_value,
        *nodes
    );
    Some((mv, best_value))
}

/// Recursive minimax value of `board` with `depth` plies to go.
///
/// At depth 0 returns the static evaluation; a side to move with no moves
/// scores `-MATED_SCORE` when maximizing and `+MATED_SCORE` when
/// minimizing. Remaining siblings are pruned as soon as `beta <= alpha`.
pub fn search(
    board: &Board,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 {
        return evaluate(board);
    }

    let side = if maximizing {
        Color::White
    } else {
        Color::Black
    };
    let moves = generate_moves(board, side);
    if moves.is_empty() {
        return if maximizing {
            -MATED_SCORE
        } else {
            MATED_SCORE
        };
    }

    if maximizing {
        let mut best = i32::MIN;
        for mv in moves {
            let child = board.apply(mv);
            *nodes += 1;
            let value = search(&child, depth - 1, false, alpha, beta, nodes);
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break; // beta cutoff
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in moves {
            let child = board.apply(mv);
            *nodes += 1;
            let value = search(&child, depth - 1, true, alpha, beta, nodes);
            best = best.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break; // alpha cutoff
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
