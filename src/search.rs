//! Adversarial search for the strongest bot tier.
//!
//! Plain minimax with alpha-beta pruning over hypothetical board clones.
//! The tree is at most nine plies deep, so the search is exhaustive and
//! needs no iterative deepening or time budget.

use crate::board::{Board, SquareType};
use crate::rules;
use tracing::instrument;

/// Value of a win at the root, decayed by depth so faster wins score higher
/// and slower losses score less badly.
const WIN_SCORE: i32 = 10;

/// Returns the optimal position for `mark` to play on `board`.
///
/// The maximizing side is `mark`, the side to move when the search starts.
/// Ties break toward the first position seen in ascending linear order, so
/// the result is deterministic for a given board. Returns `None` when the
/// board has no free squares.
#[instrument(skip(board))]
pub fn best_position(board: &Board, mark: SquareType) -> Option<usize> {
    let mut best_score = i32::MIN;
    let mut best_pos = None;
    let mut alpha = i32::MIN;

    for pos in board.free_positions() {
        let Some(copy) = hypothetical(board, pos, mark) else {
            continue;
        };
        let score = minimax(&copy, mark, 1, alpha, i32::MAX, false);
        if score > best_score {
            best_score = score;
            best_pos = Some(pos);
        }
        alpha = alpha.max(score);
    }

    best_pos
}

/// Scores a position for the maximizing `mark`, `depth` plies below the root.
fn minimax(
    board: &Board,
    mark: SquareType,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> i32 {
    if rules::is_over(board) {
        return match rules::winning_mark(board) {
            None => 0,
            Some(winner) if winner == mark => WIN_SCORE - depth,
            Some(_) => -WIN_SCORE + depth,
        };
    }

    if maximizing {
        let mut best = i32::MIN;
        for pos in board.free_positions() {
            let Some(copy) = hypothetical(board, pos, mark) else {
                continue;
            };
            let score = minimax(&copy, mark, depth + 1, alpha, beta, false);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for pos in board.free_positions() {
            let Some(copy) = hypothetical(board, pos, mark.opponent()) else {
                continue;
            };
            let score = minimax(&copy, mark, depth + 1, alpha, beta, true);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Clones the board with `kind` placed at `pos`.
///
/// `pos` comes from `free_positions`, so the placement cannot actually fail;
/// the `Option` keeps the search total without panicking.
fn hypothetical(board: &Board, pos: usize, kind: SquareType) -> Option<Board> {
    let mut copy = board.clone();
    copy.set_position(pos, kind).ok()?;
    Some(copy)
}
