//! Terminal detection and win lines.
//!
//! These predicates take a board rather than a room so the search can probe
//! hypothetical positions without touching live match state.

use crate::board::{Board, SquareType};

/// The eight winning lines as linear positions.
const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the mark holding three in a line, if any.
///
/// At most one mark can have a completed line in a legal position, so the
/// scan order does not matter.
pub fn winning_mark(board: &Board) -> Option<SquareType> {
    let squares = board.squares();
    for [a, b, c] in LINES {
        let kind = squares[a].kind();
        if kind.is_mark() && kind == squares[b].kind() && kind == squares[c].kind() {
            return Some(kind);
        }
    }
    None
}

/// True when the board is full or a line is complete.
pub fn is_over(board: &Board) -> bool {
    board.free_positions().is_empty() || winning_mark(board).is_some()
}
