//! Board and square types for the 3x3 grid.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// The mark held by a square.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum SquareType {
    /// No mark yet. The only default state.
    #[default]
    Empty,
    /// The first player's mark.
    X,
    /// The second player's mark.
    O,
}

impl SquareType {
    /// True for `X` and `O`.
    pub fn is_mark(self) -> bool {
        self != SquareType::Empty
    }

    /// Returns the opposing mark; `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            SquareType::Empty => SquareType::Empty,
            SquareType::X => SquareType::O,
            SquareType::O => SquareType::X,
        }
    }
}

/// A single cell of the board.
///
/// Squares start empty and are write-once: once a mark lands, it stays until
/// the board itself is discarded or cloned.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    kind: SquareType,
}

impl Square {
    /// Returns the mark currently held by the square.
    pub fn kind(&self) -> SquareType {
        self.kind
    }

    /// True if no mark has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.kind == SquareType::Empty
    }

    /// Places a mark on the square.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidState`] if the square is occupied and
    /// [`EngineError::InvalidArgument`] for the empty mark.
    pub fn set_kind(&mut self, kind: SquareType) -> Result<(), EngineError> {
        if !self.is_empty() {
            return Err(EngineError::invalid_state("the square is not empty"));
        }
        if !kind.is_mark() {
            return Err(EngineError::invalid_argument(
                "a square cannot be set back to empty",
            ));
        }
        self.kind = kind;
        Ok(())
    }
}

/// The 3x3 board, stored row-major.
///
/// Cells are addressed either by `(x, y)` coordinates in `[0, 3)` or by the
/// linear position `pos = y * 3 + x` in `[0, 9)`. Cloning yields a fully
/// independent board, which is how the search explores hypothetical
/// positions without touching the live one.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Side length of the board. Exposed for rendering only.
    pub const SIZE: usize = 3;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the square at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidArgument`] if either coordinate is
    /// outside `[0, 3)`.
    pub fn square(&self, x: usize, y: usize) -> Result<&Square, EngineError> {
        Ok(&self.squares[Self::index(x, y)?])
    }

    /// Places `kind` at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidArgument`] for out-of-range coordinates
    /// or the empty mark, and [`EngineError::InvalidState`] if the target
    /// square is occupied.
    pub fn set_square(&mut self, x: usize, y: usize, kind: SquareType) -> Result<(), EngineError> {
        let index = Self::index(x, y)?;
        self.squares[index].set_kind(kind)
    }

    /// Places `kind` at the linear position `pos`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Board::set_square`].
    pub fn set_position(&mut self, pos: usize, kind: SquareType) -> Result<(), EngineError> {
        self.set_square(pos % Self::SIZE, pos / Self::SIZE, kind)
    }

    /// Returns the linear positions of all empty squares, ascending.
    ///
    /// Recomputed on demand; the board is small enough that the O(9) scan is
    /// always consistent with the current state.
    pub fn free_positions(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| square.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their one-based position so an adapter can tell the
    /// player which squares remain selectable.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for y in 0..Self::SIZE {
            for x in 0..Self::SIZE {
                let pos = y * Self::SIZE + x;
                let symbol = match self.squares[pos].kind() {
                    SquareType::Empty => (pos + 1).to_string(),
                    SquareType::X => "X".to_string(),
                    SquareType::O => "O".to_string(),
                };
                result.push_str(&symbol);
                if x < Self::SIZE - 1 {
                    result.push('|');
                }
            }
            if y < Self::SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    fn index(x: usize, y: usize) -> Result<usize, EngineError> {
        if x >= Self::SIZE {
            return Err(EngineError::invalid_argument(format!(
                "x coordinate {x} is outside the board"
            )));
        }
        if y >= Self::SIZE {
            return Err(EngineError::invalid_argument(format!(
                "y coordinate {y} is outside the board"
            )));
        }
        Ok(y * Self::SIZE + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_all_free() {
        let board = Board::new();
        assert_eq!(board.free_positions(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn free_positions_ascending_and_shrinking() {
        let mut board = Board::new();
        board.set_square(1, 0, SquareType::X).unwrap();
        board.set_square(2, 2, SquareType::O).unwrap();

        let free = board.free_positions();
        assert_eq!(free, vec![0, 2, 3, 4, 5, 6, 7]);
        assert!(free.windows(2).all(|w| w[0] < w[1]));

        board.set_square(0, 0, SquareType::X).unwrap();
        assert_eq!(board.free_positions().len(), free.len() - 1);
    }

    #[test]
    fn set_square_rejects_out_of_range() {
        let mut board = Board::new();
        assert!(matches!(
            board.set_square(3, 0, SquareType::X),
            Err(EngineError::InvalidArgument { .. })
        ));
        assert!(matches!(
            board.set_square(0, 3, SquareType::X),
            Err(EngineError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn set_square_rejects_empty_mark() {
        let mut board = Board::new();
        assert!(matches!(
            board.set_square(0, 0, SquareType::Empty),
            Err(EngineError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn set_square_rejects_occupied_target() {
        let mut board = Board::new();
        board.set_square(1, 1, SquareType::X).unwrap();
        assert!(matches!(
            board.set_square(1, 1, SquareType::O),
            Err(EngineError::InvalidState { .. })
        ));
        // The original mark survives the failed write.
        assert_eq!(board.square(1, 1).unwrap().kind(), SquareType::X);
    }

    #[test]
    fn clone_is_independent() {
        let mut source = Board::new();
        source.set_square(0, 0, SquareType::X).unwrap();

        let mut copy = source.clone();
        copy.set_square(1, 1, SquareType::O).unwrap();

        assert_eq!(source.square(1, 1).unwrap().kind(), SquareType::Empty);
        assert_eq!(copy.square(0, 0).unwrap().kind(), SquareType::X);
    }

    #[test]
    fn set_position_maps_row_major() {
        let mut board = Board::new();
        board.set_position(5, SquareType::O).unwrap();
        assert_eq!(board.square(2, 1).unwrap().kind(), SquareType::O);
    }

    #[test]
    fn display_numbers_empty_cells() {
        let mut board = Board::new();
        board.set_position(4, SquareType::X).unwrap();
        assert_eq!(board.display(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }
}
