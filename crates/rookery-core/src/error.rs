//! Error types for placement parsing and board editing.

use crate::position::Position;

/// Errors that occur when parsing the piece placement field of a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The input is empty or whitespace only.
    #[error("empty piece placement")]
    Empty,
    /// The placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank} describes {length} squares, expected 8")]
    BadRankLength {
        /// 1-based rank number (8 is the first rank in the string).
        rank: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}

/// Errors from editing a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The position lies outside the 8×8 grid.
    #[error("position {position} is off the board")]
    OffGrid {
        /// The rejected position.
        position: Position,
    },
}
