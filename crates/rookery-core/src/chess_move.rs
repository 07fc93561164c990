//! Chess move representation.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::position::Position;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionPiece {
    /// All promotion choices, strongest first.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Knight => PieceKind::Knight,
        }
    }

    /// Return the lowercase suffix used in long algebraic notation.
    pub const fn suffix(self) -> char {
        self.to_piece_kind().fen_char()
    }
}

/// A move from one position to another, with an optional promotion choice.
///
/// Moves are plain values: they carry no reference to the board they were
/// generated from and are never mutated after creation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    start: Position,
    end: Position,
    promotion: Option<PromotionPiece>,
}

impl Move {
    /// Create a plain (quiet or capture) move.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Move {
        Move {
            start,
            end,
            promotion: None,
        }
    }

    /// Create a promotion move.
    #[inline]
    pub const fn new_promotion(start: Position, end: Position, promo: PromotionPiece) -> Move {
        Move {
            start,
            end,
            promotion: Some(promo),
        }
    }

    #[inline]
    pub const fn start(self) -> Position {
        self.start
    }

    #[inline]
    pub const fn end(self) -> Position {
        self.end
    }

    /// Return the promotion choice, if this move promotes a pawn.
    #[inline]
    pub const fn promotion(self) -> Option<PromotionPiece> {
        self.promotion
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.promotion {
            Some(promo) => write!(f, "{}{}{}", self.start, self.end, promo.suffix()),
            None => write!(f, "{}{}", self.start, self.end),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}
