//! The board: what move generation reads, and a concrete 8x8 grid.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Read-only view of piece placement, the only thing move generation needs.
///
/// Implementors decide how pieces are stored. `piece_at` must return `None`
/// both for empty squares and for positions off the grid, so callers that
/// need to tell the two apart check [`BoardView::is_in_bounds`] first.
/// `is_in_bounds` must describe a finite region: rays stop at its edge.
pub trait BoardView {
    /// Return the piece standing on `pos`, if any.
    fn piece_at(&self, pos: Position) -> Option<Piece>;

    /// Return `true` if `pos` is a square of this board.
    fn is_in_bounds(&self, pos: Position) -> bool {
        pos.is_on_grid()
    }
}

impl<B: BoardView + ?Sized> BoardView for &B {
    fn piece_at(&self, pos: Position) -> Option<Piece> {
        (**self).piece_at(pos)
    }

    fn is_in_bounds(&self, pos: Position) -> bool {
        (**self).is_in_bounds(pos)
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces, indexed by row then column.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Return a board with no pieces.
    pub fn empty() -> Board {
        Board::default()
    }

    /// Return the standard starting setup.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(Color::White, kind));
            board.squares[1][col] = Some(Piece::WHITE_PAWN);
            board.squares[6][col] = Some(Piece::BLACK_PAWN);
            board.squares[7][col] = Some(Piece::new(Color::Black, kind));
        }
        board
    }

    fn slot(pos: Position) -> Option<(usize, usize)> {
        pos.is_on_grid().then(|| (pos.row() as usize, pos.col() as usize))
    }

    /// Put `piece` on `pos`, returning whatever stood there before.
    pub fn place(&mut self, pos: Position, piece: Piece) -> Result<Option<Piece>, BoardError> {
        let (row, col) = Self::slot(pos).ok_or(BoardError::OffGrid { position: pos })?;
        Ok(self.squares[row][col].replace(piece))
    }

    /// Take the piece off `pos`. Off-grid positions hold nothing.
    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        let (row, col) = Self::slot(pos)?;
        self.squares[row][col].take()
    }

    /// Iterate over occupied squares in a1, b1, ..., h8 order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(|pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    /// Return the number of pieces on the board.
    pub fn count(&self) -> usize {
        self.squares.iter().flatten().filter(|sq| sq.is_some()).count()
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl BoardView for Board {
    fn piece_at(&self, pos: Position) -> Option<Piece> {
        let (row, col) = Self::slot(pos)?;
        self.squares[row][col]
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in (0..Position::SIZE).rev() {
            write!(f, "{}  ", row + 1)?;
            for col in 0..Position::SIZE {
                let c = board
                    .piece_at(Position::new(row, col))
                    .map_or('.', Piece::fen_char);
                if col < Position::SIZE - 1 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
