//! King move generation.

use crate::board::BoardView;
use crate::piece::Piece;
use crate::position::Position;

use super::{MoveList, probe_step};

/// The eight squares around a king.
const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generate pseudo-legal king moves. Castling is never produced.
pub(super) fn gen_king<B: BoardView + ?Sized>(
    board: &B,
    king: Piece,
    at: Position,
    list: &mut MoveList,
) {
    for (dr, dc) in KING_STEPS {
        probe_step(board, king, at, at.offset(dr, dc), list);
    }
}
