//! Knight move generation.

use crate::board::BoardView;
use crate::piece::Piece;
use crate::position::Position;

use super::{MoveList, probe_step};

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Generate pseudo-legal knight moves. Knights jump, so nothing in between
/// matters; each landing square is probed on its own.
pub(super) fn gen_knight<B: BoardView + ?Sized>(
    board: &B,
    knight: Piece,
    at: Position,
    list: &mut MoveList,
) {
    for (dr, dc) in KNIGHT_JUMPS {
        probe_step(board, knight, at, at.offset(dr, dc), list);
    }
}
