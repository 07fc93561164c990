//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::BoardView;
use crate::piece::Piece;
use crate::position::Position;

use super::{MoveList, Probe, probe_step};

/// Rook directions: up, down, right, left.
pub(super) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop directions.
pub(super) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Cast a ray from `at` along each direction until it leaves the board or
/// hits a piece. An enemy blocker is captured, a friendly one is not.
pub(super) fn gen_slider<B: BoardView + ?Sized>(
    board: &B,
    slider: Piece,
    at: Position,
    directions: &[(i8, i8)],
    list: &mut MoveList,
) {
    for &(dr, dc) in directions {
        let mut cur = at.offset(dr, dc);
        while probe_step(board, slider, at, cur, list) == Probe::Open {
            let next = cur.offset(dr, dc);
            // Offsets saturate, so a view that never reports out of bounds
            // would otherwise keep probing the same square.
            if next == cur {
                break;
            }
            cur = next;
        }
    }
}
