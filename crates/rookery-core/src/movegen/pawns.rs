//! Pawn move generation.

use crate::board::BoardView;
use crate::chess_move::{Move, PromotionPiece};
use crate::color::Color;
use crate::piece::Piece;
use crate::position::Position;

use super::MoveList;

/// Generate pseudo-legal pawn moves: single and double pushes, diagonal
/// captures, and promotions. En passant is never produced.
pub(super) fn gen_pawn<B: BoardView + ?Sized>(
    board: &B,
    pawn: Piece,
    at: Position,
    list: &mut MoveList,
) {
    let us = pawn.color();
    let forward = us.forward();
    let is_empty = |pos: Position| board.is_in_bounds(pos) && board.piece_at(pos).is_none();

    // --- Pushes ---
    let single = at.offset(forward, 0);
    if is_empty(single) {
        push_pawn_move(us, at, single, list);

        let double = single.offset(forward, 0);
        if at.row() == us.pawn_start_row() && is_empty(double) {
            list.push(Move::new(at, double));
        }
    }

    // --- Captures ---
    for side in [-1, 1] {
        let target = at.offset(forward, side);
        if !board.is_in_bounds(target) {
            continue;
        }
        if board
            .piece_at(target)
            .is_some_and(|occupant| pawn.is_enemy_of(occupant))
        {
            push_pawn_move(us, at, target, list);
        }
    }
}

/// Push a pawn move, expanding it into one move per promotion piece when it
/// lands on the far rank.
fn push_pawn_move(us: Color, from: Position, to: Position, list: &mut MoveList) {
    if to.row() == us.promotion_row() {
        for promo in PromotionPiece::ALL {
            list.push(Move::new_promotion(from, to, promo));
        }
    } else {
        list.push(Move::new(from, to));
    }
}
