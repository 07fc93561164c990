//! Pseudo-legal move generation.
//!
//! Every generator works one piece at a time and only reads the board
//! through [`BoardView`]. Moves that would leave the mover's own king in
//! check are not filtered out, and castling and en passant are not produced.

mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::trace;

use crate::board::{Board, BoardView};
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{DIAGONALS, ORTHOGONALS, gen_slider};

/// Growable buffer of generated moves.
///
/// A single piece never has more than 27 moves (a centralized queen), so
/// the initial capacity covers every per-piece call without reallocating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: Vec::with_capacity(28),
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return `true` if `mv` was generated.
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Iterate over the moves in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Move> for MoveList {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.moves.extend(iter);
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

/// Outcome of probing one candidate square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// The square was empty; a ray may continue past it.
    Open,
    /// The square is off the board or occupied; a ray ends here.
    Stop,
}

/// Record a move from `from` to `to` if `to` is on the board and either
/// empty or held by an enemy of `piece`.
fn probe_step<B: BoardView + ?Sized>(
    board: &B,
    piece: Piece,
    from: Position,
    to: Position,
    list: &mut MoveList,
) -> Probe {
    if !board.is_in_bounds(to) {
        return Probe::Stop;
    }
    match board.piece_at(to) {
        None => {
            list.push(Move::new(from, to));
            Probe::Open
        }
        Some(occupant) => {
            if piece.is_enemy_of(occupant) {
                list.push(Move::new(from, to));
            }
            Probe::Stop
        }
    }
}

/// List every pseudo-legal move of `piece` standing on `at`.
///
/// Never fails: candidates off the board or blocked by a friendly piece are
/// simply left out, so the result may be empty.
pub fn piece_moves<B: BoardView + ?Sized>(board: &B, piece: Piece, at: Position) -> MoveList {
    let mut list = MoveList::new();

    match piece.kind() {
        PieceKind::King => gen_king(board, piece, at, &mut list),
        PieceKind::Knight => gen_knight(board, piece, at, &mut list),
        PieceKind::Rook => gen_slider(board, piece, at, &ORTHOGONALS, &mut list),
        PieceKind::Bishop => gen_slider(board, piece, at, &DIAGONALS, &mut list),
        PieceKind::Queen => {
            gen_slider(board, piece, at, &ORTHOGONALS, &mut list);
            gen_slider(board, piece, at, &DIAGONALS, &mut list);
        }
        PieceKind::Pawn => gen_pawn(board, piece, at, &mut list),
    }

    trace!(piece = %piece, square = %at, count = list.len(), "generated pseudo-legal moves");
    list
}

/// List the pseudo-legal moves of every `color` piece on `board`, grouped
/// by origin square in a1, b1, ..., h8 order.
pub fn side_moves(board: &Board, color: Color) -> MoveList {
    let mut list = MoveList::new();
    for (pos, piece) in board.pieces().filter(|(_, p)| p.color() == color) {
        list.extend(piece_moves(board, piece, pos));
    }
    list
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::chess_move::PromotionPiece;

    fn sq(s: &str) -> Position {
        Position::from_algebraic(s).unwrap()
    }

    fn alone(piece: Piece, at: Position) -> MoveList {
        let mut board = Board::empty();
        board.place(at, piece).unwrap();
        piece_moves(&board, piece, at)
    }

    fn distance_to_edges(pos: Position) -> [i8; 4] {
        [7 - pos.row(), pos.row(), 7 - pos.col(), pos.col()]
    }

    #[test]
    fn rook_on_corner_has_14_moves() {
        let moves = alone(Piece::WHITE_ROOK, sq("a1"));
        assert_eq!(moves.len(), 14);
        assert!(moves.contains(&Move::new(sq("a1"), sq("a8"))));
        assert!(moves.contains(&Move::new(sq("a1"), sq("h1"))));
    }

    #[test]
    fn sliders_on_empty_board_depend_only_on_edge_distance() {
        for pos in Position::all() {
            let [up, down, right, left] = distance_to_edges(pos);
            let diagonal = (up.min(right) + up.min(left) + down.min(right) + down.min(left)) as usize;

            let rook = alone(Piece::BLACK_ROOK, pos).len();
            let bishop = alone(Piece::WHITE_BISHOP, pos).len();
            let queen = alone(Piece::WHITE_QUEEN, pos).len();

            assert_eq!(rook, 14, "rook on {pos}");
            assert_eq!(bishop, diagonal, "bishop on {pos}");
            assert_eq!(queen, rook + bishop, "queen on {pos}");
        }
    }

    #[test]
    fn steppers_on_empty_board_stay_in_range() {
        for pos in Position::all() {
            let knight = alone(Piece::WHITE_KNIGHT, pos).len();
            let king = alone(Piece::BLACK_KING, pos).len();
            assert!((2..=8).contains(&knight), "knight on {pos}: {knight}");
            assert!((3..=8).contains(&king), "king on {pos}: {king}");
        }
        assert_eq!(alone(Piece::WHITE_KNIGHT, sq("a1")).len(), 2);
        assert_eq!(alone(Piece::WHITE_KNIGHT, sq("d4")).len(), 8);
        assert_eq!(alone(Piece::WHITE_KING, sq("h8")).len(), 3);
        assert_eq!(alone(Piece::WHITE_KING, sq("e5")).len(), 8);
    }

    #[test]
    fn no_move_starts_elsewhere_or_lands_off_grid() {
        let board = Board::starting_position();
        for (pos, piece) in board.pieces() {
            for mv in &piece_moves(&board, piece, pos) {
                assert_eq!(mv.start(), pos);
                assert!(mv.end().is_on_grid(), "{mv:?} from {piece:?}");
                assert_ne!(mv.end(), pos);
            }
        }
    }

    #[test]
    fn sliders_never_pass_an_occupant() {
        let positions = [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbqkbnr/pppppppp/8/8/3Q4/8/PPPPPPPP/RNB1KBNR",
        ];
        for fen in positions {
            let board: Board = fen.parse().unwrap();
            for (pos, piece) in board.pieces().filter(|(_, p)| p.kind().is_slider()) {
                let targets: HashSet<Position> =
                    piece_moves(&board, piece, pos).iter().map(|mv| mv.end()).collect();
                let directions: Vec<(i8, i8)> = match piece.kind() {
                    PieceKind::Rook => ORTHOGONALS.to_vec(),
                    PieceKind::Bishop => DIAGONALS.to_vec(),
                    _ => ORTHOGONALS.iter().chain(&DIAGONALS).copied().collect(),
                };

                for (dr, dc) in directions {
                    let mut cur = pos.offset(dr, dc);
                    let mut blocked = false;
                    while cur.is_on_grid() {
                        if blocked {
                            assert!(!targets.contains(&cur), "{piece:?} on {pos} jumped to {cur} in {fen}");
                        } else if let Some(occupant) = board.piece_at(cur) {
                            assert_eq!(
                                targets.contains(&cur),
                                piece.is_enemy_of(occupant),
                                "{piece:?} on {pos} against {occupant:?} on {cur}"
                            );
                            blocked = true;
                        }
                        cur = cur.offset(dr, dc);
                    }
                }
            }
        }
    }

    #[test]
    fn pawn_on_start_square_has_two_moves() {
        let moves = alone(Piece::WHITE_PAWN, sq("e2"));
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new(sq("e2"), sq("e3"))));
        assert!(moves.contains(&Move::new(sq("e2"), sq("e4"))));
    }

    #[test]
    fn promotion_with_capture_yields_eight_moves() {
        let board: Board = "3r4/4P3/8/8/8/8/8/8".parse().unwrap();
        let moves = piece_moves(&board, Piece::WHITE_PAWN, sq("e7"));
        assert_eq!(moves.len(), 8);
        for promo in PromotionPiece::ALL {
            assert!(moves.contains(&Move::new_promotion(sq("e7"), sq("e8"), promo)));
            assert!(moves.contains(&Move::new_promotion(sq("e7"), sq("d8"), promo)));
        }
    }

    #[test]
    fn starting_position_side_moves() {
        let board = Board::starting_position();
        // 16 pawn pushes plus 4 knight jumps
        assert_eq!(side_moves(&board, Color::White).len(), 20);
        assert_eq!(side_moves(&board, Color::Black).len(), 20);
    }

    #[test]
    fn side_moves_groups_by_origin() {
        let board: Board = "8/8/8/8/8/8/8/R6N".parse().unwrap();
        let moves = side_moves(&board, Color::White);
        assert_eq!(moves.len(), 14 - 1 + 2);
        assert!(moves.iter().take(13).all(|mv| mv.start() == sq("a1")));
        assert!(moves.iter().skip(13).all(|mv| mv.start() == sq("h1")));
        assert!(side_moves(&board, Color::Black).is_empty());
    }

    #[test]
    fn generation_through_a_custom_view() {
        struct Lone(Position, Piece);

        impl BoardView for Lone {
            fn piece_at(&self, pos: Position) -> Option<Piece> {
                (pos == self.0).then_some(self.1)
            }
        }

        let view = Lone(sq("c3"), Piece::BLACK_PAWN);
        let moves = Piece::WHITE_KNIGHT.moves(&view, sq("a2"));
        assert_eq!(moves.len(), 3);
        assert!(moves.contains(&Move::new(sq("a2"), sq("c3"))));
    }
}
