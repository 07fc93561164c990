//! Piece placement parsing and serialization for [`Board`].
//!
//! Only the first field of a FEN record is understood. Side to move,
//! castling, en passant and the move counters are game state that a board
//! does not carry, so any fields after the placement are ignored.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, BoardView};
use crate::error::FenError;
use crate::piece::Piece;
use crate::position::Position;

/// Piece placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // FEN lists rank 8 first
            let row = 7 - rank_index as i8;
            let mut col: usize = 0;

            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|n| (1..=8).contains(n)) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_fen_char(c)
                    .ok_or(FenError::InvalidPieceChar { character: c })?;
                if col < 8 {
                    board
                        .place(Position::new(row, col as i8), piece)
                        .map_err(|_| FenError::BadRankLength {
                            rank: 8 - rank_index,
                            length: col + 1,
                        })?;
                }
                col += 1;
            }

            if col != 8 {
                return Err(FenError::BadRankLength {
                    rank: 8 - rank_index,
                    length: col,
                });
            }
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..Position::SIZE).rev() {
            let mut empty_run = 0;
            for col in 0..Position::SIZE {
                match self.piece_at(Position::new(row, col)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{}", piece.fen_char())?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if row > 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_PLACEMENT;
    use crate::board::{Board, BoardView};
    use crate::error::FenError;
    use crate::piece::Piece;
    use crate::position::Position;

    #[test]
    fn starting_placement_matches_setup() {
        let board: Board = STARTING_PLACEMENT.parse().unwrap();
        assert_eq!(board, Board::starting_position());
        assert_eq!(board.to_string(), STARTING_PLACEMENT);
    }

    #[test]
    fn full_fen_record_is_accepted() {
        let board: Board = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
        assert_eq!(board.count(), 4);
        assert_eq!(
            board.piece_at(Position::from_algebraic("d5").unwrap()),
            Some(Piece::BLACK_PAWN)
        );
        assert_eq!(board.to_string(), "4k3/8/8/3pP3/8/8/8/4K3");
    }

    #[test]
    fn empty_board_serializes_as_eights() {
        assert_eq!(Board::empty().to_string(), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn empty_input() {
        assert_eq!("   ".parse::<Board>(), Err(FenError::Empty));
    }

    #[test]
    fn wrong_rank_count() {
        assert_eq!(
            "8/8/8".parse::<Board>(),
            Err(FenError::WrongRankCount { found: 3 })
        );
    }

    #[test]
    fn short_and_long_ranks() {
        assert_eq!(
            "7/8/8/8/8/8/8/8".parse::<Board>(),
            Err(FenError::BadRankLength { rank: 8, length: 7 })
        );
        assert_eq!(
            "8/8/8/8/8/8/8/RNBQKBNRP".parse::<Board>(),
            Err(FenError::BadRankLength { rank: 1, length: 9 })
        );
        assert_eq!(
            "8/8/44/8/8/8/8/8".parse::<Board>(),
            Ok(Board::empty())
        );
    }

    #[test]
    fn empty_runs_must_be_one_to_eight() {
        assert_eq!(
            "08/8/8/8/8/8/8/8".parse::<Board>(),
            Err(FenError::InvalidPieceChar { character: '0' })
        );
        assert_eq!(
            "8/8/8/8/9/8/8/8".parse::<Board>(),
            Err(FenError::InvalidPieceChar { character: '9' })
        );
    }

    #[test]
    fn invalid_piece_char() {
        assert_eq!(
            "8/8/8/8/3X4/8/8/8".parse::<Board>(),
            Err(FenError::InvalidPieceChar { character: 'X' })
        );
    }
}
