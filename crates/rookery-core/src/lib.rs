//! Core chess types and pseudo-legal move generation.

mod board;
mod chess_move;
mod color;
mod error;
mod fen;
pub mod movegen;
mod piece;
mod piece_kind;
mod position;

pub use board::{Board, BoardView, PrettyBoard};
pub use chess_move::{Move, PromotionPiece};
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::STARTING_PLACEMENT;
pub use movegen::{MoveList, piece_moves, side_moves};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
