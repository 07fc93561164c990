//! Shell errors.

use rookery_core::{BoardError, FenError};

/// Errors that can occur while parsing or executing shell commands.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// A command was given fewer arguments than it needs.
    #[error("{command}: missing {what}")]
    MissingArgument {
        /// The command keyword.
        command: &'static str,
        /// What was expected.
        what: &'static str,
    },

    /// A square could not be parsed as algebraic notation.
    #[error("invalid square: {square}")]
    InvalidSquare {
        /// The text that failed to parse.
        square: String,
    },

    /// A piece argument is not a single FEN piece letter.
    #[error("invalid piece: {piece}")]
    InvalidPiece {
        /// The text that failed to parse.
        piece: String,
    },

    /// A side argument is not `w` or `b`.
    #[error("invalid color: {color}")]
    InvalidColor {
        /// The text that failed to parse.
        color: String,
    },

    /// The placement given to `fen` is malformed.
    #[error("invalid placement: {source}")]
    Fen {
        /// The underlying parse error.
        #[from]
        source: FenError,
    },

    /// The board rejected an edit.
    #[error("board error: {source}")]
    Board {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },

    /// An I/O error occurred on the input or output stream.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
