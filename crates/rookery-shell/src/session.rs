//! The shell session: a board plus a read-eval-print loop over commands.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use rookery_core::{Board, BoardView, Color, Move, Position, side_moves};

use crate::command::{Command, parse_command};
use crate::error::ShellError;

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A shell session holding the board being explored.
///
/// The session only edits and inspects placement; it never applies moves
/// or keeps track of whose turn it is.
#[derive(Debug)]
pub struct Session {
    board: Board,
}

impl Session {
    /// Create a session on the starting position.
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
        }
    }

    /// Return the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read commands from `input` until `quit` or end of input, writing
    /// replies to `out`.
    ///
    /// Malformed commands are logged and skipped. Only I/O failures end the
    /// session with an error.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), ShellError> {
        info!("rookery shell started");

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let flow = match parse_command(trimmed) {
                Ok(cmd) => self.execute(cmd, out)?,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(out, "error: {e}")?;
                    Flow::Continue
                }
            };
            out.flush()?;

            if flow == Flow::Quit {
                break;
            }
        }

        info!("rookery shell shutting down");
        Ok(())
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, ShellError> {
        match cmd {
            Command::New => self.board = Board::starting_position(),
            Command::Clear => self.board = Board::empty(),
            Command::Fen(board) => self.board = board,
            Command::Put(square, piece) => {
                if let Some(previous) = self.board.place(square, piece)? {
                    debug!(%square, %previous, %piece, "replaced piece");
                }
            }
            Command::Remove(square) => {
                if self.board.remove(square).is_none() {
                    debug!(%square, "remove on empty square");
                }
            }
            Command::Moves(square) => self.handle_moves(square, out)?,
            Command::All(color) => self.handle_all(color, out)?,
            Command::Show => {
                writeln!(out, "{}", self.board.pretty())?;
                writeln!(out, "{}", self.board)?;
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(word) => {
                debug!(%word, "ignoring unknown command");
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_moves<W: Write>(&self, square: Position, out: &mut W) -> Result<(), ShellError> {
        let moves = match self.board.piece_at(square) {
            Some(piece) => piece.moves(&self.board, square).into_iter().collect(),
            None => Vec::new(),
        };
        writeln!(out, "{}", format_moves(moves))?;
        Ok(())
    }

    fn handle_all<W: Write>(&self, color: Color, out: &mut W) -> Result<(), ShellError> {
        let moves = side_moves(&self.board, color).into_iter().collect();
        writeln!(out, "{}", format_moves(moves))?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Render moves sorted and space-separated, or `none`.
fn format_moves(moves: Vec<Move>) -> String {
    if moves.is_empty() {
        return "none".to_string();
    }
    let mut rendered: Vec<String> = moves.iter().map(Move::to_string).collect();
    rendered.sort();
    rendered.join(" ")
}
