//! Shell command parsing.

use rookery_core::{Board, Color, Piece, Position};

use crate::error::ShellError;

/// A parsed shell command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `new` -- reset to the starting position.
    New,
    /// `clear` -- remove every piece.
    Clear,
    /// `fen` -- load a piece placement.
    Fen(Board),
    /// `put` -- place a piece on a square.
    Put(Position, Piece),
    /// `remove` -- take the piece off a square.
    Remove(Position),
    /// `moves` -- list the pseudo-legal moves of the piece on a square.
    Moves(Position),
    /// `all` -- list the pseudo-legal moves of one side.
    All(Color),
    /// `show` -- print the board.
    Show,
    /// `quit` -- leave the shell.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ShellError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "new" => Ok(Command::New),
        "clear" => Ok(Command::Clear),
        "show" => Ok(Command::Show),
        "quit" => Ok(Command::Quit),
        "fen" => parse_fen(&tokens[1..]),
        "put" => {
            let square = parse_square("put", tokens.get(1))?;
            let piece = parse_piece(tokens.get(2))?;
            Ok(Command::Put(square, piece))
        }
        "remove" => Ok(Command::Remove(parse_square("remove", tokens.get(1))?)),
        "moves" => Ok(Command::Moves(parse_square("moves", tokens.get(1))?)),
        "all" => Ok(Command::All(parse_color(tokens.get(1))?)),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `fen` arguments. Only the placement field is used; any
/// remaining FEN fields are accepted and ignored.
fn parse_fen(tokens: &[&str]) -> Result<Command, ShellError> {
    let placement = tokens.first().ok_or(ShellError::MissingArgument {
        command: "fen",
        what: "placement",
    })?;
    let board: Board = placement.parse()?;
    Ok(Command::Fen(board))
}

fn parse_square(command: &'static str, token: Option<&&str>) -> Result<Position, ShellError> {
    let token = token.ok_or(ShellError::MissingArgument {
        command,
        what: "square",
    })?;
    Position::from_algebraic(token).ok_or_else(|| ShellError::InvalidSquare {
        square: token.to_string(),
    })
}

fn parse_piece(token: Option<&&str>) -> Result<Piece, ShellError> {
    let token = token.ok_or(ShellError::MissingArgument {
        command: "put",
        what: "piece",
    })?;
    let mut chars = token.chars();
    let parsed = match (chars.next(), chars.next()) {
        (Some(c), None) => Piece::from_fen_char(c),
        _ => None,
    };
    parsed.ok_or_else(|| ShellError::InvalidPiece {
        piece: token.to_string(),
    })
}

fn parse_color(token: Option<&&str>) -> Result<Color, ShellError> {
    let token = token.ok_or(ShellError::MissingArgument {
        command: "all",
        what: "color",
    })?;
    let mut chars = token.chars();
    let parsed = match (chars.next(), chars.next()) {
        (Some(c), None) => Color::from_char(c),
        _ => None,
    };
    parsed.ok_or_else(|| ShellError::InvalidColor {
        color: token.to_string(),
    })
}
