//! Board coordinates.

use std::fmt;

/// A row/column coordinate, 0-based, with row 0 being White's back rank and
/// column 0 the a-file.
///
/// A position is not guaranteed to be on the board: offsetting produces
/// candidates that may fall outside the 8×8 grid, and it is up to the
/// consumer to check [`Position::is_on_grid`] before using them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    /// Width and height of the board.
    pub const SIZE: i8 = 8;

    /// Create a position from 0-based coordinates.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Position {
        Position { row, col }
    }

    /// Create a position from 1-based coordinates, where row 1 is the bottom
    /// row and column 1 the leftmost column.
    #[inline]
    pub const fn from_one_based(row: i8, col: i8) -> Position {
        Position::new(row.saturating_sub(1), col.saturating_sub(1))
    }

    /// Parse algebraic notation such as `"e4"`. Returns `None` for anything
    /// that is not a file `a`-`h` followed by a rank `1`-`8`.
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0].to_ascii_lowercase();
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Some(Position::new((rank_byte - b'1') as i8, (file_byte - b'a') as i8))
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Return the position translated by the given deltas.
    ///
    /// Never checks bounds and never wraps; coordinates saturate at the
    /// `i8` limits, which are always off the grid.
    #[inline]
    #[must_use]
    pub const fn offset(self, row_delta: i8, col_delta: i8) -> Position {
        Position::new(
            self.row.saturating_add(row_delta),
            self.col.saturating_add(col_delta),
        )
    }

    /// Return `true` if both coordinates lie in `0..8`.
    #[inline]
    pub const fn is_on_grid(self) -> bool {
        self.row >= 0 && self.row < Self::SIZE && self.col >= 0 && self.col < Self::SIZE
    }

    /// Iterate over the 64 on-grid positions, a1, b1, ..., h8.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_grid() {
            let file = (b'a' + self.col as u8) as char;
            write!(f, "{}{}", file, self.row + 1)
        } else {
            write!(f, "({},{})", self.row, self.col)
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self)
    }
}
