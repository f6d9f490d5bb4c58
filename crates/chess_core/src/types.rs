use std::fmt;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

/// Coordinates outside the 8x8 grid, rejected at `Square::new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("square ({x}, {y}) is outside the 8x8 board")]
pub struct SquareError {
    pub x: i32,
    pub y: i32,
}

/// A board coordinate: `x` is the file (0 = a .. 7 = h), `y` the row
/// counted from the top (0 = rank 8 .. 7 = rank 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    x: u8,
    y: u8,
}

impl Square {
    /// Construct a square, failing fast on out-of-range coordinates.
    pub fn new(x: u8, y: u8) -> Result<Square, SquareError> {
        if x < 8 && y < 8 {
            Ok(Square { x, y })
        } else {
            Err(SquareError {
                x: x as i32,
                y: y as i32,
            })
        }
    }

    /// Signed-coordinate lookup; off-board maps to `None`. Move generation
    /// uses this to discard destinations past the edge.
    pub fn at(x: i8, y: i8) -> Option<Square> {
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Some(Square {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares in board scan order: row 0 first, files left to right.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(|i| Square { x: i % 8, y: i / 8 })
    }

    pub fn x(self) -> u8 {
        self.x
    }
    pub fn y(self) -> u8 {
        self.y
    }
    pub(crate) fn index(self) -> usize {
        self.y as usize * 8 + self.x as usize
    }

    /// Parse algebraic notation ("a8" is file 0, row 0).
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let (f, r) = (b[0], b[1]);
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Some(Square {
            x: f - b'a',
            y: b'8' - r,
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.x) as char;
        let rank = (b'8' - self.y) as char;
        write!(f, "{file}{rank}")
    }
}

/// A from/to square pair. Captures are implicit: landing on an occupied
/// enemy square overwrites it. No promotion, castling or en-passant
/// metadata exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
