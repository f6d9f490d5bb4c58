use crate::types::*;

/// Piece placement only. There is no side-to-move, castling, en-passant or
/// move-counter state; whose turn it is lives with the game controller.
///
/// Boards are immutable value snapshots: `apply` returns a fresh board and
/// never touches its input, which is what makes search backtracking free.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Standard initial position. Row 0 is Black's back rank.
    pub fn startpos() -> Self {
        let mut b = Board::empty();

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (x, &kind) in back.iter().enumerate() {
            b.squares[x] = Some(Piece {
                color: Color::Black,
                kind,
            });
            b.squares[56 + x] = Some(Piece {
                color: Color::White,
                kind,
            });
        }
        for x in 0..8 {
            b.squares[8 + x] = Some(Piece {
                color: Color::Black,
                kind: PieceKind::Pawn,
            });
            b.squares[48 + x] = Some(Piece {
                color: Color::White,
                kind: PieceKind::Pawn,
            });
        }
        b
    }

    /// Build a board from eight row strings, top row (rank 8) first.
    /// Uppercase = White, lowercase = Black, '.' = empty. Panics on a
    /// malformed grid; this is a setup helper for tests and custom
    /// positions, not a save format.
    pub fn from_grid(rows: [&str; 8]) -> Self {
        let mut b = Board::empty();
        for (y, row) in rows.iter().enumerate() {
            assert!(row.len() == 8, "grid row must have 8 squares");
            for (x, ch) in row.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let color = if ch.is_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let kind = match ch.to_ascii_lowercase() {
                    'p' => PieceKind::Pawn,
                    'n' => PieceKind::Knight,
                    'b' => PieceKind::Bishop,
                    'r' => PieceKind::Rook,
                    'q' => PieceKind::Queen,
                    'k' => PieceKind::King,
                    _ => panic!("invalid piece char in grid: {}", ch),
                };
                b.squares[y * 8 + x] = Some(Piece { color, kind });
            }
        }
        b
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.index()] = pc;
    }

    /// Apply a move by copy: clear the source square and write its piece to
    /// the destination, overwriting any occupant (that is how captures
    /// happen). No validation; callers check pseudo-legality first.
    pub fn apply(&self, mv: Move) -> Board {
        let mut next = self.clone();
        let moved = next.piece_at(mv.from);
        next.set_piece(mv.from, None);
        next.set_piece(mv.to, moved);
        next
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
