use crate::{board::Board, types::*};

/// Material value of a piece in pawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// Static material balance: White pieces add, Black pieces subtract, so a
/// positive score favors White. No positional, mobility or king-safety
/// terms; this is the leaf evaluation of the search.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0i32;
    for sq in Square::all() {
        if let Some(pc) = board.piece_at(sq) {
            let v = piece_value(pc.kind);
            score += if pc.color == Color::White { v } else { -v };
        }
    }
    score
}

/// Unsigned material total for one side, for score displays.
pub fn material(board: &Board, side: Color) -> u32 {
    Square::all()
        .filter_map(|sq| board.piece_at(sq))
        .filter(|pc| pc.color == side)
        .map(|pc| piece_value(pc.kind) as u32)
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
