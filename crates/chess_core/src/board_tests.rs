use super::*;

fn s(coord: &str) -> Square {
    Square::from_algebraic(coord).unwrap()
}

#[test]
fn test_startpos_layout() {
    let b = Board::startpos();
    assert_eq!(
        b.piece_at(s("e1")),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::King,
        })
    );
    assert_eq!(
        b.piece_at(s("d8")),
        Some(Piece {
            color: Color::Black,
            kind: PieceKind::Queen,
        })
    );
    assert_eq!(
        b.piece_at(s("a2")),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::Pawn,
        })
    );
    assert_eq!(b.piece_at(s("e4")), None);
}

#[test]
fn test_from_grid_matches_startpos() {
    let b = Board::from_grid([
        "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
        "RNBQKBNR",
    ]);
    assert_eq!(b, Board::startpos());
}

#[test]
fn test_apply_moves_piece_and_leaves_source_untouched() {
    let b = Board::startpos();
    let mv = Move::new(s("e2"), s("e4"));
    let after = b.apply(mv);

    // the input board is unchanged
    assert_eq!(b, Board::startpos());

    // the new board differs exactly at the two touched squares
    assert_eq!(after.piece_at(s("e2")), None);
    assert_eq!(
        after.piece_at(s("e4")),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::Pawn,
        })
    );
    let mut diffs = 0;
    for sq in Square::all() {
        if b.piece_at(sq) != after.piece_at(sq) {
            diffs += 1;
        }
    }
    assert_eq!(diffs, 2);
}

#[test]
fn test_apply_overwrites_destination_on_capture() {
    let b = Board::from_grid([
        "q.......", "........", "........", "........", "........", "........", "........",
        "R.......",
    ]);
    let after = b.apply(Move::new(s("a1"), s("a8")));
    assert_eq!(
        after.piece_at(s("a8")),
        Some(Piece {
            color: Color::White,
            kind: PieceKind::Rook,
        })
    );
    assert_eq!(after.piece_at(s("a1")), None);
    // the captured queen is simply gone
    let black_left = Square::all()
        .filter_map(|sq| after.piece_at(sq))
        .filter(|pc| pc.color == Color::Black)
        .count();
    assert_eq!(black_left, 0);
}
