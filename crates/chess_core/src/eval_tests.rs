use super::*;

fn color_swapped(board: &Board) -> Board {
    let mut out = Board::empty();
    for sq in Square::all() {
        if let Some(pc) = board.piece_at(sq) {
            out.set_piece(
                sq,
                Some(Piece {
                    color: pc.color.other(),
                    kind: pc.kind,
                }),
            );
        }
    }
    out
}

#[test]
fn test_startpos_is_balanced() {
    let b = Board::startpos();
    assert_eq!(evaluate(&b), 0);
    assert_eq!(material(&b, Color::White), 39);
    assert_eq!(material(&b, Color::Black), 39);
}

#[test]
fn test_piece_values() {
    assert_eq!(piece_value(PieceKind::Pawn), 1);
    assert_eq!(piece_value(PieceKind::Knight), 3);
    assert_eq!(piece_value(PieceKind::Bishop), 3);
    assert_eq!(piece_value(PieceKind::Rook), 5);
    assert_eq!(piece_value(PieceKind::Queen), 9);
    assert_eq!(piece_value(PieceKind::King), 0);
}

#[test]
fn test_material_imbalance_signs() {
    // White is a queen up, Black a rook up: +9 - 5
    let b = Board::from_grid([
        "r.......", "........", "........", "........", "........", "........", "........",
        "Q.......",
    ]);
    assert_eq!(evaluate(&b), 4);
    assert_eq!(material(&b, Color::White), 9);
    assert_eq!(material(&b, Color::Black), 5);
}

#[test]
fn test_color_swap_negates_score() {
    let boards = [
        Board::startpos(),
        Board::from_grid([
            "r..qk...", "ppp.....", "..n.....", "........", "....P...", "..N..N..", "PP......",
            "R...K..Q",
        ]),
        Board::empty(),
    ];
    for b in boards {
        assert_eq!(evaluate(&color_swapped(&b)), -evaluate(&b));
    }
}

#[test]
fn test_kings_are_worthless() {
    let b = Board::from_grid([
        "k.......", "........", "........", "........", "........", "........", "........",
        "K.......",
    ]);
    assert_eq!(evaluate(&b), 0);
    assert_eq!(material(&b, Color::White), 0);
}
