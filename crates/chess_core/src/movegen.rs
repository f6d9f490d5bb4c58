use crate::{board::Board, types::*};

/// Generate all pseudo-legal moves for `side`, returning a freshly
/// allocated vector. Internally delegates to `generate_moves_into`.
pub fn generate_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    generate_moves_into(board, side, &mut out);
    out
}

/// Generate all pseudo-legal moves into the provided buffer, reusing it
/// across calls. Squares are scanned in board order (top row first, files
/// left to right), so output order is deterministic.
///
/// Moves obey piece movement and occupancy rules only: nothing here checks
/// whether a move leaves the mover's own king capturable.
pub fn generate_moves_into(board: &Board, side: Color, out: &mut Vec<Move>) {
    out.clear();
    for from in Square::all() {
        let pc = match board.piece_at(from) {
            Some(p) => p,
            None => continue,
        };
        if pc.color != side {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(board, from, side, out),
            PieceKind::Knight => gen_knight(board, from, side, out),
            PieceKind::Bishop => gen_slider(
                board,
                from,
                side,
                out,
                &[(1, 1), (1, -1), (-1, 1), (-1, -1)],
            ),
            PieceKind::Rook => {
                gen_slider(board, from, side, out, &[(1, 0), (-1, 0), (0, 1), (0, -1)])
            }
            PieceKind::Queen => gen_slider(
                board,
                from,
                side,
                out,
                &[
                    (1, 1),
                    (1, -1),
                    (-1, 1),
                    (-1, -1),
                    (1, 0),
                    (-1, 0),
                    (0, 1),
                    (0, -1),
                ],
            ),
            PieceKind::King => gen_king(board, from, side, out),
        }
    }
}

fn gen_pawn(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let x = from.x() as i8;
    let y = from.y() as i8;

    // White moves up the grid (toward row 0), Black down.
    let dir: i8 = match c {
        Color::White => -1,
        Color::Black => 1,
    };

    // forward 1 if empty; no double step, no promotion
    if let Some(to) = Square::at(x, y + dir) {
        if board.piece_at(to).is_none() {
            out.push(Move::new(from, to));
        }
    }

    // diagonal captures, left then right
    for dx in [-1, 1] {
        if let Some(to) = Square::at(x + dx, y + dir) {
            if let Some(tpc) = board.piece_at(to) {
                if tpc.color != c {
                    out.push(Move::new(from, to));
                }
            }
        }
    }
}

fn gen_knight(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let x = from.x() as i8;
    let y = from.y() as i8;
    let jumps = [
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ];
    for (dx, dy) in jumps {
        if let Some(to) = Square::at(x + dx, y + dy) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_king(board: &Board, from: Square, c: Color, out: &mut Vec<Move>) {
    let x = from.x() as i8;
    let y = from.y() as i8;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if let Some(to) = Square::at(x + dx, y + dy) {
                match board.piece_at(to) {
                    None => out.push(Move::new(from, to)),
                    Some(pc) if pc.color != c => out.push(Move::new(from, to)),
                    _ => {}
                }
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, c: Color, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    let x0 = from.x() as i8;
    let y0 = from.y() as i8;
    for &(dx, dy) in dirs {
        let mut x = x0 + dx;
        let mut y = y0 + dy;
        while let Some(to) = Square::at(x, y) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.color != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            x += dx;
            y += dy;
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
