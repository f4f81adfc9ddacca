//! Material values and piece-square tables.
//!
//! Tables are written from White's side with index 0 == a1, so each block
//! below reads rank 1 first. Black looks squares up vertically mirrored.

use crate::game_state::chess_types::{Color, PieceKind};

#[inline]
pub const fn material_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

/// Positional term for a piece of `color` and `kind` on square index `sq`.
#[inline]
pub const fn piece_square_value(color: Color, kind: PieceKind, sq: usize) -> i32 {
    let index = match color {
        Color::White => sq,
        Color::Black => sq ^ 56,
    };
    PIECE_SQUARE_TABLES[kind.index()][index]
}

/// `[piece_kind][square]`, same kind order as `PieceKind::index`.
#[rustfmt::skip]
pub const PIECE_SQUARE_TABLES: [[i32; 64]; 6] = [
    // pawn
    [
          0,   0,   0,   0,   0,   0,   0,   0,
          5,  10,  10, -20, -20,  10,  10,   5,
          5,  -5, -10,   0,   0, -10,  -5,   5,
          0,   0,   0,  20,  20,   0,   0,   0,
          5,   5,  10,  25,  25,  10,   5,   5,
         10,  10,  20,  30,  30,  20,  10,  10,
         50,  50,  50,  50,  50,  50,  50,  50,
          0,   0,   0,   0,   0,   0,   0,   0,
    ],
    // knight
    [
        -50, -40, -30, -30, -30, -30, -40, -50,
        -40, -20,   0,   5,   5,   0, -20, -40,
        -30,   5,  10,  15,  15,  10,   5, -30,
        -30,   0,  15,  20,  20,  15,   0, -30,
        -30,   5,  15,  20,  20,  15,   5, -30,
        -30,   0,  10,  15,  15,  10,   0, -30,
        -40, -20,   0,   0,   0,   0, -20, -40,
        -50, -40, -30, -30, -30, -30, -40, -50,
    ],
    // bishop
    [
        -20, -10, -10, -10, -10, -10, -10, -20,
        -10,   5,   0,   0,   0,   0,   5, -10,
        -10,  10,  10,  10,  10,  10,  10, -10,
        -10,   0,  10,  10,  10,  10,   0, -10,
        -10,   5,   5,  10,  10,   5,   5, -10,
        -10,   0,   5,  10,  10,   5,   0, -10,
        -10,   0,   0,   0,   0,   0,   0, -10,
        -20, -10, -10, -10, -10, -10, -10, -20,
    ],
    // rook
    [
          0,   0,   0,   5,   5,   0,   0,   0,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
         -5,   0,   0,   0,   0,   0,   0,  -5,
          5,  10,  10,  10,  10,  10,  10,   5,
          0,   0,   0,   0,   0,   0,   0,   0,
    ],
    // queen
    [
        -20, -10, -10,  -5,  -5, -10, -10, -20,
        -10,   0,   5,   0,   0,   0,   0, -10,
        -10,   5,   5,   5,   5,   5,   0, -10,
          0,   0,   5,   5,   5,   5,   0,  -5,
         -5,   0,   5,   5,   5,   5,   0,  -5,
        -10,   0,   5,   5,   5,   5,   0, -10,
        -10,   0,   0,   0,   0,   0,   0, -10,
        -20, -10, -10,  -5,  -5, -10, -10, -20,
    ],
    // king
    [
         20,  30,  10,   0,   0,  10,  30,  20,
         20,  20,   0,   0,   0,   0,  20,  20,
        -10, -20, -20, -20, -20, -20, -20, -10,
        -20, -30, -30, -40, -40, -30, -30, -20,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
        -30, -40, -40, -50, -50, -40, -40, -30,
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_tables_mirror_white() {
        // e2 for White, e7 for Black.
        assert_eq!(
            piece_square_value(Color::White, PieceKind::Pawn, 12),
            piece_square_value(Color::Black, PieceKind::Pawn, 52)
        );
        // g1 for White, g8 for Black.
        assert_eq!(
            piece_square_value(Color::White, PieceKind::King, 6),
            piece_square_value(Color::Black, PieceKind::King, 62)
        );
        assert_eq!(piece_square_value(Color::White, PieceKind::King, 6), 30);
    }

    #[test]
    fn king_outweighs_all_other_material() {
        let others = 8 * material_value(PieceKind::Pawn)
            + 2 * material_value(PieceKind::Knight)
            + 2 * material_value(PieceKind::Bishop)
            + 2 * material_value(PieceKind::Rook)
            + 9 * material_value(PieceKind::Queen);
        assert!(material_value(PieceKind::King) > others);
    }
}
