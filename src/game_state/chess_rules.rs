//! Canonical chess-rule constants.
//!
//! Starting layout bitboards, castling geometry and the standard starting
//! position in FEN.

use crate::game_state::chess_types::{Bitboard, CastleType, Color, PieceKind, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Starting bitboards indexed `[color][piece_kind]`.
pub const STARTING_PIECES: [[Bitboard; 6]; 2] = [
    [
        0x0000_0000_0000_FF00, // pawns a2..h2
        0x0000_0000_0000_0042, // knights b1, g1
        0x0000_0000_0000_0024, // bishops c1, f1
        0x0000_0000_0000_0081, // rooks a1, h1
        0x0000_0000_0000_0008, // queen d1
        0x0000_0000_0000_0010, // king e1
    ],
    [
        0x00FF_0000_0000_0000,
        0x4200_0000_0000_0000,
        0x2400_0000_0000_0000,
        0x8100_0000_0000_0000,
        0x0800_0000_0000_0000,
        0x1000_0000_0000_0000,
    ],
];

/// Rank a side's pawns start on (double pushes are only offered from here).
pub const fn pawn_start_rank(color: Color) -> Bitboard {
    match color {
        Color::White => 0x0000_0000_0000_FF00,
        Color::Black => 0x00FF_0000_0000_0000,
    }
}

/// Rank holding the square an enemy double push skips over, i.e. the only
/// rank an en-passant capture by `color` may land on.
pub const fn en_passant_capture_rank(color: Color) -> Bitboard {
    match color {
        Color::White => 0x0000_FF00_0000_0000,
        Color::Black => 0x0000_0000_00FF_0000,
    }
}

/// Squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleGeometry {
    pub king_start: Square,
    pub king_end: Square,
    pub rook_start: Square,
    pub rook_end: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub between: Bitboard,
}

pub const fn castle_geometry(castle: CastleType) -> CastleGeometry {
    match castle {
        CastleType::WhiteKingSide => CastleGeometry {
            king_start: 1 << 4,
            king_end: 1 << 6,
            rook_start: 1 << 7,
            rook_end: 1 << 5,
            between: (1 << 5) | (1 << 6),
        },
        CastleType::WhiteQueenSide => CastleGeometry {
            king_start: 1 << 4,
            king_end: 1 << 2,
            rook_start: 1 << 0,
            rook_end: 1 << 3,
            between: (1 << 1) | (1 << 2) | (1 << 3),
        },
        CastleType::BlackKingSide => CastleGeometry {
            king_start: 1 << 60,
            king_end: 1 << 62,
            rook_start: 1 << 63,
            rook_end: 1 << 61,
            between: (1 << 61) | (1 << 62),
        },
        CastleType::BlackQueenSide => CastleGeometry {
            king_start: 1 << 60,
            king_end: 1 << 58,
            rook_start: 1 << 56,
            rook_end: 1 << 59,
            between: (1 << 57) | (1 << 58) | (1 << 59),
        },
    }
}

/// Castle performed by moving `kind` of `color` from `start` to `end`, if any.
pub fn castle_type_for(
    color: Color,
    kind: PieceKind,
    start: Square,
    end: Square,
) -> Option<CastleType> {
    if kind != PieceKind::King {
        return None;
    }
    CastleType::ALL.into_iter().find(|&castle| {
        let geometry = castle_geometry(castle);
        castle.color() == color && geometry.king_start == start && geometry.king_end == end
    })
}

/// Castling right tied to the rook that starts on `corner`, if any.
pub fn castle_type_for_rook_corner(corner: Square) -> Option<CastleType> {
    CastleType::ALL
        .into_iter()
        .find(|&castle| castle_geometry(castle).rook_start == corner)
}
