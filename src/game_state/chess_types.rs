//! Shared board vocabulary: sides, piece kinds, castling and square aliases.
//!
//! Squares are single-bit masks rather than `0..=63` indices, so setting,
//! clearing and querying a square is one bitwise operation against a
//! bitboard. Indices only appear at the presentation boundary.

use std::fmt;

pub use crate::game_state::position::Position;
pub use crate::game_state::undo_state::UndoRecord;

/// 64-bit occupancy mask; bit `i` set means square `i` is occupied.
pub type Bitboard = u64;

/// A board square as a mask with exactly one bit set (`1 << 0 == a1`).
pub type Square = u64;

/// Side of a piece, and the perspective a board plays from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Piece kind (color is represented separately for cache-friendly layouts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// Index order of the twelve piece bitboards within one side.
pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

pub const ALL_COLORS: [Color; 2] = [Color::White, Color::Black];

/// One of the four castling moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleType {
    WhiteKingSide,
    WhiteQueenSide,
    BlackKingSide,
    BlackQueenSide,
}

impl CastleType {
    pub const ALL: [CastleType; 4] = [
        CastleType::WhiteKingSide,
        CastleType::WhiteQueenSide,
        CastleType::BlackKingSide,
        CastleType::BlackQueenSide,
    ];

    #[inline]
    pub const fn color(self) -> Color {
        match self {
            CastleType::WhiteKingSide | CastleType::WhiteQueenSide => Color::White,
            CastleType::BlackKingSide | CastleType::BlackQueenSide => Color::Black,
        }
    }
}

/// Four independent castling flags. Each flag only ever goes from `true` to
/// `false` while moves are applied; undo restores them from the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_king_side: true,
        white_queen_side: true,
        black_king_side: true,
        black_queen_side: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_king_side: false,
        white_queen_side: false,
        black_king_side: false,
        black_queen_side: false,
    };

    #[inline]
    pub const fn allows(self, castle: CastleType) -> bool {
        match castle {
            CastleType::WhiteKingSide => self.white_king_side,
            CastleType::WhiteQueenSide => self.white_queen_side,
            CastleType::BlackKingSide => self.black_king_side,
            CastleType::BlackQueenSide => self.black_queen_side,
        }
    }

    #[inline]
    pub fn revoke(&mut self, castle: CastleType) {
        match castle {
            CastleType::WhiteKingSide => self.white_king_side = false,
            CastleType::WhiteQueenSide => self.white_queen_side = false,
            CastleType::BlackKingSide => self.black_king_side = false,
            CastleType::BlackQueenSide => self.black_queen_side = false,
        }
    }

    #[inline]
    pub fn revoke_side(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_king_side = false;
                self.white_queen_side = false;
            }
            Color::Black => {
                self.black_king_side = false;
                self.black_queen_side = false;
            }
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}
