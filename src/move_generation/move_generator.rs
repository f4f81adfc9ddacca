//! Pseudo-legal move generation entry points.
//!
//! Dispatches to the per-piece generators. Nothing here mutates the
//! position, and nothing checks whether the moving side's king is left
//! attacked.

use crate::errors::{ChessResult, PositionError};
use crate::game_state::chess_types::*;
use crate::move_generation::moves_bishop::bishop_moves;
use crate::move_generation::moves_king::king_moves;
use crate::move_generation::moves_knight::knight_moves;
use crate::move_generation::moves_pawn::pawn_moves;
use crate::move_generation::moves_queen::queen_moves;
use crate::move_generation::moves_rook::rook_moves;
use crate::moves::chess_move::Move;
use crate::tables::masks::{is_single_square, squares_of};

/// Order in which piece kinds are enumerated for a whole side.
pub const GENERATION_ORDER: [PieceKind; 6] = [
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Pawn,
];

/// Moves for a `kind` of `side` standing on `origin`. Returns an empty list
/// when no such piece stands there.
pub fn moves_from(
    position: &Position,
    side: Color,
    kind: PieceKind,
    origin: Square,
) -> ChessResult<Vec<Move>> {
    if !is_single_square(origin) {
        return Err(PositionError::NotASquare(origin).into());
    }
    if position.get(side, kind) & origin == 0 {
        return Ok(Vec::new());
    }
    Ok(piece_moves(position, side, kind, origin))
}

/// Moves for every `kind` piece of `side`, origins scanned from a1 upward.
pub fn moves_for_kind(position: &Position, side: Color, kind: PieceKind) -> Vec<Move> {
    let mut out = Vec::new();
    for origin in squares_of(position.get(side, kind)) {
        out.extend(piece_moves(position, side, kind, origin));
    }
    out
}

/// Every pseudo-legal move for `side`, in `GENERATION_ORDER`.
pub fn all_moves(position: &Position, side: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for kind in GENERATION_ORDER {
        for origin in squares_of(position.get(side, kind)) {
            out.extend(piece_moves(position, side, kind, origin));
        }
    }
    out
}

/// Generator query with the optional filters of the public API: no kind
/// means the whole side; a kind without an origin means every piece of that
/// kind.
pub fn get_moves(
    position: &Position,
    side: Color,
    kind: Option<PieceKind>,
    origin: Option<Square>,
) -> ChessResult<Vec<Move>> {
    match (kind, origin) {
        (Some(kind), Some(origin)) => moves_from(position, side, kind, origin),
        (Some(kind), None) => Ok(moves_for_kind(position, side, kind)),
        (None, Some(origin)) => {
            if !is_single_square(origin) {
                return Err(PositionError::NotASquare(origin).into());
            }
            match position.piece_of_color_at(side, origin) {
                Some(kind) => Ok(piece_moves(position, side, kind, origin)),
                None => Ok(Vec::new()),
            }
        }
        (None, None) => Ok(all_moves(position, side)),
    }
}

#[inline]
fn piece_moves(position: &Position, side: Color, kind: PieceKind, origin: Square) -> Vec<Move> {
    debug_assert!(is_single_square(origin));
    match kind {
        PieceKind::King => king_moves(position, side, origin),
        PieceKind::Queen => queen_moves(position, side, origin),
        PieceKind::Rook => rook_moves(position, side, origin),
        PieceKind::Bishop => bishop_moves(position, side, origin),
        PieceKind::Knight => knight_moves(position, side, origin),
        PieceKind::Pawn => pawn_moves(position, side, origin),
    }
}
