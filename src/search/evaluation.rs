//! Material plus piece-square evaluation.
//!
//! The total is always expressed from White's point of view: White pieces
//! add their material and positional terms, Black pieces subtract theirs.
//! `score_from_move` updates that total for one move without rescanning the
//! board; `evaluate_score` recomputes it from scratch.

use crate::game_state::chess_types::*;
use crate::tables::masks::{square_index, squares_of};
use crate::tables::piece_square::{material_value, piece_square_value};

#[inline]
const fn sign(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Signed contribution of one piece standing on `square` to the White total.
#[inline]
pub fn piece_term(color: Color, kind: PieceKind, square: Square) -> i32 {
    sign(color) * (material_value(kind) + piece_square_value(color, kind, square_index(square)))
}

/// New White-perspective total after `kind` of `side` moves from `start` to
/// `end`, capturing `captured_kind` on `end` if any.
pub fn score_from_move(
    side: Color,
    kind: PieceKind,
    start: Square,
    end: Square,
    captured_kind: Option<PieceKind>,
    prior_score: i32,
) -> i32 {
    let from = piece_square_value(side, kind, square_index(start));
    let to = piece_square_value(side, kind, square_index(end));
    let mut score = prior_score + sign(side) * (to - from);

    if let Some(captured) = captured_kind {
        score -= piece_term(side.opposite(), captured, end);
    }

    score
}

/// Like `score_from_move` for a pawn capturing en passant, where the victim
/// stands on `captured_square` rather than on `end`.
pub fn score_from_en_passant(
    side: Color,
    start: Square,
    end: Square,
    captured_square: Square,
    prior_score: i32,
) -> i32 {
    let score = score_from_move(side, PieceKind::Pawn, start, end, None, prior_score);
    score - piece_term(side.opposite(), PieceKind::Pawn, captured_square)
}

/// Full White-perspective recomputation over every occupied square.
pub fn evaluate_score(position: &Position) -> i32 {
    let mut score = 0i32;
    for color in ALL_COLORS {
        for kind in ALL_PIECE_KINDS {
            for square in squares_of(position.get(color, kind)) {
                score += piece_term(color, kind, square);
            }
        }
    }
    score
}
