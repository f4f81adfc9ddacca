//! Rook move generation by ray-casting.

use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::{slide, RayDirection};
use crate::moves::chess_move::Move;
use crate::tables::masks::{FILE_A, FILE_H, RANK_1, RANK_8};

/// Up, down, right, left.
pub const ROOK_DIRECTIONS: [RayDirection; 4] = [
    RayDirection::new(8, RANK_8),
    RayDirection::new(-8, RANK_1),
    RayDirection::new(1, FILE_H),
    RayDirection::new(-1, FILE_A),
];

pub fn rook_moves(position: &Position, side: Color, origin: Square) -> Vec<Move> {
    let mut out = Vec::with_capacity(14);
    generate_rook_moves(position, side, PieceKind::Rook, origin, &mut out);
    out
}

pub(crate) fn generate_rook_moves(
    position: &Position,
    side: Color,
    kind: PieceKind,
    origin: Square,
    out: &mut Vec<Move>,
) {
    slide(position, side, kind, origin, &ROOK_DIRECTIONS, out);
}
