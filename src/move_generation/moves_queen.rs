use crate::game_state::chess_types::*;
use crate::move_generation::moves_bishop::generate_bishop_moves;
use crate::move_generation::moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Rook rays followed by bishop rays.
pub fn queen_moves(position: &Position, side: Color, origin: Square) -> Vec<Move> {
    let mut out = Vec::with_capacity(27);
    generate_rook_moves(position, side, PieceKind::Queen, origin, &mut out);
    generate_bishop_moves(position, side, PieceKind::Queen, origin, &mut out);
    out
}
