use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::probe_target;
use crate::moves::chess_move::Move;
use crate::moves::knight_moves::knight_jumps;
use crate::tables::masks::squares_of;

/// Knight jumps from `origin`, lowest destination square first.
pub fn knight_moves(position: &Position, side: Color, origin: Square) -> Vec<Move> {
    let mut out = Vec::with_capacity(8);
    for end in squares_of(knight_jumps(origin)) {
        probe_target(position, side, PieceKind::Knight, origin, end, &mut out);
    }
    out
}
