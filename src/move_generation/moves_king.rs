//! King steps plus synthetic castling moves.
//!
//! Castling is offered whenever the flag is set and the squares between king
//! and rook are empty. Whether the king is in check or passes through an
//! attacked square is not examined.

use crate::game_state::chess_rules::castle_geometry;
use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::probe_target;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::king_steps;
use crate::search::evaluation::score_from_move;
use crate::tables::masks::squares_of;

pub fn king_moves(position: &Position, side: Color, origin: Square) -> Vec<Move> {
    let mut out = Vec::with_capacity(10);
    for end in squares_of(king_steps(origin)) {
        probe_target(position, side, PieceKind::King, origin, end, &mut out);
    }
    generate_castling_moves(position, side, origin, &mut out);
    out
}

fn generate_castling_moves(position: &Position, side: Color, origin: Square, out: &mut Vec<Move>) {
    let candidates = match side {
        Color::White => [CastleType::WhiteQueenSide, CastleType::WhiteKingSide],
        Color::Black => [CastleType::BlackQueenSide, CastleType::BlackKingSide],
    };

    for castle in candidates {
        let geometry = castle_geometry(castle);
        if geometry.king_start != origin
            || !position.castling_rights().allows(castle)
            || position.all_pieces() & geometry.between != 0
            || position.get(side, PieceKind::Rook) & geometry.rook_start == 0
        {
            continue;
        }

        let after_king = score_from_move(
            side,
            PieceKind::King,
            geometry.king_start,
            geometry.king_end,
            None,
            position.white_score(),
        );
        let score = score_from_move(
            side,
            PieceKind::Rook,
            geometry.rook_start,
            geometry.rook_end,
            None,
            after_king,
        );
        out.push(Move::new(geometry.king_start, geometry.king_end, Some(score)));
    }
}
