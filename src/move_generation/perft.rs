//! Perft node counting over the pseudo-legal generator.
//!
//! Walks the tree with in-place apply/undo, alternating colours from the
//! board's own side, and tallies leaf moves by kind.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::castle_type_for;
use crate::game_state::chess_types::*;
use crate::move_generation::move_apply::{apply, undo_move};
use crate::move_generation::move_generator::all_moves;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
    }
}

/// Count leaf moves `depth` plies below `position`, starting with the
/// board's own side. The position is restored before returning.
pub fn perft(position: &mut Position, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let side = position.side();
    let mut total = PerftCounts::default();
    perft_recurse(position, side, depth, &mut total)?;
    Ok(total)
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(position: &mut Position, depth: u8) -> ChessResult<Vec<(Move, usize)>> {
    let side = position.side();
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    for mv in all_moves(position, side) {
        let mut local = PerftCounts::default();
        if depth == 1 {
            tally_leaf(position, side, mv, &mut local);
        } else {
            apply(position, mv)?;
            perft_recurse(position, side.opposite(), depth - 1, &mut local)?;
            undo_move(position)?;
        }
        out.push((mv, local.nodes));
    }
    Ok(out)
}

fn perft_recurse(
    position: &mut Position,
    side: Color,
    depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    let moves = all_moves(position, side);

    if depth == 1 {
        for mv in moves {
            tally_leaf(position, side, mv, counts);
        }
        return Ok(());
    }

    for mv in moves {
        apply(position, mv)?;
        let mut child = PerftCounts::default();
        let result = perft_recurse(position, side.opposite(), depth - 1, &mut child);
        undo_move(position)?;
        result?;
        counts.merge(child);
    }
    Ok(())
}

fn tally_leaf(position: &Position, side: Color, mv: Move, counts: &mut PerftCounts) {
    counts.nodes += 1;

    let moved = position.piece_of_color_at(side, mv.start);
    if position.piece_of_color_at(side.opposite(), mv.end).is_some() {
        counts.captures += 1;
    } else if moved == Some(PieceKind::Pawn) && mv.end == position.en_passant_target() {
        counts.captures += 1;
        counts.en_passant += 1;
    }

    if let Some(kind) = moved {
        if castle_type_for(side, kind, mv.start, mv.end).is_some() {
            counts.castles += 1;
        }
    }
}
