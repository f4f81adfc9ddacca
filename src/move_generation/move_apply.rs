//! Move execution with exact undo.
//!
//! `apply_move` mutates the position in place and pushes one `UndoRecord`;
//! `undo_move` pops it and restores the prior state bit for bit. Every check
//! runs before the first bitboard write, so a rejected move leaves the
//! position untouched.
//!
//! The side to move is not tracked here: `Position::side` is the board's own
//! perspective and callers decide whose piece moves.

use log::trace;

use crate::errors::{ChessError, ChessResult, MoveError, PositionError};
use crate::game_state::chess_rules::{
    castle_geometry, castle_type_for, castle_type_for_rook_corner, en_passant_capture_rank,
};
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::get_moves;
use crate::moves::chess_move::Move;
use crate::search::evaluation::evaluate_score;
use crate::tables::masks::{is_single_square, square_index, CLEAR_POSITION, FILE_A, FILE_H};

/// Move whatever stands on `start` to `end`.
///
/// `precomputed_score` is the White-perspective score the generator attached
/// to the move; without it the score is recomputed from scratch.
pub fn apply_move(
    position: &mut Position,
    start: Square,
    end: Square,
    precomputed_score: Option<i32>,
) -> ChessResult<()> {
    for square in [start, end] {
        if !is_single_square(square) {
            return Err(PositionError::NotASquare(square).into());
        }
    }

    let (side, kind) = position
        .piece_at(start)
        .ok_or(PositionError::EmptySquare(start))?;
    let enemy = side.opposite();

    let mut captured = match position.piece_at(end) {
        Some((end_side, _)) if end_side == side => {
            return Err(PositionError::SameSideOccupied { start, end, side }.into());
        }
        Some((_, end_kind)) => Some((end_kind, end)),
        None => None,
    };

    let castle = castle_type_for(side, kind, start, end);
    if let Some(castle) = castle {
        let geometry = castle_geometry(castle);
        if position.get(side, PieceKind::Rook) & geometry.rook_start == 0 {
            return Err(PositionError::MissingCastlingRook {
                king_start: start,
                rook_start: geometry.rook_start,
            }
            .into());
        }
        if position.all_pieces() & geometry.between != 0 {
            return Err(PositionError::CastlingBlocked { king_start: start }.into());
        }
    }

    if kind == PieceKind::Pawn && captured.is_none() && end == position.en_passant_target() {
        if let Some(victim) = en_passant_victim(position, side, start, end) {
            captured = Some((PieceKind::Pawn, victim));
        }
    }

    let record = UndoRecord {
        start,
        end,
        moved_side: side,
        moved_piece: kind,
        captured_side: captured.map(|_| enemy),
        captured_piece: captured.map(|(captured_kind, _)| captured_kind),
        captured_bitboard: captured
            .map(|(captured_kind, _)| position.get(enemy, captured_kind))
            .unwrap_or(0),
        castle,
        prev_score: position.score,
        prev_castling_rights: position.castling_rights,
        prev_en_passant_target: position.en_passant_target,
    };
    position.history.push(record);

    revoke_castling_rights(position, side, kind, start, end);

    position.en_passant_target = if kind == PieceKind::Pawn && is_double_push(start, end) {
        skipped_square(side, start)
    } else {
        0
    };

    if let Some((captured_kind, victim)) = captured {
        position.pieces[enemy.index()][captured_kind.index()] &=
            CLEAR_POSITION[square_index(victim)];
    }

    transfer(position, side, kind, start, end);

    if let Some(castle) = castle {
        let geometry = castle_geometry(castle);
        transfer(position, side, PieceKind::Rook, geometry.rook_start, geometry.rook_end);
    }

    position.recalc_occupancy();
    position.score = match precomputed_score {
        Some(score) => score,
        None => evaluate_score(position),
    };

    Ok(())
}

/// Take back the last applied move.
pub fn undo_move(position: &mut Position) -> ChessResult<()> {
    let Some(record) = position.history.pop() else {
        trace!("undo requested with an empty history");
        return Err(ChessError::NoMovesToUndo);
    };

    position.score = record.prev_score;
    position.castling_rights = record.prev_castling_rights;
    position.en_passant_target = record.prev_en_passant_target;

    transfer(position, record.moved_side, record.moved_piece, record.end, record.start);

    if let Some(castle) = record.castle {
        let geometry = castle_geometry(castle);
        transfer(
            position,
            record.moved_side,
            PieceKind::Rook,
            geometry.rook_end,
            geometry.rook_start,
        );
    } else if let (Some(captured_side), Some(captured_piece)) =
        (record.captured_side, record.captured_piece)
    {
        position.pieces[captured_side.index()][captured_piece.index()] = record.captured_bitboard;
    }

    position.recalc_occupancy();
    Ok(())
}

/// Apply a generated move, reusing its precomputed score.
#[inline]
pub fn apply(position: &mut Position, mv: Move) -> ChessResult<()> {
    apply_move(position, mv.start, mv.end, mv.score)
}

/// Apply `start -> end` only if the generator offers it for the piece on
/// `start`.
pub fn apply_checked(position: &mut Position, start: Square, end: Square) -> ChessResult<Move> {
    let (side, _) = position
        .piece_at(start)
        .ok_or(PositionError::EmptySquare(start))?;
    let mv = get_moves(position, side, None, Some(start))?
        .into_iter()
        .find(|mv| mv.end == end)
        .ok_or(MoveError::NotGenerated { start, end })?;
    apply(position, mv)?;
    Ok(mv)
}

/// Apply each `(start, end)` pair in order, stopping at the first failure.
pub fn apply_all(position: &mut Position, moves: &[(Square, Square)]) -> ChessResult<()> {
    for &(start, end) in moves {
        apply_move(position, start, end, None)?;
    }
    Ok(())
}

impl Position {
    #[inline]
    pub fn apply_move(&mut self, start: Square, end: Square) -> ChessResult<()> {
        apply_move(self, start, end, None)
    }

    #[inline]
    pub fn apply(&mut self, mv: Move) -> ChessResult<()> {
        apply(self, mv)
    }

    #[inline]
    pub fn undo_move(&mut self) -> ChessResult<()> {
        undo_move(self)
    }
}

#[inline]
fn transfer(position: &mut Position, side: Color, kind: PieceKind, from: Square, to: Square) {
    let board = &mut position.pieces[side.index()][kind.index()];
    *board = (*board & CLEAR_POSITION[square_index(from)]) | to;
}

#[inline]
fn is_double_push(start: Square, end: Square) -> bool {
    start << 16 == end || start >> 16 == end
}

#[inline]
fn skipped_square(side: Color, start: Square) -> Square {
    match side {
        Color::White => start << 8,
        Color::Black => start >> 8,
    }
}

/// Square of the enemy pawn taken by a diagonal pawn move onto the
/// en-passant target, if that is what this move is.
fn en_passant_victim(
    position: &Position,
    side: Color,
    start: Square,
    end: Square,
) -> Option<Square> {
    let diagonal = match side {
        Color::White => {
            (start & FILE_A == 0 && start << 7 == end) || (start & FILE_H == 0 && start << 9 == end)
        }
        Color::Black => {
            (start & FILE_A == 0 && start >> 9 == end) || (start & FILE_H == 0 && start >> 7 == end)
        }
    };
    if !diagonal || end & en_passant_capture_rank(side) == 0 {
        return None;
    }

    let enemy = side.opposite();
    let victim = match side {
        Color::White => end >> 8,
        Color::Black => end << 8,
    };
    (position.get(enemy, PieceKind::Pawn) & victim != 0).then_some(victim)
}

fn revoke_castling_rights(
    position: &mut Position,
    side: Color,
    kind: PieceKind,
    start: Square,
    end: Square,
) {
    if kind == PieceKind::King {
        position.castling_rights.revoke_side(side);
    }
    // A rook leaving its corner, or anything landing on a corner, ends that
    // corner's castling right.
    for corner in [start, end] {
        if let Some(castle) = castle_type_for_rook_corner(corner) {
            position.castling_rights.revoke(castle);
        }
    }
}
