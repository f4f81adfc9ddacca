//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Every score here is from the perspective of the board's own side
//! (`Position::side`), which is what `Position::score` already returns. The
//! search walks a single position in place: each apply is undone before its
//! frame returns.

use log::{debug, trace};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::move_apply::{apply, undo_move};
use crate::move_generation::move_generator::all_moves;
use crate::moves::chess_move::Move;

/// Bound used for the initial alpha/beta window.
pub const SCORE_INFINITY: i32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 4 }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self { depth }
    }
}

#[inline]
fn mover(position: &Position, maximizing: bool) -> Color {
    if maximizing {
        position.side()
    } else {
        position.opponent_side()
    }
}

/// Alpha-beta value of `position` searched `depth` plies deep.
///
/// At `depth == 0` this is `position.score()` whatever the window. A node
/// with no moves for the side to move also scores as a leaf.
pub fn alpha_beta(
    position: &mut Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> ChessResult<i32> {
    if depth == 0 {
        return Ok(position.score());
    }

    let moves = all_moves(position, mover(position, maximizing));
    if moves.is_empty() {
        return Ok(position.score());
    }

    if maximizing {
        let mut value = -SCORE_INFINITY;
        for mv in moves {
            apply(position, mv)?;
            let child = alpha_beta(position, depth - 1, alpha, beta, false);
            undo_move(position)?;
            value = value.max(child?);
            if value >= beta {
                trace!("beta cutoff at depth {depth} after {mv}");
                break;
            }
            alpha = alpha.max(value);
        }
        Ok(value)
    } else {
        let mut value = SCORE_INFINITY;
        for mv in moves {
            apply(position, mv)?;
            let child = alpha_beta(position, depth - 1, alpha, beta, true);
            undo_move(position)?;
            value = value.min(child?);
            if value <= alpha {
                trace!("alpha cutoff at depth {depth} after {mv}");
                break;
            }
            beta = beta.min(value);
        }
        Ok(value)
    }
}

/// Unpruned minimax over the same generator. Exponentially slower than
/// `alpha_beta`; kept as its reference.
pub fn minimax(position: &mut Position, depth: u8, maximizing: bool) -> ChessResult<i32> {
    if depth == 0 {
        return Ok(position.score());
    }

    let moves = all_moves(position, mover(position, maximizing));
    if moves.is_empty() {
        return Ok(position.score());
    }

    let mut value = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };
    for mv in moves {
        apply(position, mv)?;
        let child = minimax(position, depth - 1, !maximizing);
        undo_move(position)?;
        let child = child?;
        value = if maximizing { value.max(child) } else { value.min(child) };
    }
    Ok(value)
}

/// Best root move for the board's own side, searched `depth` plies deep
/// (at least one).
///
/// Ties go to the move generated last. Each root child is searched with
/// alpha just below the best value so far, which keeps every value that
/// could equal or beat it exact.
pub fn search_forward(position: &mut Position, depth: u8) -> ChessResult<(i32, Move)> {
    let depth = depth.max(1);
    let side = position.side();
    let moves = all_moves(position, side);

    let mut best: Option<(i32, Move)> = None;
    for mv in moves {
        let alpha = best.map_or(-SCORE_INFINITY, |(score, _)| score - 1);
        apply(position, mv)?;
        let child = alpha_beta(position, depth - 1, alpha, SCORE_INFINITY, false);
        undo_move(position)?;
        let score = child?;
        debug!("root move {mv} scored {score}");

        if best.map_or(true, |(best_score, _)| score >= best_score) {
            best = Some((score, mv));
        }
    }

    match best {
        Some((score, mv)) => {
            debug!("{side} picks {mv} with score {score} at depth {depth}");
            Ok((score, mv))
        }
        None => Err(ChessError::NoMovesAvailable(side)),
    }
}

impl Position {
    #[inline]
    pub fn search_forward(&mut self, depth: u8) -> ChessResult<(i32, Move)> {
        search_forward(self, depth)
    }
}
