//! Errors used throughout the engine.
//!
//! `ChessError` is the single error type returned by fallible operations. It
//! wraps three narrower families:
//! - `PositionError`: a move references an off-board, empty or
//!   same-side-occupied square.
//! - `MoveError`: the squares are fine but the move is not one the generator
//!   offers from that origin.
//! - `ParsingError`: malformed square, move or FEN text.
//!
//! Undoing with an empty history is its own variant rather than a position
//! error, so callers can treat "nothing to take back" as a normal outcome.

use std::borrow::Borrow;

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};
use crate::utils::algebraic::square_label;

pub type ChessResult<T> = Result<T, ChessError>;

fn label<S: Borrow<Square>>(square: S) -> String {
    square_label(*square.borrow())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("mask {0:#x} does not name exactly one board square")]
    NotASquare(u64),

    #[error("piece bitboards overlap on {0:#x}")]
    OverlappingPieces(u64),

    #[error("there is no piece at {} to move", label(.0))]
    EmptySquare(Square),

    #[error(
        "can't move from {} to {}, both squares hold {side} pieces",
        label(.start),
        label(.end)
    )]
    SameSideOccupied { start: Square, end: Square, side: Color },

    #[error(
        "castling from {} needs a rook on {}",
        label(.king_start),
        label(.rook_start)
    )]
    MissingCastlingRook { king_start: Square, rook_start: Square },

    #[error("castling from {} is blocked", label(.king_start))]
    CastlingBlocked { king_start: Square },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{}{} is not a valid move", label(.start), label(.end))]
    NotGenerated { start: Square, end: Square },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsingError {
    #[error("invalid square text: {0:?}")]
    InvalidSquareText(String),

    #[error("couldn't parse move {0:?}")]
    InvalidMoveText(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error(transparent)]
    Position(#[from] PositionError),

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Parsing(#[from] ParsingError),

    #[error("no moves have been made yet to undo")]
    NoMovesToUndo,

    #[error("{0} has no moves available")]
    NoMovesAvailable(Color),
}
