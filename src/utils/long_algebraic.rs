//! Coordinate move text to square pairs and back.
//!
//! Accepts the compact form `e2e4` and the spelled-out form `E2 to E4`, in
//! any letter case. SAN is not understood.

use crate::errors::{ChessResult, ParsingError};
use crate::game_state::chess_types::*;
use crate::move_generation::move_apply::apply_checked;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Parse move text into a `(start, end)` pair of square masks.
pub fn parse_move_text(text: &str) -> Result<(Square, Square), ParsingError> {
    let invalid = || ParsingError::InvalidMoveText(text.to_owned());
    let words: Vec<&str> = text.split_whitespace().collect();

    let (from, to) = match words.as_slice() {
        [compact] if compact.len() == 4 && compact.is_ascii() => (&compact[0..2], &compact[2..4]),
        [from, joiner, to] if joiner.eq_ignore_ascii_case("to") => (*from, *to),
        _ => return Err(invalid()),
    };

    let start = algebraic_to_square(from).map_err(|_| invalid())?;
    let end = algebraic_to_square(to).map_err(|_| invalid())?;
    Ok((start, end))
}

/// `e2e4`-style text for a square pair.
pub fn move_to_long_algebraic(start: Square, end: Square) -> ChessResult<String> {
    Ok(format!("{}{}", square_to_algebraic(start)?, square_to_algebraic(end)?))
}

/// Parse text and apply it through the generator check, so only moves the
/// generator offers from that square are played.
pub fn apply_move_text(position: &mut Position, text: &str) -> ChessResult<Move> {
    let (start, end) = parse_move_text(text)?;
    apply_checked(position, start, end)
}
