//! Square conversions for algebraic coordinates.
//!
//! The only place where single-bit square masks are turned into `0..=63`
//! indices or `e4`-style text, and back.

use crate::errors::{ParsingError, PositionError};
use crate::game_state::chess_types::Square;
use crate::tables::masks::{is_single_square, square_index, MASK_POSITION};

/// Convert algebraic notation (for example: "e4" or "E4") to a square mask.
#[inline]
pub fn algebraic_to_square(text: &str) -> Result<Square, ParsingError> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ParsingError::InvalidSquareText(text.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ParsingError::InvalidSquareText(text.to_owned()));
    }

    let index = usize::from(rank - b'1') * 8 + usize::from(file - b'a');
    Ok(MASK_POSITION[index])
}

/// Convert a single-bit square mask to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, PositionError> {
    if !is_single_square(square) {
        return Err(PositionError::NotASquare(square));
    }

    let index = square_index(square) as u8;
    let file_char = char::from(b'a' + index % 8);
    let rank_char = char::from(b'1' + index / 8);

    Ok(format!("{file_char}{rank_char}"))
}

/// Best-effort label for messages: the coordinate, or the raw mask in hex.
pub fn square_label(square: Square) -> String {
    square_to_algebraic(square).unwrap_or_else(|_| format!("{square:#x}"))
}
