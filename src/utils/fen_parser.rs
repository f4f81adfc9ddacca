//! FEN-to-Position parser.
//!
//! Builds a position from the first four Forsyth-Edwards fields: placement,
//! side, castling and en-passant target. Halfmove and fullmove clocks may be
//! present but are not modelled and only checked for being numbers.

use crate::errors::ParsingError;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

fn invalid(message: impl Into<String>) -> ParsingError {
    ParsingError::InvalidFen(message.into())
}

pub fn parse_fen(fen: &str) -> Result<Position, ParsingError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 4 && fields.len() != 6 {
        return Err(invalid(format!(
            "expected 4 or 6 fields, found {} in {fen:?}",
            fields.len()
        )));
    }

    let pieces = parse_board(fields[0])?;
    let side = parse_side(fields[1])?;
    let castling_rights = parse_castling_rights(fields[2])?;
    let en_passant_target = parse_en_passant_target(fields[3])?;

    for clock in fields.iter().skip(4) {
        clock
            .parse::<u32>()
            .map_err(|_| invalid(format!("invalid clock field: {clock}")))?;
    }

    Position::from_pieces(side, pieces, castling_rights, en_passant_target)
        .map_err(|e| invalid(e.to_string()))
}

fn parse_board(board_part: &str) -> Result<[[Bitboard; 6]; 2], ParsingError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut pieces = [[0u64; 6]; 2];
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as usize;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?;
            if file >= 8 {
                return Err(invalid(format!("rank {} has too many files", board_rank + 1)));
            }

            pieces[color.index()][kind.index()] |= 1u64 << (board_rank * 8 + file);
            file += 1;
        }

        if file != 8 {
            return Err(invalid(format!("rank {} does not sum to 8 files", board_rank + 1)));
        }
    }

    Ok(pieces)
}

fn parse_side(side_part: &str) -> Result<Color, ParsingError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("invalid side field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ParsingError> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_king_side = true,
            'Q' => rights.white_queen_side = true,
            'k' => rights.black_king_side = true,
            'q' => rights.black_queen_side = true,
            _ => return Err(invalid(format!("invalid castling character: {ch}"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_target(en_passant_part: &str) -> Result<Bitboard, ParsingError> {
    if en_passant_part == "-" {
        return Ok(0);
    }
    algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(format!("invalid en-passant field: {en_passant_part}")))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
