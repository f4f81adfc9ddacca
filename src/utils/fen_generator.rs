use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

/// FEN for `position`. Clocks are not modelled and always come out as `0 1`.
pub fn generate_fen(position: &Position) -> String {
    let side = match position.side() {
        Color::White => "w",
        Color::Black => "b",
    };

    format!(
        "{} {} {} {} 0 1",
        generate_board_field(position),
        side,
        generate_castling_field(position.castling_rights()),
        generate_en_passant_field(position.en_passant_target()),
    )
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for rank in (0..8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8 {
            match position.piece_at(1u64 << (rank * 8 + file)) {
                Some((color, kind)) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(color, kind));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(color: Color, kind: PieceKind) -> char {
    let base = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();
    for (allowed, ch) in [
        (rights.white_king_side, 'K'),
        (rights.white_queen_side, 'Q'),
        (rights.black_king_side, 'k'),
        (rights.black_queen_side, 'q'),
    ] {
        if allowed {
            out.push(ch);
        }
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

fn generate_en_passant_field(target: Bitboard) -> String {
    if target == 0 {
        return "-".to_owned();
    }
    square_to_algebraic(target).unwrap_or_else(|_| "-".to_owned())
}
