//! Pawn pushes, diagonal captures and en-passant captures.
//!
//! Promotion is not handled: a pawn reaching the last rank is an ordinary
//! move, and a pawn already on the last rank has no moves.

use crate::game_state::chess_rules::{en_passant_capture_rank, pawn_start_rank};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::search::evaluation::{score_from_en_passant, score_from_move};
use crate::tables::masks::{FILE_A, FILE_H, RANK_1, RANK_8};

#[inline]
const fn forward(side: Color, square: Square, ranks: u32) -> Square {
    match side {
        Color::White => square << (8 * ranks),
        Color::Black => square >> (8 * ranks),
    }
}

/// Square diagonally ahead towards the a-file and towards the h-file.
#[inline]
const fn diagonals(side: Color, square: Square) -> [Square; 2] {
    let towards_a = if square & FILE_A != 0 {
        0
    } else {
        match side {
            Color::White => square << 7,
            Color::Black => square >> 9,
        }
    };
    let towards_h = if square & FILE_H != 0 {
        0
    } else {
        match side {
            Color::White => square << 9,
            Color::Black => square >> 7,
        }
    };
    [towards_a, towards_h]
}

pub fn pawn_moves(position: &Position, side: Color, origin: Square) -> Vec<Move> {
    let last_rank = match side {
        Color::White => RANK_8,
        Color::Black => RANK_1,
    };
    if origin & last_rank != 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(4);
    let prior = position.white_score();
    let occupied = position.all_pieces();

    let single = forward(side, origin, 1);
    if occupied & single == 0 {
        let score = score_from_move(side, PieceKind::Pawn, origin, single, None, prior);
        out.push(Move::new(origin, single, Some(score)));

        let double = forward(side, origin, 2);
        if origin & pawn_start_rank(side) != 0 && occupied & double == 0 {
            let score = score_from_move(side, PieceKind::Pawn, origin, double, None, prior);
            out.push(Move::new(origin, double, Some(score)));
        }
    }

    let enemy = side.opposite();
    for end in diagonals(side, origin) {
        if end == 0 {
            continue;
        }
        if let Some(captured) = position.piece_of_color_at(enemy, end) {
            let score = score_from_move(side, PieceKind::Pawn, origin, end, Some(captured), prior);
            out.push(Move::new(origin, end, Some(score)));
        } else if end == position.en_passant_target()
            && end & en_passant_capture_rank(side) != 0
            && position.get(enemy, PieceKind::Pawn) & forward(enemy, end, 1) != 0
        {
            let victim = forward(enemy, end, 1);
            let score = score_from_en_passant(side, origin, end, victim, prior);
            out.push(Move::new(origin, end, Some(score)));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::pawn_moves;
    use crate::game_state::chess_types::*;

    fn ends(moves: &[crate::moves::chess_move::Move]) -> Vec<u64> {
        moves.iter().map(|m| m.end).collect()
    }

    #[test]
    fn starting_pawn_pushes_one_or_two() {
        let position = Position::new(Color::White);
        assert_eq!(ends(&pawn_moves(&position, Color::White, 1 << 12)), vec![1 << 20, 1 << 28]);
        assert_eq!(ends(&pawn_moves(&position, Color::Black, 1 << 52)), vec![1 << 44, 1 << 36]);
    }

    #[test]
    fn blocked_pawn_cannot_jump_over() {
        let position =
            Position::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(pawn_moves(&position, Color::White, 1 << 12).is_empty());

        let position =
            Position::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(ends(&pawn_moves(&position, Color::White, 1 << 12)), vec![1 << 20]);
    }

    #[test]
    fn captures_only_onto_enemy_pieces_without_wrapping() {
        let position =
            Position::from_fen("4k3/8/8/8/8/p6p/P6P/4K3 w - - 0 1").expect("FEN should parse");
        // a2 and h2 are blocked ahead; only the inward diagonal exists and it is empty.
        assert!(pawn_moves(&position, Color::White, 1 << 8).is_empty());
        assert!(pawn_moves(&position, Color::White, 1 << 15).is_empty());

        let position =
            Position::from_fen("4k3/8/8/8/8/1p1N4/2P5/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(
            ends(&pawn_moves(&position, Color::White, 1 << 10)),
            vec![1 << 18, 1 << 26, 1 << 17]
        );
    }

    #[test]
    fn en_passant_capture_lands_on_target() {
        let position = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1")
            .expect("FEN should parse");
        let moves = pawn_moves(&position, Color::White, 1 << 36);
        assert_eq!(ends(&moves), vec![1 << 44, 1 << 43]);

        let mut expected = position.clone();
        expected.set(Color::Black, PieceKind::Pawn, 0).expect("setup square should be free");
        expected.set(Color::White, PieceKind::Pawn, 1 << 43).expect("setup square should be free");
        assert_eq!(moves[1].score, Some(expected.white_score()));
    }

    #[test]
    fn own_double_push_target_is_not_capturable() {
        let position = Position::from_fen("4k3/8/8/8/4P3/8/3P4/4K3 w - e3 0 1")
            .expect("FEN should parse");
        let moves = pawn_moves(&position, Color::White, 1 << 11);
        assert_eq!(ends(&moves), vec![1 << 19, 1 << 27]);
    }

    #[test]
    fn pawn_reaching_last_rank_does_not_promote() {
        let position =
            Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let moves = pawn_moves(&position, Color::White, 1 << 48);
        assert_eq!(ends(&moves), vec![1 << 56]);

        let on_last_rank =
            Position::from_fen("P3k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(pawn_moves(&on_last_rank, Color::White, 1 << 56).is_empty());
    }
}
