//! Bishop move generation by ray-casting.

use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::{slide, RayDirection};
use crate::moves::chess_move::Move;
use crate::tables::masks::{FILE_A, FILE_H, RANK_1, RANK_8};

/// Up-right, down-right, up-left, down-left.
pub const BISHOP_DIRECTIONS: [RayDirection; 4] = [
    RayDirection::new(9, FILE_H | RANK_8),
    RayDirection::new(-7, FILE_H | RANK_1),
    RayDirection::new(7, FILE_A | RANK_8),
    RayDirection::new(-9, FILE_A | RANK_1),
];

pub fn bishop_moves(position: &Position, side: Color, origin: Square) -> Vec<Move> {
    let mut out = Vec::with_capacity(13);
    generate_bishop_moves(position, side, PieceKind::Bishop, origin, &mut out);
    out
}

pub(crate) fn generate_bishop_moves(
    position: &Position,
    side: Color,
    kind: PieceKind,
    origin: Square,
    out: &mut Vec<Move>,
) {
    slide(position, side, kind, origin, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::bishop_moves;
    use crate::game_state::chess_types::*;

    #[test]
    fn bishop_from_d4_on_empty_board_has_thirteen_moves() {
        let mut position = Position::empty(Color::Black);
        let d4 = 1u64 << 27;
        position.set(Color::Black, PieceKind::Bishop, d4).expect("setup square should be free");
        assert_eq!(bishop_moves(&position, Color::Black, d4).len(), 13);
    }

    #[test]
    fn diagonals_from_the_a_file_do_not_wrap() {
        let mut position = Position::empty(Color::White);
        let a4 = 1u64 << 24;
        position.set(Color::White, PieceKind::Bishop, a4).expect("setup square should be free");
        let moves = bishop_moves(&position, Color::White, a4);
        // b5 c6 d7 e8 and b3 c2 d1.
        assert_eq!(moves.len(), 7);
        let h_file = 0x8080_8080_8080_8080u64;
        assert!(moves.iter().all(|m| m.end & h_file == 0));
    }

    #[test]
    fn start_position_bishops_are_hemmed_in() {
        let position = Position::new(Color::White);
        assert!(bishop_moves(&position, Color::White, 1 << 2).is_empty());
        assert!(bishop_moves(&position, Color::Black, 1 << 61).is_empty());
    }
}
