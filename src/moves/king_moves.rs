//! King step table.

use crate::game_state::chess_types::{Bitboard, Square};
use crate::tables::masks::square_index;

pub const KING_ATTACKS: [Bitboard; 64] = generate_king_attacks();

#[inline]
pub const fn king_steps(origin: Square) -> Bitboard {
    KING_ATTACKS[square_index(origin)]
}

const fn generate_king_attacks() -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;

        let mut d_rank = -1;
        while d_rank <= 1 {
            let mut d_file = -1;
            while d_file <= 1 {
                if d_rank != 0 || d_file != 0 {
                    attacks |= set_if_valid(file + d_file, rank + d_rank);
                }
                d_file += 1;
            }
            d_rank += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn set_if_valid(file: i32, rank: i32) -> Bitboard {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    let square = (rank as usize) * 8 + (file as usize);
    1u64 << square
}
