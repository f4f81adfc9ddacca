//! Precomputed square, file and rank masks.
//!
//! All tables are indexed by square index (`0 == a1`, `63 == h8`) and built at
//! compile time.

use crate::game_state::chess_types::{Bitboard, Square};

/// `MASK_POSITION[i]` has only bit `i` set.
pub const MASK_POSITION: [Bitboard; 64] = generate_mask_position();

/// `CLEAR_POSITION[i]` has every bit set except bit `i`.
pub const CLEAR_POSITION: [Bitboard; 64] = generate_clear_position();

/// `MASK_FILE[0]` is the a-file, `MASK_FILE[7]` the h-file.
const MASK_FILE: [Bitboard; 8] = generate_mask_file();

/// `MASK_RANK[0]` is rank 1, `MASK_RANK[7]` rank 8.
const MASK_RANK: [Bitboard; 8] = generate_mask_rank();

pub const FILE_A: Bitboard = MASK_FILE[0];
pub const FILE_H: Bitboard = MASK_FILE[7];
pub const RANK_1: Bitboard = MASK_RANK[0];
pub const RANK_8: Bitboard = MASK_RANK[7];

/// Index (`0..=63`) of a single-bit square mask.
#[inline]
pub const fn square_index(square: Square) -> usize {
    square.trailing_zeros() as usize
}

/// True when `mask` names exactly one board square.
#[inline]
pub const fn is_single_square(mask: Bitboard) -> bool {
    mask.count_ones() == 1
}

/// Iterator over the set bits of `bitboard` as single-bit squares, lowest
/// square first.
#[inline]
pub fn squares_of(bitboard: Bitboard) -> impl Iterator<Item = Square> {
    let mut remaining = bitboard;
    std::iter::from_fn(move || {
        if remaining == 0 {
            return None;
        }
        let square = remaining & remaining.wrapping_neg();
        remaining &= remaining - 1;
        Some(square)
    })
}

const fn generate_mask_position() -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;
    while sq < 64 {
        table[sq] = 1u64 << sq;
        sq += 1;
    }
    table
}

const fn generate_clear_position() -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;
    while sq < 64 {
        table[sq] = !(1u64 << sq);
        sq += 1;
    }
    table
}

const fn generate_mask_file() -> [Bitboard; 8] {
    let mut table = [0u64; 8];
    let mut file = 0usize;
    while file < 8 {
        table[file] = 0x0101_0101_0101_0101u64 << file;
        file += 1;
    }
    table
}

const fn generate_mask_rank() -> [Bitboard; 8] {
    let mut table = [0u64; 8];
    let mut rank = 0usize;
    while rank < 8 {
        table[rank] = 0xFFu64 << (rank * 8);
        rank += 1;
    }
    table
}
