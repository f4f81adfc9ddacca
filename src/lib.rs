//! Crate root module declarations for the bitboard chess engine.
//!
//! Exposes the board state, static tables, pseudo-legal move generation with
//! in-place apply/undo, evaluation and alpha-beta search, plus the text
//! conversions used at the presentation boundary.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
    pub mod undo_state;
}

pub mod tables {
    pub mod masks;
    pub mod piece_square;
}

pub mod moves {
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
}

pub mod move_generation {
    pub mod move_apply;
    pub mod move_generator;
    pub mod move_shared;
    pub mod moves_bishop;
    pub mod moves_king;
    pub mod moves_knight;
    pub mod moves_pawn;
    pub mod moves_queen;
    pub mod moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod evaluation;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_position;
}
