//! Seeded random games checking board invariants after every move and a
//! bit-exact rewind at the end.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bitboard_chess::game_state::chess_types::*;
use bitboard_chess::move_generation::move_apply::{apply, undo_move};
use bitboard_chess::move_generation::move_generator::all_moves;

const START_FENS: [&str; 3] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
];

#[derive(Debug, PartialEq)]
struct Snapshot {
    position: Position,
    all_pieces: Bitboard,
    white_score: i32,
    castling_rights: CastlingRights,
    en_passant_target: Bitboard,
}

fn snapshot(position: &Position) -> Snapshot {
    Snapshot {
        position: position.clone(),
        all_pieces: position.all_pieces(),
        white_score: position.white_score(),
        castling_rights: position.castling_rights(),
        en_passant_target: position.en_passant_target(),
    }
}

fn assert_invariants(position: &Position, context: &str) {
    assert!(position.pieces_are_disjoint(), "overlap after {context}");
    assert!(position.occupancy_is_coherent(), "stale occupancy after {context}");
    assert_eq!(
        position.all_white() | position.all_black(),
        position.all_pieces(),
        "union mismatch after {context}"
    );
    assert_eq!(
        position.white_score(),
        position.evaluate_score(),
        "score drift after {context}"
    );
}

fn play_random_game(fen: &str, seed: u64, plies: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut position = Position::from_fen(fen).expect("playout FEN should parse");
    let mut side = position.side();
    let mut trail = vec![snapshot(&position)];

    for ply in 0..plies {
        let moves = all_moves(&position, side);
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.random_range(0..moves.len())];
        apply(&mut position, mv).expect("generated move should apply");
        assert_invariants(&position, &format!("{mv} at ply {ply} (seed {seed})"));

        trail.push(snapshot(&position));
        side = side.opposite();
    }

    // Rewind one move at a time, comparing against the recorded states.
    trail.pop();
    while let Some(expected) = trail.pop() {
        undo_move(&mut position).expect("history should have a move to undo");
        assert_eq!(snapshot(&position), expected, "undo mismatch (seed {seed})");
    }
    assert!(position.history().is_empty());
}

#[test]
fn random_games_keep_invariants_and_rewind_exactly() {
    for (i, fen) in START_FENS.iter().enumerate() {
        for seed in 0..16u64 {
            play_random_game(fen, seed * 31 + i as u64, 120);
        }
    }
}

#[test]
fn each_single_move_round_trips() {
    for fen in START_FENS {
        let mut position = Position::from_fen(fen).expect("FEN should parse");
        for side in ALL_COLORS {
            for mv in all_moves(&position, side) {
                let before = snapshot(&position);
                apply(&mut position, mv).expect("generated move should apply");
                assert_eq!(Some(position.white_score()), mv.score, "{mv} precomputed score");
                undo_move(&mut position).expect("undo should succeed");
                assert_eq!(snapshot(&position), before, "{mv} did not round-trip");
            }
        }
    }
}
