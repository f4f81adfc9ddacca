use test_case::test_case;

use bitboard_chess::errors::{ChessError, PositionError};
use bitboard_chess::game_state::chess_types::*;
use bitboard_chess::move_generation::move_generator::{get_moves, moves_from};
use bitboard_chess::search::alpha_beta::{alpha_beta, search_forward, SCORE_INFINITY};
use bitboard_chess::tables::piece_square::piece_square_value;
use bitboard_chess::utils::algebraic::algebraic_to_square;
use bitboard_chess::utils::long_algebraic::parse_move_text;

fn sq(text: &str) -> Square {
    algebraic_to_square(text).expect("test square should parse")
}

fn destinations(position: &Position, kind: PieceKind, origin: &str) -> Vec<Square> {
    let side = position
        .piece_at(sq(origin))
        .map(|(side, _)| side)
        .expect("origin should be occupied");
    moves_from(position, side, kind, sq(origin))
        .expect("origin is a square")
        .into_iter()
        .map(|mv| mv.end)
        .collect()
}

#[test]
fn a1_rook_is_boxed_in_at_the_start() {
    let position = Position::new(Color::White);
    assert!(destinations(&position, PieceKind::Rook, "a1").is_empty());
}

#[test]
fn double_push_target_lasts_one_move() {
    let mut position = Position::new(Color::White);
    let (start, end) = parse_move_text("e2e4").expect("move text");
    position.apply_move(start, end).expect("e2e4 should apply");
    assert_eq!(position.en_passant_target(), sq("e3"));

    let (start, end) = parse_move_text("g8 to f6").expect("move text");
    position.apply_move(start, end).expect("g8f6 should apply");
    assert_eq!(position.en_passant_target(), 0);
}

#[test_case("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", true; "clear path")]
#[test_case("r3k2r/8/8/8/8/8/8/R3K1NR w KQkq - 0 1", false; "g1 occupied")]
#[test_case("r3k2r/8/8/8/8/8/8/R3KB1R w KQkq - 0 1", false; "f1 occupied")]
#[test_case("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1", false; "flag cleared")]
fn kingside_castle_availability(fen: &str, available: bool) {
    let position = Position::from_fen(fen).expect("FEN should parse");
    let king_moves = destinations(&position, PieceKind::King, "e1");
    assert_eq!(king_moves.contains(&sq("g1")), available);
}

#[test]
fn kingside_castle_moves_king_and_rook_together() {
    let mut position =
        Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
    position.apply_move(sq("e1"), sq("g1")).expect("castle should apply");

    assert_eq!(position.get(Color::White, PieceKind::King), sq("g1"));
    assert_eq!(position.get(Color::White, PieceKind::Rook), sq("a1") | sq("f1"));
    let rights = position.castling_rights();
    assert!(!rights.white_king_side);
    assert!(!rights.white_queen_side);
}

#[test]
fn castling_through_a_piece_is_rejected_untouched() {
    let mut position =
        Position::from_fen("r3k2r/8/8/8/8/8/8/R3KB1R w KQkq - 0 1").expect("FEN should parse");
    let before = position.clone();
    let err = position
        .apply_move(sq("e1"), sq("g1"))
        .expect_err("f1 bishop blocks castling");
    assert!(matches!(
        err,
        ChessError::Position(PositionError::CastlingBlocked { .. })
    ));
    assert_eq!(position, before);
    assert_eq!(position.castling_rights(), CastlingRights::ALL);
}

#[test]
fn bishop_takes_rook_and_undo_restores_exact_bitboard() {
    let mut position =
        Position::from_fen("r3k2r/8/8/8/8/8/6B1/4K3 w - - 0 1").expect("FEN should parse");
    let rooks_before = position.get(Color::Black, PieceKind::Rook);
    let score_before = position.white_score();

    position.apply_move(sq("g2"), sq("a8")).expect("Bxa8 should apply");

    assert_eq!(position.get(Color::Black, PieceKind::Rook), rooks_before & !sq("a8"));
    let bishop_delta = piece_square_value(Color::White, PieceKind::Bishop, 56)
        - piece_square_value(Color::White, PieceKind::Bishop, 14);
    let rook_term = 500 + piece_square_value(Color::Black, PieceKind::Rook, 56);
    assert_eq!(position.white_score(), score_before + rook_term + bishop_delta);

    position.undo_move().expect("undo should succeed");
    assert_eq!(position.get(Color::Black, PieceKind::Rook), rooks_before);
    assert_eq!(position.white_score(), score_before);
}

#[test_case(true; "maximizing")]
#[test_case(false; "minimizing")]
fn depth_zero_search_is_the_cached_score(maximizing: bool) {
    let mut position =
        Position::from_fen("r3k2r/8/8/8/8/8/6B1/4K3 b - - 0 1").expect("FEN should parse");
    for (alpha, beta) in [(-SCORE_INFINITY, SCORE_INFINITY), (10, 20), (0, 0)] {
        let value = alpha_beta(&mut position, 0, alpha, beta, maximizing).expect("search");
        assert_eq!(value, position.score());
    }
}

#[test_case(
    "4k3/8/P7/8/8/8/8/R3K3 w - - 0 1", "a1", &["a2", "a3", "a4", "a5"];
    "stops before own piece"
)]
#[test_case(
    "4k3/3p4/8/8/3R4/8/8/4K3 w - - 0 1", "d4", &["d5", "d6", "d7"];
    "includes enemy blocker"
)]
fn rook_rays_stop_at_the_first_blocker(fen: &str, origin: &str, expected_up: &[&str]) {
    let position = Position::from_fen(fen).expect("FEN should parse");
    let origin_sq = sq(origin);
    let file = origin_sq.trailing_zeros() % 8;

    let up: Vec<Square> = destinations(&position, PieceKind::Rook, origin)
        .into_iter()
        .filter(|&end| end > origin_sq && end.trailing_zeros() % 8 == file)
        .collect();
    let expected: Vec<Square> = expected_up.iter().map(|s| sq(s)).collect();
    assert_eq!(up, expected);
}

#[test]
fn black_saves_the_attacked_rook() {
    let mut position =
        Position::from_fen("r3k2r/8/8/8/8/8/6B1/4K3 b - - 0 1").expect("FEN should parse");
    let (score, mv) = search_forward(&mut position, 2).expect("search should run");
    // Only moving the a8 rook off the bishop's diagonal keeps both rooks.
    assert_eq!(mv.start, sq("a8"));
    assert!(score > 500);
    assert!(get_moves(&position, Color::Black, None, Some(mv.start))
        .expect("query")
        .contains(&mv));
}
