//! Core board state representation.
//!
//! `Position` stores one bitboard per (side, piece kind) as the single source
//! of truth, plus derived occupancy unions, castling flags, the en-passant
//! target, a cached White-perspective score and the undo stack used by the
//! apply/undo pair in `move_generation::move_apply`.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::{ChessResult, ParsingError, PositionError};
use crate::game_state::chess_rules::{STARTING_PIECES, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::all_moves;
use crate::moves::chess_move::Move;
use crate::search::evaluation::evaluate_score;
use crate::tables::masks::is_single_square;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_position::render_position;

#[derive(Debug, Clone)]
pub struct Position {
    // [color][piece_kind]
    pub(crate) pieces: [[Bitboard; 6]; 2],

    // Occupancy caches, recomputed after every piece bitboard write.
    pub(crate) occupancy_by_color: [Bitboard; 2],
    pub(crate) occupancy_all: Bitboard,

    pub(crate) side: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Bitboard,

    // Always from White's point of view; `score()` applies the side's sign.
    pub(crate) score: i32,

    pub(crate) history: Vec<UndoRecord>,
}

impl Position {
    /// Standard starting layout seen from `side`.
    pub fn new(side: Color) -> Self {
        let mut position = Self::empty(side);
        position.pieces = STARTING_PIECES;
        position.castling_rights = CastlingRights::ALL;
        position.refresh();
        position
    }

    /// Board with no pieces and no castling rights.
    pub fn empty(side: Color) -> Self {
        let mut position = Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,
            side,
            castling_rights: CastlingRights::NONE,
            en_passant_target: 0,
            score: 0,
            history: Vec::new(),
        };
        position.refresh();
        position
    }

    /// Build a position from an arbitrary layout. The score is re-seeded from
    /// scratch since there is no move history to derive it from.
    pub fn from_pieces(
        side: Color,
        pieces: [[Bitboard; 6]; 2],
        castling_rights: CastlingRights,
        en_passant_target: Bitboard,
    ) -> ChessResult<Self> {
        let mut seen = 0u64;
        for bb in pieces.iter().flatten() {
            if seen & bb != 0 {
                return Err(PositionError::OverlappingPieces(seen & bb).into());
            }
            seen |= bb;
        }
        if en_passant_target != 0 && !is_single_square(en_passant_target) {
            return Err(PositionError::NotASquare(en_passant_target).into());
        }

        let mut position = Self::empty(side);
        position.pieces = pieces;
        position.castling_rights = castling_rights;
        position.en_passant_target = en_passant_target;
        position.refresh();
        Ok(position)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ParsingError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn starting_fen() -> &'static str {
        STARTING_POSITION_FEN
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Which side and kind occupies `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<(Color, PieceKind)> {
        if self.occupancy_all & square == 0 {
            return None;
        }
        for color in ALL_COLORS {
            if let Some(kind) = self.piece_of_color_at(color, square) {
                return Some((color, kind));
            }
        }
        None
    }

    #[inline]
    pub(crate) fn piece_of_color_at(&self, color: Color, square: Square) -> Option<PieceKind> {
        if self.occupancy_by_color[color.index()] & square == 0 {
            return None;
        }
        ALL_PIECE_KINDS
            .into_iter()
            .find(|kind| self.pieces[color.index()][kind.index()] & square != 0)
    }

    #[inline]
    pub fn get(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    /// Overwrite one piece bitboard. Occupancy and score are recomputed
    /// before returning, so this is meant for setup rather than play.
    ///
    /// Fails without touching the board when `bitboard` shares a square with
    /// any other piece. An accepted edit drops the undo history, since the
    /// recorded moves no longer lead to this layout.
    pub fn set(&mut self, color: Color, kind: PieceKind, bitboard: Bitboard) -> ChessResult<()> {
        let others = self.occupancy_all & !self.pieces[color.index()][kind.index()];
        if others & bitboard != 0 {
            return Err(PositionError::OverlappingPieces(others & bitboard).into());
        }

        self.pieces[color.index()][kind.index()] = bitboard;
        self.history.clear();
        self.refresh();
        Ok(())
    }

    #[inline]
    pub fn side_occupancy(&self, color: Color) -> Bitboard {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn all_white(&self) -> Bitboard {
        self.occupancy_by_color[Color::White.index()]
    }

    #[inline]
    pub fn all_black(&self) -> Bitboard {
        self.occupancy_by_color[Color::Black.index()]
    }

    #[inline]
    pub fn all_pieces(&self) -> Bitboard {
        self.occupancy_all
    }

    #[inline]
    pub fn side(&self) -> Color {
        self.side
    }

    #[inline]
    pub fn opponent_side(&self) -> Color {
        self.side.opposite()
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Bitboard {
        self.en_passant_target
    }

    /// Cached evaluation signed for this board's own side: positive favours
    /// `side()`.
    #[inline]
    pub fn score(&self) -> i32 {
        match self.side {
            Color::White => self.score,
            Color::Black => -self.score,
        }
    }

    /// Cached evaluation from White's point of view.
    #[inline]
    pub fn white_score(&self) -> i32 {
        self.score
    }

    /// Full recomputation of the White-perspective score.
    #[inline]
    pub fn evaluate_score(&self) -> i32 {
        evaluate_score(self)
    }

    #[inline]
    pub fn piece_count(&self, color: Color, kind: PieceKind) -> u32 {
        self.get(color, kind).count_ones()
    }

    #[inline]
    pub fn history(&self) -> &[UndoRecord] {
        &self.history
    }

    /// All pseudo-legal moves for this board's own side.
    pub fn get_moves(&self) -> Vec<Move> {
        all_moves(self, self.side)
    }

    /// Every pair of piece bitboards is disjoint.
    pub fn pieces_are_disjoint(&self) -> bool {
        let mut seen = 0u64;
        for bb in self.pieces.iter().flatten() {
            if seen & bb != 0 {
                return false;
            }
            seen |= bb;
        }
        true
    }

    /// Occupancy caches match the piece bitboards.
    pub fn occupancy_is_coherent(&self) -> bool {
        let white = self.pieces[Color::White.index()].iter().fold(0, |acc, bb| acc | bb);
        let black = self.pieces[Color::Black.index()].iter().fold(0, |acc, bb| acc | bb);
        self.all_white() == white
            && self.all_black() == black
            && self.occupancy_all == white | black
    }

    pub(crate) fn recalc_occupancy(&mut self) {
        for color in ALL_COLORS {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .copied()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[Color::White.index()]
            | self.occupancy_by_color[Color::Black.index()];
    }

    fn refresh(&mut self) {
        self.recalc_occupancy();
        self.score = evaluate_score(self);
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(Color::White)
    }
}

/// Equal when seen from the same side with identical piece bitboards.
impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.side == other.side && self.pieces == other.pieces
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.side.hash(state);
        self.pieces.hash(state);
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_position(self))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn starting_position_is_balanced_and_coherent() {
        let position = Position::new(Color::White);
        assert_eq!(position.all_white(), 0xFFFF);
        assert_eq!(position.all_black(), 0xFFFF_0000_0000_0000);
        assert_eq!(position.all_pieces(), position.all_white() | position.all_black());
        assert_eq!(position.score(), 0);
        assert_eq!(position.en_passant_target(), 0);
        assert_eq!(position.castling_rights(), CastlingRights::ALL);
        assert!(position.pieces_are_disjoint());
        assert!(position.occupancy_is_coherent());
        assert!(position.history().is_empty());
    }

    #[test]
    fn piece_at_finds_occupant_or_nothing() {
        let position = Position::new(Color::Black);
        assert_eq!(position.piece_at(1 << 4), Some((Color::White, PieceKind::King)));
        assert_eq!(position.piece_at(1 << 59), Some((Color::Black, PieceKind::Queen)));
        assert_eq!(position.piece_at(1 << 28), None);
    }

    #[test]
    fn set_recomputes_occupancy_and_score() {
        let mut position = Position::new(Color::White);
        position.set(Color::Black, PieceKind::Queen, 0).expect("clearing a board can't overlap");
        assert_eq!(position.all_black() & (1 << 59), 0);
        assert!(position.occupancy_is_coherent());
        assert_eq!(position.score(), position.evaluate_score());
        assert!(position.score() > 900);
    }

    #[test]
    fn score_is_signed_by_side() {
        let mut white = Position::new(Color::White);
        let mut black = Position::new(Color::Black);
        white.set(Color::Black, PieceKind::Rook, 1 << 63).expect("h8 is a rook square");
        black.set(Color::Black, PieceKind::Rook, 1 << 63).expect("h8 is a rook square");
        assert!(white.score() > 0);
        assert_eq!(black.score(), -white.score());
        assert_eq!(black.white_score(), white.white_score());
    }

    #[test]
    fn equality_ignores_history_but_not_side() {
        let a = Position::new(Color::White);
        let mut b = Position::new(Color::White);
        b.history.clear();
        assert_eq!(a, b);
        assert_ne!(a, Position::new(Color::Black));

        let mut seen = HashSet::new();
        seen.insert(a.clone());
        assert!(seen.contains(&b));
    }

    #[test]
    fn from_pieces_rejects_overlap() {
        let mut pieces = [[0u64; 6]; 2];
        pieces[0][PieceKind::Rook.index()] = 1;
        pieces[1][PieceKind::Rook.index()] = 1;
        let err = Position::from_pieces(Color::White, pieces, CastlingRights::NONE, 0)
            .expect_err("overlap should be rejected");
        assert!(matches!(
            err,
            crate::errors::ChessError::Position(PositionError::OverlappingPieces(1))
        ));
    }

    #[test]
    fn set_rejects_overlap_and_leaves_the_board_alone() {
        let mut position = Position::new(Color::White);
        let before = position.clone();
        let d1_e1 = (1 << 3) | (1 << 4);
        let err = position
            .set(Color::White, PieceKind::Queen, d1_e1)
            .expect_err("the white king sits on e1");
        assert_eq!(
            err,
            crate::errors::ChessError::Position(PositionError::OverlappingPieces(1 << 4))
        );
        assert_eq!(position, before);
        assert!(position.pieces_are_disjoint());
        assert!(position.occupancy_is_coherent());
        assert_eq!(position.white_score(), before.white_score());
    }

    #[test]
    fn set_may_move_a_board_onto_its_own_squares() {
        let mut position = Position::new(Color::White);
        let rooks = position.get(Color::White, PieceKind::Rook);
        position
            .set(Color::White, PieceKind::Rook, rooks | (1 << 16))
            .expect("a3 is empty");
        assert_eq!(position.get(Color::White, PieceKind::Rook), rooks | (1 << 16));
    }

    #[test]
    fn set_after_a_move_starts_a_fresh_history() {
        let mut position = Position::new(Color::White);
        position.apply_move(1 << 12, 1 << 28).expect("e2e4 should apply");
        position.set(Color::Black, PieceKind::Queen, 0).expect("clearing a board can't overlap");

        assert!(position.history().is_empty());
        assert_eq!(position.white_score(), position.evaluate_score());
        assert_eq!(position.undo_move(), Err(crate::errors::ChessError::NoMovesToUndo));
        assert_eq!(position.white_score(), position.evaluate_score());
        assert_eq!(position.get(Color::White, PieceKind::Pawn) & (1 << 28), 1 << 28);
    }

    #[test]
    fn piece_counts_come_from_bitboards() {
        let position = Position::new(Color::White);
        assert_eq!(position.piece_count(Color::White, PieceKind::Pawn), 8);
        assert_eq!(position.piece_count(Color::Black, PieceKind::King), 1);
    }
}
