use crate::game_state::chess_types::*;

/// Single undo record for `apply_move` / `undo_move`.
///
/// Holds everything needed to put the position back exactly as it was. The
/// captured bitboard is a full snapshot of the victim's piece set rather than
/// a single bit, so undo restores it verbatim. This also covers an en-passant
/// victim that did not stand on `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoRecord {
    pub start: Square,
    pub end: Square,
    pub moved_side: Color,
    pub moved_piece: PieceKind,

    pub captured_side: Option<Color>,
    pub captured_piece: Option<PieceKind>,
    pub captured_bitboard: Bitboard,

    pub castle: Option<CastleType>,

    pub prev_score: i32,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Bitboard,
}
