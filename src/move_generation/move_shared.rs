//! Helpers shared by the per-piece generators.

use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::search::evaluation::score_from_move;

/// Outcome of looking at one candidate destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Off the board or friendly-occupied: no move, stop the ray.
    Blocked,
    /// Empty square: move added, a ray may continue.
    Empty,
    /// Enemy-occupied square: capturing move added, stop the ray.
    Capture,
}

/// Classify `end` for a `kind` of `side` moving from `start`, pushing the
/// scored move onto `out` unless it is blocked. `end == 0` means the step
/// shifted off the board.
#[inline]
pub fn probe_target(
    position: &Position,
    side: Color,
    kind: PieceKind,
    start: Square,
    end: Square,
    out: &mut Vec<Move>,
) -> Target {
    if end == 0 || position.side_occupancy(side) & end != 0 {
        return Target::Blocked;
    }

    let captured = position.piece_of_color_at(side.opposite(), end);
    let score = score_from_move(side, kind, start, end, captured, position.white_score());
    out.push(Move::new(start, end, Some(score)));

    if captured.is_some() {
        Target::Capture
    } else {
        Target::Empty
    }
}

/// One sliding direction: the shift that takes a square one step along it,
/// and the squares a ray must not step away from (the edge it would wrap
/// across).
#[derive(Debug, Clone, Copy)]
pub struct RayDirection {
    pub shift: i32,
    pub edge: Bitboard,
}

impl RayDirection {
    #[inline]
    pub const fn new(shift: i32, edge: Bitboard) -> Self {
        Self { shift, edge }
    }

    /// Next square along the ray, or 0 when the step leaves the board.
    #[inline]
    pub const fn step(self, square: Square) -> Square {
        if square & self.edge != 0 {
            return 0;
        }
        if self.shift >= 0 {
            square << self.shift
        } else {
            square >> -self.shift
        }
    }
}

/// Ray-cast from `start` along each direction in turn.
pub fn slide(
    position: &Position,
    side: Color,
    kind: PieceKind,
    start: Square,
    directions: &[RayDirection],
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        let mut square = direction.step(start);
        while probe_target(position, side, kind, start, square, out) == Target::Empty {
            square = direction.step(square);
        }
    }
}
