//! Generated move triple.

use std::fmt;

use crate::game_state::chess_types::Square;
use crate::utils::algebraic::square_label;

/// A pseudo-legal move: origin, destination and the White-perspective score
/// the position will have once the move is applied.
///
/// `score` is `None` for moves built by hand (for example from user input);
/// applying such a move recomputes the score from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub score: Option<i32>,
}

impl Move {
    #[inline]
    pub const fn new(start: Square, end: Square, score: Option<i32>) -> Self {
        Self { start, end, score }
    }

    /// Move with no precomputed score.
    #[inline]
    pub const fn unscored(start: Square, end: Square) -> Self {
        Self::new(start, end, None)
    }

    #[inline]
    pub const fn squares(&self) -> (Square, Square) {
        (self.start, self.end)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", square_label(self.start), square_label(self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::Move;

    #[test]
    fn displays_as_long_algebraic() {
        let mv = Move::new(1 << 12, 1 << 28, Some(40));
        assert_eq!(mv.to_string(), "e2e4");
        assert_eq!(mv.squares(), (1 << 12, 1 << 28));
        assert_eq!(Move::unscored(1, 2).score, None);
    }
}
