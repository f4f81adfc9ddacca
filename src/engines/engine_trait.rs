//! Engine abstraction layer.
//!
//! Different move-choosing strategies sit behind one trait so callers can
//! pick one at runtime and tune it through string options.

use crate::errors::ChessError;
use crate::game_state::chess_types::Position;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// Score of `best_move` from the searching side's point of view.
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    /// Pick a move for `position`'s own side. The position may be mutated
    /// during the search but is restored before returning.
    fn choose_move(&mut self, position: &mut Position) -> Result<EngineOutput, ChessError>;
}
