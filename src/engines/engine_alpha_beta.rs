use log::info;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Position;
use crate::search::alpha_beta::{search_forward, SearchConfig};

/// Fixed-depth alpha-beta searcher.
#[derive(Debug, Clone, Default)]
pub struct AlphaBetaEngine {
    config: SearchConfig,
}

impl AlphaBetaEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Engine for AlphaBetaEngine {
    fn name(&self) -> &str {
        "Bitboard AlphaBeta"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        match name.trim().to_ascii_lowercase().as_str() {
            "depth" => {
                let depth = value
                    .trim()
                    .parse::<u8>()
                    .map_err(|e| format!("invalid depth {value:?}: {e}"))?;
                if depth == 0 {
                    return Err("depth must be at least 1".to_owned());
                }
                self.config.depth = depth;
                Ok(())
            }
            _ => Err(format!("unknown option: {name}")),
        }
    }

    fn choose_move(&mut self, position: &mut Position) -> ChessResult<EngineOutput> {
        let depth = self.config.depth;
        let side = position.side();

        let (score, best_move) = match search_forward(position, depth) {
            Ok(found) => found,
            Err(ChessError::NoMovesAvailable(_)) => {
                info!("{side} has no moves at depth {depth}");
                return Ok(EngineOutput {
                    info_lines: vec![format!("info string alpha_beta no_moves {side}")],
                    ..EngineOutput::default()
                });
            }
            Err(e) => return Err(e),
        };

        info!("{side} plays {best_move} (score {score}, depth {depth})");
        Ok(EngineOutput {
            best_move: Some(best_move),
            score: Some(score),
            info_lines: vec![format!(
                "info depth {depth} score cp {score} pv {best_move}"
            )],
        })
    }
}
