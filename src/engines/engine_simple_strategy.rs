//! Mate-first, material-greedy single-ply engine.
//!
//! Plays an immediate checkmate when one exists; otherwise draws uniformly
//! from the moves tied for the best material balance after one ply.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_config::EngineConfig;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::EngineResult;
use crate::game_state::board::Board;
use crate::game_state::chess_board::ChessBoard;
use crate::search::board_scoring::MaterialScorer;
use crate::search::move_selector::{DecisionReason, MoveSelector};
use crate::utils::long_algebraic::move_to_long_algebraic;
use crate::utils::render_game_state::render_board;

pub struct SimpleStrategyEngine {
    config: EngineConfig,
    rng: StdRng,
}

impl SimpleStrategyEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            rng: seeded_rng(config.seed),
            config,
        }
    }

    fn selector(&self) -> MoveSelector<MaterialScorer> {
        MoveSelector::new(MaterialScorer)
            .with_sentinel(self.config.tie_break_sentinel)
            .with_mate_preference(self.config.prefer_mates)
    }
}

impl Default for SimpleStrategyEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn join_moves(moves: &[shakmaty::Move]) -> String {
    moves
        .iter()
        .map(move_to_long_algebraic)
        .collect::<Vec<_>>()
        .join(" ")
}

impl Engine for SimpleStrategyEngine {
    fn name(&self) -> &str {
        "MaterialBot SimpleStrategy"
    }

    fn author(&self) -> &str {
        "material_bot developers"
    }

    fn new_game(&mut self) {
        self.rng = seeded_rng(self.config.seed);
    }

    fn set_option(&mut self, name: &str, value: &str) -> EngineResult<()> {
        self.config.set_option(name, value)?;
        if name.eq_ignore_ascii_case("Seed") {
            self.rng = seeded_rng(self.config.seed);
        }
        Ok(())
    }

    fn choose_move(&mut self, board: &ChessBoard) -> EngineResult<EngineOutput> {
        let mut out = EngineOutput::default();

        if self.config.log_board {
            out.info_lines.extend(
                render_board(board)
                    .lines()
                    .map(|line| format!("info string simple_strategy board {line}")),
            );
        }

        let legal_count = board.legal_moves().len();
        out.info_lines.push(format!(
            "info string simple_strategy legal_moves {legal_count}"
        ));

        if legal_count == 0 {
            out.info_lines
                .push("info string simple_strategy terminal_position".to_owned());
            return Ok(out);
        }

        let decision = self.selector().decide(board, &mut self.rng)?;

        match &decision.reason {
            DecisionReason::Checkmate { mating_moves } => {
                out.info_lines.push(format!(
                    "info string simple_strategy mating_moves {}",
                    join_moves(mating_moves)
                ));
            }
            DecisionReason::Material { ranked } => {
                out.info_lines.push(format!(
                    "info string simple_strategy baseline_score {}",
                    ranked.baseline
                ));
                out.info_lines.push(format!(
                    "info string simple_strategy best_move_score {}",
                    ranked.best_score
                ));
                out.info_lines.push(format!(
                    "info string simple_strategy best_moves {}",
                    join_moves(&ranked.moves)
                ));
            }
        }

        out.info_lines.push(format!(
            "info string simple_strategy chosen {}",
            move_to_long_algebraic(&decision.chosen)
        ));
        out.best_move = Some(decision.chosen);
        Ok(out)
    }
}
