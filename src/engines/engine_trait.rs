//! Engine abstraction layer.
//!
//! Defines the output payload and the trait every move-choosing strategy
//! implements so drivers can select one at runtime.

use shakmaty::Move;

use crate::errors::EngineResult;
use crate::game_state::chess_board::ChessBoard;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn author(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> EngineResult<()> {
        Ok(())
    }

    fn choose_move(&mut self, board: &ChessBoard) -> EngineResult<EngineOutput>;
}
