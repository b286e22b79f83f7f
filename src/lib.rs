//! Crate root module declarations for the material_bot engine.
//!
//! Exposes the board capability interface and its chess adapter, the
//! material evaluator and single-ply move selector, the engine wrapper used
//! by the command-line driver, and notation helpers.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod search {
    pub mod board_scoring;
    pub mod move_selector;
    #[cfg(test)]
    pub mod synthetic_board;
}

pub mod engines {
    pub mod engine_config;
    pub mod engine_simple_strategy;
    pub mod engine_trait;
}

pub mod utils {
    pub mod fen_generator;
    pub mod long_algebraic;
    pub mod render_game_state;
}

pub use errors::{EngineError, SelectionError};
pub use game_state::board::Board;
pub use game_state::chess_board::ChessBoard;
pub use game_state::chess_types::{PieceKind, Score, Side};
pub use search::board_scoring::evaluate;
pub use search::move_selector::{best_moves, find_mating_moves, select};
