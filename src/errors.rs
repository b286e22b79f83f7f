//! Error types for move selection and the engine layer around it.

use thiserror::Error;

/// Contract violations raised by the selection core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// `best_moves`/`select` called on a terminal position.
    #[error("no legal moves available: position is terminal")]
    NoLegalMoves,
}

/// Errors from the rules-engine adapter, notation helpers and engine options.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("invalid long algebraic move: {0}")]
    InvalidMoveNotation(String),

    #[error("illegal move {mv} in position {fen}")]
    IllegalMove { mv: String, fen: String },

    #[error("unknown engine option: {0}")]
    UnknownOption(String),

    #[error("invalid value '{value}' for option {name}")]
    InvalidOptionValue { name: String, value: String },

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

pub type EngineResult<T> = Result<T, EngineError>;
