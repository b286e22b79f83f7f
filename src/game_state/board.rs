//! Capability interface between the selection core and a rules engine.
//!
//! The evaluator and move selector only ever see a board through these five
//! operations, so any rules engine (or a hand-built test tree) can be plugged
//! in without touching search code.

use crate::game_state::chess_types::{PieceKind, Side};

pub trait Board: Sized {
    /// Opaque move handle. Only compared and handed back to `apply`.
    type Move: Clone + PartialEq + std::fmt::Debug;

    /// Legal moves in a stable enumeration order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Position reached by playing `mv`. `mv` must come from `legal_moves`.
    fn apply(&self, mv: &Self::Move) -> Self;

    fn is_checkmate(&self) -> bool;

    fn side_to_move(&self) -> Side;

    /// Every piece on the board. Order is irrelevant.
    fn pieces(&self) -> Vec<(PieceKind, Side)>;
}
