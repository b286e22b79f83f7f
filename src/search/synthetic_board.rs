//! Hand-built game trees for exercising selection without a rules engine.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Side};

#[derive(Debug, Clone)]
pub struct SyntheticBoard {
    side_to_move: Side,
    pieces: Vec<(PieceKind, Side)>,
    checkmate: bool,
    children: Vec<(&'static str, SyntheticBoard)>,
}

impl SyntheticBoard {
    pub fn leaf(side_to_move: Side, pieces: Vec<(PieceKind, Side)>) -> Self {
        Self {
            side_to_move,
            pieces,
            checkmate: false,
            children: Vec::new(),
        }
    }

    pub fn mated(mut self) -> Self {
        self.checkmate = true;
        self
    }

    /// Append a legal move leading to `child`. Enumeration order is insertion order.
    pub fn with_move(mut self, name: &'static str, child: SyntheticBoard) -> Self {
        self.children.push((name, child));
        self
    }

    /// Same tree with every piece handed to the other side.
    pub fn mirrored(&self) -> Self {
        Self {
            side_to_move: self.side_to_move.opposite(),
            pieces: self
                .pieces
                .iter()
                .map(|&(piece, side)| (piece, side.opposite()))
                .collect(),
            checkmate: self.checkmate,
            children: self
                .children
                .iter()
                .map(|(name, child)| (*name, child.mirrored()))
                .collect(),
        }
    }
}

impl Board for SyntheticBoard {
    type Move = &'static str;

    fn legal_moves(&self) -> Vec<&'static str> {
        self.children.iter().map(|(name, _)| *name).collect()
    }

    fn apply(&self, mv: &&'static str) -> Self {
        self.children
            .iter()
            .find(|(name, _)| name == mv)
            .map(|(_, child)| child.clone())
            .expect("synthetic move must come from legal_moves")
    }

    fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    fn pieces(&self) -> Vec<(PieceKind, Side)> {
        self.pieces.clone()
    }
}
