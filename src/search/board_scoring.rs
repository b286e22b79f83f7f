//! Static position scoring.
//!
//! Selection delegates scoring to [`BoardScorer`] so alternate heuristics can
//! be swapped in without altering search code. [`MaterialScorer`] is the
//! baseline: a signed material count from `Side::First`'s point of view.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Score, Side};

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of `Side::First`; `Side::Second` wants it low.
    fn score<B: Board>(&self, board: &B) -> Score;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> Score {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 350,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10000,
        }
    }

    #[inline]
    pub fn material_balance<I>(pieces: I) -> Score
    where
        I: IntoIterator<Item = (PieceKind, Side)>,
    {
        pieces
            .into_iter()
            .map(|(piece, side)| side.sign() * Self::piece_value(piece))
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score<B: Board>(&self, board: &B) -> Score {
        Self::material_balance(board.pieces())
    }
}

/// Material evaluation of `board`. Pure; terminal positions are fine.
#[inline]
pub fn evaluate<B: Board>(board: &B) -> Score {
    MaterialScorer.score(board)
}
