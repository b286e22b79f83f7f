//! Core value types shared by the evaluator and the move selector.
//!
//! Sides and piece kinds are deliberately independent of any rules engine so
//! the selection core can run against synthetic boards as well as real chess.

/// Signed material balance. Positive favours `Side::First`.
pub type Score = i32;

/// The two players. `First` moves first in the standard game (White).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// `+1` for `First`, `-1` for `Second`.
    #[inline]
    pub const fn sign(self) -> Score {
        match self {
            Side::First => 1,
            Side::Second => -1,
        }
    }

    /// Whether `candidate` is strictly better than `incumbent` for this side.
    #[inline]
    pub fn prefers(self, candidate: Score, incumbent: Score) -> bool {
        match self {
            Side::First => candidate > incumbent,
            Side::Second => candidate < incumbent,
        }
    }
}

/// Piece kind (side is carried separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase letter used by FEN and long algebraic promotion suffixes.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}
