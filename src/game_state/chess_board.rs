//! Standard chess positions backed by the `shakmaty` rules engine.
//!
//! `ChessBoard` is the production implementation of [`Board`]: legality,
//! move application and checkmate detection all come from `shakmaty`, while
//! this module only translates its colours and roles into [`Side`] and
//! [`PieceKind`].

use shakmaty::fen::{Fen, ParseFenError};
use shakmaty::{CastlingMode, Chess, Color, Move, Position, PositionError, Role};

use crate::errors::{EngineError, EngineResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Side};
use crate::utils::fen_generator::generate_placement_fen;
use crate::utils::long_algebraic::long_algebraic_to_move;

/// Square index (`0 == a1`, `63 == h8`).
pub type SquareIndex = usize;

#[derive(Debug, Clone, Default)]
pub struct ChessBoard {
    position: Chess,
}

impl ChessBoard {
    #[inline]
    pub fn new_game() -> Self {
        Self::default()
    }

    /// Parse a FEN string. Castling rights that no longer match the king and
    /// rook placement are dropped rather than rejected.
    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        let invalid = |reason: String| EngineError::InvalidFen {
            fen: fen.to_owned(),
            reason,
        };

        let parsed: Fen = fen.trim().parse().map_err(|e: ParseFenError| invalid(e.to_string()))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .or_else(PositionError::ignore_invalid_castling_rights)
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self { position })
    }

    /// Resolve `long_algebraic` against this position and play it.
    pub fn play_uci(&self, long_algebraic: &str) -> EngineResult<Self> {
        let mv = long_algebraic_to_move(self, long_algebraic)?;
        Ok(self.apply(&mv))
    }

    pub fn play_uci_sequence<'a, I>(&self, moves: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut board = self.clone();
        for mv in moves {
            board = board.play_uci(mv)?;
        }
        Ok(board)
    }

    /// Occupied squares with their pieces, ordered by square index.
    pub fn placement(&self) -> Vec<(SquareIndex, PieceKind, Side)> {
        let board = self.position.board();
        board
            .occupied()
            .into_iter()
            .filter_map(|sq| {
                board.piece_at(sq).map(|piece| {
                    (
                        sq as SquareIndex,
                        piece_kind_from_role(piece.role),
                        side_from_color(piece.color),
                    )
                })
            })
            .collect()
    }

    /// Piece placement and side to move, e.g. `8/8/8/8/8/8/8/K6k w`.
    pub fn placement_fen(&self) -> String {
        generate_placement_fen(&self.placement(), self.side_to_move())
    }
}

impl Board for ChessBoard {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves().into_iter().collect()
    }

    fn apply(&self, mv: &Move) -> Self {
        let mut next = self.position.clone();
        next.play_unchecked(mv);
        Self { position: next }
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn side_to_move(&self) -> Side {
        side_from_color(self.position.turn())
    }

    fn pieces(&self) -> Vec<(PieceKind, Side)> {
        self.placement()
            .into_iter()
            .map(|(_, piece, side)| (piece, side))
            .collect()
    }
}

#[inline]
pub fn side_from_color(color: Color) -> Side {
    match color {
        Color::White => Side::First,
        Color::Black => Side::Second,
    }
}

#[inline]
pub fn piece_kind_from_role(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}
