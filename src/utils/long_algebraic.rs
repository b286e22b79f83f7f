//! Long algebraic (UCI) move notation, e.g. `e2e4`, `e7e8q`, `e1g1`.
//!
//! Castling is written as the king's two-square step regardless of how the
//! rules engine represents it internally.

use shakmaty::{Move, Square};

use crate::errors::{EngineError, EngineResult};
use crate::game_state::board::Board;
use crate::game_state::chess_board::{piece_kind_from_role, ChessBoard, SquareIndex};

/// Convert a square index (`0..=63`) to a coordinate such as `e4`.
#[inline]
pub fn square_to_algebraic(square: SquareIndex) -> String {
    let file_char = char::from(b'a' + (square % 8) as u8);
    let rank_char = char::from(b'1' + (square / 8) as u8);
    format!("{file_char}{rank_char}")
}

#[inline]
fn square_index(square: Square) -> SquareIndex {
    square as SquareIndex
}

pub fn move_to_long_algebraic(mv: &Move) -> String {
    if let Move::Castle { king, rook } = mv {
        let king_sq = square_index(*king);
        let king_dest = if square_index(*rook) > king_sq {
            king_sq + 2
        } else {
            king_sq - 2
        };
        return format!(
            "{}{}",
            square_to_algebraic(king_sq),
            square_to_algebraic(king_dest)
        );
    }

    let mut out = String::new();
    if let Some(from) = mv.from() {
        out.push_str(&square_to_algebraic(square_index(from)));
    }
    out.push_str(&square_to_algebraic(square_index(mv.to())));
    if let Some(promotion) = mv.promotion() {
        out.push(piece_kind_from_role(promotion).letter());
    }
    out
}

fn is_well_formed(long_algebraic: &str) -> bool {
    let bytes = long_algebraic.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return false;
    }

    let coords_ok = bytes[..4].chunks(2).all(|coord| {
        (b'a'..=b'h').contains(&coord[0]) && (b'1'..=b'8').contains(&coord[1])
    });
    let promotion_ok = bytes.get(4).map_or(true, |p| b"nbrq".contains(p));

    coords_ok && promotion_ok
}

/// Resolve a long algebraic move against the legal moves of `board`.
pub fn long_algebraic_to_move(board: &ChessBoard, long_algebraic: &str) -> EngineResult<Move> {
    let wanted = long_algebraic.trim().to_ascii_lowercase();
    if !is_well_formed(&wanted) {
        return Err(EngineError::InvalidMoveNotation(long_algebraic.to_owned()));
    }

    board
        .legal_moves()
        .into_iter()
        .find(|mv| move_to_long_algebraic(mv) == wanted)
        .ok_or_else(|| EngineError::IllegalMove {
            mv: wanted,
            fen: board.placement_fen(),
        })
}
