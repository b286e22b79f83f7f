//! Placement-FEN generation for diagnostics and error messages.

use crate::game_state::chess_board::SquareIndex;
use crate::game_state::chess_types::{PieceKind, Side};

/// Board field plus side-to-move field of a FEN string.
///
/// `placement` holds square indices where `0 == a1` and `63 == h8`.
pub fn generate_placement_fen(placement: &[(SquareIndex, PieceKind, Side)], side_to_move: Side) -> String {
    let mut squares: [Option<char>; 64] = [None; 64];
    for &(sq, piece, side) in placement {
        if let Some(slot) = squares.get_mut(sq) {
            *slot = Some(piece_to_fen_char(side, piece));
        }
    }

    let mut out = String::new();

    for rank in (0..8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8 {
            match squares[rank * 8 + file] {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match side_to_move {
        Side::First => 'w',
        Side::Second => 'b',
    });

    out
}

pub fn piece_to_fen_char(side: Side, piece: PieceKind) -> char {
    let base = piece.letter();
    match side {
        Side::First => base.to_ascii_uppercase(),
        Side::Second => base,
    }
}
