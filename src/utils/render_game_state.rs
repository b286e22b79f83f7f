//! Terminal-oriented Unicode board renderer.
//!
//! Used for the optional board dump in engine info lines.

use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_types::{PieceKind, Side};

/// Render the board to a Unicode string, White at the bottom.
pub fn render_board(board: &ChessBoard) -> String {
    let mut squares: [Option<char>; 64] = [None; 64];
    for (sq, piece, side) in board.placement() {
        if let Some(slot) = squares.get_mut(sq) {
            *slot = Some(piece_to_unicode(side, piece));
        }
    }

    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8 {
            out.push(squares[rank * 8 + file].unwrap_or('·'));

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(side: Side, piece: PieceKind) -> char {
    match (side, piece) {
        (Side::First, PieceKind::Pawn) => '♙',
        (Side::First, PieceKind::Knight) => '♘',
        (Side::First, PieceKind::Bishop) => '♗',
        (Side::First, PieceKind::Rook) => '♖',
        (Side::First, PieceKind::Queen) => '♕',
        (Side::First, PieceKind::King) => '♔',
        (Side::Second, PieceKind::Pawn) => '♟',
        (Side::Second, PieceKind::Knight) => '♞',
        (Side::Second, PieceKind::Bishop) => '♝',
        (Side::Second, PieceKind::Rook) => '♜',
        (Side::Second, PieceKind::Queen) => '♛',
        (Side::Second, PieceKind::King) => '♚',
    }
}
