//! GameState-to-FEN writer.
//!
//! Emits the placement and active color fields only. Those two fields fully
//! describe a position in this board model.

use crate::game_state::chess_types::*;

pub fn generate_fen(game_state: &GameState) -> String {
    let side_to_move = match game_state.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    format!("{} {}", generate_board_field(game_state.grid()), side_to_move)
}

fn generate_board_field(grid: &Grid) -> String {
    let mut out = String::new();

    for (row, cells) in grid.iter().enumerate() {
        let mut empty_count = 0u8;

        for occupant in cells {
            match occupant {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(*piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row + 1 < grid.len() {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}
