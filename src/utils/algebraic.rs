//! Conversions between grid squares and algebraic square names.
//!
//! Column 0 is the a-file. Row 0 is rank 8, the rank farthest from white, so
//! the rank digit counts down as the row index counts up.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Square;

/// Convert a square name such as `"e4"` to a grid square.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    let col = file - b'a';
    let row = BOARD_SIZE as u8 - 1 - (rank - b'1');
    Square::new(row, col)
}

/// Convert a grid square to its name, e.g. `(4, 4)` to `"e4"`.
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col());
    let rank_char = char::from(b'8' - square.row());
    format!("{file_char}{rank_char}")
}
