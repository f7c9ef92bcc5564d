//! King move rule.
//!
//! Not implemented: a king contributes no moves to the generated set. Adding
//! the one-square steps is the first step toward castling and check
//! detection, neither of which this crate models.

use crate::game_state::chess_types::*;

pub fn generate_king_moves(_game_state: &GameState, _from: Square, _out: &mut Vec<ChessMove>) {}
