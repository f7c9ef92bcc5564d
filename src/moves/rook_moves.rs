//! Rook move rule: slide along the four orthogonal rays.

use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::{generate_sliding_moves, ROOK_DIRECTIONS};

pub fn generate_rook_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    generate_sliding_moves(game_state, from, &ROOK_DIRECTIONS, out);
}
