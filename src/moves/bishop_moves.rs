//! Bishop move rule: slide along the four diagonal rays.

use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::{generate_sliding_moves, BISHOP_DIRECTIONS};

pub fn generate_bishop_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    generate_sliding_moves(game_state, from, &BISHOP_DIRECTIONS, out);
}
