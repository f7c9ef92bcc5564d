//! Queen move rule: the rook rays and the bishop rays together.

use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::{generate_sliding_moves, QUEEN_DIRECTIONS};

pub fn generate_queen_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    generate_sliding_moves(game_state, from, &QUEEN_DIRECTIONS, out);
}
