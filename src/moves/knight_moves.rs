//! Knight move rule: the eight fixed jumps, onto any square not held by an ally.

use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::{is_ally, KNIGHT_OFFSETS};

pub fn generate_knight_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        let Ok(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if !is_ally(game_state, to) {
            out.push(ChessMove::new(from, to, game_state.grid()));
        }
    }
}
