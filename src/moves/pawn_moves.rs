//! Pawn move rule.
//!
//! Single and double advances onto empty squares, and forward diagonal
//! captures onto enemy-occupied squares. En passant and promotion are not
//! part of this rule set: a pawn that reaches the last rank simply has no
//! forward square left.

use crate::game_state::chess_rules::{pawn_forward, pawn_home_row};
use crate::game_state::chess_types::*;
use crate::move_generation::move_shared::{is_empty, is_enemy};

pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move();
    let forward = pawn_forward(side);

    if let Ok(one_step) = from.offset(forward, 0) {
        if is_empty(game_state, one_step) {
            out.push(ChessMove::new(from, one_step, game_state.grid()));

            if from.row() == pawn_home_row(side) {
                if let Ok(two_step) = from.offset(2 * forward, 0) {
                    if is_empty(game_state, two_step) {
                        out.push(ChessMove::new(from, two_step, game_state.grid()));
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Ok(to) = from.offset(forward, d_col) else {
            continue;
        };
        if is_enemy(game_state, to) {
            out.push(ChessMove::new(from, to, game_state.grid()));
        }
    }
}
