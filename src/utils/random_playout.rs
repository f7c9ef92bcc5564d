//! Random move selection and playouts.
//!
//! Picks uniformly among the pseudo-legal moves of a position. Used to drive
//! the board through arbitrary, reproducible sequences (pass a seeded
//! `StdRng`) for tests, benchmarks and the report binary.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::chess_types::*;

/// A uniformly chosen pseudo-legal move, or `None` when there is none.
pub fn choose_random_move<R: Rng + ?Sized>(game_state: &GameState, rng: &mut R) -> Option<ChessMove> {
    game_state
        .generate_pseudo_legal_moves()
        .as_slice()
        .choose(rng)
        .copied()
}

/// Play up to `plies` random moves on `game_state` and return them in order.
///
/// Stops early when the side to move has no moves.
pub fn random_playout<R: Rng + ?Sized>(
    game_state: &mut GameState,
    plies: usize,
    rng: &mut R,
) -> Vec<ChessMove> {
    let mut played = Vec::with_capacity(plies);
    for _ in 0..plies {
        let Some(mv) = choose_random_move(game_state, rng) else {
            break;
        };
        game_state.apply_move(mv);
        played.push(mv);
    }
    played
}
