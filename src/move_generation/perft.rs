//! Move-tree counting for validating generators.
//!
//! Walks every move sequence of a fixed length from a position by applying
//! and reversing moves on a working copy, and counts the leaves. Nothing is
//! scored.

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
    }
}

pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> PerftCounts {
    let mut working = game_state.clone();
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(generator, &mut working, depth, &mut counts);
    counts
}

/// Per-root-move counts, in generation order.
pub fn perft_divide<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> Vec<(ChessMove, PerftCounts)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut working = game_state.clone();
    let mut out = Vec::new();
    for mv in generator.generate_moves(&working) {
        let mut counts = PerftCounts::default();
        if depth == 1 {
            count_leaf(&mv, &mut counts);
        } else {
            working.apply_move(mv);
            perft_recurse(generator, &mut working, depth - 1, &mut counts);
            working.reverse_last_move();
        }
        out.push((mv, counts));
    }
    out
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    working: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) {
    let moves = generator.generate_moves(working);

    if depth == 1 {
        for mv in &moves {
            count_leaf(mv, counts);
        }
        return;
    }

    for mv in moves {
        working.apply_move(mv);
        let mut child = PerftCounts::default();
        perft_recurse(generator, working, depth - 1, &mut child);
        counts.merge(child);
        working.reverse_last_move();
    }
}

#[inline]
fn count_leaf(mv: &ChessMove, counts: &mut PerftCounts) {
    counts.nodes += 1;
    if mv.is_capture() {
        counts.captures += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::move_generator::PseudoLegalMoveGenerator;

    #[test]
    fn start_position_counts() {
        let game = GameState::new_game();
        let generator = PseudoLegalMoveGenerator;

        assert_eq!(perft(&generator, &game, 0).nodes, 1);
        assert_eq!(
            perft(&generator, &game, 1),
            PerftCounts {
                nodes: 20,
                captures: 0
            }
        );
        assert_eq!(
            perft(&generator, &game, 2),
            PerftCounts {
                nodes: 400,
                captures: 0
            }
        );
    }

    #[test]
    fn perft_leaves_the_input_untouched() {
        let game = GameState::new_game();
        let before = game.clone();
        perft(&PseudoLegalMoveGenerator, &game, 3);
        assert_eq!(game, before);
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w")
            .expect("FEN");
        let generator = PseudoLegalMoveGenerator;
        let total = perft(&generator, &game, 2);

        let mut summed = PerftCounts::default();
        for (_, counts) in perft_divide(&generator, &game, 2) {
            summed.merge(counts);
        }
        assert_eq!(summed, total);
        assert!(total.captures > 0);
    }

    /// Offers the first two generated moves only.
    struct FirstTwoMoves;

    impl MoveGenerator for FirstTwoMoves {
        fn generate_moves(&self, game_state: &GameState) -> Vec<ChessMove> {
            game_state
                .generate_pseudo_legal_moves()
                .into_iter()
                .take(2)
                .collect()
        }
    }

    #[test]
    fn counts_follow_the_given_generator() {
        let game = GameState::new_game();
        assert_eq!(perft(&FirstTwoMoves, &game, 3).nodes, 8);
        let divide = perft_divide(&FirstTwoMoves, &game, 1);
        assert_eq!(divide.len(), 2);
        assert_eq!(divide[0].1.nodes, 1);
    }

    #[test]
    fn single_capture_is_counted() {
        let game = GameState::from_fen("8/8/8/8/p7/8/8/R7 w").expect("FEN");
        let counts = perft(&PseudoLegalMoveGenerator, &game, 1);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 10,
                captures: 1
            }
        );
    }
}
