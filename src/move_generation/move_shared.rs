//! Direction tables and occupancy helpers shared by the per-piece rules.
//!
//! Directions are `(d_row, d_col)` grid deltas. "Ally" and "enemy" are always
//! relative to the side to move of the position being inspected.

use crate::game_state::chess_types::*;

/// Up, left, down, right.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
];

#[inline]
pub fn is_empty(game_state: &GameState, square: Square) -> bool {
    game_state.occupant_at(square).is_none()
}

#[inline]
pub fn is_ally(game_state: &GameState, square: Square) -> bool {
    matches!(game_state.occupant_at(square), Some(piece) if piece.color == game_state.side_to_move())
}

#[inline]
pub fn is_enemy(game_state: &GameState, square: Square) -> bool {
    matches!(game_state.occupant_at(square), Some(piece) if piece.color != game_state.side_to_move())
}

/// Walk each ray from `from` one square at a time.
///
/// Empty squares are destinations. The first occupied square ends the ray and
/// is a destination only when it holds an enemy piece. The board edge ends the
/// ray as well.
pub fn generate_sliding_moves(
    game_state: &GameState,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Ok(to) = cursor.offset(d_row, d_col) {
            match game_state.occupant_at(to) {
                None => out.push(ChessMove::new(from, to, game_state.grid())),
                Some(piece) => {
                    if piece.color != game_state.side_to_move() {
                        out.push(ChessMove::new(from, to, game_state.grid()));
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}
