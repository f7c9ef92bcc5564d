//! Pseudo-legal move generation.
//!
//! Squares are scanned in row-major order (a8 first, h1 last). Each square
//! holding a piece of the side to move is handed to that piece kind's rule,
//! which appends its moves to a shared list. Nothing is filtered for king
//! safety.

use tracing::trace;

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Something that can enumerate the moves of a position.
pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, game_state: &GameState) -> Vec<ChessMove>;
}

/// Geometry and occupancy only; see the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, game_state: &GameState) -> Vec<ChessMove> {
        generate_pseudo_legal_moves(game_state)
    }
}

pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let side = game_state.side_to_move();
    let mut out = Vec::with_capacity(64);

    for from in Square::all() {
        let Some(piece) = game_state.occupant_at(from) else {
            continue;
        };
        if piece.color != side {
            continue;
        }
        generate_piece_moves(game_state, piece.kind, from, &mut out);
    }

    trace!(side = ?side, count = out.len(), "generated pseudo-legal moves");
    out
}

/// Dispatch one square to the rule for `kind`.
pub fn generate_piece_moves(
    game_state: &GameState,
    kind: PieceKind,
    from: Square,
    out: &mut Vec<ChessMove>,
) {
    match kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, out),
        PieceKind::King => generate_king_moves(game_state, from, out),
    }
}
