//! Board state: the grid, the side to move and the move history.
//!
//! `GameState` is the only owner of the grid. Pieces move exclusively through
//! `apply_move` and `reverse_last_move`, which keeps the grid equal to the
//! starting layout with every move in `history` replayed in order.

use tracing::{debug, warn};

use crate::chess_errors::{ChessErrors, InvalidMoveReason};
use crate::game_state::chess_rules::{starting_grid, BOARD_SIZE};
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::generate_pseudo_legal_moves;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    side_to_move: Color,
    // Undo stack; last applied is first reversed.
    history: Vec<ChessMove>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            side_to_move: Color::White,
            history: Vec::new(),
        }
    }
}

impl GameState {
    /// An empty board with white to move.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// The standard starting position, white to move, no history.
    pub fn new_game() -> Self {
        Self::from_grid(starting_grid(), Color::White)
    }

    /// An arbitrary layout with an empty history.
    pub fn from_grid(grid: Grid, side_to_move: Color) -> Self {
        Self {
            grid,
            side_to_move,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Applied moves, oldest first.
    #[inline]
    pub fn history(&self) -> &[ChessMove] {
        &self.history
    }

    #[inline]
    pub fn occupant_at(&self, square: Square) -> Occupant {
        self.grid[square.row() as usize][square.col() as usize]
    }

    #[inline]
    fn set_occupant(&mut self, square: Square, occupant: Occupant) {
        self.grid[square.row() as usize][square.col() as usize] = occupant;
    }

    /// Play `mv` without looking at the board first.
    ///
    /// The origin is emptied and the destination receives `mv.piece_moved()`.
    /// The caller must pass a move built from this exact position, normally
    /// one returned by `generate_pseudo_legal_moves`. Use `try_apply_move`
    /// when that is not guaranteed.
    pub fn apply_move(&mut self, mv: ChessMove) {
        debug!(mv = %mv, side = ?self.side_to_move, "apply move");
        self.set_occupant(mv.from(), None);
        self.set_occupant(mv.to(), mv.piece_moved());
        self.history.push(mv);
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Play `mv` after checking it was built from the current board.
    ///
    /// The origin must hold a piece of the side to move, the destination must
    /// be a different square not held by an ally, and both snapshot occupants
    /// must still match the grid. Geometry is not checked. On error the state
    /// is unchanged.
    pub fn try_apply_move(&mut self, mv: ChessMove) -> Result<(), ChessErrors> {
        if let Err(reason) = self.check_move_snapshot(&mv) {
            warn!(mv = %mv, %reason, "rejected move");
            return Err(ChessErrors::InvalidMove(reason));
        }
        self.apply_move(mv);
        Ok(())
    }

    fn check_move_snapshot(&self, mv: &ChessMove) -> Result<(), InvalidMoveReason> {
        let from = mv.from();
        let Some(piece) = self.occupant_at(from) else {
            return Err(InvalidMoveReason::EmptyOrigin(from));
        };
        if piece.color != self.side_to_move {
            return Err(InvalidMoveReason::NotSideToMove(from));
        }
        if mv.to() == from {
            return Err(InvalidMoveReason::SameSquare(from));
        }
        if matches!(self.occupant_at(mv.to()), Some(target) if target.color == self.side_to_move) {
            return Err(InvalidMoveReason::AllyDestination(mv.to()));
        }
        if mv.piece_moved() != Some(piece) {
            return Err(InvalidMoveReason::StaleSnapshot(from));
        }
        if mv.piece_captured() != self.occupant_at(mv.to()) {
            return Err(InvalidMoveReason::StaleSnapshot(mv.to()));
        }
        Ok(())
    }

    /// Undo the most recent move and return it, or do nothing and return
    /// `None` when the history is empty.
    ///
    /// Both squares are restored from the move's own snapshot, overwriting
    /// whatever currently stands on the destination.
    pub fn reverse_last_move(&mut self) -> Option<ChessMove> {
        let mv = self.history.pop()?;
        self.set_occupant(mv.from(), mv.piece_moved());
        self.set_occupant(mv.to(), mv.piece_captured());
        self.side_to_move = self.side_to_move.opposite();
        debug!(mv = %mv, side = ?self.side_to_move, "reverse move");
        Some(mv)
    }

    /// Every geometrically possible move for the side to move.
    ///
    /// King safety is not considered and kings contribute no moves.
    #[inline]
    pub fn generate_pseudo_legal_moves(&self) -> Vec<ChessMove> {
        generate_pseudo_legal_moves(self)
    }

    /// Moves the side to move may play.
    ///
    /// Without check detection this is the pseudo-legal set unchanged; a
    /// move here can still leave the mover's king attacked.
    #[inline]
    pub fn valid_moves(&self) -> Vec<ChessMove> {
        self.generate_pseudo_legal_moves()
    }

    /// Parse `text` (e.g. `"e2e4"`), require it to be one of the pseudo-legal
    /// moves of this position, and play it.
    pub fn play_long_algebraic(&mut self, text: &str) -> Result<ChessMove, ChessErrors> {
        let requested = ChessMove::from_long_algebraic(text, &self.grid)?;
        let Some(mv) = self
            .valid_moves()
            .into_iter()
            .find(|candidate| *candidate == requested)
        else {
            warn!(mv = %requested, "rejected move");
            return Err(ChessErrors::InvalidMove(InvalidMoveReason::NotPseudoLegal(
                requested.to_algebraic(),
            )));
        };
        self.apply_move(mv);
        Ok(mv)
    }
}
