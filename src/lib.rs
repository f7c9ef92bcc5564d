//! Crate root module declarations for the grid_chess board tracker.
//!
//! An 8x8 mailbox board with a side-to-move flag and an undo history, the
//! per-piece pseudo-legal move rules, and the move value that carries enough
//! of a snapshot to be reversed. Check detection, castling, en passant,
//! promotion and king moves are not modelled.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod chess_move;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod move_shared;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod move_log;
    pub mod random_playout;
}
