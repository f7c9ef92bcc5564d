//! Errors used throughout the crate.
//!
//! `ChessErrors` is the single error type returned by coordinate handling,
//! notation parsing and the checked move-application paths. The core
//! operations (`apply_move`, `reverse_last_move`, move generation) never fail;
//! errors only arise at the boundary where raw input (coordinates, text, moves
//! built elsewhere) enters the crate.
//!
//! Usage guidelines:
//! - Parsing and coordinate variants are recoverable and suitable for showing
//!   to end users.
//! - `InvalidMove` means a caller tried to apply a move that does not fit the
//!   current position. The board is left untouched when it is returned.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Square;

/// Why a move was refused by `GameState::try_apply_move` or
/// `GameState::play_long_algebraic`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// The origin square holds no piece.
    EmptyOrigin(Square),
    /// The piece on the origin square belongs to the side not on move.
    NotSideToMove(Square),
    /// Origin and destination are the same square.
    SameSquare(Square),
    /// The destination holds a piece of the side to move.
    AllyDestination(Square),
    /// The occupants recorded in the move differ from the live board, so the
    /// move was built from another position.
    StaleSnapshot(Square),
    /// The move is not among the pseudo-legal moves of the position.
    NotPseudoLegal(String),
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveReason::EmptyOrigin(sq) => write!(f, "no piece on {sq}"),
            InvalidMoveReason::NotSideToMove(sq) => {
                write!(f, "piece on {sq} does not belong to the side to move")
            }
            InvalidMoveReason::SameSquare(sq) => write!(f, "move starts and ends on {sq}"),
            InvalidMoveReason::AllyDestination(sq) => {
                write!(f, "{sq} is occupied by a piece of the side to move")
            }
            InvalidMoveReason::StaleSnapshot(sq) => {
                write!(f, "move was built from a different position (mismatch on {sq})")
            }
            InvalidMoveReason::NotPseudoLegal(text) => {
                write!(f, "{text} is not a pseudo-legal move in this position")
            }
        }
    }
}

/// Unified error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Coordinates outside the 8x8 grid.
    ///
    /// Payload: (row, col) as requested.
    OutOfBounds((i16, i16)),

    /// A single character of a square name was not a file `a..h` or rank `1..8`.
    InvalidAlgebraicChar(char),

    /// A square or move string had the wrong shape.
    ///
    /// Payload: the original text.
    InvalidAlgebraicString(String),

    /// Unknown piece letter in a FEN placement field.
    InvalidFenToken(char),

    /// FEN text with malformed structure.
    ///
    /// Payload: a description of what was wrong.
    InvalidFenString(String),

    /// A move that does not fit the current board.
    InvalidMove(InvalidMoveReason),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::OutOfBounds((row, col)) => {
                write!(f, "coordinates ({row}, {col}) are off the board")
            }
            ChessErrors::InvalidAlgebraicChar(ch) => {
                write!(f, "invalid algebraic character '{ch}'")
            }
            ChessErrors::InvalidAlgebraicString(text) => {
                write!(f, "invalid algebraic string: {text}")
            }
            ChessErrors::InvalidFenToken(ch) => write!(f, "invalid FEN token '{ch}'"),
            ChessErrors::InvalidFenString(msg) => write!(f, "invalid FEN: {msg}"),
            ChessErrors::InvalidMove(reason) => write!(f, "invalid move: {reason}"),
        }
    }
}

impl Error for ChessErrors {}
