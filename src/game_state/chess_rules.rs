//! Canonical chess-rule constants.
//!
//! Board geometry, the pawn home ranks and advance directions, and the
//! standard starting position used to initialize a game.

use crate::game_state::chess_types::{Color, Grid, Piece, PieceKind};

/// Files and ranks per side of the board.
pub const BOARD_SIZE: usize = 8;

/// Standard starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Grid row a pawn of `color` starts on; only from here may it advance two squares.
#[inline]
pub const fn pawn_home_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row delta of a pawn's forward step. White moves toward row 0.
#[inline]
pub const fn pawn_forward(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Piece order on both home ranks, a-file to h-file.
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The standard opening layout as a grid.
pub fn starting_grid() -> Grid {
    let mut grid: Grid = [[None; BOARD_SIZE]; BOARD_SIZE];
    for (col, kind) in BACK_RANK.iter().enumerate() {
        grid[0][col] = Some(Piece::new(Color::Black, *kind));
        grid[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        grid[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
        grid[7][col] = Some(Piece::new(Color::White, *kind));
    }
    grid
}
