//! Value types shared by the board, the move type and the generators.
//!
//! The board is a plain 8x8 mailbox: every square stores an `Occupant`, which
//! is either empty (`None`) or a colored piece.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::utils::algebraic::square_to_algebraic;

pub use crate::game_state::game_state::GameState;
pub use crate::moves::chess_move::ChessMove;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind. Color is stored separately in `Piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// A colored piece standing on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Contents of one square: `None` when empty.
pub type Occupant = Option<Piece>;

/// The 8x8 mailbox, indexed `[row][col]`.
///
/// Row 0 is black's home rank (rank 8), row 7 is white's (rank 1). Column 0 is
/// the a-file.
pub type Grid = [[Occupant; BOARD_SIZE]; BOARD_SIZE];

/// A square on the board. Holding one guarantees `row` and `col` are in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build a square from grid coordinates.
    pub fn new(row: u8, col: u8) -> Result<Self, ChessErrors> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(ChessErrors::OutOfBounds((row as i16, col as i16)))
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Step by a row/column delta, failing when the result leaves the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Result<Self, ChessErrors> {
        // Widened so any i8 delta stays representable.
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        if !(0..BOARD_SIZE as i16).contains(&row) || !(0..BOARD_SIZE as i16).contains(&col) {
            return Err(ChessErrors::OutOfBounds((row, col)));
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Every square in row-major order: a8, b8, ..., h8, a7, ..., h1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_rejects_out_of_range_coordinates() {
        assert!(Square::new(7, 7).is_ok());
        assert_eq!(Square::new(8, 0), Err(ChessErrors::OutOfBounds((8, 0))));
        assert_eq!(Square::new(0, 9), Err(ChessErrors::OutOfBounds((0, 9))));
    }

    #[test]
    fn offset_stays_on_board() {
        let a1 = Square::new(7, 0).expect("a1");
        let a2 = a1.offset(-1, 0).expect("a2 is on the board");
        assert_eq!((a2.row(), a2.col()), (6, 0));
        assert!(a1.offset(1, 0).is_err());
        assert!(a1.offset(0, -1).is_err());
    }

    #[test]
    fn offset_handles_extreme_deltas() {
        let h1 = Square::new(7, 7).expect("h1");
        assert_eq!(h1.offset(127, 0), Err(ChessErrors::OutOfBounds((134, 7))));
        assert_eq!(h1.offset(0, i8::MIN), Err(ChessErrors::OutOfBounds((7, -121))));
        let a8 = Square::new(0, 0).expect("a8");
        assert_eq!(a8.offset(i8::MIN, i8::MAX), Err(ChessErrors::OutOfBounds((-128, 127))));
        assert_eq!(a8.offset(7, 7), Ok(h1));
    }

    #[test]
    fn out_of_range_input_is_reported_unchanged() {
        assert_eq!(Square::new(200, 0), Err(ChessErrors::OutOfBounds((200, 0))));
        assert_eq!(Square::new(3, 255), Err(ChessErrors::OutOfBounds((3, 255))));
    }

    #[test]
    fn all_squares_are_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0].to_string(), "a8");
        assert_eq!(squares[1].to_string(), "b8");
        assert_eq!(squares[8].to_string(), "a7");
        assert_eq!(squares[63].to_string(), "h1");
    }

    #[test]
    fn colors_alternate() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite().index(), Color::White.index());
    }
}
