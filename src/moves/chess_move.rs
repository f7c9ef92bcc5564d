//! The move value.
//!
//! A `ChessMove` records one from/to transition together with the occupants
//! of both squares at the moment it was built. That snapshot is all the board
//! needs to apply the move and later undo it, so a move never looks at the
//! live board again.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Grid, Occupant, Square};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    from: Square,
    to: Square,
    piece_moved: Occupant,
    piece_captured: Occupant,
    id: u16,
}

impl ChessMove {
    /// Build a move from `from` to `to`, copying both occupants out of `grid`.
    ///
    /// No check is made that `from` holds a piece or that the move follows
    /// any movement rule.
    pub fn new(from: Square, to: Square, grid: &Grid) -> Self {
        Self {
            from,
            to,
            piece_moved: grid[from.row() as usize][from.col() as usize],
            piece_captured: grid[to.row() as usize][to.col() as usize],
            id: pack_move_id(from, to),
        }
    }

    /// Build a move from raw `(row, col)` pairs.
    pub fn from_coords(from: (u8, u8), to: (u8, u8), grid: &Grid) -> Result<Self, ChessErrors> {
        let from = Square::new(from.0, from.1)?;
        let to = Square::new(to.0, to.1)?;
        Ok(Self::new(from, to, grid))
    }

    /// Parse long algebraic text such as `"e2e4"` against a board snapshot.
    pub fn from_long_algebraic(text: &str, grid: &Grid) -> Result<Self, ChessErrors> {
        let text = text.trim();
        if text.len() != 4 || !text.is_ascii() {
            return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
        }
        let from = algebraic_to_square(&text[0..2])?;
        let to = algebraic_to_square(&text[2..4])?;
        Ok(Self::new(from, to, grid))
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub fn piece_moved(&self) -> Occupant {
        self.piece_moved
    }

    #[inline]
    pub fn piece_captured(&self) -> Occupant {
        self.piece_captured
    }

    /// `fromRow*1000 + fromCol*100 + toRow*10 + toCol`.
    #[inline]
    pub fn id(&self) -> u16 {
        self.id
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Origin then destination square, e.g. `"e2e4"`.
    pub fn to_algebraic(&self) -> String {
        format!(
            "{}{}",
            square_to_algebraic(self.from),
            square_to_algebraic(self.to)
        )
    }
}

/// Each coordinate is a single digit, so a decimal packing is collision free.
#[inline]
fn pack_move_id(from: Square, to: Square) -> u16 {
    from.row() as u16 * 1000 + from.col() as u16 * 100 + to.row() as u16 * 10 + to.col() as u16
}

// Equality and hashing follow the endpoints only.
impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ChessMove {}

impl Hash for ChessMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::game_state::chess_rules::starting_grid;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("square on the board")
    }

    #[test]
    fn id_packs_coordinates_as_digits() {
        let grid = starting_grid();
        let mv = ChessMove::new(sq(6, 4), sq(4, 4), &grid);
        assert_eq!(mv.id(), 6444);
        let corner = ChessMove::new(sq(0, 0), sq(7, 7), &grid);
        assert_eq!(corner.id(), 77);
    }

    #[test]
    fn construction_snapshots_both_occupants() {
        let grid = starting_grid();
        let capture_shape = ChessMove::new(sq(7, 1), sq(6, 3), &grid);
        assert_eq!(
            capture_shape.piece_moved(),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert_eq!(
            capture_shape.piece_captured(),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );

        let quiet = ChessMove::new(sq(6, 4), sq(4, 4), &grid);
        assert!(!quiet.is_capture());
    }

    #[test]
    fn equality_ignores_piece_fields() {
        let start = starting_grid();
        let empty: Grid = [[None; 8]; 8];
        let a = ChessMove::new(sq(6, 0), sq(4, 0), &start);
        let b = ChessMove::new(sq(6, 0), sq(4, 0), &empty);
        assert_ne!(a.piece_moved(), b.piece_moved());
        assert_eq!(a, b);

        let c = ChessMove::new(sq(6, 0), sq(5, 0), &start);
        assert_ne!(a, c);
    }

    #[test]
    fn equal_moves_hash_alike() {
        let empty: Grid = [[None; 8]; 8];
        let mut seen = HashSet::new();
        seen.insert(ChessMove::new(sq(6, 0), sq(4, 0), &starting_grid()));
        seen.insert(ChessMove::new(sq(6, 0), sq(4, 0), &empty));
        assert_eq!(seen.len(), 1);

        seen.insert(ChessMove::new(sq(6, 0), sq(5, 0), &empty));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn renders_file_letter_and_rank_digit() {
        let grid = starting_grid();
        assert_eq!(ChessMove::new(sq(6, 4), sq(4, 4), &grid).to_algebraic(), "e2e4");
        assert_eq!(ChessMove::new(sq(0, 6), sq(2, 5), &grid).to_string(), "g8f6");
        assert_eq!(ChessMove::new(sq(7, 7), sq(0, 0), &grid).to_algebraic(), "h1a8");
    }

    #[test]
    fn parses_long_algebraic() {
        let grid = starting_grid();
        let mv = ChessMove::from_long_algebraic("e2e4", &grid).expect("e2e4 parses");
        assert_eq!(mv, ChessMove::new(sq(6, 4), sq(4, 4), &grid));
        assert_eq!(
            mv.piece_moved(),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );

        assert!(ChessMove::from_long_algebraic("e2e", &grid).is_err());
        assert!(ChessMove::from_long_algebraic("e2e9", &grid).is_err());
        assert!(ChessMove::from_long_algebraic("i2e4", &grid).is_err());
    }

    #[test]
    fn from_coords_rejects_off_board() {
        let grid = starting_grid();
        assert!(ChessMove::from_coords((6, 4), (4, 4), &grid).is_ok());
        assert_eq!(
            ChessMove::from_coords((6, 4), (8, 4), &grid),
            Err(ChessErrors::OutOfBounds((8, 4)))
        );
    }
}
