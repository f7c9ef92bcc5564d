//! FEN-to-GameState parser.
//!
//! Reads the piece placement and active color fields. Castling, en passant
//! and clock fields may follow; they are checked for shape and then dropped,
//! because the board model has no castling, en passant or move clocks.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidFenString("missing side to move".to_owned()))?;

    let grid = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;

    if let Some(castling_part) = parts.next() {
        check_castling_field(castling_part)?;
    }
    if let Some(en_passant_part) = parts.next() {
        if en_passant_part != "-" {
            algebraic_to_square(en_passant_part)?;
        }
    }
    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| ChessErrors::InvalidFenString(format!("invalid move clock: {clock}")))?;
    }
    if parts.next().is_some() {
        return Err(ChessErrors::InvalidFenString("extra trailing fields".to_owned()));
    }

    Ok(GameState::from_grid(grid, side_to_move))
}

fn parse_board(board_part: &str) -> Result<Grid, ChessErrors> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(ChessErrors::InvalidFenString(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut grid: Grid = [[None; BOARD_SIZE]; BOARD_SIZE];

    // FEN lists rank 8 first, which is grid row 0.
    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenToken(ch));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFenToken(ch))?;
            if col >= BOARD_SIZE {
                return Err(ChessErrors::InvalidFenString(format!(
                    "rank {} has too many files",
                    BOARD_SIZE - row
                )));
            }
            grid[row][col] = Some(piece);
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(ChessErrors::InvalidFenString(format!(
                "rank {} does not sum to 8 files",
                BOARD_SIZE - row
            )));
        }
    }

    Ok(grid)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessErrors::InvalidFenString(format!(
            "invalid side to move: {side_part}"
        ))),
    }
}

fn check_castling_field(castling_part: &str) -> Result<(), ChessErrors> {
    if castling_part == "-" {
        return Ok(());
    }
    match castling_part.chars().find(|ch| !matches!(ch, 'K' | 'Q' | 'k' | 'q')) {
        Some(ch) => Err(ChessErrors::InvalidFenToken(ch)),
        None => Ok(()),
    }
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
