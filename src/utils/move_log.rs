//! Move log text export.
//!
//! Numbers a move history as movetext (`1. e2e4 e7e5 2. g1f3`) and wraps it
//! in a PGN-style tag header. Moves are written in the same long algebraic
//! form `ChessMove::to_algebraic` produces. The result is returned as a string;
//! writing it anywhere is left to the caller.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;

/// Movetext for `history`, whose first move was made by `first_to_move`.
///
/// A game that opens with black starts as `1... a7a6`.
pub fn write_movetext(history: &[ChessMove], first_to_move: Color) -> String {
    let offset = first_to_move.index();
    let mut parts = Vec::<String>::with_capacity(history.len());
    for (ply, mv) in history.iter().enumerate() {
        let half_move = ply + offset;
        let number = half_move / 2 + 1;
        if half_move % 2 == 0 {
            parts.push(format!("{number}. {mv}"));
        } else if ply == 0 {
            parts.push(format!("{number}... {mv}"));
        } else {
            parts.push(mv.to_string());
        }
    }
    parts.join(" ")
}

/// Header block plus movetext for the game played so far on `game_state`.
///
/// The game is always marked unfinished (`*`) since the board does not
/// detect results.
pub fn write_move_log(game_state: &GameState, date: NaiveDate) -> String {
    let mut headers = BTreeMap::<&str, String>::new();
    headers.insert("Event", "Casual Game".to_owned());
    headers.insert("Site", "Local".to_owned());
    headers.insert("Date", date.format("%Y.%m.%d").to_string());
    headers.insert("White", "White".to_owned());
    headers.insert("Black", "Black".to_owned());
    headers.insert("Result", "*".to_owned());

    let initial = initial_position(game_state);
    let initial_fen = initial.get_fen();
    if initial_fen != placement_and_side(STARTING_POSITION_FEN) {
        headers.insert("SetUp", "1".to_owned());
        headers.insert("FEN", initial_fen);
    }

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_tag_value(value)));
    }
    out.push('\n');

    let movetext = write_movetext(game_state.history(), initial.side_to_move());
    if movetext.is_empty() {
        out.push('*');
    } else {
        out.push_str(&movetext);
        out.push_str(" *");
    }
    out.push('\n');
    out
}

/// `write_move_log` stamped with today's local date.
pub fn write_move_log_today(game_state: &GameState) -> String {
    write_move_log(game_state, Local::now().date_naive())
}

/// The position before the first recorded move.
fn initial_position(game_state: &GameState) -> GameState {
    let mut initial = game_state.clone();
    while initial.reverse_last_move().is_some() {}
    initial
}

fn placement_and_side(fen: &str) -> String {
    fen.split_whitespace().take(2).collect::<Vec<_>>().join(" ")
}

fn escape_tag_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
