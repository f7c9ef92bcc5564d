//! Move generation report.
//!
//! Usage:
//! `cargo run --release --bin movegen_report`
//! `cargo run --release --bin movegen_report -- --depth 4 --seed 11`
//!
//! Set `RUST_LOG=grid_chess=debug` to trace every applied and reversed move.

use std::time::Instant;

use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use grid_chess::chess_errors::ChessErrors;
use grid_chess::game_state::game_state::GameState;
use grid_chess::move_generation::move_generator::PseudoLegalMoveGenerator;
use grid_chess::move_generation::perft::perft;
use grid_chess::utils::move_log::write_move_log_today;
use grid_chess::utils::random_playout::random_playout;

fn parse_arg_u64(flag: &str, default: u64) -> u64 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u64>() {
                return v;
            }
        }
    }
    default
}

fn run_case(name: &str, fen: &str, depth: u8) -> Result<(), ChessErrors> {
    let game = GameState::from_fen(fen)?;
    let start = Instant::now();
    let counts = perft(&PseudoLegalMoveGenerator, &game, depth);
    println!(
        "{name}: depth={depth} nodes={} captures={} elapsed_ms={}",
        counts.nodes,
        counts.captures,
        start.elapsed().as_millis()
    );
    Ok(())
}

fn main() -> Result<(), ChessErrors> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let depth = parse_arg_u64("--depth", 3).clamp(1, 6) as u8;
    let seed = parse_arg_u64("--seed", 7);
    info!(depth, seed, "movegen report");

    let suite = [
        (
            "startpos",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
        ),
        (
            "open_middlegame",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w",
        ),
        ("rook_endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w"),
    ];
    for (name, fen) in suite {
        run_case(name, fen, depth)?;
    }

    let mut game = GameState::new_game();
    let mut rng = StdRng::seed_from_u64(seed);
    let played = random_playout(&mut game, 40, &mut rng);
    println!("\nrandom playout: plies={} final={}", played.len(), game.get_fen());
    println!("{}", write_move_log_today(&game));
    Ok(())
}
