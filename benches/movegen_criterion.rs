use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, SeedableRng};

use grid_chess::game_state::game_state::GameState;
use grid_chess::move_generation::move_generator::PseudoLegalMoveGenerator;
use grid_chess::move_generation::perft::perft;
use grid_chess::utils::random_playout::random_playout;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    depth: u8,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
        depth: 3,
    },
    BenchCase {
        name: "open_middlegame",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w",
        depth: 2,
    },
    BenchCase {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w",
        depth: 3,
    },
];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_pseudo_legal_moves");
    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("bench FEN should parse");
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &game, |b, game| {
            b.iter(|| black_box(game.generate_pseudo_legal_moves()))
        });
    }
    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.measurement_time(Duration::from_secs(10));
    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("bench FEN should parse");
        let nodes = perft(&PseudoLegalMoveGenerator, &game, case.depth).nodes;
        group.throughput(Throughput::Elements(nodes as u64));
        group.bench_with_input(
            BenchmarkId::new(case.name, case.depth),
            &game,
            |b, game| b.iter(|| black_box(perft(&PseudoLegalMoveGenerator, game, case.depth))),
        );
    }
    group.finish();
}

fn bench_apply_reverse(c: &mut Criterion) {
    c.bench_function("random_playout_then_reverse_60", |b| {
        b.iter(|| {
            let mut game = GameState::new_game();
            let mut rng = StdRng::seed_from_u64(7);
            let played = random_playout(&mut game, 60, &mut rng);
            for _ in &played {
                game.reverse_last_move();
            }
            black_box(game)
        })
    });
}

criterion_group!(benches, bench_generate, bench_perft, bench_apply_reverse);
criterion_main!(benches);
