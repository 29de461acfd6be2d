//! Benchmarks for move enumeration and ranking.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_qwirkle::board::{replay_script, Board};
use rust_qwirkle::core::{Piece, Settings};
use rust_qwirkle::search::{enumerate_moves, rank_plays, SearchConfig};

fn hand(text: &str) -> Vec<Piece> {
    text.split_whitespace()
        .filter_map(Piece::from_abbreviation)
        .collect()
}

fn midgame() -> Board {
    let script = "rc 0 0, rs 1 0, rd 2 0; bd 2 1, bt 3 1; yt 3 2, gt 3 3; gc 4 3";
    replay_script(&Board::new(Settings::default()), script).expect("benchmark position is legal")
}

/// Enumeration from an open board with hands of increasing size.
fn benchmark_enumerate(c: &mut Criterion) {
    let board = midgame();
    let pieces = hand("rt rl bc bs gd yd");

    let mut group = c.benchmark_group("Enumerate");
    for size in [2, 4, 6] {
        let hand = &pieces[..size];
        group.bench_with_input(BenchmarkId::new("midgame/hand", size), &hand, |b, hand| {
            b.iter(|| black_box(enumerate_moves(&board, black_box(hand), &SearchConfig::unlimited())));
        });
    }
    group.finish();
}

/// Full decision pipeline: enumerate then rank.
fn benchmark_rank(c: &mut Criterion) {
    let board = midgame();
    let pieces = hand("rt rl bc bs gd yd");

    c.bench_function("enumerate_and_rank", |b| {
        b.iter(|| {
            let moves = enumerate_moves(&board, &pieces, &SearchConfig::unlimited());
            black_box(rank_plays(&board, moves.into_plays()))
        });
    });
}

criterion_group!(benches, benchmark_enumerate, benchmark_rank);
criterion_main!(benches);
