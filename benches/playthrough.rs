//! Benchmarks for replaying complete turn lists.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ludo_sim::core::{Seat, Turn};
use ludo_sim::game::{run, Game};

/// A long four-seat turn list with a fixed roll pattern.
fn turn_list(len: usize) -> Vec<Turn> {
    (0..len)
        .map(|i| Turn::new(Seat::ALL[i % 4], (i * 7 % 6 + 1) as i32))
        .collect()
}

fn bench_run_4p(c: &mut Criterion) {
    let turns = turn_list(400);

    c.bench_function("run_4p_400_turns", |b| {
        b.iter(|| {
            let spaces = run(black_box(&Seat::ALL), black_box(&turns));
            black_box(spaces)
        });
    });
}

fn bench_run_without_history(c: &mut Criterion) {
    let turns = turn_list(400);
    let config = ludo_sim::GameConfig::default().with_history(false);

    c.bench_function("run_4p_400_turns_no_history", |b| {
        b.iter(|| {
            let mut game = Game::with_config(&Seat::ALL, config.clone()).unwrap();
            game.play(black_box(&turns)).unwrap();
            black_box(game.board())
        });
    });
}

criterion_group!(benches, bench_run_4p, bench_run_without_history);
criterion_main!(benches);
