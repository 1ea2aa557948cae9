//! Benchmarks for move generation, the legality filter and position counting.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use treechess::board::color::Color;
use treechess::board::Board;
use treechess::chess_position;
use treechess::move_generator::{count_positions, generate_moves, legal_moves};

/// Test positions representing different game phases and move complexity.
fn benchmark_positions() -> Vec<(String, Board)> {
    vec![
        ("starting".to_string(), Board::default()),
        (
            "tactical".to_string(),
            chess_position! {
                ....r..k
                ....q...
                ........
                ........
                ........
                ........
                .....PPP
                R.....K.
            },
        ),
        (
            "middlegame".to_string(),
            chess_position! {
                r..q.rk.
                ppp..ppp
                ..n.....
                ....p...
                ....P...
                ........
                PPP..PPP
                R..Q.RK.
            },
        ),
        (
            "endgame".to_string(),
            chess_position! {
                ........
                ........
                ........
                ........
                ........
                ........
                K.......
                .......k
            },
        ),
    ]
}

fn benchmark_full_move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Full Move Generation");
    group.sample_size(10);
    group.warm_up_time(std::time::Duration::from_millis(100));
    group.measurement_time(std::time::Duration::from_secs(1));

    for (name, mut board) in benchmark_positions() {
        for color in [Color::White, Color::Black] {
            group.bench_with_input(
                BenchmarkId::new(format!("{}_{}", name, color), &name),
                &name,
                |b, _| b.iter(|| black_box(generate_moves(black_box(&mut board), color))),
            );
        }
    }

    group.finish();
}

fn benchmark_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("Legal Moves");
    group.sample_size(10);

    for (name, mut board) in benchmark_positions() {
        group.bench_with_input(BenchmarkId::new(name.clone(), &name), &name, |b, _| {
            b.iter(|| black_box(legal_moves(black_box(&mut board))))
        });
    }

    group.finish();
}

fn benchmark_count_positions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Count Positions");
    group.sample_size(10);

    let mut board = Board::default();
    group.bench_function("depth 3", |b| {
        b.iter(|| black_box(count_positions(black_box(&mut board), 3)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_full_move_generation,
    benchmark_legal_moves,
    benchmark_count_positions
);
criterion_main!(benches);
