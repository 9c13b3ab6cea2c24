//! Benchmarks for board construction and the backtracking search.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use gridlock_core::empty_grid;
use gridlock_solver::Solver;

fn reference_puzzle() -> Vec<Vec<i32>> {
    [
        [0, 0, 9, 0, 1, 6, 0, 4, 2],
        [1, 0, 4, 2, 0, 9, 0, 6, 0],
        [0, 2, 0, 0, 0, 8, 7, 0, 0],
        [3, 5, 0, 0, 9, 0, 1, 0, 0],
        [0, 6, 7, 4, 0, 1, 9, 0, 5],
        [0, 0, 0, 7, 5, 0, 0, 8, 6],
        [0, 9, 0, 0, 0, 4, 8, 5, 7],
        [8, 0, 0, 9, 6, 0, 0, 2, 0],
        [4, 7, 0, 8, 0, 5, 0, 0, 0],
    ]
    .iter()
    .map(|row| row.to_vec())
    .collect()
}

fn bench_construct(c: &mut Criterion) {
    let grid = reference_puzzle();
    c.bench_function("construct/reference", |b| {
        b.iter(|| hint::black_box(Solver::new(hint::black_box(&grid))));
    });
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for (param, grid) in [("reference", reference_puzzle()), ("empty", empty_grid())] {
        group.bench_function(param, |b| {
            b.iter_batched(
                || Solver::new(&grid).expect("valid grid"),
                |mut solver| hint::black_box(solver.solve()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_construct, bench_solve);
criterion_main!(benches);
