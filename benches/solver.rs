//! Benchmarks for the puzzle solvers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use puzzlebox::grid::Board;
use puzzlebox::maze::{EATER_MAZE, MAZE_PUZZLE};
use puzzlebox::parser::parse_maze;
use puzzlebox::pieces::{A_PIECES, SYMMETRY_PUZZLE};
use puzzlebox::solver::emplace;
use puzzlebox::tracer;

/// Benchmark building the maze graph from its diagram.
fn bench_parse_maze(c: &mut Criterion) {
    c.bench_function("parse_maze", |b| b.iter(|| parse_maze(black_box(EATER_MAZE))));
}

/// Benchmark the complete maze search on a prebuilt panel.
fn bench_trace_maze(c: &mut Criterion) {
    let mut panel = MAZE_PUZZLE.panel().expect("maze diagram is valid");

    let mut group = c.benchmark_group("maze");
    group.sample_size(10);
    group.bench_function("trace_all", |b| {
        b.iter(|| tracer::solve(black_box(&mut panel), None))
    });
    group.finish();
}

/// Benchmark enumerating placements of one piece on a blank board.
fn bench_emplace(c: &mut Criterion) {
    let board = Board::blank(5, 5);

    c.bench_function("emplace", |b| {
        b.iter(|| emplace(black_box(&A_PIECES[0]), &board).count())
    });
}

/// Benchmark the complete tiling search.
fn bench_solve_symmetry(c: &mut Criterion) {
    c.bench_function("solve_symmetry", |b| {
        b.iter(|| black_box(&SYMMETRY_PUZZLE).solve(None))
    });
}

criterion_group!(
    benches,
    bench_parse_maze,
    bench_trace_maze,
    bench_emplace,
    bench_solve_symmetry
);
criterion_main!(benches);
