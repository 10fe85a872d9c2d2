//! Benchmarks for the puzzle engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use octahedron::engine::Engine;
use octahedron::moves::{Direction, MoveCode};
use octahedron::notation::parse_sequence;
use octahedron::permutation::Permutation;

const SCRAMBLE: &str = "1 10 12' 5 20' 3 9 14 7' 16 2' 18 6 11' 4 15 8' 13 19 17'";

/// Benchmark animating and committing a single face turn.
fn bench_face_turn(c: &mut Criterion) {
    c.bench_function("face_turn", |b| {
        b.iter(|| {
            let mut engine = Engine::new();
            engine.enqueue(black_box(1), 1).unwrap();
            engine.run_to_completion()
        })
    });
}

/// Benchmark parsing and running a twenty-move scramble.
fn bench_scramble(c: &mut Criterion) {
    c.bench_function("scramble_20", |b| {
        b.iter(|| {
            let mut engine = Engine::new();
            for task in parse_sequence(black_box(SCRAMBLE)).unwrap() {
                engine.push(task);
            }
            engine.run_to_completion()
        })
    });
}

/// Benchmark committing every move once, without animation.
fn bench_commit_all(c: &mut Criterion) {
    c.bench_function("commit_all_moves", |b| {
        b.iter(|| {
            let mut permutation = Permutation::identity();
            for code in MoveCode::iter() {
                let direction = black_box(Direction::Reverse);
                permutation.commit(code.def().permuted_cycles(), direction);
            }
            permutation
        })
    });
}

criterion_group!(benches, bench_face_turn, bench_scramble, bench_commit_all);
criterion_main!(benches);
