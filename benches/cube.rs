//! Cost of the operations a search repeats millions of times.
//!
//! Run: `cargo bench --bench cube`

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rubik::{Algorithm, Cube, MOVES};

const SUPERFLIP: &str = "U R2 F B R B2 R U2 L B2 R U' D' R2 F R' L B2 U2 F2";

fn scrambled() -> Cube {
    rubik::apply_algorithm("R U R' U' F2 D B' L2 U F").unwrap()
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    let cube = scrambled();
    let r = MOVES.find("R").unwrap().cube;
    group.bench_function("move", |b| b.iter(|| black_box(&cube).apply(black_box(&r))));

    let other = scrambled().invert();
    group.bench_function("cube", |b| {
        b.iter(|| black_box(&cube).apply(black_box(&other)));
    });

    group.finish();
}

fn bench_invert(c: &mut Criterion) {
    let cube = scrambled();
    c.bench_function("invert", |b| b.iter(|| black_box(&cube).invert()));
}

fn bench_algorithm(c: &mut Criterion) {
    let algorithm: Algorithm = SUPERFLIP.parse().unwrap();
    c.bench_function("superflip_to_cube", |b| {
        b.iter(|| black_box(&algorithm).to_cube());
    });
    c.bench_function("superflip_parse", |b| {
        b.iter(|| black_box(SUPERFLIP).parse::<Algorithm>());
    });
}

criterion_group!(benches, bench_apply, bench_invert, bench_algorithm);
criterion_main!(benches);
