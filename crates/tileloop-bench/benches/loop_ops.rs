//! Criterion micro-benchmarks for loop table build and lookup.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tileloop_bench::bordered_room;
use tileloop_core::{Direction, NullSink};
use tileloop_loop::LoopResolver;

/// Benchmark: Build the loop table for a 1024x1024 fully bordered room.
///
/// Only the perimeter is read, so this scales with 4 * 1024 cells.
fn bench_build_loop_table_1024(c: &mut Criterion) {
    let (map, scan) = bordered_room(1024).unwrap();
    let resolver = LoopResolver::new(&NullSink);

    c.bench_function("build_loop_table_1024", |b| {
        b.iter(|| {
            let table = resolver.build(&map, black_box(&scan)).unwrap();
            black_box(table.len());
        });
    });
}

/// Benchmark: Query every cell and direction of a 100x100 room (40K lookups).
fn bench_query_all_cells_100(c: &mut Criterion) {
    let (map, scan) = bordered_room(100).unwrap();
    let table = LoopResolver::new(&NullSink).build(&map, &scan).unwrap();
    let room = table.room();

    c.bench_function("query_all_cells_100", |b| {
        b.iter(|| {
            for coord in room.iter() {
                for d in Direction::ALL {
                    black_box(table.query(coord, d));
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_build_loop_table_1024,
    bench_query_all_cells_100
);
criterion_main!(benches);
