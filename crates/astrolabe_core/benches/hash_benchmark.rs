//! Benchmark for the legacy hash primitives.
//!
//! Run with: cargo bench --package astrolabe_core --bench hash_benchmark

use astrolabe_core::hash::{hash_string, hash_tile, hash_uint, legacy_mod};
use astrolabe_core::{GridPos, MapKey};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn benchmark_hash_uint(c: &mut Criterion) {
    c.bench_function("hash_uint", |b| {
        let mut x = 0u32;
        b.iter(|| {
            x = x.wrapping_add(1);
            black_box(hash_uint(black_box(x)))
        });
    });
}

fn benchmark_hash_tile_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_tile");
    group.throughput(Throughput::Elements(100 * 100));

    group.bench_function("galaxy_grid_100x100", |b| {
        b.iter(|| {
            let mut hits = 0u32;
            for j in 0..100 {
                for i in 0..100 {
                    if hash_tile(i, j, 100, 100, black_box(-12_345)) % 200 == 0 {
                        hits += 1;
                    }
                }
            }
            black_box(hits)
        });
    });

    group.finish();
}

fn benchmark_key_hash(c: &mut Criterion) {
    let key = MapKey::planet(GridPos::new(97, 11), GridPos::new(18, 1), GridPos::new(20, 6));

    c.bench_function("planet_key_hash", |b| {
        b.iter(|| black_box(black_box(&key).hash()));
    });

    c.bench_function("hash_string_literal", |b| {
        b.iter(|| black_box(hash_string(black_box("Weathering.MapOfStarSystem#=1,4=14,93"))));
    });
}

fn benchmark_legacy_mod(c: &mut Criterion) {
    c.bench_function("legacy_mod_7", |b| {
        let mut x = i32::MIN;
        b.iter(|| {
            x = x.wrapping_add(7919);
            black_box(legacy_mod(black_box(x), 7))
        });
    });
}

criterion_group!(
    benches,
    benchmark_hash_uint,
    benchmark_hash_tile_grid,
    benchmark_key_hash,
    benchmark_legacy_mod
);
criterion_main!(benches);
