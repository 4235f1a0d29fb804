//! Benchmark for the scanner and the catalog writer.
//!
//! Run with: cargo bench --package astrolabe_scanner --bench scan_benchmark

use astrolabe_procedural::UniverseConfig;
use astrolabe_scanner::{write_catalog, Catalog, ScanConfig, SilentProgress, UniverseScanner};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_scan_row(c: &mut Criterion) {
    let scanner = UniverseScanner::new(UniverseConfig::LEGACY, ScanConfig::with_workers(1))
        .expect("legacy config");

    c.bench_function("scan_row_4", |b| {
        let mut row = Catalog::new();
        b.iter(|| {
            scanner.scan_row(black_box(4), &mut row);
            let planets = row.planets.len();
            row = Catalog::new();
            black_box(planets)
        });
    });
}

fn benchmark_small_universe(c: &mut Criterion) {
    let universe = UniverseConfig {
        universe_size: 10,
        galaxy_size: 20,
        star_system_size: 32,
        galaxy_density: 3,
        star_system_density: 10,
    };

    let mut group = c.benchmark_group("small_universe");
    group.sample_size(20);
    for workers in [1, 4] {
        let scanner = UniverseScanner::new(universe, ScanConfig::with_workers(workers))
            .expect("valid config");
        group.bench_function(format!("workers_{workers}"), |b| {
            b.iter(|| black_box(scanner.scan(&SilentProgress).summary.totals));
        });
    }
    group.finish();
}

fn benchmark_write_catalog(c: &mut Criterion) {
    let scanner = UniverseScanner::new(UniverseConfig::LEGACY, ScanConfig::with_workers(1))
        .expect("legacy config");
    let mut catalog = Catalog::new();
    for gy in 0..5 {
        scanner.scan_row(gy, &mut catalog);
    }

    c.bench_function("write_catalog_5_rows", |b| {
        let mut out = Vec::with_capacity(1 << 20);
        b.iter(|| {
            out.clear();
            write_catalog(black_box(&catalog), &mut out).expect("in-memory write");
            black_box(out.len())
        });
    });
}

criterion_group!(
    benches,
    benchmark_scan_row,
    benchmark_small_universe,
    benchmark_write_catalog
);
criterion_main!(benches);
