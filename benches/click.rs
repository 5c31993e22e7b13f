//! Criterion benchmarks for click resolution.
//!
//! Run with:
//! ```bash
//! cargo bench
//! ```

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use fib_grid::{is_consecutive_fibonacci_series, Autoplay, AutoplayConfig, Grid};

// ── helpers ─────────────────────────────────────────────────────────────────

fn warmed_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size);
    Autoplay::new(AutoplayConfig::default().with_clicks(500).with_seed(7))
        .run(&mut grid)
        .unwrap();
    grid
}

// ── click ───────────────────────────────────────────────────────────────────

fn bench_combo_click(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/click");
    for size in [10usize, 32, 64] {
        let grid = warmed_grid(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || grid.clone(),
                |mut g| g.click(size / 2, size / 2).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

// ── predicate ───────────────────────────────────────────────────────────────

fn bench_predicate(c: &mut Criterion) {
    let series: [u32; 5] = [2, 3, 5, 8, 13];
    c.bench_function("fibonacci/series", |b| {
        b.iter(|| is_consecutive_fibonacci_series(std::hint::black_box(&series[..])))
    });
}

criterion_group!(benches, bench_combo_click, bench_predicate);
criterion_main!(benches);
