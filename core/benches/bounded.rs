//! Benchmarks for Bounded vs BinaryHeap vs SmallVec
//!
//! Run with: `cargo bench --bench bounded`

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use marrow_core::Bounded;
use smallvec::SmallVec;

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for size in [4, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("Bounded", size), &size, |b, &size| {
            b.iter(|| {
                let mut bounded = Bounded::new(size);
                for i in (0..size).rev() {
                    let _ = bounded.push(black_box(i as u64));
                }
                black_box(bounded);
            });
        });

        group.bench_with_input(BenchmarkId::new("BinaryHeap", size), &size, |b, &size| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(size);
                for i in (0..size).rev() {
                    heap.push(Reverse(black_box(i as u64)));
                }
                black_box(heap);
            });
        });
    }

    group.finish();
}

fn bench_peek_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("peek_min");

    let mut bounded = Bounded::new(64);
    let mut heap = BinaryHeap::with_capacity(64);
    for i in (0..64u64).rev() {
        let _ = bounded.push(i);
        heap.push(Reverse(i));
    }

    group.bench_function("Bounded::with_min", |b| {
        b.iter(|| black_box(bounded.with_min(|min| *min)));
    });

    group.bench_function("BinaryHeap::peek", |b| {
        b.iter(|| black_box(heap.peek().map(|min| min.0)));
    });

    group.finish();
}

fn bench_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter_sum");

    for size in [4, 16, 64] {
        let mut bounded = Bounded::new(size);
        let mut small = SmallVec::<[u64; 16]>::new();
        for i in 0..size as u64 {
            let _ = bounded.push(i);
            small.push(i);
        }

        group.bench_with_input(BenchmarkId::new("Bounded", size), &bounded, |b, bounded| {
            b.iter(|| black_box(bounded.iter().sum::<u64>()));
        });

        group.bench_with_input(BenchmarkId::new("SmallVec<16>", size), &small, |b, small| {
            b.iter(|| black_box(small.iter().copied().sum::<u64>()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push, bench_peek_min, bench_iter);
criterion_main!(benches);
