//! Combinator pipeline benchmarks.
//!
//! Measures per-element overhead of the boxed cursor chain.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lazyseq::{Seq, Tree};

// ============================================================================
// Pipeline Benchmarks
// ============================================================================

fn bench_fizzbuzz_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("fizzbuzz_slice");

    let fizz = Seq::cycle_of(vec!["", "", "fizz"]).unwrap();
    let buzz = Seq::cycle_of(vec!["", "", "", "", "buzz"]).unwrap();
    let words = fizz.zip_with(&buzz, |a, b| format!("{a}{b}"));

    for count in [15usize, 1_000, 100_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let out = words.slice(0, black_box(count)).unwrap();
                black_box(out);
            });
        });
    }

    group.finish();
}

fn bench_map_filter_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_filter_fold");

    let odds = Seq::from_step(1u64, |x| x + 2);
    let pipeline = odds.map(|x| x * x).filter(|x| x % 3 == 0);

    for count in [100usize, 10_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let sum = pipeline
                    .take(black_box(count))
                    .unwrap()
                    .fold_left(0u64, |acc, x| acc.wrapping_add(x))
                    .unwrap();
                black_box(sum);
            });
        });
    }

    group.finish();
}

fn bench_deep_drop(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_drop");

    let naturals = Seq::range_from(0);
    for offset in [1_000usize, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(offset), &offset, |b, &offset| {
            b.iter(|| {
                let first = naturals.drop(black_box(offset)).unwrap().first();
                black_box(first);
            });
        });
    }

    group.finish();
}

// ============================================================================
// Tree Benchmarks
// ============================================================================

fn bench_tree_preorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_preorder");

    let heap = Tree::unfold(1u64, |n| vec![2 * n, 2 * n + 1]);
    for depth in [6usize, 12] {
        let pruned = heap.prune(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| {
                let nodes = pruned.preorder().to_list().unwrap();
                black_box(nodes);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_fizzbuzz_slice,
    bench_map_filter_fold,
    bench_deep_drop,
    bench_tree_preorder
);
criterion_main!(benches);
