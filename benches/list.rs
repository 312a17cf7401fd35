//! Benchmarks for positional list operations.
//!
//! The interesting costs are the O(suffix) re-index sweeps on insert and
//! remove, and the cached-position scans behind `get` and `position_of`.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use seqlist::SeqList;

fn filled_list(len: usize) -> SeqList<u64> {
    let mut list = SeqList::with_capacity(len + 1);
    for v in 0..len as u64 {
        list.push_back(v).unwrap();
    }
    list
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for len in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("back", len), &len, |b, &len| {
            let mut list = filled_list(len);
            b.iter(|| {
                list.push_back(black_box(42)).unwrap();
                black_box(list.remove(len));
            });
        });

        group.bench_with_input(BenchmarkId::new("front", len), &len, |b, &len| {
            let mut list = filled_list(len);
            b.iter(|| {
                list.push_front(black_box(42)).unwrap();
                black_box(list.remove(0));
            });
        });
    }

    group.finish();
}

fn bench_insert_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_remove_middle");

    for len in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut list = filled_list(len);
            b.iter(|| {
                list.insert(len / 2, black_box(42)).unwrap();
                black_box(list.remove(len / 2));
            });
        });
    }

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_middle");

    for len in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let list = filled_list(len);
            b.iter(|| black_box(list.get(black_box(len / 2))));
        });
    }

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_of_last");

    for len in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let list = filled_list(len);
            let probe = len as u64 - 1;
            b.iter(|| black_box(list.position_of(black_box(&probe))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_pop,
    bench_insert_middle,
    bench_get,
    bench_scan
);
criterion_main!(benches);
