//! Benchmarks for sequence operations.
//!
//! Compares against `std::collections::LinkedList` and `VecDeque` where the
//! operation exists on both.

use std::collections::{LinkedList, VecDeque};

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kata_sequence::Sequence;
use rand::{Rng, SeedableRng, rngs::StdRng};

const SIZES: [usize; 3] = [16, 256, 4096];

fn bench_push_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_shift");

    group.bench_function("kata_sequence", |b| {
        let mut seq: Sequence<u64> = Sequence::with_capacity(1024);
        b.iter(|| {
            seq.push(black_box(42));
            black_box(seq.shift())
        });
    });

    group.bench_function("std_linked_list", |b| {
        let mut list: LinkedList<u64> = LinkedList::new();
        b.iter(|| {
            list.push_back(black_box(42));
            black_box(list.pop_front())
        });
    });

    group.bench_function("vec_deque", |b| {
        let mut deque: VecDeque<u64> = VecDeque::with_capacity(1024);
        b.iter(|| {
            deque.push_back(black_box(42));
            black_box(deque.pop_front())
        });
    });

    group.finish();
}

fn bench_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("kata_sequence", size), &size, |b, &size| {
            let mut seq: Sequence<u64> = Sequence::of(0..size as u64);
            b.iter(|| {
                let value = seq.pop();
                seq.push(black_box(0));
                black_box(value)
            });
        });
    }

    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in SIZES {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let positions: Vec<usize> = (0..1024).map(|_| rng.gen_range(0..size)).collect();

        group.bench_with_input(BenchmarkId::new("get", size), &size, |b, &size| {
            let seq: Sequence<u64> = Sequence::of(0..size as u64);
            let mut i = 0;
            b.iter(|| {
                i = (i + 1) % positions.len();
                black_box(seq.get(positions[i]))
            });
        });

        group.bench_with_input(BenchmarkId::new("insert_remove", size), &size, |b, &size| {
            let mut seq: Sequence<u64> = Sequence::of(0..size as u64);
            let mut i = 0;
            b.iter(|| {
                i = (i + 1) % positions.len();
                seq.insert(positions[i], black_box(7));
                black_box(seq.remove(positions[i]))
            });
        });
    }

    group.finish();
}

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut seq: Sequence<u64> = Sequence::of(0..size as u64);
            b.iter(|| seq.reverse());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_shift,
    bench_pop,
    bench_random_access,
    bench_reverse
);
criterion_main!(benches);
