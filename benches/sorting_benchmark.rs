use bidsort::prelude::*;
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;

fn random_bids(count: usize) -> Vec<Bid> {
    let mut rng = rand::rng();
    (0..count)
        .map(|id| {
            let len = rng.random_range(5..20);
            let title: String = (0..len).map(|_| rng.random_range(b'a'..=b'z') as char).collect();
            Bid::new(id.to_string(), title, "General Fund", rng.random_range(0.0..10_000.0))
        })
        .collect()
}

fn bench_bids(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bid Sort");
    group.sample_size(10);

    // Selection sort is quadratic; keep the dataset small enough for it.
    let bids = random_bids(2_000);

    group.bench_function("selection_sort", |b| {
        b.iter_batched(
            || bids.clone(),
            |mut data| selection_sort(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("quick_sort", |b| {
        b.iter_batched(
            || bids.clone(),
            |mut data| quick_sort_all(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort_unstable_by", |b| {
        b.iter_batched(
            || bids.clone(),
            |mut data| data.sort_unstable_by(|x, y| x.title.cmp(&y.title)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_duplicate_titles(c: &mut Criterion) {
    let mut group = c.benchmark_group("Duplicate Titles");
    group.sample_size(10);

    // Few distinct titles stress the equal-key handling in partition.
    let mut rng = rand::rng();
    let titles = ["Barn", "Apple", "Cart", "Vista Grande"];
    let input: Vec<Bid> = (0..50_000)
        .map(|id| {
            let title = titles[rng.random_range(0..titles.len())];
            Bid::new(id.to_string(), title, "Enterprise", 1.0)
        })
        .collect();

    group.bench_function("quick_sort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| quick_sort_all(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort_unstable_by", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable_by(|x, y| x.title.cmp(&y.title)),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_bids, bench_duplicate_titles);
criterion_main!(benches);
