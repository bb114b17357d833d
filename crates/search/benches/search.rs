//! Benchmarks for edit distance and the search pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use isis_search::{levenshtein_distance, paginate, rank, Item};

const NAMES: [&str; 8] = [
    "Blue Jacket",
    "Red Running Shoes",
    "Wool Scarf",
    "Leather Boots",
    "Denim Jeans",
    "Raincoat Deluxe",
    "Cotton T-Shirt",
    "Silk Dress",
];

const CATEGORIES: [&str; 4] = ["Outerwear", "Footwear", "Accessories", "Tops"];

fn create_test_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| {
            Item::new(i.to_string(), format!("{} {}", NAMES[i % NAMES.len()], i))
                .with_category(CATEGORIES[i % CATEGORIES.len()])
                .with_description("Everyday essentials in seasonal colours")
        })
        .collect()
}

fn bench_distance(c: &mut Criterion) {
    c.bench_function("levenshtein_short", |b| {
        b.iter(|| levenshtein_distance(black_box("jaket"), black_box("jacket")))
    });

    c.bench_function("levenshtein_long", |b| {
        b.iter(|| {
            levenshtein_distance(
                black_box("insulated waterproof raincoat"),
                black_box("insulated water resistant overcoat"),
            )
        })
    });
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for size in [100, 1000, 10000].iter() {
        let items = create_test_items(*size);

        group.bench_with_input(BenchmarkId::new("typo_query", size), size, |b, _| {
            b.iter(|| rank(black_box(items.clone()), black_box("lether bots")))
        });
    }

    group.finish();
}

fn bench_search_page(c: &mut Criterion) {
    let items = create_test_items(5000);

    c.bench_function("rank_and_paginate_5000", |b| {
        b.iter(|| paginate(rank(black_box(items.clone()), black_box("jacket")), 2, 12))
    });
}

criterion_group!(benches, bench_distance, bench_rank, bench_search_page);
criterion_main!(benches);
