//! Benchmarks for the one-time build and for per-query work
//!
//! Run with: cargo bench --package pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::Catalog;
use pipeline::{build_features, compute_similarity, Recommender, TitleSuggester};
use std::sync::Arc;

fn bench_build_features(c: &mut Criterion) {
    let catalog = Catalog::builtin();

    c.bench_function("build_features", |b| {
        b.iter(|| {
            let features = build_features(black_box(catalog.movies())).unwrap();
            black_box(features)
        })
    });
}

fn bench_compute_similarity(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let features = build_features(catalog.movies()).expect("Failed to build features");

    c.bench_function("compute_similarity", |b| {
        b.iter(|| {
            let similarity = compute_similarity(black_box(&features.vectors)).unwrap();
            black_box(similarity)
        })
    });
}

fn bench_queries(c: &mut Criterion) {
    let catalog = Arc::new(Catalog::builtin());
    let features = build_features(catalog.movies()).expect("Failed to build features");
    let similarity = Arc::new(compute_similarity(&features.vectors).expect("Failed to compute similarity"));
    let recommender = Recommender::new(catalog.clone(), similarity);
    let suggester = TitleSuggester::new(catalog);

    c.bench_function("recommend", |b| {
        b.iter(|| {
            let titles = recommender.recommend_titles(black_box("The Matrix"), black_box(10));
            black_box(titles)
        })
    });

    c.bench_function("suggest", |b| {
        b.iter(|| {
            let titles = suggester.suggest(black_box("Inceptoin"), 5, 50);
            black_box(titles)
        })
    });
}

criterion_group!(
    benches,
    bench_build_features,
    bench_compute_similarity,
    bench_queries
);
criterion_main!(benches);
