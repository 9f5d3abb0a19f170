// ABOUTME: Criterion benchmarks for the recommendation pipeline and its analytics
// ABOUTME: Measures single-profile ranking, parallel batches, and history statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

//! Criterion benchmarks for the recommendation engine.
//!
//! Measures ranking latency for profiles of increasing history depth, batch
//! throughput across many profiles, and the analytics the generators share.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{bench_now, generate_profile, generate_profiles, HistorySize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stagecraft_intelligence::{
    analyze_performance_trends, analyze_practice_habits, summarize_activity, RecommendationEngine,
};

/// Profiles ranked per batch iteration
const BATCH_SIZE: usize = 200;

fn bench_single_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend_single");
    let engine = RecommendationEngine::new();
    let now = bench_now();

    for size in [HistorySize::Small, HistorySize::Medium, HistorySize::Large] {
        let profile = generate_profile(0, size);
        group.throughput(Throughput::Elements(size.shows() as u64));
        group.bench_with_input(
            BenchmarkId::new("generate_recommendations", size.label()),
            &profile,
            |b, profile| {
                b.iter(|| engine.generate_recommendations(black_box(profile), black_box(now)));
            },
        );
    }

    group.finish();
}

fn bench_rank_with_factors(c: &mut Criterion) {
    let engine = RecommendationEngine::new();
    let profile = generate_profile(1, HistorySize::Medium);
    let now = bench_now();

    c.bench_function("rank_with_factors_medium", |b| {
        b.iter(|| engine.rank(black_box(&profile), black_box(now)));
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend_batch");
    group.sample_size(20);
    let engine = RecommendationEngine::new();
    let now = bench_now();
    let profiles = generate_profiles(BATCH_SIZE, HistorySize::Small);

    group.throughput(Throughput::Elements(profiles.len() as u64));
    group.bench_function("parallel_200_profiles", |b| {
        b.iter(|| engine.generate_batch(black_box(&profiles), black_box(now)));
    });
    group.bench_function("sequential_200_profiles", |b| {
        b.iter(|| {
            profiles
                .iter()
                .map(|profile| engine.generate_recommendations(black_box(profile), now))
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

fn bench_analytics(c: &mut Criterion) {
    let mut group = c.benchmark_group("analytics");
    let profile = generate_profile(2, HistorySize::Large);

    group.throughput(Throughput::Elements(profile.shows.len() as u64));
    group.bench_function("performance_trends_1000_shows", |b| {
        b.iter(|| analyze_performance_trends(black_box(&profile.shows)));
    });

    group.throughput(Throughput::Elements(profile.practice_log.len() as u64));
    group.bench_function("practice_habits_2000_sessions", |b| {
        b.iter(|| analyze_practice_habits(black_box(&profile.practice_log)));
    });

    group.bench_function("activity_summary", |b| {
        b.iter(|| summarize_activity(black_box(&profile)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_profile,
    bench_rank_with_factors,
    bench_batch,
    bench_analytics
);
criterion_main!(benches);
