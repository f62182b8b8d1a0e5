// ABOUTME: Criterion benchmarks for recipe search and macro target computation
// ABOUTME: Compares sequential and rayon filtering and measures streamed catalog search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Criterion benchmarks for the recipe engine.
//!
//! Catalog sizes straddle the parallel filtering threshold so the crossover
//! point can be checked after tuning it.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mealwise::intelligence::recipes::{RecipeEngine, RecipeFilter, RecipeSortKey, SortOrder};
use mealwise::intelligence::{compute_macro_targets, NutritionConfig};
use mealwise::models::{
    ActivityLevel, DietType, Goal, Height, NutritionFacts, ProfileData, ProfileUpdate, Recipe,
    Sex, Weight,
};
use mealwise::sources::{InMemoryRecipeSource, RecipeStreamExt, RecipeStreamSearch, StreamConfig};
use tokio::runtime::Runtime;
use uuid::Uuid;

const CATALOG_SIZES: [usize; 4] = [500, 2_000, 10_000, 50_000];

#[allow(clippy::cast_precision_loss)]
fn generate_catalog(count: usize) -> Vec<Recipe> {
    let owner = Uuid::from_u128(1);
    (0..count)
        .map(|index| {
            let calories = 150.0 + ((index * 37) % 900) as f64;
            let protein = 5.0 + ((index * 13) % 60) as f64;
            let name = if index % 3 == 0 {
                format!("Chicken Dish {index}")
            } else {
                format!("Veggie Dish {index}")
            };
            Recipe::new(
                name,
                owner,
                NutritionFacts::new(calories, protein, 40.0, 15.0),
            )
            .with_category(if index % 2 == 0 { "dinner" } else { "lunch" })
            .with_prep_time(10 + (index % 50) as u32)
        })
        .collect()
}

fn bench_filter() -> RecipeFilter {
    RecipeFilter::new()
        .with_search("chicken")
        .with_protein(20, 0)
        .with_calories(300, 800)
        .sorted_by(RecipeSortKey::Calories, SortOrder::Asc)
}

fn bench_search_parallel_vs_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("recipe_search");
    let filter = bench_filter();

    for size in CATALOG_SIZES {
        let catalog = generate_catalog(size);
        group.throughput(Throughput::Elements(size as u64));

        let sequential = RecipeEngine::default().with_parallel_threshold(usize::MAX);
        group.bench_with_input(
            BenchmarkId::new("sequential", size),
            &catalog,
            |b, catalog| {
                b.iter(|| sequential.search(black_box(catalog), black_box(&filter), None));
            },
        );

        let parallel = RecipeEngine::default().with_parallel_threshold(0);
        group.bench_with_input(BenchmarkId::new("parallel", size), &catalog, |b, catalog| {
            b.iter(|| parallel.search(black_box(catalog), black_box(&filter), None));
        });
    }

    group.finish();
}

fn bench_stream_search(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("recipe_stream_search");
    let filter = bench_filter();
    let engine = RecipeEngine::default();

    for page_size in [10, 50, 200] {
        let source = InMemoryRecipeSource::new(generate_catalog(10_000));
        group.throughput(Throughput::Elements(10_000));
        group.bench_with_input(
            BenchmarkId::new("page_size", page_size),
            &page_size,
            |b, &page_size| {
                b.iter(|| {
                    rt.block_on(async {
                        let stream =
                            source.recipes_stream_with_config(StreamConfig::with_page_size(page_size));
                        engine.search_stream(stream, black_box(&filter), None).await
                    })
                });
            },
        );
    }

    group.finish();
}

fn bench_macro_targets(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let base = ProfileData::default().apply_all([
        ProfileUpdate::Sex(Sex::Female),
        ProfileUpdate::BirthDate(NaiveDate::from_ymd_opt(1990, 2, 14).unwrap()),
        ProfileUpdate::Height(Height::inches(66.0)),
        ProfileUpdate::Weight(Weight::pounds(150.0)),
        ProfileUpdate::ActivityLevel(ActivityLevel::LightlyActive),
        ProfileUpdate::Goal(Goal::Lose),
    ]);

    let mut group = c.benchmark_group("macro_targets");
    for diet_type in [DietType::Standard, DietType::Keto] {
        let profile = base.clone().apply(ProfileUpdate::DietType(diet_type));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{diet_type:?}")),
            &profile,
            |b, profile| {
                b.iter(|| compute_macro_targets(black_box(profile), today, &config));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_search_parallel_vs_sequential,
    bench_stream_search,
    bench_macro_targets,
);
criterion_main!(benches);
