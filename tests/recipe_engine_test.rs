// ABOUTME: Integration tests for recipe filtering, stable sorting and pagination
// ABOUTME: Runs the recipe engine over a small tagged catalog and large generated catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{chicken_fixture, init_test_logging, names, numbered_catalog, ALICE, BOB};
use mealwise::errors::{AppError, ErrorCode, PlannerError};
use mealwise::intelligence::recipes::{RecipeEngine, RecipeFilter, RecipeSortKey, SortOrder};

fn search_names(filter: &RecipeFilter) -> Vec<String> {
    let catalog = chicken_fixture();
    let page = RecipeEngine::default()
        .search(&catalog, filter, Some(ALICE))
        .unwrap();
    names(&page.items).into_iter().map(str::to_owned).collect()
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_search_with_protein_floor_sorted_by_calories() {
    init_test_logging();
    let filter = RecipeFilter::new()
        .with_search("chicken")
        .with_protein(20, 0)
        .sorted_by(RecipeSortKey::Calories, SortOrder::Asc);

    assert_eq!(
        search_names(&filter),
        vec![
            "Grilled Chicken Salad",
            "Chicken Stir Fry",
            "Chicken Burrito Bowl"
        ]
    );
}

#[test]
fn test_search_ignores_case() {
    let filter = RecipeFilter::new().with_search("TACOS");
    assert_eq!(search_names(&filter), vec!["Beef Tacos"]);
}

#[test]
fn test_search_whitespace_is_part_of_the_term() {
    let blank = RecipeFilter::new().with_search("   ");
    assert!(search_names(&blank).is_empty());

    let leading = RecipeFilter::new().with_search(" tacos");
    assert_eq!(search_names(&leading), vec!["Beef Tacos"]);

    let trailing = RecipeFilter::new().with_search("tacos ");
    assert!(search_names(&trailing).is_empty());
}

#[test]
fn test_filtering_is_idempotent() {
    let catalog = chicken_fixture();
    let engine = RecipeEngine::default();
    let filters = [
        RecipeFilter::new().with_search("chicken").with_protein(20, 0),
        RecipeFilter::new().with_cuisine("mexican"),
        RecipeFilter::new()
            .with_carbs(0, 40)
            .sorted_by(RecipeSortKey::Time, SortOrder::Desc),
        RecipeFilter::new().with_calories(300, 600).with_fat(0, 16),
    ];

    for filter in &filters {
        let once: Vec<_> = engine
            .matching(&catalog, filter, None)
            .unwrap()
            .iter()
            .cloned()
            .collect();
        let twice: Vec<_> = engine
            .matching(&once, filter, None)
            .unwrap()
            .iter()
            .cloned()
            .collect();

        assert_eq!(names(&once), names(&twice), "{filter:?}");
    }
}

#[test]
fn test_inclusive_nutrient_bounds() {
    let fat = RecipeFilter::new().with_fat(15, 18);
    assert_eq!(
        search_names(&fat),
        vec![
            "Grilled Chicken Salad",
            "Chicken Burrito Bowl",
            "Chicken Stir Fry"
        ]
    );

    let carbs = RecipeFilter::new().with_carbs(0, 35);
    assert_eq!(
        search_names(&carbs),
        vec![
            "Grilled Chicken Salad",
            "Chicken Noodle Soup",
            "Chicken Stir Fry"
        ]
    );
}

#[test]
fn test_zero_bounds_match_everything() {
    let filter = RecipeFilter::new()
        .with_calories(0, 0)
        .with_protein(0, 0)
        .with_time(0, 0);
    assert_eq!(search_names(&filter).len(), 5);
}

#[test]
fn test_category_and_cuisine_tags() {
    let filter = RecipeFilter::new()
        .with_category("dinner")
        .with_cuisine("mexican");
    assert_eq!(
        search_names(&filter),
        vec!["Chicken Burrito Bowl", "Beef Tacos"]
    );

    let partial = RecipeFilter::new().with_category("din");
    assert!(search_names(&partial).is_empty());
}

#[test]
fn test_my_recipes_only_uses_requesting_user() {
    let catalog = chicken_fixture();
    let filter = RecipeFilter::new().my_recipes_only();
    let engine = RecipeEngine::default();

    let alice = engine.search(&catalog, &filter, Some(ALICE)).unwrap();
    assert_eq!(
        names(&alice.items),
        vec!["Grilled Chicken Salad", "Chicken Burrito Bowl", "Beef Tacos"]
    );

    let bob = engine.search(&catalog, &filter, Some(BOB)).unwrap();
    assert_eq!(
        names(&bob.items),
        vec!["Chicken Noodle Soup", "Chicken Stir Fry"]
    );
}

#[test]
fn test_my_recipes_only_without_user_is_missing_input() {
    let catalog = chicken_fixture();
    let filter = RecipeFilter::new().my_recipes_only();

    let error = RecipeEngine::default()
        .search(&catalog, &filter, None)
        .unwrap_err();
    assert_eq!(error, PlannerError::missing("requesting_user"));
}

#[test]
fn test_crossed_bounds_are_invalid_filter() {
    let catalog = chicken_fixture();
    let filter = RecipeFilter::new().with_calories(800, 300);

    let error = RecipeEngine::default()
        .search(&catalog, &filter, None)
        .unwrap_err();
    assert_eq!(error, PlannerError::invalid_filter("calories", 800, 300));

    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::InvalidInput);
    assert_eq!(app_error.http_status(), 400);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_time_sort_is_stable_in_both_directions() {
    let asc = RecipeFilter::new().sorted_by(RecipeSortKey::Time, SortOrder::Asc);
    assert_eq!(
        search_names(&asc),
        vec![
            "Grilled Chicken Salad",
            "Beef Tacos",
            "Chicken Stir Fry",
            "Chicken Burrito Bowl",
            "Chicken Noodle Soup"
        ]
    );

    let desc = RecipeFilter::new().sorted_by(RecipeSortKey::Time, SortOrder::Desc);
    assert_eq!(
        search_names(&desc),
        vec![
            "Chicken Noodle Soup",
            "Chicken Burrito Bowl",
            "Beef Tacos",
            "Chicken Stir Fry",
            "Grilled Chicken Salad"
        ]
    );
}

#[test]
fn test_name_sort() {
    let filter = RecipeFilter::new().sorted_by(RecipeSortKey::Name, SortOrder::Asc);
    assert_eq!(
        search_names(&filter),
        vec![
            "Beef Tacos",
            "Chicken Burrito Bowl",
            "Chicken Noodle Soup",
            "Chicken Stir Fry",
            "Grilled Chicken Salad"
        ]
    );
}

#[test]
fn test_calorie_sort_keeps_prior_name_order_for_ties() {
    let mut catalog = numbered_catalog(40);
    catalog.reverse();
    let engine = RecipeEngine::default();

    let by_name: Vec<_> = engine
        .matching(
            &catalog,
            &RecipeFilter::new().sorted_by(RecipeSortKey::Name, SortOrder::Asc),
            None,
        )
        .unwrap()
        .iter()
        .cloned()
        .collect();
    let by_calories = engine
        .matching(
            &by_name,
            &RecipeFilter::new().sorted_by(RecipeSortKey::Calories, SortOrder::Asc),
            None,
        )
        .unwrap();
    let sorted: Vec<_> = by_calories.iter().collect();

    assert_eq!(sorted.len(), 40);
    for pair in sorted.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(a.nutrition.calories <= b.nutrition.calories);
        if a.nutrition.calories == b.nutrition.calories {
            assert!(a.name < b.name, "{} before {}", a.name, b.name);
        }
    }
}

#[test]
fn test_default_sort_keeps_catalog_order() {
    let filter = RecipeFilter::new().sorted_by(RecipeSortKey::Default, SortOrder::Desc);
    let catalog = chicken_fixture();

    assert_eq!(search_names(&filter), names(&catalog));
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_pages_of_twelve() {
    let catalog = numbered_catalog(30);
    let engine = RecipeEngine::default();

    let first = engine.search(&catalog, &RecipeFilter::new(), None).unwrap();
    assert_eq!(first.items.len(), 12);
    assert_eq!(first.total_count, 30);
    assert_eq!(first.total_pages, 3);
    assert!(first.has_next());

    let last = engine
        .search(&catalog, &RecipeFilter::new().on_page(3), None)
        .unwrap();
    assert_eq!(last.items.len(), 6);
    assert_eq!(last.items[0].name, "Recipe 0024");
    assert!(!last.has_next());
}

#[test]
fn test_page_past_end_keeps_totals() {
    let catalog = numbered_catalog(30);
    let page = RecipeEngine::default()
        .search(&catalog, &RecipeFilter::new().on_page(7), None)
        .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 30);
}

#[test]
fn test_results_can_be_paged_repeatedly() {
    let catalog = numbered_catalog(30);
    let results = RecipeEngine::default()
        .matching(&catalog, &RecipeFilter::new(), None)
        .unwrap();

    assert_eq!(results.len(), 30);
    assert_eq!(results.total_pages(), 3);
    assert_eq!(results.page(2), results.page(2));
    assert_eq!(results.iter().count(), 30);
}

// ============================================================================
// Large Catalogs
// ============================================================================

#[test]
fn test_parallel_filter_matches_sequential_order() {
    let catalog = numbered_catalog(5000);
    let filter = RecipeFilter::new()
        .with_calories(300, 500)
        .sorted_by(RecipeSortKey::Calories, SortOrder::Desc);

    let parallel = RecipeEngine::default()
        .matching(&catalog, &filter, None)
        .unwrap();
    let sequential = RecipeEngine::default()
        .with_parallel_threshold(usize::MAX)
        .matching(&catalog, &filter, None)
        .unwrap();

    let parallel_ids: Vec<_> = parallel.iter().map(|r| r.id).collect();
    let sequential_ids: Vec<_> = sequential.iter().map(|r| r.id).collect();
    assert_eq!(parallel_ids, sequential_ids);
    assert!(!parallel_ids.is_empty());
}
