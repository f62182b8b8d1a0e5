// ABOUTME: In-memory recipe search engine with parallel filtering for large catalogs
// ABOUTME: Applies a validated predicate, sorts stably and cuts numbered pages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use mealwise_core::constants::limits::{PARALLEL_FILTER_THRESHOLD, RECIPES_PAGE_SIZE};
use mealwise_core::errors::PlannerError;
use mealwise_core::models::Recipe;
use mealwise_core::pagination::Page;
use rayon::prelude::*;
use tracing::debug;
use uuid::Uuid;

use super::filter::{sort_recipes, RecipeFilter, RecipePredicate};

/// Search engine over a borrowed recipe catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeEngine {
    page_size: usize,
    parallel_threshold: usize,
}

impl Default for RecipeEngine {
    fn default() -> Self {
        Self {
            page_size: RECIPES_PAGE_SIZE,
            parallel_threshold: PARALLEL_FILTER_THRESHOLD,
        }
    }
}

impl RecipeEngine {
    /// Engine with a custom page size (at least 1)
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    /// Override the catalog size from which filtering runs on the rayon pool
    #[must_use]
    pub const fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Items per page
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Recipes satisfying `predicate`, in catalog order
    #[must_use]
    pub fn filter<'a>(&self, catalog: &'a [Recipe], predicate: &RecipePredicate) -> Vec<&'a Recipe> {
        if catalog.len() >= self.parallel_threshold {
            // collect() on a rayon iterator keeps the source order
            catalog
                .par_iter()
                .filter(|recipe| predicate.matches(recipe))
                .collect()
        } else {
            catalog
                .iter()
                .filter(|recipe| predicate.matches(recipe))
                .collect()
        }
    }

    /// Every recipe matching `filter`, sorted
    ///
    /// # Errors
    ///
    /// Returns `InvalidFilter` or `MissingInput` when the filter does not
    /// validate for `requesting_user`
    pub fn matching<'a>(
        &self,
        catalog: &'a [Recipe],
        filter: &RecipeFilter,
        requesting_user: Option<Uuid>,
    ) -> Result<RecipeResults<'a>, PlannerError> {
        let predicate = filter.compile(requesting_user)?;
        let mut matches = self.filter(catalog, &predicate);
        sort_recipes(&mut matches, filter.sort_by, filter.sort_order);

        debug!(
            catalog_size = catalog.len(),
            matched = matches.len(),
            sort_by = ?filter.sort_by,
            sort_order = ?filter.sort_order,
            "Filtered recipe catalog"
        );

        Ok(RecipeResults {
            matches,
            page_size: self.page_size,
        })
    }

    /// The page of matching recipes requested by `filter.page`
    ///
    /// # Errors
    ///
    /// Same as [`RecipeEngine::matching`]
    pub fn search(
        &self,
        catalog: &[Recipe],
        filter: &RecipeFilter,
        requesting_user: Option<Uuid>,
    ) -> Result<Page<Recipe>, PlannerError> {
        Ok(self.matching(catalog, filter, requesting_user)?.page(filter.page))
    }
}

/// Sorted matches borrowed from the catalog
///
/// Holds only references, so it can be iterated or paged any number of times.
#[derive(Debug, Clone)]
pub struct RecipeResults<'a> {
    matches: Vec<&'a Recipe>,
    page_size: usize,
}

impl<'a> RecipeResults<'a> {
    /// Number of matching recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether nothing matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Iterate over every match in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &'a Recipe> + '_ {
        self.matches.iter().copied()
    }

    /// Number of pages
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.matches.len().div_ceil(self.page_size)
    }

    /// Owned copy of one page (1-based, 0 treated as 1)
    #[must_use]
    pub fn page(&self, page: usize) -> Page<Recipe> {
        Page::from_ordered(
            self.iter().cloned(),
            self.matches.len(),
            page,
            self.page_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use mealwise_core::models::NutritionFacts;

    use super::*;
    use crate::recipes::filter::{RecipeSortKey, SortOrder};

    fn catalog(size: usize) -> Vec<Recipe> {
        (0..size)
            .map(|i| {
                Recipe::new(
                    format!("Recipe {i}"),
                    Uuid::nil(),
                    NutritionFacts::new((i % 7) as f64 * 100.0, 10.0, 10.0, 10.0),
                )
            })
            .collect()
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let recipes = catalog(100);
        let filter = RecipeFilter::new().with_calories(200, 400);
        let predicate = filter.compile(None).unwrap();

        let sequential = RecipeEngine::default().filter(&recipes, &predicate);
        let parallel = RecipeEngine::default()
            .with_parallel_threshold(1)
            .filter(&recipes, &predicate);

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_results_are_restartable() {
        let recipes = catalog(30);
        let filter = RecipeFilter::new().sorted_by(RecipeSortKey::Calories, SortOrder::Desc);
        let results = RecipeEngine::default().matching(&recipes, &filter, None).unwrap();

        let first: Vec<_> = results.iter().map(|r| r.id).collect();
        let second: Vec<_> = results.iter().map(|r| r.id).collect();
        assert_eq!(first, second);
        assert_eq!(results.total_pages(), 3);
    }

    #[test]
    fn test_custom_page_size() {
        let recipes = catalog(10);
        let page = RecipeEngine::with_page_size(4)
            .search(&recipes, &RecipeFilter::new().on_page(3), None)
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items[0].name, "Recipe 8");
    }
}
