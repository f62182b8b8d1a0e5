// ABOUTME: Recipe search over a lazily fetched stream
// ABOUTME: Keeps only matching recipes in memory, then sorts stably and pages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use async_trait::async_trait;
use futures_util::StreamExt;
use mealwise_core::errors::AppResult;
use mealwise_core::models::Recipe;
use mealwise_core::pagination::Page;
use mealwise_intelligence::recipes::{sort_recipes, RecipeEngine, RecipeFilter};
use tracing::debug;
use uuid::Uuid;

use super::stream::RecipeStream;

/// Search support for streamed catalogs
#[async_trait]
pub trait RecipeStreamSearch {
    /// Filter a recipe stream and return the requested page
    ///
    /// # Errors
    ///
    /// Returns the filter validation error, or the first error the stream yields
    async fn search_stream(
        &self,
        recipes: RecipeStream<'_>,
        filter: &RecipeFilter,
        requesting_user: Option<Uuid>,
    ) -> AppResult<Page<Recipe>>;

    /// Every recipe in the stream that matches `filter`, sorted
    ///
    /// # Errors
    ///
    /// Returns the filter validation error, or the first error the stream yields
    async fn collect_matches(
        &self,
        recipes: RecipeStream<'_>,
        filter: &RecipeFilter,
        requesting_user: Option<Uuid>,
    ) -> AppResult<Vec<Recipe>>;
}

#[async_trait]
impl RecipeStreamSearch for RecipeEngine {
    async fn search_stream(
        &self,
        recipes: RecipeStream<'_>,
        filter: &RecipeFilter,
        requesting_user: Option<Uuid>,
    ) -> AppResult<Page<Recipe>> {
        let matches = self
            .collect_matches(recipes, filter, requesting_user)
            .await?;
        let total_count = matches.len();
        Ok(Page::from_ordered(
            matches,
            total_count,
            filter.page,
            self.page_size(),
        ))
    }

    async fn collect_matches(
        &self,
        mut recipes: RecipeStream<'_>,
        filter: &RecipeFilter,
        requesting_user: Option<Uuid>,
    ) -> AppResult<Vec<Recipe>> {
        let predicate = filter.compile(requesting_user)?;

        let mut scanned = 0_usize;
        let mut matches = Vec::new();
        while let Some(recipe) = recipes.next().await {
            let recipe = recipe?;
            scanned += 1;
            if predicate.matches(&recipe) {
                matches.push(recipe);
            }
        }

        sort_recipes(&mut matches, filter.sort_by, filter.sort_order);
        debug!(scanned, matched = matches.len(), "Filtered recipe stream");
        Ok(matches)
    }
}
