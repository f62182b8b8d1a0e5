// ABOUTME: Read-only recipe source capability and an in-memory implementation
// ABOUTME: Sources serve cursor-paged recipe batches consumed by the streaming search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Recipe Sources
//!
//! The catalog lives outside this crate. A [`RecipeSource`] hands out pages of
//! recipes by cursor; [`stream::create_recipe_stream`] turns it into a lazy
//! stream and [`search::RecipeStreamSearch`] filters that stream.

/// Filter/sort/page search over recipe streams
pub mod search;
/// Lazy page-by-page recipe streaming
pub mod stream;

pub use search::RecipeStreamSearch;
pub use stream::{create_recipe_stream, RecipeStream, RecipeStreamExt, StreamConfig};

use std::sync::Arc;

use async_trait::async_trait;
use mealwise_core::errors::{AppError, AppResult};
use mealwise_core::models::Recipe;
use mealwise_core::pagination::{Cursor, CursorPage, PaginationParams};

/// Read-only access to a recipe catalog
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Source name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Fetch the page that starts after `params.cursor`
    ///
    /// A page may be empty while `has_more` is still true.
    ///
    /// # Errors
    ///
    /// Returns an error if the cursor is malformed or the backing store fails
    async fn fetch_page(&self, params: &PaginationParams) -> AppResult<CursorPage<Recipe>>;
}

/// Recipe source backed by a shared vector
#[derive(Debug, Clone)]
pub struct InMemoryRecipeSource {
    recipes: Arc<[Recipe]>,
}

impl InMemoryRecipeSource {
    /// Source serving `recipes` in the given order
    #[must_use]
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: recipes.into(),
        }
    }

    /// Every recipe, in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

#[async_trait]
impl RecipeSource for InMemoryRecipeSource {
    fn name(&self) -> &'static str {
        "in_memory"
    }

    async fn fetch_page(&self, params: &PaginationParams) -> AppResult<CursorPage<Recipe>> {
        let offset = match &params.cursor {
            None => 0,
            Some(cursor) => {
                cursor
                    .decode()
                    .ok_or_else(|| AppError::invalid_input(format!("Invalid cursor: {cursor}")))?
                    .0
            }
        };

        let start = offset.min(self.recipes.len());
        let end = start.saturating_add(params.limit.max(1)).min(self.recipes.len());
        let items = self.recipes[start..end].to_vec();
        let has_more = end < self.recipes.len();
        let next_cursor = has_more
            .then(|| items.last().map(|last| Cursor::new(end, &last.id.to_string())))
            .flatten();

        Ok(CursorPage::new(items, next_cursor, has_more))
    }
}
