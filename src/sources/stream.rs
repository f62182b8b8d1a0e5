// ABOUTME: Streaming recipe iterator for memory-efficient paginated fetching
// ABOUTME: Implements futures::Stream over a RecipeSource with a bounded page buffer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Streaming Recipe Iterator
//!
//! Pages are fetched lazily: the stream holds at most one page of recipes in
//! its buffer and asks the source for the next page only once the buffer is
//! drained. Empty pages are skipped as long as the source reports more.

use std::collections::VecDeque;
use std::pin::Pin;

use async_stream::try_stream;
use futures_util::Stream;
use mealwise_core::constants::limits::{
    DEFAULT_SOURCE_PAGE_SIZE, MAX_SOURCE_PAGE_SIZE, MIN_SOURCE_PAGE_SIZE,
};
use mealwise_core::errors::{AppError, AppResult};
use mealwise_core::models::Recipe;
use mealwise_core::pagination::{Cursor, PaginationParams};

use super::RecipeSource;

/// Configuration for recipe streaming behavior
#[derive(Debug, Clone, Copy)]
pub struct StreamConfig {
    /// Number of recipes to fetch per page
    pub page_size: usize,
    /// Maximum total recipes to yield (None for unlimited)
    pub max_recipes: Option<usize>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_SOURCE_PAGE_SIZE,
            max_recipes: None,
        }
    }
}

impl StreamConfig {
    /// Create configuration with specified page size
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.clamp(MIN_SOURCE_PAGE_SIZE, MAX_SOURCE_PAGE_SIZE),
            max_recipes: None,
        }
    }

    /// Set maximum number of recipes to yield
    #[must_use]
    pub const fn with_max_recipes(mut self, max: usize) -> Self {
        self.max_recipes = Some(max);
        self
    }
}

/// Type alias for the recipe stream returned by `create_recipe_stream`
pub type RecipeStream<'a> = Pin<Box<dyn Stream<Item = AppResult<Recipe>> + Send + 'a>>;

/// Create a lazy stream over every recipe a source serves
///
/// Source failures surface as `EXTERNAL_SERVICE_ERROR` items and end the stream.
pub fn create_recipe_stream(source: &dyn RecipeSource, config: StreamConfig) -> RecipeStream<'_> {
    let page_size = config.page_size.clamp(MIN_SOURCE_PAGE_SIZE, MAX_SOURCE_PAGE_SIZE);
    let max_recipes = config.max_recipes;

    Box::pin(try_stream! {
        let mut buffer: VecDeque<Recipe> = VecDeque::new();
        let mut next_cursor: Option<Cursor> = None;
        let mut yielded_count: usize = 0;
        let mut exhausted = false;

        loop {
            if max_recipes.is_some_and(|max| yielded_count >= max) {
                break;
            }

            if let Some(recipe) = buffer.pop_front() {
                yielded_count += 1;
                yield recipe;
                continue;
            }

            if exhausted {
                break;
            }

            let params = PaginationParams::forward(next_cursor.take(), page_size);
            let page = source.fetch_page(&params).await.map_err(|e| {
                AppError::external_service(source.name(), e.message.clone()).with_source(e)
            })?;

            buffer.extend(page.items);

            match page.next_cursor {
                Some(cursor) if page.has_more => next_cursor = Some(cursor),
                _ => exhausted = true,
            }
        }
    })
}

/// Extension trait for creating recipe streams from sources
pub trait RecipeStreamExt {
    /// Stream every recipe with the default page size
    fn recipes_stream(&self) -> RecipeStream<'_>;

    /// Stream recipes with explicit paging
    fn recipes_stream_with_config(&self, config: StreamConfig) -> RecipeStream<'_>;
}

impl<T: RecipeSource> RecipeStreamExt for T {
    fn recipes_stream(&self) -> RecipeStream<'_> {
        create_recipe_stream(self, StreamConfig::default())
    }

    fn recipes_stream_with_config(&self, config: StreamConfig) -> RecipeStream<'_> {
        create_recipe_stream(self, config)
    }
}
