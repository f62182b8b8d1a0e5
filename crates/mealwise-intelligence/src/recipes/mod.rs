// ABOUTME: Recipe search module combining filter predicates, stable sorting and pagination
// ABOUTME: Re-exports RecipeFilter, RecipePredicate and RecipeEngine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Recipes Module
//!
//! Search over a read-only recipe catalog.
//!
//! A [`RecipeFilter`] is validated once into a [`RecipePredicate`]; the
//! [`RecipeEngine`] applies it, sorts the matches stably and cuts numbered
//! pages of [`RECIPES_PAGE_SIZE`](mealwise_core::constants::limits::RECIPES_PAGE_SIZE)
//! items.
//!
//! ## Example Usage
//!
//! ```text
//! use mealwise_intelligence::recipes::{RecipeEngine, RecipeFilter, RecipeSortKey, SortOrder};
//!
//! let filter = RecipeFilter::new()
//!     .with_search("chicken")
//!     .with_protein(20, 0)
//!     .sorted_by(RecipeSortKey::Calories, SortOrder::Asc);
//! let page = RecipeEngine::default().search(&catalog, &filter, None)?;
//! ```

/// Search engine over in-memory catalogs
pub mod engine;
/// Filter, predicate and sort definitions
pub mod filter;

pub use engine::{RecipeEngine, RecipeResults};
pub use filter::{
    compare_recipes, sort_recipes, NutrientRange, RecipeFilter, RecipePredicate, RecipeSortKey,
    SortOrder,
};
