// ABOUTME: Recipe filter definition, validated predicate and stable sort comparator
// ABOUTME: Search, tag, ownership and nutrient-range predicates joined by logical AND
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::cmp::Ordering;

use mealwise_core::errors::PlannerError;
use mealwise_core::models::Recipe;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Field recipes are ordered by
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RecipeSortKey {
    /// Catalog order
    #[default]
    Default,
    /// Name, case-insensitive
    Name,
    /// Calories per serving
    Calories,
    /// Protein per serving
    Protein,
    /// Carbohydrates per serving
    Carbs,
    /// Fat per serving
    Fat,
    /// Preparation time
    Time,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first
    #[default]
    Asc,
    /// Largest first
    Desc,
}

/// Inclusive bounds where 0 means "no bound on this side"
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutrientRange {
    /// Lower bound (0 = none)
    #[serde(default)]
    pub min: u32,
    /// Upper bound (0 = none)
    #[serde(default)]
    pub max: u32,
}

impl NutrientRange {
    /// Create a range; 0 on either side leaves it open
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether neither side is bounded
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min == 0 && self.max == 0
    }

    /// Reject a range whose bounds are both set and crossed
    ///
    /// # Errors
    ///
    /// Returns `InvalidFilter` when `min > max` and both are non-zero
    pub fn validate(&self, field: &'static str) -> Result<(), PlannerError> {
        if self.min > 0 && self.max > 0 && self.min > self.max {
            return Err(PlannerError::invalid_filter(field, self.min, self.max));
        }
        Ok(())
    }

    /// Whether `value` satisfies every set bound
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min == 0 || value >= f64::from(self.min))
            && (self.max == 0 || value <= f64::from(self.max))
    }
}

/// Recipe search request as entered in the catalog UI
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RecipeFilter {
    /// 1-based page number (0 is treated as 1)
    pub page: usize,
    /// Case-insensitive name substring (empty = any)
    pub search: String,
    /// Required category tag (empty = any)
    pub category: String,
    /// Required cuisine tag (empty = any)
    pub cuisine: String,
    /// Only recipes owned by the requesting user
    pub my_recipes_only: bool,
    /// Sort key
    pub sort_by: RecipeSortKey,
    /// Sort direction
    pub sort_order: SortOrder,
    /// Calories per serving (kcal)
    pub calories: NutrientRange,
    /// Protein per serving (g)
    pub protein: NutrientRange,
    /// Carbohydrates per serving (g)
    pub carbs: NutrientRange,
    /// Fat per serving (g)
    pub fat: NutrientRange,
    /// Preparation time (minutes)
    pub time: NutrientRange,
}

impl RecipeFilter {
    /// Filter that matches every recipe in catalog order
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name search
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Require a category tag
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Require a cuisine tag
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    /// Restrict to the requesting user's recipes
    #[must_use]
    pub const fn my_recipes_only(mut self) -> Self {
        self.my_recipes_only = true;
        self
    }

    /// Set the sort key and direction
    #[must_use]
    pub const fn sorted_by(mut self, key: RecipeSortKey, order: SortOrder) -> Self {
        self.sort_by = key;
        self.sort_order = order;
        self
    }

    /// Request a page
    #[must_use]
    pub const fn on_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Bound calories per serving
    #[must_use]
    pub const fn with_calories(mut self, min: u32, max: u32) -> Self {
        self.calories = NutrientRange::new(min, max);
        self
    }

    /// Bound protein per serving
    #[must_use]
    pub const fn with_protein(mut self, min: u32, max: u32) -> Self {
        self.protein = NutrientRange::new(min, max);
        self
    }

    /// Bound carbohydrates per serving
    #[must_use]
    pub const fn with_carbs(mut self, min: u32, max: u32) -> Self {
        self.carbs = NutrientRange::new(min, max);
        self
    }

    /// Bound fat per serving
    #[must_use]
    pub const fn with_fat(mut self, min: u32, max: u32) -> Self {
        self.fat = NutrientRange::new(min, max);
        self
    }

    /// Bound preparation time
    #[must_use]
    pub const fn with_time(mut self, min: u32, max: u32) -> Self {
        self.time = NutrientRange::new(min, max);
        self
    }

    /// Validate the filter for a requesting user
    ///
    /// # Errors
    ///
    /// Returns `InvalidFilter` for crossed bounds and `MissingInput` when
    /// `my_recipes_only` is set without a requesting user
    pub fn compile(&self, requesting_user: Option<Uuid>) -> Result<RecipePredicate, PlannerError> {
        self.calories.validate("calories")?;
        self.protein.validate("protein")?;
        self.carbs.validate("carbs")?;
        self.fat.validate("fat")?;
        self.time.validate("time")?;

        let owner = if self.my_recipes_only {
            Some(requesting_user.ok_or(PlannerError::missing("requesting_user"))?)
        } else {
            None
        };

        Ok(RecipePredicate {
            search: self.search.to_lowercase(),
            category: self.category.clone(),
            cuisine: self.cuisine.clone(),
            owner,
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            time: self.time,
        })
    }
}

/// A validated filter ready to test recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipePredicate {
    search: String,
    category: String,
    cuisine: String,
    owner: Option<Uuid>,
    calories: NutrientRange,
    protein: NutrientRange,
    carbs: NutrientRange,
    fat: NutrientRange,
    time: NutrientRange,
}

impl RecipePredicate {
    /// Whether `recipe` satisfies every predicate
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let facts = &recipe.nutrition;

        (self.search.is_empty() || recipe.name.to_lowercase().contains(&self.search))
            && (self.category.is_empty() || recipe.has_category(&self.category))
            && (self.cuisine.is_empty() || recipe.has_cuisine(&self.cuisine))
            && self.owner.is_none_or(|owner| recipe.owner_id == owner)
            && self.calories.contains(facts.calories)
            && self.protein.contains(facts.protein_g)
            && self.carbs.contains(facts.carbs_g)
            && self.fat.contains(facts.fat_g)
            && self.time.contains(f64::from(recipe.prep_time_mins))
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Ascending comparison of two recipes by `key`
///
/// `Default` treats every pair as equal so a stable sort keeps catalog order.
#[must_use]
pub fn compare_recipes(a: &Recipe, b: &Recipe, key: RecipeSortKey) -> Ordering {
    match key {
        RecipeSortKey::Default => Ordering::Equal,
        RecipeSortKey::Name => compare_names(&a.name, &b.name),
        RecipeSortKey::Calories => a.nutrition.calories.total_cmp(&b.nutrition.calories),
        RecipeSortKey::Protein => a.nutrition.protein_g.total_cmp(&b.nutrition.protein_g),
        RecipeSortKey::Carbs => a.nutrition.carbs_g.total_cmp(&b.nutrition.carbs_g),
        RecipeSortKey::Fat => a.nutrition.fat_g.total_cmp(&b.nutrition.fat_g),
        RecipeSortKey::Time => a.prep_time_mins.cmp(&b.prep_time_mins),
    }
}

/// Stable in-place sort; equal keys keep their relative order in both directions
pub fn sort_recipes<R>(recipes: &mut [R], key: RecipeSortKey, order: SortOrder)
where
    R: AsRef<Recipe>,
{
    if key == RecipeSortKey::Default {
        return;
    }
    match order {
        SortOrder::Asc => recipes.sort_by(|a, b| compare_recipes(a.as_ref(), b.as_ref(), key)),
        SortOrder::Desc => recipes.sort_by(|a, b| compare_recipes(b.as_ref(), a.as_ref(), key)),
    }
}
