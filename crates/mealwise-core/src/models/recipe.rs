// ABOUTME: Read-only recipe catalog entry with per-serving nutrition facts
// ABOUTME: Defines Recipe and NutritionFacts consumed by the search engine and meal planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::ops::Add;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Nutrition facts for one serving
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionFacts {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

impl NutritionFacts {
    /// Create nutrition facts from per-serving values
    #[must_use]
    pub const fn new(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }
}

impl Add for NutritionFacts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fat_g: self.fat_g + rhs.fat_g,
        }
    }
}

/// Recipe catalog entry
///
/// Immutable from the planner's point of view; the catalog owner creates and
/// edits recipes elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Category tags in display order (e.g. "breakfast", "high-protein")
    pub category: Vec<String>,
    /// Cuisine tags in display order (e.g. "mexican")
    pub cuisine: Vec<String>,
    /// Per-serving nutrition
    pub nutrition: NutritionFacts,
    /// Preparation time in minutes
    pub prep_time_mins: u32,
    /// User that created the recipe
    pub owner_id: Uuid,
    /// Cover image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Cooking video
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl Recipe {
    /// Create a recipe with a fresh ID and no tags or media
    #[must_use]
    pub fn new(name: impl Into<String>, owner_id: Uuid, nutrition: NutritionFacts) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            category: Vec::new(),
            cuisine: Vec::new(),
            nutrition,
            prep_time_mins: 0,
            owner_id,
            image_url: None,
            video_url: None,
        }
    }

    /// Append a category tag
    #[must_use]
    pub fn with_category(mut self, tag: impl Into<String>) -> Self {
        self.category.push(tag.into());
        self
    }

    /// Append a cuisine tag
    #[must_use]
    pub fn with_cuisine(mut self, tag: impl Into<String>) -> Self {
        self.cuisine.push(tag.into());
        self
    }

    /// Set the preparation time
    #[must_use]
    pub const fn with_prep_time(mut self, minutes: u32) -> Self {
        self.prep_time_mins = minutes;
        self
    }

    /// Whether the recipe carries `tag` among its categories
    #[must_use]
    pub fn has_category(&self, tag: &str) -> bool {
        self.category.iter().any(|c| c == tag)
    }

    /// Whether the recipe carries `tag` among its cuisines
    #[must_use]
    pub fn has_cuisine(&self, tag: &str) -> bool {
        self.cuisine.iter().any(|c| c == tag)
    }
}

impl AsRef<Self> for Recipe {
    fn as_ref(&self) -> &Self {
        self
    }
}
