// ABOUTME: Core data models shared across the Mealwise workspace
// ABOUTME: Re-exports profile, recipe, macro target and meal plan types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

/// Saved meal plans
pub mod meal_plan;
/// Onboarding profile and its reducer
pub mod profile;
/// Recipe catalog entries
pub mod recipe;
/// Computed daily targets
pub mod targets;

pub use meal_plan::{MealPlan, MealPlanChanges, MealPlanEntry, MealSlot};
pub use profile::{
    ActivityLevel, DietType, Goal, Height, HeightUnit, ProfileData, ProfileUpdate, Sex, Weight,
    WeightUnit,
};
pub use recipe::{NutritionFacts, Recipe};
pub use targets::{MacroPercentages, MacroTargets};
