// ABOUTME: Nutrition intelligence crate for the Mealwise planning platform
// ABOUTME: Unit normalization, energy and macro calculations, recipe search and meal plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

#![deny(unsafe_code)]

//! # Mealwise Intelligence
//!
//! Deterministic planning algorithms. Nothing here performs I/O; every
//! function takes its inputs (including the current date and the
//! [`NutritionConfig`](config::NutritionConfig)) explicitly.

/// Nutrition configuration with environment overrides
pub mod config;
/// Meal plan generation against macro targets
pub mod meal_planner;
/// BMR, TDEE, goal adjustment and macro allocation
pub mod nutrition_calculator;
/// Recipe filtering, sorting and pagination
pub mod recipes;
/// Height and weight unit normalization
pub mod units;

pub use config::{ConfigError, NutritionConfig};
pub use meal_planner::{generate_day_plan, DayPlan, MacroDeviation};
pub use nutrition_calculator::{
    adjust_for_goal, allocate_macros, calculate_macro_percentages, calculate_mifflin_st_jeor,
    calculate_tdee, compute_macro_targets, estimate_energy_expenditure, EnergyExpenditure,
    MacroAllocation, MacroPreferences,
};
pub use recipes::{RecipeEngine, RecipeFilter, RecipePredicate, RecipeSortKey, SortOrder};
