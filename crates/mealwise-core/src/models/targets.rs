// ABOUTME: Daily energy and macronutrient targets derived from a completed profile
// ABOUTME: MacroTargets is recomputed whenever the source ProfileData changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use serde::{Deserialize, Serialize};

use super::profile::DietType;
use crate::constants::nutrition::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};

/// Macronutrient percentage breakdown of the allocated calories
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroPercentages {
    /// Protein as percentage of allocated calories
    pub protein_percent: f64,
    /// Carbohydrates as percentage of allocated calories
    pub carbs_percent: f64,
    /// Fat as percentage of allocated calories
    pub fat_percent: f64,
}

/// Daily targets computed from a profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroTargets {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: u32,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: u32,
    /// Goal-adjusted calorie target (kcal/day)
    pub calories: u32,
    /// Protein (g/day)
    pub protein_g: u32,
    /// Fat (g/day)
    pub fat_g: u32,
    /// Carbohydrates (g/day)
    pub carbs_g: u32,
    /// Diet type the macros were allocated for
    pub diet_type: DietType,
    /// Percentage breakdown of the allocated grams
    pub macro_percentages: MacroPercentages,
}

impl MacroTargets {
    /// Energy represented by the allocated grams (kcal)
    #[must_use]
    pub const fn allocated_kcal(&self) -> u32 {
        self.protein_g * KCAL_PER_GRAM_PROTEIN
            + self.carbs_g * KCAL_PER_GRAM_CARBS
            + self.fat_g * KCAL_PER_GRAM_FAT
    }
}
