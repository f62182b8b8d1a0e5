// ABOUTME: Nutrition constants for BMR, TDEE, goal offsets and macro allocation
// ABOUTME: Single source of truth for the defaults used by the nutrition configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Nutrition constants
//!
//! # References
//!
//! - BMR: Mifflin, M.D., et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

/// Mifflin-St Jeor weight coefficient (per kg)
pub const MSJ_WEIGHT_COEF: f64 = 10.0;
/// Mifflin-St Jeor height coefficient (per cm)
pub const MSJ_HEIGHT_COEF: f64 = 6.25;
/// Mifflin-St Jeor age coefficient (per year)
pub const MSJ_AGE_COEF: f64 = -5.0;
/// Mifflin-St Jeor male constant
pub const MSJ_MALE_CONSTANT: f64 = 5.0;
/// Mifflin-St Jeor female constant
pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// Sedentary (little or no exercise)
pub const ACTIVITY_FACTOR_SEDENTARY: f64 = 1.2;
/// Lightly active (1-3 days/week)
pub const ACTIVITY_FACTOR_LIGHTLY_ACTIVE: f64 = 1.375;
/// Moderately active (3-5 days/week)
pub const ACTIVITY_FACTOR_MODERATELY_ACTIVE: f64 = 1.55;
/// Very active (6-7 days/week)
pub const ACTIVITY_FACTOR_VERY_ACTIVE: f64 = 1.725;
/// Extremely active (physical job or training twice a day)
pub const ACTIVITY_FACTOR_EXTREMELY_ACTIVE: f64 = 1.9;

/// Daily deficit applied for weight loss (kcal)
pub const CALORIE_DEFICIT_KCAL: u32 = 500;
/// Daily surplus applied for weight gain (kcal)
pub const CALORIE_SURPLUS_KCAL: u32 = 300;
/// Floor for weight-loss targets (kcal)
pub const MIN_SAFE_CALORIES_KCAL: u32 = 1200;

/// Energy density of protein (kcal/g)
pub const KCAL_PER_GRAM_PROTEIN: u32 = 4;
/// Energy density of carbohydrates (kcal/g)
pub const KCAL_PER_GRAM_CARBS: u32 = 4;
/// Energy density of fat (kcal/g)
pub const KCAL_PER_GRAM_FAT: u32 = 9;

/// Protein target per kg of bodyweight (g/kg)
pub const PROTEIN_G_PER_KG: f64 = 2.0;
/// Protein share of calories when bodyweight is unknown (percent)
pub const PROTEIN_FALLBACK_PERCENT: u32 = 30;

/// Default fat share of the non-protein calories (percent)
pub const DEFAULT_FAT_CARB_SPLIT_PERCENT: u8 = 40;
/// Lowest accepted fat/carb split (percent)
pub const MIN_FAT_CARB_SPLIT_PERCENT: u8 = 20;
/// Highest accepted fat/carb split (percent)
pub const MAX_FAT_CARB_SPLIT_PERCENT: u8 = 60;
/// Fat/carb split granularity (percent)
pub const FAT_CARB_SPLIT_STEP_PERCENT: u8 = 5;

/// Default ketogenic carb cap (g/day)
pub const DEFAULT_KETO_MAX_CARBS_G: u16 = 25;
/// Lowest accepted ketogenic carb cap (g/day)
pub const MIN_KETO_MAX_CARBS_G: u16 = 5;
/// Highest accepted ketogenic carb cap (g/day)
pub const MAX_KETO_MAX_CARBS_G: u16 = 100;

/// Breakfast share of daily calories in generated meal plans
pub const BREAKFAST_CALORIE_SHARE: f64 = 0.25;
/// Lunch share of daily calories in generated meal plans
pub const LUNCH_CALORIE_SHARE: f64 = 0.35;
/// Dinner share of daily calories in generated meal plans
pub const DINNER_CALORIE_SHARE: f64 = 0.30;
/// Snack share of daily calories in generated meal plans
pub const SNACK_CALORIE_SHARE: f64 = 0.10;
