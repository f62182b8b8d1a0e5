// ABOUTME: Nutrition configuration sections for energy, goal and macro calculations
// ABOUTME: Configures BMR coefficients, activity factors, goal offsets, macro defaults and meal slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Nutrition Calculation Configuration
//!
//! Every default equals the matching constant in
//! [`mealwise_core::constants::nutrition`].
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use mealwise_core::constants::nutrition::{
    ACTIVITY_FACTOR_EXTREMELY_ACTIVE, ACTIVITY_FACTOR_LIGHTLY_ACTIVE,
    ACTIVITY_FACTOR_MODERATELY_ACTIVE, ACTIVITY_FACTOR_SEDENTARY, ACTIVITY_FACTOR_VERY_ACTIVE,
    BREAKFAST_CALORIE_SHARE, CALORIE_DEFICIT_KCAL, CALORIE_SURPLUS_KCAL,
    DEFAULT_FAT_CARB_SPLIT_PERCENT, DEFAULT_KETO_MAX_CARBS_G, DINNER_CALORIE_SHARE,
    LUNCH_CALORIE_SHARE, MIN_SAFE_CALORIES_KCAL, MSJ_AGE_COEF, MSJ_FEMALE_CONSTANT,
    MSJ_HEIGHT_COEF, MSJ_MALE_CONSTANT, MSJ_WEIGHT_COEF, PROTEIN_FALLBACK_PERCENT,
    PROTEIN_G_PER_KG, SNACK_CALORIE_SHARE,
};
use mealwise_core::models::{ActivityLevel, MealSlot};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Allowed drift when checking that slot proportions sum to one
const PROPORTION_SUM_TOLERANCE: f64 = 1e-6;

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: MSJ_WEIGHT_COEF,
            msj_height_coef: MSJ_HEIGHT_COEF,
            msj_age_coef: MSJ_AGE_COEF,
            msj_male_constant: MSJ_MALE_CONSTANT,
            msj_female_constant: MSJ_FEMALE_CONSTANT,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extremely active (hard training 2x/day): 1.9
    pub extremely_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: ACTIVITY_FACTOR_SEDENTARY,
            lightly_active: ACTIVITY_FACTOR_LIGHTLY_ACTIVE,
            moderately_active: ACTIVITY_FACTOR_MODERATELY_ACTIVE,
            very_active: ACTIVITY_FACTOR_VERY_ACTIVE,
            extremely_active: ACTIVITY_FACTOR_EXTREMELY_ACTIVE,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtremelyActive => self.extremely_active,
        }
    }

    /// Validate factors lie in 1.0-2.5 and strictly increase with activity
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a factor is out of range or the order is broken
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = ActivityLevel::ALL.map(|level| self.factor(level));

        if factors.iter().any(|f| !(1.0..=2.5).contains(f)) {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "Activity factors must increase from sedentary to extremely active",
            ));
        }
        Ok(())
    }
}

/// Caloric offsets applied per goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalAdjustmentConfig {
    /// Deficit for weight loss (kcal): 500
    pub deficit_kcal: u32,
    /// Surplus for weight gain (kcal): 300
    pub surplus_kcal: u32,
    /// Floor for the weight-loss target (kcal): 1200
    pub min_safe_calories_kcal: u32,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            deficit_kcal: CALORIE_DEFICIT_KCAL,
            surplus_kcal: CALORIE_SURPLUS_KCAL,
            min_safe_calories_kcal: MIN_SAFE_CALORIES_KCAL,
        }
    }
}

/// Macro allocation defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroAllocationConfig {
    /// Protein per kg bodyweight (g/kg): 2.0
    pub protein_g_per_kg: f64,
    /// Protein share of calories when bodyweight is unknown (%): 30
    pub protein_fallback_percent: u32,
    /// Fat share of non-protein calories for standard diets (%): 40
    pub default_fat_carb_split_percent: u8,
    /// Daily carbohydrate cap for keto diets (g): 25
    pub default_keto_max_carbs_g: u16,
}

impl Default for MacroAllocationConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: PROTEIN_G_PER_KG,
            protein_fallback_percent: PROTEIN_FALLBACK_PERCENT,
            default_fat_carb_split_percent: DEFAULT_FAT_CARB_SPLIT_PERCENT,
            default_keto_max_carbs_g: DEFAULT_KETO_MAX_CARBS_G,
        }
    }
}

/// Share of daily calories assigned to each meal slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealSlotProportionsConfig {
    /// Breakfast share (0.0-1.0), default 0.25
    pub breakfast: f64,
    /// Lunch share (0.0-1.0), default 0.35
    pub lunch: f64,
    /// Dinner share (0.0-1.0), default 0.30
    pub dinner: f64,
    /// Snack share (0.0-1.0), default 0.10
    pub snack: f64,
}

impl Default for MealSlotProportionsConfig {
    fn default() -> Self {
        Self {
            breakfast: BREAKFAST_CALORIE_SHARE,
            lunch: LUNCH_CALORIE_SHARE,
            dinner: DINNER_CALORIE_SHARE,
            snack: SNACK_CALORIE_SHARE,
        }
    }
}

impl MealSlotProportionsConfig {
    /// Share of daily calories for `slot`
    #[must_use]
    pub const fn share(&self, slot: MealSlot) -> f64 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
            MealSlot::Snack => self.snack,
        }
    }

    /// Validate that proportions are within 0.0-1.0 and sum to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if any proportion is outside 0.0-1.0
    /// and `ConfigError::InvalidWeights` if they do not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        let shares = MealSlot::ALL.map(|slot| self.share(slot));

        if shares.iter().any(|share| !(0.0..=1.0).contains(share)) {
            return Err(ConfigError::ValueOutOfRange(
                "Meal slot proportions must be between 0.0 and 1.0",
            ));
        }

        let total: f64 = shares.iter().sum();
        if (total - 1.0).abs() > PROPORTION_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights(
                "Meal slot proportions must sum to 1.0",
            ));
        }
        Ok(())
    }
}
