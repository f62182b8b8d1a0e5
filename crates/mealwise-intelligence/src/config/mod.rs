// ABOUTME: Nutrition configuration root with global access and environment overrides
// ABOUTME: Loads defaults, applies MEALWISE_* variables and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

/// Configuration error types
pub mod error;
/// Configuration sections
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacroAllocationConfig,
    MealSlotProportionsConfig,
};

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use mealwise_core::constants::nutrition::{
    FAT_CARB_SPLIT_STEP_PERCENT, MAX_FAT_CARB_SPLIT_PERCENT, MAX_KETO_MAX_CARBS_G,
    MIN_FAT_CARB_SPLIT_PERCENT, MIN_KETO_MAX_CARBS_G,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

/// Highest accepted protein target per kg bodyweight
const MAX_PROTEIN_G_PER_KG: f64 = 4.0;

/// Highest accepted calorie offset for any goal
const MAX_GOAL_OFFSET_KCAL: u32 = 1500;

/// Main nutrition configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Goal calorie offsets
    pub goal_adjustment: GoalAdjustmentConfig,
    /// Macro allocation defaults
    pub macros: MacroAllocationConfig,
    /// Per-slot calorie proportions for meal plans
    pub meal_slots: MealSlotProportionsConfig,
}

impl NutritionConfig {
    /// Get the global configuration instance
    ///
    /// Falls back to defaults (with a warning) when the environment holds
    /// invalid overrides.
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if self.bmr.msj_age_coef > 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient must not be positive",
            ));
        }

        self.activity_factors.validate()?;
        self.validate_goal_adjustment()?;
        self.validate_macros()?;
        self.meal_slots.validate()
    }

    fn validate_goal_adjustment(&self) -> Result<(), ConfigError> {
        let goal = &self.goal_adjustment;

        if goal.deficit_kcal > MAX_GOAL_OFFSET_KCAL || goal.surplus_kcal > MAX_GOAL_OFFSET_KCAL {
            return Err(ConfigError::ValueOutOfRange(
                "Goal calorie offsets must not exceed 1500 kcal",
            ));
        }
        if goal.min_safe_calories_kcal == 0 {
            return Err(ConfigError::MissingField("min_safe_calories_kcal"));
        }
        Ok(())
    }

    fn validate_macros(&self) -> Result<(), ConfigError> {
        let macros = &self.macros;

        if macros.protein_g_per_kg <= 0.0 || macros.protein_g_per_kg > MAX_PROTEIN_G_PER_KG {
            return Err(ConfigError::ValueOutOfRange(
                "Protein target must be between 0 and 4.0 g/kg",
            ));
        }
        if !(1..=100).contains(&macros.protein_fallback_percent) {
            return Err(ConfigError::ValueOutOfRange(
                "Protein fallback share must be between 1% and 100%",
            ));
        }

        let split = macros.default_fat_carb_split_percent;
        if !(MIN_FAT_CARB_SPLIT_PERCENT..=MAX_FAT_CARB_SPLIT_PERCENT).contains(&split)
            || split % FAT_CARB_SPLIT_STEP_PERCENT != 0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Default fat/carb split must be 20-60 in steps of 5",
            ));
        }
        if !(MIN_KETO_MAX_CARBS_G..=MAX_KETO_MAX_CARBS_G)
            .contains(&macros.default_keto_max_carbs_g)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Default keto carb cap must be between 5 and 100 g",
            ));
        }
        Ok(())
    }

    /// Parse an environment variable into `target` when it is set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // BMR coefficients
        Self::apply_env_var("MEALWISE_BMR_WEIGHT_COEF", &mut self.bmr.msj_weight_coef)?;
        Self::apply_env_var("MEALWISE_BMR_HEIGHT_COEF", &mut self.bmr.msj_height_coef)?;
        Self::apply_env_var("MEALWISE_BMR_AGE_COEF", &mut self.bmr.msj_age_coef)?;
        Self::apply_env_var("MEALWISE_BMR_MALE_CONSTANT", &mut self.bmr.msj_male_constant)?;
        Self::apply_env_var(
            "MEALWISE_BMR_FEMALE_CONSTANT",
            &mut self.bmr.msj_female_constant,
        )?;

        // Activity factors
        let factors = &mut self.activity_factors;
        Self::apply_env_var("MEALWISE_ACTIVITY_SEDENTARY", &mut factors.sedentary)?;
        Self::apply_env_var("MEALWISE_ACTIVITY_LIGHTLY_ACTIVE", &mut factors.lightly_active)?;
        Self::apply_env_var(
            "MEALWISE_ACTIVITY_MODERATELY_ACTIVE",
            &mut factors.moderately_active,
        )?;
        Self::apply_env_var("MEALWISE_ACTIVITY_VERY_ACTIVE", &mut factors.very_active)?;
        Self::apply_env_var(
            "MEALWISE_ACTIVITY_EXTREMELY_ACTIVE",
            &mut factors.extremely_active,
        )?;

        // Goal adjustment
        let goal = &mut self.goal_adjustment;
        Self::apply_env_var("MEALWISE_GOAL_DEFICIT_KCAL", &mut goal.deficit_kcal)?;
        Self::apply_env_var("MEALWISE_GOAL_SURPLUS_KCAL", &mut goal.surplus_kcal)?;
        Self::apply_env_var(
            "MEALWISE_GOAL_MIN_SAFE_CALORIES",
            &mut goal.min_safe_calories_kcal,
        )?;

        // Macro defaults
        let macros = &mut self.macros;
        Self::apply_env_var("MEALWISE_PROTEIN_G_PER_KG", &mut macros.protein_g_per_kg)?;
        Self::apply_env_var(
            "MEALWISE_PROTEIN_FALLBACK_PERCENT",
            &mut macros.protein_fallback_percent,
        )?;
        Self::apply_env_var(
            "MEALWISE_DEFAULT_FAT_CARB_SPLIT",
            &mut macros.default_fat_carb_split_percent,
        )?;
        Self::apply_env_var(
            "MEALWISE_DEFAULT_KETO_MAX_CARBS",
            &mut macros.default_keto_max_carbs_g,
        )?;

        // Meal slot proportions
        let slots = &mut self.meal_slots;
        Self::apply_env_var("MEALWISE_MEAL_BREAKFAST_SHARE", &mut slots.breakfast)?;
        Self::apply_env_var("MEALWISE_MEAL_LUNCH_SHARE", &mut slots.lunch)?;
        Self::apply_env_var("MEALWISE_MEAL_DINNER_SHARE", &mut slots.dinner)?;
        Self::apply_env_var("MEALWISE_MEAL_SNACK_SHARE", &mut slots.snack)?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(NutritionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_activity_factors_must_ascend() {
        let mut config = NutritionConfig::default();
        config.activity_factors.very_active = 1.5;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_meal_slots_must_sum_to_one() {
        let mut config = NutritionConfig::default();
        config.meal_slots.snack = 0.2;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_split_default_must_be_on_step() {
        let mut config = NutritionConfig::default();
        config.macros.default_fat_carb_split_percent = 42;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_zero_safe_floor_rejected() {
        let mut config = NutritionConfig::default();
        config.goal_adjustment.min_safe_calories_kcal = 0;

        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingField("min_safe_calories_kcal"))
        );
    }
}
