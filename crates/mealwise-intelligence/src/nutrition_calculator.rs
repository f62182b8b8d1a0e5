// ABOUTME: Energy expenditure, goal adjustment and macro allocation algorithms
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE, goal offsets and standard/keto macro splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! Nutrition Calculator Module
//!
//! Turns a completed [`ProfileData`] into [`MacroTargets`]. Every function is
//! pure: the current date and the configuration are passed in explicitly.
//!
//! Energy values stay in `f64` through the formulas and are rounded once at
//! the end. Macro grams are floored, so the allocated kcal never exceed the
//! target by more than the rounding slack.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use chrono::NaiveDate;
use mealwise_core::constants::nutrition::{
    FAT_CARB_SPLIT_STEP_PERCENT, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
    MAX_FAT_CARB_SPLIT_PERCENT, MAX_KETO_MAX_CARBS_G, MIN_FAT_CARB_SPLIT_PERCENT,
    MIN_KETO_MAX_CARBS_G,
};
use mealwise_core::constants::units::{
    MAX_AGE_YEARS, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE_YEARS, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use mealwise_core::errors::PlannerError;
use mealwise_core::models::{
    ActivityLevel, DietType, Goal, MacroPercentages, MacroTargets, ProfileData, Sex,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacroAllocationConfig,
    NutritionConfig,
};
use crate::units::{height_to_cm, weight_to_kg};

/// Rounded BMR and TDEE
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnergyExpenditure {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: u32,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: u32,
}

/// Diet preferences that drive macro allocation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroPreferences {
    /// Standard or keto
    pub diet_type: DietType,
    /// Fat share of non-protein calories (standard only)
    pub fat_carb_split: Option<u8>,
    /// Daily carb cap in grams (keto only)
    pub max_carbs: Option<u16>,
}

impl MacroPreferences {
    /// Preferences recorded on a profile
    #[must_use]
    pub fn from_profile(profile: &ProfileData) -> Self {
        Self {
            diet_type: profile.diet_type.unwrap_or_default(),
            fat_carb_split: profile.fat_carb_split,
            max_carbs: profile.max_carbs,
        }
    }
}

/// Allocated macronutrient grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroAllocation {
    /// Protein (g)
    pub protein_g: u32,
    /// Fat (g)
    pub fat_g: u32,
    /// Carbohydrates (g)
    pub carbs_g: u32,
}

impl MacroAllocation {
    /// Energy represented by the allocated grams (kcal)
    #[must_use]
    pub const fn kcal(&self) -> u32 {
        self.protein_g * KCAL_PER_GRAM_PROTEIN
            + self.fat_g * KCAL_PER_GRAM_FAT
            + self.carbs_g * KCAL_PER_GRAM_CARBS
    }
}

fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
    unit: &str,
) -> Result<(), PlannerError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(PlannerError::out_of_range(
            field,
            format!("must be between {min} and {max} {unit}, got {value}"),
        ))
    }
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female: -161
///
/// The result is unrounded.
///
/// # Errors
///
/// Returns `OutOfRange` if age, height or weight fall outside their documented
/// bounds, or if the body stats produce a non-positive BMR
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> Result<f64, PlannerError> {
    if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&age) {
        return Err(PlannerError::out_of_range(
            "age",
            format!("must be between {MIN_AGE_YEARS} and {MAX_AGE_YEARS} years, got {age}"),
        ));
    }
    check_range("height", height_cm, MIN_HEIGHT_CM, MAX_HEIGHT_CM, "cm")?;
    check_range("weight", weight_kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG, "kg")?;

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    let bmr = weight_component + height_component + age_component + sex_constant;
    if bmr <= 0.0 {
        return Err(PlannerError::out_of_range(
            "bmr",
            format!("body stats produce a non-positive BMR ({bmr:.1} kcal)"),
        ));
    }
    Ok(bmr)
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x activity factor. The result is unrounded.
///
/// # Errors
///
/// Returns `OutOfRange` if BMR is not positive
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> Result<f64, PlannerError> {
    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(PlannerError::out_of_range("bmr", "must be positive"));
    }
    Ok(bmr * config.factor(activity_level))
}

/// BMR and TDEE rounded to whole kcal
///
/// # Errors
///
/// Propagates the range errors of [`calculate_mifflin_st_jeor`]
pub fn estimate_energy_expenditure(
    sex: Sex,
    age: u32,
    height_cm: f64,
    weight_kg: f64,
    activity_level: ActivityLevel,
    config: &NutritionConfig,
) -> Result<EnergyExpenditure, PlannerError> {
    let bmr = calculate_mifflin_st_jeor(weight_kg, height_cm, age, sex, &config.bmr)?;
    let tdee = calculate_tdee(bmr, activity_level, &config.activity_factors)?;

    Ok(EnergyExpenditure {
        bmr: bmr.round() as u32,
        tdee: tdee.round() as u32,
    })
}

/// Calorie target for a goal
///
/// - lose: `max(tdee - deficit, min_safe)`
/// - maintain: `tdee`
/// - gain: `tdee + surplus`
#[must_use]
pub fn adjust_for_goal(tdee: u32, goal: Goal, config: &GoalAdjustmentConfig) -> u32 {
    match goal {
        Goal::Lose => tdee
            .saturating_sub(config.deficit_kcal)
            .max(config.min_safe_calories_kcal),
        Goal::Maintain => tdee,
        Goal::Gain => tdee.saturating_add(config.surplus_kcal),
    }
}

fn resolve_split(split: Option<u8>, config: &MacroAllocationConfig) -> Result<u32, PlannerError> {
    let split = split.unwrap_or(config.default_fat_carb_split_percent);
    if !(MIN_FAT_CARB_SPLIT_PERCENT..=MAX_FAT_CARB_SPLIT_PERCENT).contains(&split)
        || split % FAT_CARB_SPLIT_STEP_PERCENT != 0
    {
        return Err(PlannerError::out_of_range(
            "fat_carb_split",
            format!(
                "must be {MIN_FAT_CARB_SPLIT_PERCENT}-{MAX_FAT_CARB_SPLIT_PERCENT} in steps of {FAT_CARB_SPLIT_STEP_PERCENT}, got {split}"
            ),
        ));
    }
    Ok(u32::from(split))
}

fn resolve_max_carbs(
    max_carbs: Option<u16>,
    config: &MacroAllocationConfig,
) -> Result<u32, PlannerError> {
    let max_carbs = max_carbs.unwrap_or(config.default_keto_max_carbs_g);
    if !(MIN_KETO_MAX_CARBS_G..=MAX_KETO_MAX_CARBS_G).contains(&max_carbs) {
        return Err(PlannerError::out_of_range(
            "max_carbs",
            format!(
                "must be between {MIN_KETO_MAX_CARBS_G} and {MAX_KETO_MAX_CARBS_G} g, got {max_carbs}"
            ),
        ));
    }
    Ok(u32::from(max_carbs))
}

/// Protein grams before any budget cap
fn base_protein_g(calories: u32, weight_kg: Option<f64>, config: &MacroAllocationConfig) -> u32 {
    match weight_kg {
        Some(weight) if weight.is_finite() && weight > 0.0 => {
            (weight * config.protein_g_per_kg).floor() as u32
        }
        _ => share_of(calories, config.protein_fallback_percent, KCAL_PER_GRAM_PROTEIN),
    }
}

/// Grams of a macro worth `percent`% of `calories`, widened so large targets cannot overflow
fn share_of(calories: u32, percent: u32, kcal_per_gram: u32) -> u32 {
    let grams = u64::from(calories) * u64::from(percent) / (100 * u64::from(kcal_per_gram));
    u32::try_from(grams).unwrap_or(u32::MAX)
}

/// Split target calories into protein, fat and carb grams
///
/// Protein comes first (bodyweight x g/kg, or a share of calories when
/// bodyweight is unknown) and never takes more kcal than are available.
///
/// - Standard: the remainder is split between fat (`split`%) and carbs.
/// - Keto: carbs are pinned at `max_carbs`, fat takes the remainder and any
///   kcal lost to flooring go back to protein.
///
/// # Errors
///
/// Returns `OutOfRange` when the split or carb cap used by the diet type is
/// outside its bounds
pub fn allocate_macros(
    calories: u32,
    weight_kg: Option<f64>,
    preferences: &MacroPreferences,
    config: &MacroAllocationConfig,
) -> Result<MacroAllocation, PlannerError> {
    let protein_g = base_protein_g(calories, weight_kg, config);

    let allocation = match preferences.diet_type {
        DietType::Standard => {
            let split = resolve_split(preferences.fat_carb_split, config)?;
            let protein_g = protein_g.min(calories / KCAL_PER_GRAM_PROTEIN);
            let remainder = calories - protein_g * KCAL_PER_GRAM_PROTEIN;
            let fat_g = share_of(remainder, split, KCAL_PER_GRAM_FAT);
            let carbs_g = (remainder - fat_g * KCAL_PER_GRAM_FAT) / KCAL_PER_GRAM_CARBS;
            MacroAllocation {
                protein_g,
                fat_g,
                carbs_g,
            }
        }
        DietType::Keto => {
            let carbs_g = resolve_max_carbs(preferences.max_carbs, config)?;
            let available = calories.saturating_sub(carbs_g * KCAL_PER_GRAM_CARBS);
            let protein_g = protein_g.min(available / KCAL_PER_GRAM_PROTEIN);
            let remainder = available - protein_g * KCAL_PER_GRAM_PROTEIN;
            let fat_g = remainder / KCAL_PER_GRAM_FAT;
            let leftover = remainder - fat_g * KCAL_PER_GRAM_FAT;
            MacroAllocation {
                protein_g: protein_g + leftover / KCAL_PER_GRAM_PROTEIN,
                fat_g,
                carbs_g,
            }
        }
    };

    debug!(
        calories,
        diet_type = ?preferences.diet_type,
        protein_g = allocation.protein_g,
        fat_g = allocation.fat_g,
        carbs_g = allocation.carbs_g,
        "Allocated macros"
    );
    Ok(allocation)
}

/// Percentage of allocated kcal contributed by each macro, to one decimal
#[must_use]
pub fn calculate_macro_percentages(allocation: &MacroAllocation) -> MacroPercentages {
    let total = f64::from(allocation.kcal());
    if total <= 0.0 {
        return MacroPercentages::default();
    }
    let percent = |grams: u32, kcal_per_gram: u32| {
        (f64::from(grams * kcal_per_gram) / total * 1000.0).round() / 10.0
    };

    MacroPercentages {
        protein_percent: percent(allocation.protein_g, KCAL_PER_GRAM_PROTEIN),
        carbs_percent: percent(allocation.carbs_g, KCAL_PER_GRAM_CARBS),
        fat_percent: percent(allocation.fat_g, KCAL_PER_GRAM_FAT),
    }
}

/// Compute daily targets for a completed profile
///
/// Required fields are checked in onboarding order: diet type, sex, birth
/// date, height, weight, activity level, goal.
///
/// # Errors
///
/// Returns `MissingInput` for the first absent field, `OutOfRange` for
/// values outside their bounds
pub fn compute_macro_targets(
    profile: &ProfileData,
    today: NaiveDate,
    config: &NutritionConfig,
) -> Result<MacroTargets, PlannerError> {
    let diet_type = profile.diet_type.ok_or(PlannerError::missing("diet_type"))?;
    let sex = profile.sex.ok_or(PlannerError::missing("sex"))?;
    let age = profile.age_on(today)?;
    let height_cm = height_to_cm(profile.height.ok_or(PlannerError::missing("height"))?)?;
    let weight_kg = weight_to_kg(profile.weight.ok_or(PlannerError::missing("weight"))?)?;
    let activity_level = profile
        .activity_level
        .ok_or(PlannerError::missing("activity_level"))?;
    let goal = profile.goal.ok_or(PlannerError::missing("goal"))?;

    let energy =
        estimate_energy_expenditure(sex, age, height_cm, weight_kg, activity_level, config)?;
    let calories = adjust_for_goal(energy.tdee, goal, &config.goal_adjustment);

    let preferences = MacroPreferences {
        diet_type,
        ..MacroPreferences::from_profile(profile)
    };
    let allocation = allocate_macros(calories, Some(weight_kg), &preferences, &config.macros)?;

    debug!(
        bmr = energy.bmr,
        tdee = energy.tdee,
        calories,
        ?goal,
        "Computed macro targets"
    );

    Ok(MacroTargets {
        bmr: energy.bmr,
        tdee: energy.tdee,
        calories,
        protein_g: allocation.protein_g,
        fat_g: allocation.fat_g,
        carbs_g: allocation.carbs_g,
        diet_type,
        macro_percentages: calculate_macro_percentages(&allocation),
    })
}
