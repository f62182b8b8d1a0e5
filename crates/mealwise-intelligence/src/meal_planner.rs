// ABOUTME: One-day meal plan generation against computed macro targets
// ABOUTME: Greedy per-slot recipe selection using configurable calorie proportions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

//! # Meal Planner
//!
//! Each slot gets a calorie target (`calories x slot share`). Slots are filled
//! in day order with the unused candidate whose calories are closest to that
//! target, preferring recipes tagged with the slot name. Ties go to the
//! candidate listed first, so the same inputs always give the same plan.
//!
//! Keto plans never pick a recipe whose carbs exceed what is left of the
//! daily carb target.

use std::collections::HashSet;

use mealwise_core::models::{
    DietType, MacroTargets, MealPlanEntry, MealSlot, NutritionFacts, Recipe,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::MealSlotProportionsConfig;

/// Signed difference between planned totals and targets (positive = over)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroDeviation {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

impl MacroDeviation {
    fn between(totals: &NutritionFacts, targets: &MacroTargets) -> Self {
        Self {
            calories: totals.calories - f64::from(targets.calories),
            protein_g: totals.protein_g - f64::from(targets.protein_g),
            carbs_g: totals.carbs_g - f64::from(targets.carbs_g),
            fat_g: totals.fat_g - f64::from(targets.fat_g),
        }
    }
}

/// Generated plan for one day, not yet saved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    /// Chosen recipes in slot order
    pub entries: Vec<MealPlanEntry>,
    /// Slots no candidate could fill
    pub unfilled_slots: Vec<MealSlot>,
    /// Per-slot calorie targets (kcal), in slot order
    pub slot_targets: Vec<(MealSlot, f64)>,
    /// Sum of the chosen recipes' nutrition
    pub totals: NutritionFacts,
    /// Totals minus targets
    pub deviation: MacroDeviation,
}

fn closest_to<'a, I>(candidates: I, target_kcal: f64) -> Option<&'a Recipe>
where
    I: Iterator<Item = &'a Recipe>,
{
    candidates.min_by(|a, b| {
        (a.nutrition.calories - target_kcal)
            .abs()
            .total_cmp(&(b.nutrition.calories - target_kcal).abs())
    })
}

/// Build a one-day plan from `candidates` (usually the output of a recipe search)
///
/// An empty candidate list yields a plan with no entries and every slot unfilled.
#[must_use]
pub fn generate_day_plan(
    candidates: &[Recipe],
    targets: &MacroTargets,
    proportions: &MealSlotProportionsConfig,
) -> DayPlan {
    let keto = targets.diet_type == DietType::Keto;
    let mut carbs_left = f64::from(targets.carbs_g);
    let mut used: HashSet<Uuid> = HashSet::new();

    let mut entries = Vec::with_capacity(MealSlot::ALL.len());
    let mut unfilled_slots = Vec::new();
    let mut slot_targets = Vec::with_capacity(MealSlot::ALL.len());
    let mut totals = NutritionFacts::default();

    for slot in MealSlot::ALL {
        let target_kcal = f64::from(targets.calories) * proportions.share(slot);
        slot_targets.push((slot, target_kcal));

        let eligible = |recipe: &&Recipe| {
            !used.contains(&recipe.id) && (!keto || recipe.nutrition.carbs_g <= carbs_left)
        };
        let tagged = candidates
            .iter()
            .filter(eligible)
            .filter(|recipe| recipe.has_category(slot.as_str()));
        let pick = closest_to(tagged, target_kcal)
            .or_else(|| closest_to(candidates.iter().filter(eligible), target_kcal));

        match pick {
            Some(recipe) => {
                used.insert(recipe.id);
                carbs_left -= recipe.nutrition.carbs_g;
                totals = totals + recipe.nutrition;
                entries.push(MealPlanEntry {
                    slot,
                    recipe_id: recipe.id,
                    servings: 1.0,
                });
            }
            None => unfilled_slots.push(slot),
        }
    }

    let deviation = MacroDeviation::between(&totals, targets);
    debug!(
        candidates = candidates.len(),
        filled = entries.len(),
        unfilled = unfilled_slots.len(),
        calorie_deviation = deviation.calories,
        "Generated day plan"
    );

    DayPlan {
        entries,
        unfilled_slots,
        slot_targets,
        totals,
        deviation,
    }
}
