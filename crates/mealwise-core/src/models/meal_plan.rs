// ABOUTME: Saved meal plan model with slot entries and ownership
// ABOUTME: Defines MealPlan, MealPlanEntry, MealSlot and MealPlanChanges for CRUD
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Position of a meal within a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between meals
    Snack,
}

impl MealSlot {
    /// All slots in the order a day is planned
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Display name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

/// One recipe scheduled into a slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MealPlanEntry {
    /// Slot the recipe is eaten in
    pub slot: MealSlot,
    /// Scheduled recipe
    pub recipe_id: Uuid,
    /// Number of servings
    pub servings: f64,
}

/// A saved meal plan for one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealPlan {
    /// Unique identifier
    pub id: Uuid,
    /// Owning user
    pub owner_id: Uuid,
    /// Display name
    pub name: String,
    /// Day the plan applies to
    pub plan_date: NaiveDate,
    /// Scheduled recipes
    pub entries: Vec<MealPlanEntry>,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl MealPlan {
    /// Create a new plan stamped with the current time
    #[must_use]
    pub fn new(
        owner_id: Uuid,
        name: impl Into<String>,
        plan_date: NaiveDate,
        entries: Vec<MealPlanEntry>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: name.into(),
            plan_date,
            entries,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update and bump `updated_at`
    #[must_use]
    pub fn with_changes(self, changes: MealPlanChanges) -> Self {
        Self {
            name: changes.name.unwrap_or(self.name),
            plan_date: changes.plan_date.unwrap_or(self.plan_date),
            entries: changes.entries.unwrap_or(self.entries),
            updated_at: Utc::now(),
            ..self
        }
    }
}

/// Partial update for a saved plan; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MealPlanChanges {
    /// New display name
    pub name: Option<String>,
    /// New plan date
    pub plan_date: Option<NaiveDate>,
    /// Replacement entries
    pub entries: Option<Vec<MealPlanEntry>>,
}
