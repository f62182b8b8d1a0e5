// ABOUTME: In-memory meal plan repository implementation
// ABOUTME: Uses DashMap for concurrent access without a global lock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use mealwise_core::models::{MealPlan, MealPlanChanges};
use uuid::Uuid;

use super::{DatabaseError, MealPlanRepository};

const ENTITY: &str = "Meal plan";

/// `DashMap`-backed implementation of `MealPlanRepository`
///
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMealPlanRepository {
    plans: Arc<DashMap<Uuid, MealPlan>>,
}

impl InMemoryMealPlanRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored plans
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Whether no plans are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

#[async_trait]
impl MealPlanRepository for InMemoryMealPlanRepository {
    async fn create(&self, plan: MealPlan) -> Result<MealPlan, DatabaseError> {
        match self.plans.entry(plan.id) {
            Entry::Occupied(_) => Err(DatabaseError::AlreadyExists {
                entity: ENTITY,
                id: plan.id,
            }),
            Entry::Vacant(slot) => {
                slot.insert(plan.clone());
                Ok(plan)
            }
        }
    }

    async fn get(&self, plan_id: Uuid) -> Result<Option<MealPlan>, DatabaseError> {
        Ok(self.plans.get(&plan_id).map(|plan| plan.value().clone()))
    }

    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<MealPlan>, DatabaseError> {
        let mut plans: Vec<MealPlan> = self
            .plans
            .iter()
            .filter(|entry| entry.owner_id == owner_id)
            .map(|entry| entry.value().clone())
            .collect();
        plans.sort_by(|a, b| {
            a.plan_date
                .cmp(&b.plan_date)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        Ok(plans)
    }

    async fn update(
        &self,
        plan_id: Uuid,
        changes: MealPlanChanges,
    ) -> Result<MealPlan, DatabaseError> {
        let mut entry = self.plans.get_mut(&plan_id).ok_or(DatabaseError::NotFound {
            entity: ENTITY,
            id: plan_id,
        })?;
        let updated = entry.value().clone().with_changes(changes);
        *entry.value_mut() = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, plan_id: Uuid) -> Result<bool, DatabaseError> {
        Ok(self.plans.remove(&plan_id).is_some())
    }
}
