// ABOUTME: Meal plan persistence behind a repository trait
// ABOUTME: Defines DatabaseError, the MealPlanRepository trait and its in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

/// `DashMap`-backed meal plan repository
pub mod meal_plan_repository;

pub use meal_plan_repository::InMemoryMealPlanRepository;

use async_trait::async_trait;
use mealwise_core::errors::{AppError, ErrorCode};
use mealwise_core::models::{MealPlan, MealPlanChanges};
use thiserror::Error;
use uuid::Uuid;

/// Storage-level failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatabaseError {
    /// No row with the given ID
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity kind
        entity: &'static str,
        /// Requested ID
        id: Uuid,
    },

    /// A row with the same ID already exists
    #[error("{entity} {id} already exists")]
    AlreadyExists {
        /// Entity kind
        entity: &'static str,
        /// Conflicting ID
        id: Uuid,
    },
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        match &error {
            DatabaseError::NotFound { id, .. } => {
                Self::new(ErrorCode::ResourceNotFound, error.to_string())
                    .with_resource_id(id.to_string())
            }
            DatabaseError::AlreadyExists { id, .. } => {
                Self::new(ErrorCode::ResourceAlreadyExists, error.to_string())
                    .with_resource_id(id.to_string())
            }
        }
    }
}

/// Saved meal plan storage
#[async_trait]
pub trait MealPlanRepository: Send + Sync {
    /// Insert a new plan
    async fn create(&self, plan: MealPlan) -> Result<MealPlan, DatabaseError>;

    /// Fetch a plan by ID
    async fn get(&self, plan_id: Uuid) -> Result<Option<MealPlan>, DatabaseError>;

    /// Every plan owned by `owner_id`, oldest plan date first
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<MealPlan>, DatabaseError>;

    /// Apply `changes` to an existing plan and return the stored result
    async fn update(
        &self,
        plan_id: Uuid,
        changes: MealPlanChanges,
    ) -> Result<MealPlan, DatabaseError>;

    /// Remove a plan; returns whether it existed
    async fn delete(&self, plan_id: Uuid) -> Result<bool, DatabaseError>;
}
