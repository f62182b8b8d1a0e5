// ABOUTME: Planner service facade over calculators, recipe sources and the meal plan store
// ABOUTME: Computes targets, searches recipes, generates day plans and guards plan ownership
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use mealwise_core::errors::{AppError, AppResult};
use mealwise_core::models::{
    MacroTargets, MealPlan, MealPlanChanges, MealPlanEntry, ProfileData, Recipe,
};
use mealwise_core::pagination::Page;
use mealwise_intelligence::recipes::{RecipeEngine, RecipeFilter};
use mealwise_intelligence::{compute_macro_targets, generate_day_plan, DayPlan, NutritionConfig};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::database::MealPlanRepository;
use crate::logging::PlannerLogger;
use crate::sources::{create_recipe_stream, RecipeSource, RecipeStreamSearch, StreamConfig};

/// Boundary facade called by the RPC layer
#[derive(Clone)]
pub struct PlannerService {
    repository: Arc<dyn MealPlanRepository>,
    config: Arc<NutritionConfig>,
    engine: RecipeEngine,
    stream_config: StreamConfig,
}

impl PlannerService {
    /// Service using the global nutrition configuration
    #[must_use]
    pub fn new(repository: Arc<dyn MealPlanRepository>) -> Self {
        Self::with_config(repository, NutritionConfig::global().clone())
    }

    /// Service configured from `MEALWISE_*` environment overrides
    ///
    /// Unlike [`Self::new`], invalid overrides are reported instead of
    /// falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_ERROR` for unparseable values and `CONFIG_INVALID`
    /// when the loaded configuration fails validation
    pub fn from_environment(repository: Arc<dyn MealPlanRepository>) -> AppResult<Self> {
        let config = NutritionConfig::load()?;
        Ok(Self::with_config(repository, config))
    }

    /// Service with an explicit configuration
    #[must_use]
    pub fn with_config(repository: Arc<dyn MealPlanRepository>, config: NutritionConfig) -> Self {
        Self {
            repository,
            config: Arc::new(config),
            engine: RecipeEngine::default(),
            stream_config: StreamConfig::default(),
        }
    }

    /// Override how many recipes are requested per source page
    ///
    /// Searches always drain the whole source, so only the page size is
    /// configurable here.
    #[must_use]
    pub fn with_source_page_size(mut self, page_size: usize) -> Self {
        self.stream_config = StreamConfig::with_page_size(page_size);
        self
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &NutritionConfig {
        &self.config
    }

    /// Daily targets for a completed profile
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` or `VALUE_OUT_OF_RANGE` for incomplete
    /// or implausible profiles
    pub fn compute_targets(
        &self,
        profile: &ProfileData,
        today: NaiveDate,
    ) -> AppResult<MacroTargets> {
        let targets = compute_macro_targets(profile, today, &self.config)?;
        PlannerLogger::log_targets_computed(
            targets.calories,
            targets.protein_g,
            targets.fat_g,
            targets.carbs_g,
        );
        Ok(targets)
    }

    /// One page of recipes matching `filter`
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT`/`MISSING_REQUIRED_FIELD` for a bad filter and
    /// `EXTERNAL_SERVICE_ERROR` when the source fails
    pub async fn search_recipes(
        &self,
        source: &dyn RecipeSource,
        filter: &RecipeFilter,
        requesting_user: Option<Uuid>,
    ) -> AppResult<Page<Recipe>> {
        let started = Instant::now();
        let stream = create_recipe_stream(source, self.stream_config);
        let page = self
            .engine
            .search_stream(stream, filter, requesting_user)
            .await?;

        PlannerLogger::log_recipe_search(
            source.name(),
            requesting_user,
            page.total_count,
            page.page,
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(page)
    }

    /// Generate (without saving) a one-day plan from recipes matching `filter`
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::compute_targets`] and [`Self::search_recipes`]
    pub async fn generate_meal_plan(
        &self,
        source: &dyn RecipeSource,
        profile: &ProfileData,
        today: NaiveDate,
        filter: &RecipeFilter,
        requesting_user: Option<Uuid>,
    ) -> AppResult<DayPlan> {
        let targets = self.compute_targets(profile, today)?;
        let stream = create_recipe_stream(source, self.stream_config);
        let candidates = self
            .engine
            .collect_matches(stream, filter, requesting_user)
            .await?;

        Ok(generate_day_plan(
            &candidates,
            &targets,
            &self.config.meal_slots,
        ))
    }

    /// Save a new plan for `owner_id`
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for a blank name or non-positive servings
    #[instrument(skip(self, entries), fields(owner = %owner_id))]
    pub async fn create_meal_plan(
        &self,
        owner_id: Uuid,
        name: &str,
        plan_date: NaiveDate,
        entries: Vec<MealPlanEntry>,
    ) -> AppResult<MealPlan> {
        validate_plan_fields(Some(name), Some(&entries[..]))?;
        let plan = self
            .repository
            .create(MealPlan::new(owner_id, name.trim(), plan_date, entries))
            .await?;

        PlannerLogger::log_meal_plan_operation("create", owner_id, plan.id, true);
        Ok(plan)
    }

    /// Save a generated plan
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_meal_plan`]
    pub async fn save_day_plan(
        &self,
        owner_id: Uuid,
        name: &str,
        plan_date: NaiveDate,
        day_plan: &DayPlan,
    ) -> AppResult<MealPlan> {
        self.create_meal_plan(owner_id, name, plan_date, day_plan.entries.clone())
            .await
    }

    /// Fetch a plan the user owns
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for an unknown ID and `PERMISSION_DENIED`
    /// when another user owns the plan
    pub async fn get_meal_plan(&self, user_id: Uuid, plan_id: Uuid) -> AppResult<MealPlan> {
        self.owned_plan(user_id, plan_id, "get").await
    }

    /// Every plan the user owns, oldest plan date first
    ///
    /// # Errors
    ///
    /// Returns `INTERNAL_ERROR` if the store fails
    pub async fn list_meal_plans(&self, user_id: Uuid) -> AppResult<Vec<MealPlan>> {
        Ok(self.repository.list_for_owner(user_id).await?)
    }

    /// Update a plan the user owns
    ///
    /// # Errors
    ///
    /// Returns ownership errors as [`Self::get_meal_plan`] and `INVALID_INPUT`
    /// for a blank name or non-positive servings
    pub async fn update_meal_plan(
        &self,
        user_id: Uuid,
        plan_id: Uuid,
        changes: MealPlanChanges,
    ) -> AppResult<MealPlan> {
        validate_plan_fields(changes.name.as_deref(), changes.entries.as_deref())?;
        self.owned_plan(user_id, plan_id, "update").await?;

        let changes = MealPlanChanges {
            name: changes.name.map(|name| name.trim().to_owned()),
            ..changes
        };
        let plan = self.repository.update(plan_id, changes).await?;

        PlannerLogger::log_meal_plan_operation("update", user_id, plan_id, true);
        Ok(plan)
    }

    /// Delete a plan the user owns
    ///
    /// # Errors
    ///
    /// Returns ownership errors as [`Self::get_meal_plan`]
    pub async fn delete_meal_plan(&self, user_id: Uuid, plan_id: Uuid) -> AppResult<()> {
        self.owned_plan(user_id, plan_id, "delete").await?;
        if !self.repository.delete(plan_id).await? {
            return Err(AppError::not_found("Meal plan").with_resource_id(plan_id.to_string()));
        }

        PlannerLogger::log_meal_plan_operation("delete", user_id, plan_id, true);
        Ok(())
    }

    async fn owned_plan(
        &self,
        user_id: Uuid,
        plan_id: Uuid,
        operation: &str,
    ) -> AppResult<MealPlan> {
        let plan = self.repository.get(plan_id).await?.ok_or_else(|| {
            AppError::not_found("Meal plan").with_resource_id(plan_id.to_string())
        })?;

        if plan.owner_id != user_id {
            PlannerLogger::log_meal_plan_operation(operation, user_id, plan_id, false);
            return Err(AppError::permission_denied("Meal plan belongs to another user")
                .with_user_id(user_id)
                .with_resource_id(plan_id.to_string()));
        }

        info!(operation, plan_id = %plan_id, "Meal plan access granted");
        Ok(plan)
    }
}

fn validate_plan_fields(name: Option<&str>, entries: Option<&[MealPlanEntry]>) -> AppResult<()> {
    if name.is_some_and(|name| name.trim().is_empty()) {
        return Err(AppError::invalid_input("Meal plan name must not be empty"));
    }
    if let Some(entry) = entries
        .into_iter()
        .flatten()
        .find(|entry| !entry.servings.is_finite() || entry.servings <= 0.0)
    {
        return Err(AppError::invalid_input(format!(
            "Servings for {} must be positive, got {}",
            entry.slot.as_str(),
            entry.servings
        )));
    }
    Ok(())
}
