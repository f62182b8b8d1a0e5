// ABOUTME: Main library entry point for the Mealwise nutrition planning core
// ABOUTME: Exposes onboarding, recipe sources, meal plan storage and the planner service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy.
#![deny(unsafe_code)]

//! # Mealwise
//!
//! Deterministic domain core of a meal-planning application: onboarding
//! answers become energy and macro targets, a recipe catalog is filtered and
//! sorted against them, and one-day meal plans are assembled and stored.
//!
//! ## Architecture
//!
//! - **mealwise-core**: errors, constants, pagination and data models
//! - **mealwise-intelligence**: unit normalization, BMR/TDEE, macro
//!   allocation, recipe filtering and meal plan generation
//! - **this crate**: onboarding wizard, recipe source streaming, meal plan
//!   store and the [`PlannerService`](services::PlannerService) facade
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use mealwise::database::InMemoryMealPlanRepository;
//! use mealwise::models::{
//!     ActivityLevel, DietType, Goal, Height, ProfileData, ProfileUpdate, Sex, Weight,
//! };
//! use mealwise::services::PlannerService;
//!
//! let service = PlannerService::new(Arc::new(InMemoryMealPlanRepository::new()));
//! let profile = ProfileData::default().apply_all([
//!     ProfileUpdate::DietType(DietType::Standard),
//!     ProfileUpdate::Sex(Sex::Male),
//!     ProfileUpdate::BirthDate(NaiveDate::from_ymd_opt(1994, 1, 1).unwrap()),
//!     ProfileUpdate::Height(Height::cm(180.0)),
//!     ProfileUpdate::Weight(Weight::kg(80.0)),
//!     ProfileUpdate::ActivityLevel(ActivityLevel::ModeratelyActive),
//!     ProfileUpdate::Goal(Goal::Lose),
//! ]);
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let targets = service.compute_targets(&profile, today).unwrap();
//! println!("{} kcal", targets.calories);
//! ```

/// Meal plan persistence
pub mod database;

/// Structured logging setup
pub mod logging;

/// Onboarding wizard and step gates
pub mod onboarding;

/// Planner service facade
pub mod services;

/// Recipe source capability and streaming search
pub mod sources;

// Re-export the workspace crates so consumers depend on one crate
pub use mealwise_core::{constants, errors, models, pagination};
pub use mealwise_intelligence as intelligence;
