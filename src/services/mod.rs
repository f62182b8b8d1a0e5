// ABOUTME: Service layer exposed to the surrounding RPC handlers
// ABOUTME: Converts domain errors into AppError and enforces meal plan ownership
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

/// Planner facade: targets, recipe search, meal plan generation and CRUD
pub mod planner_service;

pub use planner_service::PlannerService;
