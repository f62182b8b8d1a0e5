// ABOUTME: Core types and constants for the Mealwise nutrition planning platform
// ABOUTME: Foundation crate with error handling, pagination, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

#![deny(unsafe_code)]

//! # Mealwise Core
//!
//! Foundation crate providing shared types and constants for the Mealwise
//! nutrition planning platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the domain `PlannerError`
//! - **constants**: Nutrition, unit conversion and pagination constants
//! - **pagination**: Cursor-based pagination for paged recipe sources
//! - **models**: Profile, recipe, macro target and meal plan models

/// Unified error handling system with standard error codes and HTTP status mapping
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Cursor-based pagination for efficient data traversal
pub mod pagination;

/// Core data models (`ProfileData`, `Recipe`, `MacroTargets`, `MealPlan`)
pub mod models;
